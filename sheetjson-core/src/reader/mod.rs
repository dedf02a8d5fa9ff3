//! Excel/ODS file reader using calamine

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto_from_rs};
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConvertError, Result};

pub mod workbook;

pub use workbook::{CellValue, Table};

/// Trait for anything that can hand out sheets by name
pub trait SheetSource {
    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;
    /// Read one sheet as headers plus data rows
    fn read_sheet(&mut self, name: &str) -> Result<Table>;
}

/// An opened workbook
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<Cursor<Vec<u8>>>,
}

impl Workbook {
    /// Open a workbook, detecting the format from its content
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| ConvertError::file_access(path, e))?;
        let sheets =
            open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| ConvertError::Format {
                context: format!("{} is not a readable spreadsheet", path.display()),
                source: e,
            })?;

        debug!(path = %path.display(), "opened workbook");
        Ok(Workbook {
            path: path.to_path_buf(),
            sheets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for Workbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Table> {
        if !self.sheets.sheet_names().iter().any(|s| s == name) {
            return Err(ConvertError::SheetNotFound(name.to_string()));
        }

        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|e| ConvertError::Format {
                context: format!("failed to read sheet '{}'", name),
                source: e,
            })?;

        let table = parse_sheet(name, &range);
        debug!(
            sheet = name,
            columns = table.columns.len(),
            rows = table.row_count(),
            "read sheet"
        );
        Ok(table)
    }
}

/// Split a used range into a header row and non-blank data rows
pub(crate) fn parse_sheet(name: &str, range: &Range<Data>) -> Table {
    let mut rows = range.rows();

    let Some(header) = rows.next() else {
        return Table::empty(name);
    };

    let raw: Vec<CellValue> = header.iter().map(parse_cell_value).collect();
    let columns = header_names(&raw);

    let rows = rows
        .map(|row| row.iter().map(parse_cell_value).collect::<Vec<_>>())
        .filter(|row| !row.iter().all(CellValue::is_empty))
        .collect();

    Table {
        name: name.to_string(),
        columns,
        rows,
    }
}

/// Turn header cells into unique column names.
///
/// Empty headers become `Unnamed: <index>`; repeats get `.1`, `.2`, ... suffixes.
pub fn header_names(cells: &[CellValue]) -> Vec<String> {
    let raw: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            CellValue::Empty => format!("Unnamed: {}", i),
            other => other.to_string(),
        })
        .collect();

    let mut names: Vec<String> = Vec::with_capacity(raw.len());
    // Next suffix to try for each base name
    let mut next_suffix: HashMap<&str, usize> = HashMap::new();

    for name in &raw {
        let candidate = match next_suffix.get(name.as_str()).copied() {
            None => {
                next_suffix.insert(name, 1);
                name.clone()
            }
            Some(mut n) => loop {
                let candidate = format!("{}.{}", name, n);
                n += 1;
                if !names.contains(&candidate) && !raw.contains(&candidate) {
                    next_suffix.insert(name, n);
                    break candidate;
                }
            },
        };
        names.push(candidate);
    }

    names
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => {
            if dt.is_duration() {
                CellValue::DateTime(format_duration(dt.as_f64()))
            } else {
                match dt.as_datetime() {
                    Some(value) => CellValue::DateTime(value.to_string()),
                    None => CellValue::Number(dt.as_f64()),
                }
            }
        }
        Data::DateTimeIso(s) => CellValue::DateTime(s.replacen('T', " ", 1)),
        Data::DurationIso(s) => CellValue::DateTime(s.clone()),
    }
}

/// Render a duration given in days as `H:MM:SS`
fn format_duration(days: f64) -> String {
    let total = (days * 86_400.0).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn range_from(rows: Vec<Vec<Data>>) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), value);
            }
        }
        range
    }

    #[test]
    fn test_header_names_plain() {
        let names = header_names(&[text("Code"), text("Description")]);
        assert_eq!(names, vec!["Code", "Description"]);
    }

    #[test]
    fn test_header_names_empty_and_numeric() {
        let names = header_names(&[text("Code"), CellValue::Empty, CellValue::Number(2025.0)]);
        assert_eq!(names, vec!["Code", "Unnamed: 1", "2025"]);
    }

    #[test]
    fn test_header_names_duplicates() {
        let names = header_names(&[text("Code"), text("Code"), text("Code")]);
        assert_eq!(names, vec!["Code", "Code.1", "Code.2"]);
    }

    #[test]
    fn test_header_names_duplicate_skips_existing_suffix() {
        let names = header_names(&[text("Code"), text("Code.1"), text("Code")]);
        assert_eq!(names, vec!["Code", "Code.1", "Code.2"]);
    }

    #[test]
    fn test_parse_sheet_skips_blank_rows() {
        let range = range_from(vec![
            vec![Data::String("Code".into()), Data::String("Score".into())],
            vec![Data::String("A1".into()), Data::Float(10.0)],
            vec![Data::Empty, Data::Empty],
            vec![Data::String("B2".into()), Data::Empty],
        ]);

        let table = parse_sheet("Codes", &range);
        assert_eq!(table.columns, vec!["Code", "Score"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0], vec![text("A1"), CellValue::Number(10.0)]);
        assert_eq!(table.rows[1], vec![text("B2"), CellValue::Empty]);
    }

    #[test]
    fn test_parse_sheet_header_only() {
        let range = range_from(vec![vec![Data::String("Code".into())]]);
        let table = parse_sheet("Codes", &range);
        assert_eq!(table.columns, vec!["Code"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_parse_sheet_empty_range() {
        let range: Range<Data> = Range::empty();
        let table = parse_sheet("Blank", &range);
        assert_eq!(table, Table::empty("Blank"));
    }

    #[test]
    fn test_parse_cell_value_iso_strings() {
        assert_eq!(
            parse_cell_value(&Data::DateTimeIso("2025-03-01T08:30:00".into())),
            CellValue::DateTime("2025-03-01 08:30:00".into())
        );
        assert_eq!(parse_cell_value(&Data::Int(7)), CellValue::Number(7.0));
        assert_eq!(parse_cell_value(&Data::Bool(false)), CellValue::Boolean(false));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.5), "12:00:00");
        assert_eq!(format_duration(1.0 + 1.0 / 24.0), "25:00:00");
        assert_eq!(format_duration(-1.0 / 1440.0), "-0:01:00");
    }
}
