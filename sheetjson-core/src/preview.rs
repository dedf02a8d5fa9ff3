//! Plain-text preview of the first rows of a sheet

use unicode_width::UnicodeWidthStr;

use crate::reader::Table;

/// Number of rows shown when no limit is configured
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Render headers and up to `limit` rows as an aligned text table.
///
/// The first column holds the zero-based row index; cells are right-aligned.
pub fn render_preview(table: &Table, limit: usize) -> String {
    let head = table.head(limit);

    let mut lines: Vec<Vec<String>> = Vec::with_capacity(head.len() + 1);
    let mut header = vec![String::new()];
    header.extend(table.columns.iter().cloned());
    lines.push(header);
    for (index, row) in head.iter().enumerate() {
        let mut line = vec![index.to_string()];
        line.extend(row.iter().map(|cell| cell.to_string()));
        lines.push(line);
    }

    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for line in &lines {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    for line in &lines {
        let rendered: Vec<String> = line
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let pad = widths[i] - cell.width();
                format!("{}{}", " ".repeat(pad), cell)
            })
            .collect();
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');
    }
    out
}
