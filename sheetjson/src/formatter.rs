//! Console output for a conversion run

use colored::*;
use sheetjson_core::Table;
use sheetjson_core::error::error_chain;
use sheetjson_core::preview::render_preview;
use std::path::Path;

const BANNER_WIDTH: usize = 60;
const ERROR_PREFIX: &str = "Error reading Excel file:";

/// List the workbook's sheets
pub fn print_sheet_names(names: &[String]) {
    println!("{}", "Sheet names in the Excel file:".bold());
    for name in names {
        println!("  - {}", name);
    }
    println!();
}

/// Print the banner, columns, row count and first rows of a sheet
pub fn print_sheet(table: &Table, preview_rows: usize) {
    let banner = "=".repeat(BANNER_WIDTH);
    println!("\n{}", banner);
    println!("{} {}", "Sheet:".bold(), table.name.cyan().bold());
    println!("{}", banner);
    println!("{} {}", "Columns:".bold(), table.columns.join(", "));
    println!("{} {}", "Number of rows:".bold(), table.row_count());
    println!("\n{}", format!("First {} rows:", preview_rows).bold());
    print!("{}", render_preview(table, preview_rows));
}

/// Report where the outputs were written
pub fn print_saved(json_path: &Path, typescript_path: Option<&Path>) {
    println!(
        "\n\n{} {}",
        "Data saved to".green().bold(),
        json_path.display()
    );
    if let Some(path) = typescript_path {
        println!("{} {}", "TypeScript file saved to".green().bold(), path.display());
    }
}

/// The single failure line printed by the top-level error boundary
pub fn format_error(err: &anyhow::Error) -> String {
    let message = error_chain(err.as_ref());
    // Keep the report on one line even when a cause spans several
    let message = message.lines().map(str::trim).collect::<Vec<_>>().join(" ");
    format!("{} {}", ERROR_PREFIX, message)
}

pub fn print_error(err: &anyhow::Error) {
    let line = format_error(err);
    let message = &line[ERROR_PREFIX.len()..];
    println!("{}{}", ERROR_PREFIX.red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetjson_core::Workbook;

    #[test]
    fn test_format_error_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xlsx");
        let err = match Workbook::open(&path) {
            Ok(_) => panic!("opened a file that does not exist"),
            Err(err) => err,
        };
        let err = anyhow::Error::from(err);

        let line = format_error(&err);
        assert!(line.starts_with("Error reading Excel file: cannot access "));
        assert!(line.contains("missing.xlsx"));
        assert!(!line.contains('\n'));

        let cause = err.root_cause().to_string();
        assert!(line.ends_with(&format!(": {}", cause)), "{}", line);
    }

    #[test]
    fn test_format_error_multiline_cause() {
        let err = anyhow::anyhow!("invalid configuration\nexpected a number");
        assert_eq!(
            format_error(&err),
            "Error reading Excel file: invalid configuration expected a number"
        );
    }
}
