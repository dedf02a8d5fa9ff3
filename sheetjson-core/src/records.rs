//! Conversion of sheet rows into JSON records

use serde_json::{Map, Number, Value};

use crate::reader::{CellValue, Table};

/// A single row keyed by column header, in column order
pub type Record = Map<String, Value>;

/// Convert every data row of a table into a record
pub fn to_records(table: &Table) -> Vec<Record> {
    table
        .rows
        .iter()
        .map(|row| {
            table
                .columns
                .iter()
                .zip(row.iter())
                .map(|(column, cell)| (column.clone(), cell_to_json(cell)))
                .collect()
        })
        .collect()
}

/// Map a cell onto its JSON form.
///
/// Numbers stay numeric, dates and error codes become strings and empty cells become `null`.
pub fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Empty => Value::Null,
        CellValue::Number(n) => match cell.as_integer() {
            Some(i) => Value::Number(i.into()),
            None => Number::from_f64(*n).map_or(Value::Null, Value::Number),
        },
        CellValue::Boolean(b) => Value::Bool(*b),
        CellValue::Text(s) | CellValue::DateTime(s) | CellValue::Error(s) => {
            Value::String(s.clone())
        }
    }
}

/// Render a JSON value the way the source cell would print
pub fn json_to_cell_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // Same rule as `CellValue`'s Display: integers bare, floats without exponents
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) => CellValue::Number(f).to_string(),
            (None, None) => n.to_string(),
        },
        other => other.to_string(),
    }
}
