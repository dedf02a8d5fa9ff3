//! Sheet data structures

use std::fmt;

/// Represents a worksheet as headers plus data rows
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    /// Column headers, unique within the sheet
    pub columns: Vec<String>,
    /// Data rows; each row is as wide as `columns`
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table for a sheet without cells
    pub fn empty(name: &str) -> Self {
        Table {
            name: name.to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the first `n` data rows
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Date, time or duration already rendered as text
    DateTime(String),
    Error(String),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Get the number as an integer when it has no fractional part
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Number(n)
                if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 =>
            {
                Some(*n as i64)
            }
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => match self.as_integer() {
                Some(i) => write!(f, "{}", i),
                None => write!(f, "{}", n),
            },
            CellValue::Text(s) | CellValue::DateTime(s) | CellValue::Error(s) => f.write_str(s),
            CellValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}
