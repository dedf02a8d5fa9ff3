//! Error types for workbook conversion

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a workbook or writing its JSON document
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The path is missing, unreadable or not writable
    #[error("cannot access {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a spreadsheet, or a sheet could not be read
    #[error("{context}")]
    Format {
        context: String,
        #[source]
        source: calamine::Error,
    },

    /// Requested sheet is not part of the workbook
    #[error("sheet '{0}' not found in workbook")]
    SheetNotFound(String),

    #[error("failed to serialize document")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid configuration in {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConvertError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the file system rather than the content
    pub fn is_file_access(&self) -> bool {
        matches!(self, ConvertError::FileAccess { .. })
    }

    /// True for errors caused by unparseable spreadsheet content
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            ConvertError::Format { .. } | ConvertError::SheetNotFound(_)
        )
    }
}

/// Message followed by every underlying cause, separated by `: `
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

pub type Result<T> = std::result::Result<T, ConvertError>;
