//! Configuration for a conversion run

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::preview::DEFAULT_PREVIEW_ROWS;

/// Workbook read when no input is given
pub const DEFAULT_INPUT: &str = "Equifax Codes 2025.xlsx";
/// JSON file written when no output is given
pub const DEFAULT_OUTPUT: &str = "equifax_codes.json";
/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "sheetjson.toml";

/// Conversion settings, loadable from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetJsonConfig {
    /// Workbook to convert
    pub input: PathBuf,
    /// Destination of the JSON document
    pub output: PathBuf,
    /// Rows shown in each sheet preview
    pub preview_rows: usize,
    /// Optional TypeScript module written alongside the JSON
    pub typescript_output: Option<PathBuf>,
}

impl Default for SheetJsonConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            typescript_output: None,
        }
    }
}

impl SheetJsonConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConvertError::file_access(path, e))?;
        toml::from_str(&content).map_err(|e| ConvertError::Config {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load `path` if given, else the default config file when present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
