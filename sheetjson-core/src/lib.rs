//! sheetjson-core: Core library for workbook to JSON conversion
//!
//! Opens an Excel/ODS workbook, reads every sheet as a header row plus data
//! rows, and turns the whole workbook into a JSON document keyed by sheet name.

pub mod config;
pub mod document;
pub mod error;
pub mod preview;
pub mod reader;
pub mod records;
pub mod typescript;

use std::path::Path;
use tracing::debug;

pub use config::SheetJsonConfig;
pub use document::{Document, build_document, build_document_with, write_json};
pub use error::{ConvertError, Result};
pub use reader::{CellValue, SheetSource, Table, Workbook};
pub use records::{Record, to_records};

/// Main conversion interface
pub struct Converter {
    config: SheetJsonConfig,
}

impl Converter {
    /// Create a converter with default configuration
    pub fn new() -> Self {
        Self::with_config(SheetJsonConfig::default())
    }

    /// Create a converter with custom configuration
    pub fn with_config(config: SheetJsonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SheetJsonConfig {
        &self.config
    }

    /// Open the configured input workbook
    pub fn open(&self) -> Result<Workbook> {
        Workbook::open(&self.config.input)
    }

    /// Build the document from `workbook`, calling `on_sheet` with each sheet as it is read
    pub fn convert<F>(&self, workbook: &mut Workbook, on_sheet: F) -> Result<Document>
    where
        F: FnMut(&Table),
    {
        build_document_with(workbook, on_sheet)
    }

    /// Write the JSON document and, when configured, the TypeScript module.
    ///
    /// Both files are rendered and staged before either one replaces its destination.
    pub fn write(&self, document: &Document, source: &Path) -> Result<()> {
        let json = crate::document::stage_file(
            &self.config.output,
            document.to_json_pretty()?.as_bytes(),
        )?;

        let module = match &self.config.typescript_output {
            Some(ts_path) => {
                let content = typescript::render_for_output(document, source, ts_path)?;
                Some(crate::document::stage_file(ts_path, content.as_bytes())?)
            }
            None => None,
        };

        if let Some(module) = module {
            module.commit()?;
        }
        json.commit()?;
        debug!(
            path = %self.config.output.display(),
            sheets = document.len(),
            "wrote JSON document"
        );
        Ok(())
    }

    /// Convert the input workbook and write every configured output
    pub fn convert_file(&self) -> Result<Document> {
        let mut workbook = self.open()?;
        let document = self.convert(&mut workbook, |_| {})?;
        self.write(&document, workbook.path())?;
        Ok(document)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
