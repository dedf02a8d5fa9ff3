//! Output document assembly and JSON writing

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::reader::{SheetSource, Table};
use crate::records::{Record, to_records};

/// Records of every sheet, keyed by sheet name in workbook order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sheets: Vec<(String, Vec<Record>)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet's records. Sheet names are unique within a workbook.
    pub fn push_sheet(&mut self, name: impl Into<String>, records: Vec<Record>) {
        self.sheets.push((name.into(), records));
    }

    /// Get the records of a sheet by name
    pub fn get(&self, name: &str) -> Option<&[Record]> {
        self.sheets
            .iter()
            .find(|(sheet, _)| sheet == name)
            .map(|(_, records)| records.as_slice())
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.sheets
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sheets.len()))?;
        for (name, records) in &self.sheets {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}

/// Read and convert every sheet in workbook order
pub fn build_document<S: SheetSource>(source: &mut S) -> Result<Document> {
    build_document_with(source, |_| {})
}

/// Like [`build_document`], calling `on_sheet` with each table before it is converted
pub fn build_document_with<S, F>(source: &mut S, mut on_sheet: F) -> Result<Document>
where
    S: SheetSource,
    F: FnMut(&Table),
{
    let mut document = Document::new();
    for name in source.sheet_names() {
        let table = source.read_sheet(&name)?;
        on_sheet(&table);
        document.push_sheet(name, to_records(&table));
    }
    Ok(document)
}

/// Write the document as pretty JSON, replacing any existing file
pub fn write_json<P: AsRef<Path>>(document: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    // Serialize first so a failure never leaves a partial file behind
    let json = document.to_json_pretty()?;
    write_file(path, json.as_bytes())?;
    debug!(path = %path.display(), sheets = document.len(), "wrote JSON document");
    Ok(())
}

/// Write bytes to `path`, creating missing parent directories
pub(crate) fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    stage_file(path, contents)?.commit()
}

/// Output written next to its destination, not yet visible under the final name
pub(crate) struct StagedFile {
    temp: NamedTempFile,
    path: PathBuf,
}

/// Write `contents` to a temporary sibling of `path`.
///
/// Dropping the result without calling [`StagedFile::commit`] removes the temporary file.
pub(crate) fn stage_file(path: &Path, contents: &[u8]) -> Result<StagedFile> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| ConvertError::file_access(parent, e))?;
            parent
        }
        None => Path::new("."),
    };

    let mut temp =
        NamedTempFile::new_in(parent).map_err(|e| ConvertError::file_access(parent, e))?;
    if let Err(e) = temp.write_all(contents).and_then(|_| temp.as_file().sync_all()) {
        return Err(ConvertError::file_access(temp.path(), e));
    }

    Ok(StagedFile {
        temp,
        path: path.to_path_buf(),
    })
}

impl StagedFile {
    /// Atomically replace the destination with the staged contents
    pub(crate) fn commit(self) -> Result<()> {
        let StagedFile { temp, path } = self;
        temp.persist(&path)
            .map_err(|e| ConvertError::file_access(path.as_path(), e.error))?;
        Ok(())
    }
}
