//! TypeScript module generation for a converted document

use std::path::Path;

use crate::document::Document;
use crate::error::Result;

/// Render a TypeScript module declaring the document's shape and exporting it.
///
/// Each sheet becomes a property typed from the keys of its first record;
/// sheets without records are typed `Array<any>`.
pub fn render_typescript(document: &Document, source_name: &str, type_name: &str) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("// Generated from {}\n", source_name));
    out.push_str(&format!("export interface {} {{\n", type_name));

    for (sheet, records) in document.iter() {
        let sheet_key = serde_json::to_string(sheet)?;
        match records.first() {
            Some(sample) => {
                out.push_str(&format!("  {}: Array<{{\n", sheet_key));
                for key in sample.keys() {
                    out.push_str(&format!(
                        "    {}: string | number;\n",
                        serde_json::to_string(key)?
                    ));
                }
                out.push_str("  }>;\n");
            }
            None => out.push_str(&format!("  {}: Array<any>;\n", sheet_key)),
        }
    }
    out.push_str("}\n\n");

    out.push_str(&format!(
        "export const {}: {} = {};\n",
        lower_first(type_name),
        type_name,
        document.to_json_pretty()?
    ));
    Ok(out)
}

/// Render the module destined for `path`, naming the type after the file stem
pub fn render_for_output(document: &Document, source: &Path, path: &Path) -> Result<String> {
    let source_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    render_typescript(document, &source_name, &type_name_from_stem(&stem))
}

/// PascalCase identifier from a file stem such as `equifax_codes` or `equifaxCodes`
pub fn type_name_from_stem(stem: &str) -> String {
    let mut name = String::new();
    for word in stem.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.push_str(chars.as_str());
        }
    }
    if name.is_empty() {
        return "Workbook".to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    fn record(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_type_name_from_stem() {
        assert_eq!(type_name_from_stem("equifax_codes"), "EquifaxCodes");
        assert_eq!(type_name_from_stem("equifaxCodes"), "EquifaxCodes");
        assert_eq!(type_name_from_stem("2025 codes"), "_2025Codes");
        assert_eq!(type_name_from_stem(""), "Workbook");
    }

    #[test]
    fn test_render_typescript() {
        let mut document = Document::new();
        document.push_sheet(
            "Codes",
            vec![record(&[("Code", json!("A1")), ("Rank", json!(1))])],
        );
        document.push_sheet("Notes", Vec::new());

        let ts = render_typescript(&document, "Codes.xlsx", "EquifaxCodes").unwrap();
        let expected_head = "// Generated from Codes.xlsx
export interface EquifaxCodes {
  \"Codes\": Array<{
    \"Code\": string | number;
    \"Rank\": string | number;
  }>;
  \"Notes\": Array<any>;
}

export const equifaxCodes: EquifaxCodes = {
";
        assert!(ts.starts_with(expected_head), "{}", ts);
        assert!(ts.ends_with("};\n"));
    }

    #[test]
    fn test_render_for_output_uses_file_stem() {
        let ts = render_for_output(
            &Document::new(),
            Path::new("/tmp/Codes 2025.xlsx"),
            Path::new("src/data/equifax_codes.ts"),
        )
        .unwrap();

        assert!(ts.starts_with("// Generated from Codes 2025.xlsx\n"));
        assert!(ts.contains("export const equifaxCodes: EquifaxCodes = {};"));
    }
}
