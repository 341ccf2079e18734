//! JSON outline format
//!
//! The tree as a JSON array of entries, each `{title, level, page_number, children}`, indented
//! with four spaces by default. Reading is lenient: `page_number` may be an integer or a numeral
//! string ("xiv", "12"), missing fields default, and `level` is recomputed from nesting so it
//! always agrees with the tree shape.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::common::{ensure_known_options, parse_usize_option};
use crate::outline::{convert_to_number, Outline, OutlineNode};
use serde::ser::Serialize;
use serde::Deserialize;
use serde_json::ser::PrettyFormatter;
use std::collections::HashMap;
use tracing::debug;

const DEFAULT_INDENT: usize = 4;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON outline tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Outline, FormatError> {
        let entries: Vec<JsonEntry> = serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("JSON parsing error: {e}")))?;
        let outline = Outline::new(into_nodes(entries, 0));
        debug!(entries = outline.len_total(), "read JSON outline");
        Ok(outline)
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        to_json(outline, DEFAULT_INDENT)
    }

    fn serialize_with_options(
        &self,
        outline: &Outline,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        ensure_known_options(self.name(), options, &["indent"])?;
        let indent = parse_usize_option(options, "indent", DEFAULT_INDENT)?;
        to_json(outline, indent)
    }
}

fn to_json(outline: &Outline, indent: usize) -> Result<String, FormatError> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    outline
        .serialize(&mut serializer)
        .map_err(|e| FormatError::SerializationError(format!("JSON encoding failed: {e}")))?;
    let mut output = String::from_utf8(buffer)
        .map_err(|e| FormatError::SerializationError(format!("JSON encoding failed: {e}")))?;
    output.push('\n');
    Ok(output)
}

#[derive(Deserialize)]
struct JsonEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    page_number: Option<PageValue>,
    #[serde(default)]
    children: Vec<JsonEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageValue {
    Number(i64),
    Text(String),
}

impl PageValue {
    fn to_page(&self) -> u32 {
        match self {
            PageValue::Number(n) => u32::try_from((*n).max(0)).unwrap_or(u32::MAX),
            PageValue::Text(text) => convert_to_number(text.trim()),
        }
    }
}

fn into_nodes(entries: Vec<JsonEntry>, level: usize) -> Vec<OutlineNode> {
    entries
        .into_iter()
        .map(|entry| {
            let page = entry.page_number.as_ref().map(PageValue::to_page).unwrap_or(0);
            OutlineNode::new(entry.title, level, page)
                .with_children(into_nodes(entry.children, level + 1))
        })
        .collect()
}
