//! XML outline format
//!
//! Writes the nested `<outline>`/`<item>` document and reads it back. Reading also accepts
//! WinDjView bookmark exports.
//!
//! ```text
//! <?xml version='1.0' encoding='utf-8'?>
//! <outline>
//! 	<item title="PREFACE" page="1" />
//! 	<item title="CHAPTER 1. INTRODUCTION" page="2">
//! 		<item title="1.1 Background" page="3" />
//! 	</item>
//! </outline>
//! ```
//!
//! | XML                                           | Outline                                  |
//! |-----------------------------------------------|------------------------------------------|
//! | `<outline>` root                              | forest                                   |
//! | `<item title page>`                           | node, nested items are children          |
//! | `<content><bookmarks><bookmark title page level>` | flat WinDjView list, `page` 0-based, `level` gives nesting |

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::common::{ensure_known_options, parse_bool_flag};
use crate::outline::Outline;
use std::collections::HashMap;

mod parser;
mod serializer;

pub use serializer::XmlOptions;

pub struct XmlFormat;

impl Format for XmlFormat {
    fn name(&self) -> &str {
        "xml"
    }

    fn description(&self) -> &str {
        "Nested <item> XML outline (reads WinDjView bookmarks too)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml", "bookmarks"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Outline, FormatError> {
        parser::parse_xml(source)
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        Ok(serializer::serialize_xml(outline, &XmlOptions::default()))
    }

    fn serialize_with_options(
        &self,
        outline: &Outline,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        ensure_known_options(self.name(), options, &["indent", "declaration"])?;
        let defaults = XmlOptions::default();
        let xml_options = XmlOptions {
            indent: options
                .get("indent")
                .map(|raw| unescape_indent(raw))
                .unwrap_or(defaults.indent),
            declaration: parse_bool_flag(options, "declaration", defaults.declaration)?,
        };
        Ok(serializer::serialize_xml(outline, &xml_options))
    }
}

/// Indent strings arrive from the command line, where a literal tab is awkward to type.
fn unescape_indent(raw: &str) -> String {
    raw.replace("\\t", "\t")
}
