//! Plain outline text
//!
//! The human-editable format: one entry per line, nesting by indentation, page number last.
//!
//! ```text
//! PREFACE 1
//! CHAPTER 1. INTRODUCTION 2
//!     1.1 Background 3
//! ```
//!
//! Parsing runs the full normalize + build pipeline, so messy OCR text is accepted. Serializing
//! writes the clean form, which parses back to the same outline.

use crate::error::FormatError;
use crate::format::Format;
use crate::outline::{Outline, OutlineNode, OutlineRules};
use crate::parse_outline_with_rules;

#[derive(Default)]
pub struct TextFormat {
    rules: OutlineRules,
}

impl TextFormat {
    pub fn new(rules: OutlineRules) -> Self {
        Self { rules }
    }
}

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Indented plain-text outline"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "outline"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Outline, FormatError> {
        Ok(parse_outline_with_rules(source, &self.rules))
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        let mut output = String::new();
        write_entries(&outline.entries, 0, &self.rules, &mut output);
        Ok(output)
    }
}

/// Writes each entry at its own level, pushed deeper when needed so it stays below its parent.
fn write_entries(nodes: &[OutlineNode], min_level: usize, rules: &OutlineRules, out: &mut String) {
    for node in nodes {
        let level = node.level.max(min_level);
        out.push_str(&rules.indent(level));
        out.push_str(&node.title);
        out.push(' ');
        out.push_str(&node.page_number.to_string());
        out.push('\n');
        write_entries(&node.children, level + 1, rules, out);
    }
}
