//! PDF outline objects as pdfmark operators.
//!
//! One `/OUT` mark per entry, in document order, ready to be fed to Ghostscript together with
//! the PDF whose bookmarks should be replaced:
//!
//! ```text
//! [/Page 1 /Title (PREFACE) /OUT pdfmark
//! [/Count 1 /Page 2 /Title (CHAPTER 1. INTRODUCTION) /OUT pdfmark
//! [/Page 3 /Title (1.1 Background) /OUT pdfmark
//! ```
//!
//! `/Count` carries the number of direct children and is only written for entries that have
//! any. A negative count shows the entry collapsed in viewers. PDF pages start at 1, so page 0
//! (an entry that never saw a page number) is written as page 1.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::common::{ensure_known_options, parse_bool_flag};
use crate::outline::{Outline, OutlineNode};
use std::collections::HashMap;

pub struct PdfmarkFormat;

impl Format for PdfmarkFormat {
    fn name(&self) -> &str {
        "pdfmark"
    }

    fn description(&self) -> &str {
        "PDF bookmarks as Ghostscript pdfmark operators"
    }

    fn file_extensions(&self) -> &[&str] {
        &["pdfmark"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        Ok(to_pdfmark(outline, false))
    }

    fn serialize_with_options(
        &self,
        outline: &Outline,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        ensure_known_options(self.name(), options, &["collapsed"])?;
        let collapsed = parse_bool_flag(options, "collapsed", false)?;
        Ok(to_pdfmark(outline, collapsed))
    }
}

fn to_pdfmark(outline: &Outline, collapsed: bool) -> String {
    let mut output = String::new();
    write_marks(&outline.entries, collapsed, &mut output);
    output
}

fn write_marks(nodes: &[OutlineNode], collapsed: bool, out: &mut String) {
    for node in nodes {
        out.push('[');
        if !node.children.is_empty() {
            let count = node.children.len() as i64;
            let count = if collapsed { -count } else { count };
            out.push_str(&format!("/Count {count} "));
        }
        out.push_str(&format!(
            "/Page {} /Title {} /OUT pdfmark\n",
            node.page_number.max(1),
            pdf_string(&node.title)
        ));
        write_marks(&node.children, collapsed, out);
    }
}

/// Literal `(...)` string for ASCII titles, UTF-16BE hex string with BOM otherwise.
fn pdf_string(text: &str) -> String {
    if text.is_ascii() {
        let mut literal = String::with_capacity(text.len() + 2);
        literal.push('(');
        for c in text.chars() {
            match c {
                '\\' | '(' | ')' => {
                    literal.push('\\');
                    literal.push(c);
                }
                '\n' => literal.push_str("\\n"),
                '\r' => literal.push_str("\\r"),
                '\t' => literal.push_str("\\t"),
                _ => literal.push(c),
            }
        }
        literal.push(')');
        return literal;
    }

    let mut hex = String::from("<FEFF");
    for unit in text.encode_utf16() {
        hex.push_str(&format!("{unit:04X}"));
    }
    hex.push('>');
    hex
}
