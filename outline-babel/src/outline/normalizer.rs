//! Raw text → clean text.
//!
//! OCR output and hand-typed tables of contents wrap long titles, pad page numbers with dot
//! leaders and mix tabs with spaces. The normalizer segments such text into logical entries and
//! re-emits each one on a single line:
//!
//! ```text
//! Introduction ........ 1            Introduction 1
//! Part One: Origins of the    ──▶    Part One: Origins of the Modern Outline
//! Modern Outline                         1.1 Sources 7
//!     1.1 Sources --- 7
//! ```
//!
//! A line continues the open entry when the entry did not end with a page token, the line
//! carries no page token itself and does not start with a list marker. Depth is fixed when an
//! entry is opened, so continuation lines never change it.

use super::patterns::{LIST_MARKER, RAW_PAGE_TOKEN, TRAILING_NUMERAL};
use super::{split_indent, OutlineRules};
use tracing::debug;

struct OpenEntry {
    depth: usize,
    text: String,
}

/// Normalizes `raw` with the default rules.
pub fn normalize(raw: &str) -> String {
    normalize_with_rules(raw, &OutlineRules::default())
}

pub fn normalize_with_rules(raw: &str, rules: &OutlineRules) -> String {
    let unit = rules.unit();
    let mut entries: Vec<OpenEntry> = Vec::new();
    let mut open: Option<OpenEntry> = None;
    let mut previous_terminated = true;

    for line in raw.lines() {
        let expanded = expand_tabs(line, unit);
        let line = expanded.trim_end();
        if line.is_empty() {
            continue;
        }

        let (indent, content) = split_indent(line);
        let has_page_token = RAW_PAGE_TOKEN.is_match(content);
        let continues = !previous_terminated
            && !has_page_token
            && !LIST_MARKER.is_match(content)
            && open.is_some();

        match open.as_mut() {
            Some(entry) if continues => {
                entry.text.push(' ');
                entry.text.push_str(content);
            }
            _ => {
                entries.extend(open.take());
                open = Some(OpenEntry {
                    depth: indent / unit,
                    text: content.to_string(),
                });
                previous_terminated = has_page_token;
            }
        }
    }
    entries.extend(open);

    debug!(entries = entries.len(), "normalized outline text");

    entries
        .iter()
        .map(|entry| format!("{}{}", rules.indent(entry.depth), tidy_page_token(&entry.text)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrites the trailing leader and page token to a single space plus the bare numeral.
fn tidy_page_token(text: &str) -> String {
    let text = RAW_PAGE_TOKEN.replace(text, " ${2}");
    let text = TRAILING_NUMERAL.replace(&text, " ${1}");
    text.trim_start().to_string()
}

/// Expands tabs to the next multiple of `width` columns.
fn expand_tabs(line: &str, width: usize) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + width);
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = width - column % width;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}
