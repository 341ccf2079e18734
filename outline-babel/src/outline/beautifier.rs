//! Canonical spacing and indentation for outline text.
//!
//! Unlike the normalizer, the beautifier never joins lines and only re-splits Arabic page
//! numbers. Roman numerals are left as typed. Each top-level entry after the first is preceded
//! by one blank line.
//!
//! Text that already passes [`is_beautified`] is returned untouched, which keeps the pass
//! idempotent and leaves hand-placed blank lines alone.

use super::patterns::{SINGLE_SPACED_DIGITS, SPACED_DIGITS, TRAILING_DIGITS, WIDE_SPACED_DIGITS};
use super::{split_indent, OutlineRules};
use tracing::debug;

pub fn is_beautified(text: &str) -> bool {
    is_beautified_with_rules(text, &OutlineRules::default())
}

/// True when every non-blank line is indented by a multiple of the indentation unit and any
/// trailing page number is separated from the title by exactly one space.
pub fn is_beautified_with_rules(text: &str, rules: &OutlineRules) -> bool {
    let unit = rules.unit();
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .all(|line| {
            let (indent, content) = split_indent(line);
            let content = content.trim_end();
            if indent % unit != 0 {
                return false;
            }
            !TRAILING_DIGITS.is_match(content)
                || (SINGLE_SPACED_DIGITS.is_match(content) && !WIDE_SPACED_DIGITS.is_match(content))
        })
}

pub fn beautify(text: &str) -> String {
    beautify_with_rules(text, &OutlineRules::default())
}

pub fn beautify_with_rules(text: &str, rules: &OutlineRules) -> String {
    if is_beautified_with_rules(text, rules) {
        debug!("outline text already beautified");
        return text.to_string();
    }

    let unit = rules.unit();
    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let (indent, content) = split_indent(line);
        let level = indent / unit;

        if level == 0 && !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{}{}", rules.indent(level), respace_page(content.trim_end())));
    }
    lines.join("\n")
}

fn respace_page(content: &str) -> String {
    let split = SPACED_DIGITS
        .captures(content)
        .and_then(|captures| Some((captures.get(0)?.start(), captures.get(1)?.as_str())));
    match split {
        Some((start, page)) => format!("{} {}", content[..start].trim_end(), page),
        None => content.to_string(),
    }
}
