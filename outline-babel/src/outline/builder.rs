//! Clean text → [`Outline`].
//!
//! # The Algorithm
//!
//! Entries arrive in document order, each with a depth taken from its indentation. A stack keeps
//! the chain of entries that are still open (the current entry and its ancestors); a synthetic
//! root at depth -1 sits below the stack, represented here by the `roots` vector. The same
//! assembly is reused by importers of flat bookmark lists.
//!
//! 1. Pop every open entry whose level is >= the new entry's depth. A popped entry is complete
//!    and is appended to the entry below it on the stack, or to `roots` when the stack empties.
//! 2. Push the new entry. It becomes the parent candidate for deeper entries that follow.
//! 3. At the end of input, unwind the whole stack the same way.
//!
//! Depth jumps (0 → 3) simply nest the deeper entry under the shallower one without placeholders.
//! Pages come from the trailing numeral; an entry without one inherits the last page seen in
//! document order, 0 before the first.

use super::numerals::convert_to_number;
use super::patterns::TRAILING_NUMERAL;
use super::{split_indent, Outline, OutlineNode, OutlineRules};
use tracing::debug;

/// Builds an outline from normalized text with the default rules.
pub fn parse_clean(clean: &str) -> Outline {
    parse_clean_with_rules(clean, &OutlineRules::default())
}

pub fn parse_clean_with_rules(clean: &str, rules: &OutlineRules) -> Outline {
    let unit = rules.unit();
    let mut last_page_number = 0;

    let entries = clean
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (indent, content) = split_indent(line);
            let content = content.trim_end();
            let (title, page_number) = match split_page_token(content) {
                Some((title, token)) => {
                    last_page_number = convert_to_number(token);
                    (title, last_page_number)
                }
                None => (content, last_page_number),
            };
            OutlineNode::new(title, indent / unit, page_number)
        });

    let outline = Outline::new(assemble(entries));
    debug!(
        top_level = outline.entries.len(),
        total = outline.len_total(),
        "built outline tree"
    );
    outline
}

/// Nests childless entries given in document order by their `level`.
pub(crate) fn assemble(entries: impl IntoIterator<Item = OutlineNode>) -> Vec<OutlineNode> {
    let mut roots: Vec<OutlineNode> = Vec::new();
    let mut open: Vec<OutlineNode> = Vec::new();

    for entry in entries {
        while open.last().is_some_and(|top| top.level >= entry.level) {
            close_top(&mut open, &mut roots);
        }
        open.push(entry);
    }
    while !open.is_empty() {
        close_top(&mut open, &mut roots);
    }
    roots
}

/// Splits `content` into title and trailing numeral token, if there is one.
pub(crate) fn split_page_token(content: &str) -> Option<(&str, &str)> {
    let captures = TRAILING_NUMERAL.captures(content)?;
    let whole = captures.get(0)?;
    let token = captures.get(1)?;
    Some((content[..whole.start()].trim(), token.as_str()))
}

fn close_top(open: &mut Vec<OutlineNode>, roots: &mut Vec<OutlineNode>) {
    if let Some(node) = open.pop() {
        match open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}
