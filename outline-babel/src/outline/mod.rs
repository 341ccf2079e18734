//! The outline engine
//!
//!     Three stateless components turn noisy, OCR-derived table of contents text into a forest of
//!     titled, paged nodes:
//!
//!     - [`normalizer`]: raw text → clean text, one entry per line, indentation quantized to the
//!       indentation unit, a single space before the trailing page token.
//!     - [`builder`]: clean text → [`Outline`], nesting inferred from indentation with an explicit
//!       stack of open nodes, missing page numbers inherited from the previous entry.
//!     - [`beautifier`]: a lighter canonical-form pass over raw text, plus the
//!       [`is_beautified`](beautifier::is_beautified) probe that short-circuits it.
//!
//!     None of these ever fail. Malformed indentation is quantized with integer division,
//!     malformed numerals convert to 0 and absent page numbers are inherited.
//!
//!     Pipeline:
//!
//!         raw text ──normalize──▶ clean text ──parse_clean──▶ Outline
//!         raw text ──beautify──▶ canonical text

use serde::{Deserialize, Serialize};

pub mod beautifier;
pub mod builder;
pub mod normalizer;
pub mod numerals;
pub(crate) mod patterns;

pub use beautifier::{beautify, beautify_with_rules, is_beautified, is_beautified_with_rules};
pub use builder::{parse_clean, parse_clean_with_rules};
pub use normalizer::{normalize, normalize_with_rules};
pub use numerals::convert_to_number;

/// Width of one indentation level, in columns.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Knobs shared by the normalizer, the tree builder and the beautifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRules {
    /// Columns per nesting level. Tabs expand to the same width.
    pub indent_width: usize,
}

impl OutlineRules {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    /// Indentation width, never zero.
    pub(crate) fn unit(&self) -> usize {
        self.indent_width.max(1)
    }

    pub(crate) fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.unit())
    }
}

impl Default for OutlineRules {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// One table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Entry text, leading numbering kept verbatim.
    pub title: String,
    /// Depth at which the entry was declared, 0 for top-level entries.
    pub level: usize,
    pub page_number: u32,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(title: impl Into<String>, level: usize, page_number: u32) -> Self {
        Self {
            title: title.into(),
            level,
            page_number,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<OutlineNode>) -> Self {
        self.children = children;
        self
    }
}

/// An ordered forest of top-level entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    pub entries: Vec<OutlineNode>,
}

impl Outline {
    pub fn new(entries: Vec<OutlineNode>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of nodes at every depth.
    pub fn len_total(&self) -> usize {
        self.iter_depth_first().count()
    }

    /// Pre-order walk, i.e. document order.
    pub fn iter_depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: self.entries.iter().rev().collect(),
        }
    }

    /// Adds `delta` to every page number, clamping the result at `min_page`.
    pub fn shift_pages(&mut self, delta: i64, min_page: u32) {
        fn shift(nodes: &mut [OutlineNode], delta: i64, min_page: u32) {
            for node in nodes {
                node.page_number = crate::transforms::shifted_page(node.page_number, delta, min_page);
                shift(&mut node.children, delta, min_page);
            }
        }
        shift(&mut self.entries, delta, min_page);
    }
}

impl From<Vec<OutlineNode>> for Outline {
    fn from(entries: Vec<OutlineNode>) -> Self {
        Self { entries }
    }
}

/// Iterator returned by [`Outline::iter_depth_first`].
pub struct DepthFirst<'a> {
    stack: Vec<&'a OutlineNode>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a OutlineNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Indentation of `line` in characters, with the remaining content.
pub(crate) fn split_indent(line: &str) -> (usize, &str) {
    let content = line.trim_start();
    let indent = line[..line.len() - content.len()].chars().count();
    (indent, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Outline {
        Outline::new(vec![
            OutlineNode::new("A", 0, 1).with_children(vec![
                OutlineNode::new("A.1", 1, 2),
                OutlineNode::new("A.2", 1, 3)
                    .with_children(vec![OutlineNode::new("A.2.a", 2, 4)]),
            ]),
            OutlineNode::new("B", 0, 5),
        ])
    }

    #[test]
    fn depth_first_walk_follows_document_order() {
        let outline = sample();
        let titles: Vec<_> = outline
            .iter_depth_first()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "A.1", "A.2", "A.2.a", "B"]);
        assert_eq!(outline.len_total(), 5);
    }

    #[test]
    fn shift_pages_clamps_at_minimum() {
        let mut outline = sample();
        outline.shift_pages(-3, 1);
        let pages: Vec<_> = outline.iter_depth_first().map(|n| n.page_number).collect();
        assert_eq!(pages, vec![1, 1, 1, 1, 2]);
    }

    #[test]
    fn zero_indent_width_is_clamped() {
        let rules = OutlineRules::new(0);
        assert_eq!(rules.unit(), 1);
        assert_eq!(rules.indent(3), "   ");
    }

    #[test]
    fn split_indent_counts_characters() {
        assert_eq!(split_indent("    Title 3"), (4, "Title 3"));
        assert_eq!(split_indent("Title"), (0, "Title"));
        assert_eq!(split_indent("\u{3000}Wide"), (1, "Wide"));
    }
}
