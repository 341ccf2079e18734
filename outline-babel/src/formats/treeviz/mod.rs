//! Treeviz view of an outline
//!
//! A read-only inspection format: the tree drawn with box connectors, one entry per line,
//! each labelled with its page.
//!
//! ```text
//! ├─ PREFACE (p. 1)
//! └─ CHAPTER 1. INTRODUCTION (p. 2)
//!   ├─ 1.1 Background (p. 3)
//!   └─ 1.2 Scope (p. 4)
//! ```

use crate::error::FormatError;
use crate::format::Format;
use crate::outline::{Outline, OutlineNode};

fn format_node(node: &OutlineNode, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    out.push_str(&format!(
        "{prefix}{connector} {} (p. {})\n",
        node.title, node.page_number
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&node.children, &child_prefix, out);
}

fn format_children(children: &[OutlineNode], prefix: &str, out: &mut String) {
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i == child_count - 1, out);
    }
}

pub fn to_treeviz_str(outline: &Outline) -> String {
    let mut output = String::new();
    format_children(&outline.entries, "", &mut output);
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree of the outline with page labels"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        Ok(to_treeviz_str(outline))
    }
}
