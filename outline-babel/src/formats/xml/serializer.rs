use crate::outline::{Outline, OutlineNode};

/// Layout knobs for XML output.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlOptions {
    /// Indentation per nesting level, a tab by default.
    pub indent: String,
    /// Emit the `<?xml ...?>` declaration line.
    pub declaration: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            declaration: true,
        }
    }
}

pub(super) fn serialize_xml(outline: &Outline, options: &XmlOptions) -> String {
    let mut output = String::new();
    if options.declaration {
        output.push_str("<?xml version='1.0' encoding='utf-8'?>\n");
    }
    if outline.is_empty() {
        output.push_str("<outline />\n");
        return output;
    }
    output.push_str("<outline>\n");
    for node in &outline.entries {
        write_item(node, 1, options, &mut output);
    }
    output.push_str("</outline>\n");
    output
}

fn write_item(node: &OutlineNode, depth: usize, options: &XmlOptions, out: &mut String) {
    let indent = options.indent.repeat(depth);
    out.push_str(&format!(
        "{indent}<item title=\"{}\" page=\"{}\"",
        escape_xml(&node.title),
        node.page_number
    ));
    if node.children.is_empty() {
        out.push_str(" />\n");
        return;
    }
    out.push_str(">\n");
    for child in &node.children {
        write_item(child, depth + 1, options, out);
    }
    out.push_str(&format!("{indent}</item>\n"));
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}
