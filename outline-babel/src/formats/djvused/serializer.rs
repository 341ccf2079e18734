use crate::outline::{Outline, OutlineNode};

pub(super) fn serialize_djvused(outline: &Outline) -> String {
    let mut output = String::from("(bookmarks\n");
    write_entries(&outline.entries, 1, &mut output);
    output.push_str(")\n");
    output
}

fn write_entries(nodes: &[OutlineNode], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        out.push_str(&format!(
            "{indent}(\"{}\" \"#{}\"",
            escape_string(&node.title),
            node.page_number
        ));
        if !node.children.is_empty() {
            out.push('\n');
            write_entries(&node.children, depth + 1, out);
            out.push_str(&indent);
        }
        out.push_str(")\n");
    }
}

fn escape_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_layout() {
        let outline = Outline::new(vec![
            OutlineNode::new("PREFACE", 0, 1),
            OutlineNode::new("CHAPTER 1. INTRODUCTION", 0, 2).with_children(vec![
                OutlineNode::new("1.1 Background", 1, 3)
                    .with_children(vec![OutlineNode::new("1.1.1 Scope", 2, 3)]),
            ]),
        ]);
        insta::assert_snapshot!(serialize_djvused(&outline).trim_end(), @r###"
        (bookmarks
          ("PREFACE" "#1")
          ("CHAPTER 1. INTRODUCTION" "#2"
            ("1.1 Background" "#3"
              ("1.1.1 Scope" "#3")
            )
          )
        )
        "###);
    }

    #[test]
    fn test_empty_outline() {
        assert_eq!(serialize_djvused(&Outline::default()), "(bookmarks\n)\n");
    }

    #[test]
    fn test_quotes_and_backslashes_escaped() {
        let outline = Outline::new(vec![OutlineNode::new(r#"The "C:\" drive"#, 0, 9)]);
        assert_eq!(
            serialize_djvused(&outline),
            "(bookmarks\n  (\"The \\\"C:\\\\\\\" drive\" \"#9\")\n)\n"
        );
    }
}
