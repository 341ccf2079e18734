use outline_babel::transforms::shift_pages;
use outline_babel::{beautify_outline, is_beautified, normalize_outline, parse_outline, OutlineNode};
use proptest::prelude::*;

/// Outline-ish text: indented titles, some with page numbers, some with ragged spacing.
fn outline_text() -> impl Strategy<Value = String> {
    let line = (
        0usize..13,
        "[A-Za-z][A-Za-z .]{0,12}",
        proptest::option::of((1usize..4, 0u32..600)),
    )
        .prop_map(|(indent, title, page)| {
            let mut line = format!("{}{}", " ".repeat(indent), title.trim_end());
            if let Some((gap, page)) = page {
                line.push_str(&" ".repeat(gap));
                line.push_str(&page.to_string());
            }
            line
        });
    proptest::collection::vec(line, 0..12).prop_map(|lines| lines.join("\n"))
}

fn check_levels(nodes: &[OutlineNode], parent_level: Option<usize>) {
    for node in nodes {
        if let Some(parent) = parent_level {
            assert!(node.level > parent, "{} not below its parent", node.title);
        }
        check_levels(&node.children, Some(node.level));
    }
}

proptest! {
    #[test]
    fn beautify_is_idempotent(text in outline_text()) {
        let once = beautify_outline(&text);
        prop_assert_eq!(beautify_outline(&once), once);
    }

    #[test]
    fn beautified_text_is_returned_unchanged(text in outline_text()) {
        if is_beautified(&text) {
            prop_assert_eq!(beautify_outline(&text), text);
        }
    }

    #[test]
    fn children_are_deeper_than_parents(text in outline_text()) {
        let outline = parse_outline(&text);
        check_levels(&outline.entries, None);
    }

    #[test]
    fn one_node_per_normalized_line(text in outline_text()) {
        let clean = normalize_outline(&text);
        let lines = clean.lines().filter(|l| !l.trim().is_empty()).count();
        prop_assert_eq!(parse_outline(&text).len_total(), lines);
    }

    #[test]
    fn shifted_pages_respect_the_minimum(text in outline_text(), delta in -700i64..700, min_page in 0u32..5) {
        let shifted = shift_pages(&text, delta, min_page);
        let mut outline = parse_outline(&text);
        outline.shift_pages(delta, min_page);
        prop_assert!(outline.iter_depth_first().all(|n| n.page_number >= min_page));
        if shifted.adjusted > 0 {
            prop_assert!(is_beautified(&shifted.text));
        } else {
            prop_assert_eq!(shifted.text, text);
        }
    }
}
