//! XML import and export.

use crate::common::{fixture, flatten};
use insta::assert_snapshot;
use outline_babel::{FormatError, FormatRegistry, Outline, OutlineNode};
use std::collections::HashMap;

#[test]
fn test_import_windjview_bookmarks() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("book.bookmarks").as_deref(),
        Some("xml")
    );
    let outline = registry.parse(&fixture("windjview.bookmarks"), "xml").unwrap();
    assert_eq!(
        flatten(&outline),
        vec![
            ("Preface".to_string(), 0, 7),
            ("PART ONE: THE SHAPE OF THE PROBLEM".to_string(), 0, 13),
            ("1. Why outlines break".to_string(), 1, 15),
            ("2. Reading the page".to_string(), 1, 29),
            ("2.1 Leaders & gutters".to_string(), 2, 31),
            ("Index".to_string(), 0, 211),
        ]
    );
}

#[test]
fn test_windjview_and_djvused_agree() {
    let registry = FormatRegistry::default();
    let from_xml = registry.parse(&fixture("windjview.bookmarks"), "xml").unwrap();
    let from_djvused = registry.parse(&fixture("print_outline.djvused"), "djvused").unwrap();
    assert_eq!(from_xml.len_total(), from_djvused.len_total());
    let pages = |outline: &Outline| -> Vec<u32> {
        outline.iter_depth_first().map(|n| n.page_number).collect()
    };
    assert_eq!(pages(&from_xml), pages(&from_djvused));
}

#[test]
fn test_export_layout() {
    let registry = FormatRegistry::default();
    let outline = Outline::new(vec![
        OutlineNode::new("PREFACE", 0, 1),
        OutlineNode::new("CHAPTER 1. INTRODUCTION", 0, 2)
            .with_children(vec![OutlineNode::new("1.1 Background", 1, 3)]),
    ]);
    let mut options = HashMap::new();
    options.insert("indent".to_string(), "  ".to_string());
    let xml = registry.serialize_with_options(&outline, "xml", &options).unwrap();
    assert_snapshot!(xml.trim_end(), @r###"
    <?xml version='1.0' encoding='utf-8'?>
    <outline>
      <item title="PREFACE" page="1" />
      <item title="CHAPTER 1. INTRODUCTION" page="2">
        <item title="1.1 Background" page="3" />
      </item>
    </outline>
    "###);
}

#[test]
fn test_deeply_nested_items_are_a_parse_error() {
    let depth = 20_000;
    let source = format!(
        "<outline>{}{}</outline>",
        r#"<item title="a" page="1">"#.repeat(depth),
        "</item>".repeat(depth)
    );
    let result = FormatRegistry::default().parse(&source, "xml");
    assert!(matches!(result, Err(FormatError::ParseError(_))));
}
