//! djvused bookmarks, as printed by `djvused -e print-outline`.

use crate::common::{fixture, flatten};
use insta::assert_snapshot;
use outline_babel::{FormatError, FormatRegistry};

#[test]
fn test_import_print_outline() {
    let registry = FormatRegistry::default();
    let outline = registry.parse(&fixture("print_outline.djvused"), "djvused").unwrap();
    assert_eq!(
        flatten(&outline),
        vec![
            ("Preface".to_string(), 0, 7),
            ("PART ONE: THE SHAPE OF THE PROBLEM".to_string(), 0, 13),
            ("1. Why outlines break".to_string(), 1, 15),
            ("2. Reading the page".to_string(), 1, 29),
            ("2.1 Leaders \"and\" gutters".to_string(), 2, 31),
            ("Index".to_string(), 0, 211),
        ]
    );
}

#[test]
fn test_import_to_text() {
    let registry = FormatRegistry::default();
    let outline = registry.parse(&fixture("print_outline.djvused"), "djvused").unwrap();
    assert_snapshot!(registry.serialize(&outline, "text").unwrap().trim_end(), @r###"
    Preface 7
    PART ONE: THE SHAPE OF THE PROBLEM 13
        1. Why outlines break 15
        2. Reading the page 29
            2.1 Leaders "and" gutters 31
    Index 211
    "###);
}

#[test]
fn test_export_escapes_quotes() {
    let registry = FormatRegistry::default();
    let outline = registry.parse(&fixture("print_outline.djvused"), "djvused").unwrap();
    let written = registry.serialize(&outline, "djvused").unwrap();
    assert!(written.contains(r##"("2.1 Leaders \"and\" gutters" "#31")"##));
}

#[test]
fn test_deeply_nested_outline_is_a_parse_error() {
    let depth = 20_000;
    let source = format!(
        "(bookmarks {}{})",
        "(\"a\" \"#1\" ".repeat(depth),
        ")".repeat(depth)
    );
    let result = FormatRegistry::default().parse(&source, "djvused");
    assert!(matches!(result, Err(FormatError::ParseError(_))));
}
