//! Raw OCR text → clean text → tree.

use crate::common::{fixture, flatten};
use insta::assert_snapshot;
use outline_babel::format::Format;
use outline_babel::formats::TextFormat;
use outline_babel::{normalize_outline, parse_clean_outline, parse_outline, OutlineNode};

fn expected_tree() -> Vec<(String, usize, u32)> {
    [
        ("CONTENTS", 0, 0),
        ("Preface", 0, 7),
        ("Acknowledgements", 0, 11),
        ("PART ONE: THE SHAPE OF THE PROBLEM", 0, 11),
        ("1. Why outlines break", 1, 3),
        ("2. Reading the page", 1, 17),
        ("2.1 Leaders and gutters", 2, 19),
        ("2.2 Wrapped titles without a page", 2, 19),
        ("2.3 Roman pagination", 2, 24),
        ("PART TWO: REPAIR", 0, 41),
        ("3. Normalizing", 1, 43),
        ("4. Beautifying", 1, 57),
        ("Index", 0, 199),
    ]
    .into_iter()
    .map(|(title, level, page)| (title.to_string(), level, page))
    .collect()
}

#[test]
fn test_normalize_ocr_fixture() {
    let clean = normalize_outline(&fixture("ocr_toc.txt"));
    assert_snapshot!(clean, @r###"
    CONTENTS
    Preface vii
    Acknowledgements xi
    PART ONE: THE SHAPE OF THE PROBLEM
        1. Why outlines break 3
        2. Reading the page 17
            2.1 Leaders and gutters 19
            2.2 Wrapped titles without a page
            2.3 Roman pagination 24
    PART TWO: REPAIR 41
        3. Normalizing 43
        4. Beautifying 57
    Index 199
    "###);
}

#[test]
fn test_parse_ocr_fixture() {
    let outline = parse_outline(&fixture("ocr_toc.txt"));
    assert_eq!(outline.entries.len(), 6);
    assert_eq!(outline.len_total(), 13);
    assert_eq!(flatten(&outline), expected_tree());

    let part_one = &outline.entries[3];
    assert_eq!(part_one.children.len(), 2);
    assert_eq!(part_one.children[1].children.len(), 3);
}

#[test]
fn test_parse_clean_is_the_second_half_of_parse_outline() {
    let raw = fixture("ocr_toc.txt");
    assert_eq!(parse_clean_outline(&normalize_outline(&raw)), parse_outline(&raw));
}

#[test]
fn test_normalized_text_is_stable() {
    let clean = normalize_outline(&fixture("ocr_toc.txt"));
    assert_eq!(normalize_outline(&clean), clean);
}

#[test]
fn test_text_format_round_trip() {
    let format = TextFormat::default();
    let outline = format.parse(&fixture("ocr_toc.txt")).unwrap();
    let written = format.serialize(&outline).unwrap();
    assert!(written.starts_with("CONTENTS 0\nPreface 7\nAcknowledgements 11\n"));
    assert_eq!(format.parse(&written).unwrap(), outline);
}

#[test]
fn test_scenario_simple_outline() {
    let outline = parse_outline("PREFACE 1\nCHAPTER 1. INTRODUCTION 2\n    1.1 Background 3");
    assert_eq!(
        outline.entries,
        vec![
            OutlineNode::new("PREFACE", 0, 1),
            OutlineNode::new("CHAPTER 1. INTRODUCTION", 0, 2)
                .with_children(vec![OutlineNode::new("1.1 Background", 1, 3)]),
        ]
    );
}

#[test]
fn test_scenario_wrapped_line_with_page() {
    let outline = parse_outline("Some Title\n    that wraps 7");
    assert_eq!(
        outline.entries,
        vec![OutlineNode::new("Some Title", 0, 0)
            .with_children(vec![OutlineNode::new("that wraps", 1, 7)])]
    );
}
