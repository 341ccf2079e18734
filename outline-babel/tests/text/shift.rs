//! Page shifting over whole outline texts.

use outline_babel::transforms::shift_pages;
use outline_babel::{is_beautified, parse_outline};

#[test]
fn test_shift_forward_then_back() {
    let text = "PREFACE 1\n\nCHAPTER 1 2\n    1.1 Background 3";
    let forward = shift_pages(text, 10, 1);
    assert_eq!(forward.adjusted, 3);
    assert_eq!(forward.text, "PREFACE 11\n\nCHAPTER 1 12\n    1.1 Background 13");

    let back = shift_pages(&forward.text, -10, 1);
    assert_eq!(back.text, text);
}

#[test]
fn test_shift_output_is_beautified() {
    let shifted = shift_pages("Intro   4\n  Body 9\nEnd 30", -3, 1);
    assert!(is_beautified(&shifted.text));
}

#[test]
fn test_text_and_tree_shifts_agree() {
    let text = "Front 2\nPart 5\n    Chapter 6";
    let mut outline = parse_outline(text);
    outline.shift_pages(-4, 1);

    let shifted = parse_outline(&shift_pages(text, -4, 1).text);
    assert_eq!(shifted, outline);
}
