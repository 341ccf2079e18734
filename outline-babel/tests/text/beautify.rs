//! Canonical form of outline text.

use outline_babel::outline::beautify_with_rules;
use outline_babel::{beautify_outline, is_beautified, OutlineRules};

#[test]
fn test_beautify_scenario() {
    let raw = "PREFACE     1\nCHAPTER 1. INTRODUCTION\t2\n      1.1 Background   3\nAPPENDIX 11";
    assert!(!is_beautified(raw));
    assert_eq!(
        beautify_outline(raw),
        "PREFACE 1\n\nCHAPTER 1. INTRODUCTION 2\n    1.1 Background 3\n\nAPPENDIX 11"
    );
}

#[test]
fn test_canonical_text_is_returned_byte_for_byte() {
    let text = "PREFACE 1\nCHAPTER 1 2\n    1.1 Background 3\n\n\n";
    assert!(is_beautified(text));
    assert_eq!(beautify_outline(text), text);
}

#[test]
fn test_roman_pages_are_left_alone() {
    let raw = "  Foreword     xii\nPart I   3";
    assert_eq!(beautify_outline(raw), "Foreword     xii\n\nPart I 3");
}

#[test]
fn test_beautify_with_two_space_unit() {
    let rules = OutlineRules::new(2);
    assert_eq!(
        beautify_with_rules("A   1\n   B 2\n    C 3", &rules),
        "A 1\n  B 2\n    C 3"
    );
}
