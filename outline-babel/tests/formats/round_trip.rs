//! text → <format> → text keeps the outline intact.

use crate::common::fixture;
use outline_babel::FormatRegistry;

fn round_trip_through(format: &str) {
    let registry = FormatRegistry::default();
    let outline = registry.parse(&fixture("ocr_toc.txt"), "text").unwrap();

    let encoded = registry.serialize(&outline, format).unwrap();
    let decoded = registry.parse(&encoded, format).unwrap();
    assert_eq!(decoded, outline, "{format} round trip changed the outline");

    let text = registry.serialize(&decoded, "text").unwrap();
    assert_eq!(
        registry.parse(&text, "text").unwrap(),
        outline,
        "{format} round trip changed the text"
    );
}

#[test]
fn test_xml_round_trip() {
    round_trip_through("xml");
}

#[test]
fn test_json_round_trip() {
    round_trip_through("json");
}

#[test]
fn test_djvused_round_trip() {
    round_trip_through("djvused");
}

#[test]
fn test_pdfmark_of_fixture() {
    let registry = FormatRegistry::default();
    let outline = registry.parse(&fixture("ocr_toc.txt"), "text").unwrap();
    let marks = registry.serialize(&outline, "pdfmark").unwrap();

    assert_eq!(marks.lines().count(), outline.len_total());
    assert!(marks.starts_with("[/Page 1 /Title (CONTENTS) /OUT pdfmark\n"));
    assert!(marks.contains("[/Count 2 /Page 11 /Title (PART ONE: THE SHAPE OF THE PROBLEM) /OUT pdfmark\n"));
    assert!(marks.contains("[/Count 3 /Page 17 /Title (2. Reading the page) /OUT pdfmark\n"));
}
