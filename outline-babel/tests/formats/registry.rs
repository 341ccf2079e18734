//! Registry-level behavior across all default formats.

use outline_babel::{FormatError, FormatRegistry, Outline, OutlineNode};
use std::collections::HashMap;

#[test]
fn test_every_default_format_serializes() {
    let registry = FormatRegistry::default();
    let outline = Outline::new(vec![OutlineNode::new("Only", 0, 1)]);
    for name in registry.list_formats() {
        let format = registry.get(&name).unwrap();
        assert!(format.supports_serialization(), "{name} cannot serialize");
        let written = registry.serialize(&outline, &name).unwrap();
        assert!(written.contains("Only"), "{name} dropped the title");
    }
}

#[test]
fn test_write_only_formats_refuse_to_parse() {
    let registry = FormatRegistry::default();
    for name in ["pdfmark", "treeviz"] {
        assert!(matches!(
            registry.parse("Only 1", name),
            Err(FormatError::NotSupported(_))
        ));
    }
}

#[test]
fn test_unknown_format() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.parse("A 1", "epub").unwrap_err(),
        FormatError::FormatNotFound("epub".to_string())
    );
}

#[test]
fn test_options_are_checked_per_format() {
    let registry = FormatRegistry::default();
    let outline = Outline::new(vec![OutlineNode::new("Only", 0, 1)]);
    let mut options = HashMap::new();
    options.insert("collapsed".to_string(), "true".to_string());

    assert!(registry
        .serialize_with_options(&outline, "pdfmark", &options)
        .is_ok());
    assert!(matches!(
        registry.serialize_with_options(&outline, "text", &options),
        Err(FormatError::NotSupported(_))
    ));
}
