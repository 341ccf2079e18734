//! Table of contents outlines: cleanup, structure and interchange
//!
//!     This crate turns the raw, usually OCR-derived, table of contents text of a book into a
//!     tree of titled and paged entries, and converts that tree to and from the formats document
//!     tools consume (DjVu bookmarks, PDF outline marks, XML, JSON).
//!
//!     This is a pure lib, that is, it powers the outline cli but is shell agnostic: no code here
//!     prints, reads environment variables or touches the filesystem.
//!
//! Architecture
//!
//!     .
//!     ├── outline                 # The engine, no format knowledge
//!     │   ├── normalizer.rs       # raw text → clean text
//!     │   ├── builder.rs          # clean text → Outline
//!     │   ├── beautifier.rs       # raw text → canonical text
//!     │   └── numerals.rs         # page tokens → numbers
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── transforms.rs           # text-level page shifting
//!     ├── formats
//!     │   └── <format>
//!     │       ├── parser.rs
//!     │       ├── serializer.rs
//!     │       └── mod.rs
//!     └── error.rs
//!
//!     The engine never fails: odd indentation is quantized, malformed numerals read as 0 and
//!     missing pages are inherited. Errors only come from structured input formats and from
//!     format options.
//!
//! Core Algorithms
//!
//!     The interesting work is recovering nesting from flat, indented lines. Both the text
//!     pipeline and flat bookmark importers (WinDjView) share one stack-based assembly, see
//!     ./outline/builder.rs.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes them.

pub mod error;
pub mod format;
pub mod formats;
pub mod outline;
pub mod registry;
pub mod transforms;

pub use error::FormatError;
pub use format::Format;
pub use outline::{Outline, OutlineNode, OutlineRules};
pub use registry::FormatRegistry;

pub use outline::{
    beautify as beautify_outline, convert_to_number, is_beautified, normalize as normalize_outline,
    parse_clean as parse_clean_outline,
};

/// Raw outline text → tree, running the normalizer then the tree builder.
///
/// # Example
///
/// ```
/// let outline = outline_babel::parse_outline("PREFACE ..... v\nCHAPTER 1 1\n    1.1 Scope 3");
/// assert_eq!(outline.entries.len(), 2);
/// assert_eq!(outline.entries[0].page_number, 5);
/// assert_eq!(outline.entries[1].children[0].title, "1.1 Scope");
/// ```
pub fn parse_outline(raw: &str) -> Outline {
    parse_outline_with_rules(raw, &OutlineRules::default())
}

pub fn parse_outline_with_rules(raw: &str, rules: &OutlineRules) -> Outline {
    let clean = outline::normalize_with_rules(raw, rules);
    outline::parse_clean_with_rules(&clean, rules)
}
