//! DjVu bookmark format
//!
//! The `set-outline` / `print-outline` syntax of `djvused`, an s-expression whose entries are
//! `("title" "#page" children...)`:
//!
//! ```text
//! (bookmarks
//!   ("PREFACE" "#1")
//!   ("CHAPTER 1. INTRODUCTION" "#2"
//!     ("1.1 Background" "#3")
//!   )
//! )
//! ```
//!
//! Running `djvused` itself is left to the caller; this module only produces and reads the text.

use crate::error::FormatError;
use crate::format::Format;
use crate::outline::Outline;

mod parser;
mod serializer;

pub struct DjvusedFormat;

impl Format for DjvusedFormat {
    fn name(&self) -> &str {
        "djvused"
    }

    fn description(&self) -> &str {
        "DjVu outline s-expression for djvused"
    }

    fn file_extensions(&self) -> &[&str] {
        &["djvused", "dsed"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Outline, FormatError> {
        parser::parse_djvused(source)
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        Ok(serializer::serialize_djvused(outline))
    }
}
