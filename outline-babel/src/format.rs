//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for reading outlines from, and writing outlines to,
//! the formats the toolchain understands.

use crate::error::FormatError;
use crate::outline::Outline;
use std::collections::HashMap;

/// Trait for outline formats
///
/// Implementors provide conversion between a string representation and an [`Outline`].
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
///         Ok(outline
///             .iter_depth_first()
///             .map(|node| format!("{}\n", node.title))
///             .collect())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "text", "xml", "djvused")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["txt"], ["xml", "bookmarks"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Outline)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Outline → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into an Outline
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<Outline, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize an Outline into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _outline: &Outline) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize an Outline, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which delegates to
    /// [`Format::serialize`] and rejects any parameter it is handed.
    fn serialize_with_options(
        &self,
        outline: &Outline,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(outline)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
