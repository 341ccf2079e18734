//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use crate::outline::{Outline, OutlineRules};
use std::collections::HashMap;

/// Registry of outline formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
///
/// let outline = registry.parse("PREFACE 1\nCHAPTER 1 2", "text")?;
/// let bookmarks = registry.serialize(&outline, "djvused")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("toc.txt"), Some("text".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("book.bookmarks"), Some("xml".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("toc.unknown"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Outline, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Serialize an outline using the specified format
    pub fn serialize(&self, outline: &Outline, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(outline, format, &HashMap::new())
    }

    /// Serialize an outline using the specified format and options
    pub fn serialize_with_options(
        &self,
        outline: &Outline,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize_with_options(outline, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        Self::with_rules(OutlineRules::default())
    }

    /// Create a registry with default formats, text formats using `rules`
    pub fn with_rules(rules: OutlineRules) -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::text::TextFormat::new(rules));
        registry.register(crate::formats::xml::XmlFormat);
        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::djvused::DjvusedFormat);
        registry.register(crate::formats::pdfmark::PdfmarkFormat);
        registry.register(crate::formats::treeviz::TreevizFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
