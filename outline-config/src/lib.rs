//! Shared configuration loader for the outline toolchain.
//!
//! `defaults/outline.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`OutlineConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use outline_babel::OutlineRules;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/outline.default.toml");

/// Top-level configuration consumed by outline applications.
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineConfig {
    pub formatting: FormattingConfig,
    pub convert: ConvertConfig,
    pub shift: ShiftConfig,
}

/// Formatting-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub rules: FormattingRulesConfig,
}

/// Mirrors the knobs exposed by the outline engine.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingRulesConfig {
    pub indent_width: usize,
}

impl From<FormattingRulesConfig> for OutlineRules {
    fn from(config: FormattingRulesConfig) -> Self {
        OutlineRules::new(config.indent_width)
    }
}

impl From<&FormattingRulesConfig> for OutlineRules {
    fn from(config: &FormattingRulesConfig) -> Self {
        OutlineRules::new(config.indent_width)
    }
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub json: JsonConfig,
    pub xml: XmlConfig,
    pub pdfmark: PdfmarkConfig,
}

impl ConvertConfig {
    /// Serialization options for `format`, as understood by its `serialize_with_options`.
    pub fn options_for(&self, format: &str) -> HashMap<String, String> {
        let mut options = HashMap::new();
        match format {
            "json" => {
                options.insert("indent".to_string(), self.json.indent.to_string());
            }
            "xml" => {
                options.insert("indent".to_string(), self.xml.indent.clone());
                options.insert("declaration".to_string(), self.xml.declaration.to_string());
            }
            "pdfmark" => {
                options.insert("collapsed".to_string(), self.pdfmark.collapsed.to_string());
            }
            _ => {}
        }
        options
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub indent: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XmlConfig {
    pub indent: String,
    pub declaration: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfmarkConfig {
    pub collapsed: bool,
}

/// Page shifting defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftConfig {
    pub min_page: u32,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<OutlineConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<OutlineConfig, ConfigError> {
    Loader::new().build()
}
