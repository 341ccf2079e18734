//! Option handling shared by the formats that accept extra parameters.

use crate::error::FormatError;
use std::collections::HashMap;

/// Deepest bookmark nesting the importers accept.
pub(crate) const MAX_NESTING: usize = 256;

pub(crate) fn nesting_error(format: &str) -> FormatError {
    FormatError::ParseError(format!(
        "{format} outline is nested deeper than {MAX_NESTING} levels"
    ))
}

/// Rejects options the format does not understand.
pub(crate) fn ensure_known_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), FormatError> {
    let mut unknown: Vec<&str> = options
        .keys()
        .map(String::as_str)
        .filter(|key| !known.contains(key))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort_unstable();
    Err(FormatError::NotSupported(format!(
        "Format '{format}' does not support parameter(s): {}",
        unknown.join(", ")
    )))
}

pub(crate) fn parse_bool_flag(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    if let Some(value) = options.get(key) {
        if value.is_empty() {
            return Ok(true);
        }
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => Ok(true),
            "false" | "0" | "no" | "n" => Ok(false),
            other => Err(FormatError::SerializationError(format!(
                "Invalid boolean value '{other}' for --extra-{key}"
            ))),
        }
    } else {
        Ok(default)
    }
}

pub(crate) fn parse_usize_option(
    options: &HashMap<String, String>,
    key: &str,
    default: usize,
) -> Result<usize, FormatError> {
    match options.get(key) {
        Some(value) => value.trim().parse().map_err(|_| {
            FormatError::SerializationError(format!(
                "Invalid number '{value}' for --extra-{key}"
            ))
        }),
        None => Ok(default),
    }
}
