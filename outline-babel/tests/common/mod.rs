//! Shared helpers for the integration tests.

use outline_babel::Outline;
use std::path::PathBuf;

/// Reads a file from tests/fixtures.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// `(title, level, page)` for every node in document order.
pub fn flatten(outline: &Outline) -> Vec<(String, usize, u32)> {
    outline
        .iter_depth_first()
        .map(|node| (node.title.clone(), node.level, node.page_number))
        .collect()
}
