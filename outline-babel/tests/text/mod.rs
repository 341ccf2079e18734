//! Text pipeline tests
//!
//! Raw table of contents text through the normalizer, the tree builder and the beautifier.

mod beautify;
mod pipeline;
mod shift;
