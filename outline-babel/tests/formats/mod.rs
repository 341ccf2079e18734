//! Format tests
//!
//! Conversions between the text outline and the structured formats, through the registry.

mod djvused;
mod registry;
mod round_trip;
mod xml;
