//! Format implementations
//!
//! This module contains all format implementations that convert between
//! [`Outline`](crate::outline::Outline) trees and their text representations.

pub(crate) mod common;
pub mod djvused;
pub mod json;
pub mod pdfmark;
pub mod text;
pub mod treeviz;
pub mod xml;

pub use djvused::DjvusedFormat;
pub use json::JsonFormat;
pub use pdfmark::PdfmarkFormat;
pub use text::TextFormat;
pub use treeviz::TreevizFormat;
pub use xml::{XmlFormat, XmlOptions};
