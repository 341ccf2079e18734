//! Regular expressions shared by the outline components.
//!
//! A page token is either an Arabic digit run or a single-case run of Roman numeral letters.
//! Mixed-case runs such as `Mild` or `Civil` are left in the title.

use once_cell::sync::Lazy;
use regex::Regex;

/// Page token as seen in raw text: a dotted/dashed leader, an opening parenthesis or plain
/// whitespace, then the numeral at the end of the line.
///
/// Roman numerals must be single-case. A mixed-case class such as `[IVXLCDMivxlcdm]+` would
/// read the last word of `A Walk in the Mild` as a page.
pub(crate) static RAW_PAGE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.\- ]{3,}|\(|\s)([0-9]+|[IVXLCDM]+|[ivxlcdm]+)\s*$")
        .expect("raw page token pattern")
});

/// Whitespace-separated numeral at the end of a line.
pub(crate) static TRAILING_NUMERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+([0-9]+|[IVXLCDM]+|[ivxlcdm]+)\s*$").expect("trailing numeral pattern")
});

/// Enumeration or bullet at the start of a line (`12.`, `B.`, `-`, `*`).
pub(crate) static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+\.|[A-Z]\.|-|\*)\s").expect("list marker pattern"));

pub(crate) static TRAILING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+$").expect("trailing digits pattern"));

/// Exactly one space between the title and the page number.
pub(crate) static SINGLE_SPACED_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*\S\s[0-9]+$").expect("single spaced digits pattern"));

pub(crate) static WIDE_SPACED_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}[0-9]+$").expect("wide spaced digits pattern"));

/// Whitespace-separated Arabic page number, captured for the beautifier's re-split.
pub(crate) static SPACED_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([0-9]+)$").expect("spaced digits pattern"));

/// Page number with the whitespace around it, as rewritten by the page shifter.
pub(crate) static SHIFTABLE_PAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\s+)([0-9]+)(\s*)$").expect("shiftable page pattern"));
