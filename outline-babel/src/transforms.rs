//! Text-level transforms over outline sources
//!
//! These work on outline text directly, without building a tree, so lines the tree builder would
//! reshape survive untouched.

use crate::outline::patterns::SHIFTABLE_PAGE;
use crate::outline::{beautify_with_rules, OutlineRules};
use tracing::debug;

/// Result of [`shift_pages`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftResult {
    pub text: String,
    /// Number of lines whose page number changed.
    pub adjusted: usize,
}

/// Adds `delta` to `page`, never going below `min_page`.
pub fn shifted_page(page: u32, delta: i64, min_page: u32) -> u32 {
    let shifted = (i64::from(page) + delta).max(i64::from(min_page));
    u32::try_from(shifted).unwrap_or(u32::MAX)
}

/// Shifts the trailing Arabic page number of every line by `delta`.
///
/// # Example
///
/// ```
/// use outline_babel::transforms::shift_pages;
///
/// let shifted = shift_pages("Intro 3\n    Part 10", -2, 1);
/// assert_eq!(shifted.text, "Intro 1\n    Part 8");
/// assert_eq!(shifted.adjusted, 2);
/// ```
pub fn shift_pages(text: &str, delta: i64, min_page: u32) -> ShiftResult {
    shift_pages_with_rules(text, delta, min_page, &OutlineRules::default())
}

/// Like [`shift_pages`], beautifying the result with `rules` when anything changed.
pub fn shift_pages_with_rules(
    text: &str,
    delta: i64,
    min_page: u32,
    rules: &OutlineRules,
) -> ShiftResult {
    let mut adjusted = 0;
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            let Some(captures) = SHIFTABLE_PAGE.captures(line) else {
                return line.to_string();
            };
            let (Some(whole), Some(before), Some(digits), Some(after)) = (
                captures.get(0),
                captures.get(1),
                captures.get(2),
                captures.get(3),
            ) else {
                return line.to_string();
            };
            let page = digits.as_str().parse::<u32>().unwrap_or(u32::MAX);
            let new_page = shifted_page(page, delta, min_page);
            let rewritten = format!(
                "{}{}{}{}",
                &line[..whole.start()],
                before.as_str(),
                new_page,
                after.as_str()
            );
            if rewritten != line {
                adjusted += 1;
            }
            rewritten
        })
        .collect();

    if adjusted == 0 {
        debug!("no page numbers to shift");
        return ShiftResult {
            text: text.to_string(),
            adjusted,
        };
    }

    debug!(adjusted, delta, "shifted page numbers");
    ShiftResult {
        text: beautify_with_rules(&lines.join("\n"), rules),
        adjusted,
    }
}
