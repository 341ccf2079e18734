//! Page numeral conversion.

/// Converts a page token to a number.
///
/// An all-digit token is read as a decimal integer (saturating at `u32::MAX`). Anything else is
/// read as a Roman numeral, case-insensitively: letters are scanned right to left and a letter
/// is subtracted when it is worth less than the largest letter seen so far, added otherwise.
/// Letters that are not Roman numerals count as zero, and the result is floored at 0, so
/// malformed and empty tokens yield 0.
pub fn convert_to_number(token: &str) -> u32 {
    if token.is_empty() {
        return 0;
    }
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse().unwrap_or(u32::MAX);
    }

    let mut total: i64 = 0;
    let mut max_seen: i64 = 0;
    for ch in token.chars().rev() {
        let value = roman_value(ch);
        if value < max_seen {
            total = total.saturating_sub(value);
        } else {
            total = total.saturating_add(value);
            max_seen = value;
        }
    }
    total.clamp(0, i64::from(u32::MAX)) as u32
}

fn roman_value(ch: char) -> i64 {
    match ch.to_ascii_uppercase() {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_subtractive_notation() {
        assert_eq!(convert_to_number("IV"), 4);
        assert_eq!(convert_to_number("IX"), 9);
        assert_eq!(convert_to_number("XL"), 40);
        assert_eq!(convert_to_number("MCMXCIV"), 1994);
        assert_eq!(convert_to_number("xiv"), 14);
    }

    #[test]
    fn converts_digits() {
        assert_eq!(convert_to_number("0"), 0);
        assert_eq!(convert_to_number("007"), 7);
        assert_eq!(convert_to_number("123"), 123);
        assert_eq!(convert_to_number("99999999999"), u32::MAX);
    }

    #[test]
    fn malformed_tokens_convert_to_zero() {
        assert_eq!(convert_to_number(""), 0);
        assert_eq!(convert_to_number("zzz"), 0);
        assert_eq!(convert_to_number("IIIIIIV"), 0);
    }

    #[test]
    fn smaller_letters_after_the_maximum_are_subtracted() {
        // X, then both I are below the running maximum
        assert_eq!(convert_to_number("IIX"), 8);
    }
}
