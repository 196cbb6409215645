//! Lenient parsing of user-supplied image counts.

use super::words::is_word_separator;

/// Coerce free-form text into a non-negative image count.
///
/// Parsing never fails. Leading whitespace is skipped and the leading run of
/// decimal digits (after an optional sign) is used, so `"3 images"` is 3.
/// Text without leading digits is 0, negative numbers clamp to 0 and values
/// too large for `u32` saturate.
///
/// Only base 10 is read: a hex prefix is not recognized, so `"0x10"` is 0
/// rather than 16.
pub fn parse_image_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start_matches(is_word_separator);
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let digits = &unsigned[..digits_len];

    if digits.is_empty() || negative {
        return 0;
    }

    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Coerce an optional image count; absent input is 0.
pub fn parse_image_count_opt(raw: Option<&str>) -> u32 {
    raw.map_or(0, parse_image_count)
}
