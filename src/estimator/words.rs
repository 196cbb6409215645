//! Whitespace-delimited word counting.

/// Byte order mark. Editors prepend it to files, so it separates words.
const BYTE_ORDER_MARK: char = '\u{FEFF}';
/// NEXT LINE (NEL). Not a separator, it counts as part of a word.
const NEXT_LINE: char = '\u{0085}';

/// Whether `c` separates words.
///
/// This is Unicode `White_Space` plus the byte order mark and minus NEL. It
/// is used for both trimming and splitting, so a text that trims to nothing
/// always has zero words.
pub fn is_word_separator(c: char) -> bool {
    c == BYTE_ORDER_MARK || (c.is_whitespace() && c != NEXT_LINE)
}

/// `text` with leading and trailing separators removed.
pub fn trim_separators(text: &str) -> &str {
    text.trim_matches(is_word_separator)
}

/// Count whitespace-separated words in `text`.
///
/// Any run of separators (see [`is_word_separator`]) is a single delimiter,
/// so consecutive whitespace never produces empty words. Empty or
/// all-whitespace text counts as zero.
pub fn count_words(text: &str) -> usize {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count()
}

/// Count words in optional text, treating `None` like empty text.
pub fn count_words_opt(text: Option<&str>) -> usize {
    text.map_or(0, count_words)
}
