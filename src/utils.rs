//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Rendering limit for result previews, in characters.
pub const PREVIEW_MAX_CHARS: usize = 100;

/// Character offset of the first occurrence of `needle` in `haystack`.
///
/// `str::find` returns a byte offset, but the positional bonus counts
/// characters - the page's original scoring used UTF-16 code-unit offsets,
/// and character offsets are the equivalent for BMP text. Without the
/// conversion, Arabic text (2 bytes per letter in UTF-8) would decay twice
/// as fast as ASCII.
///
/// Returns `None` when `needle` does not occur or is empty.
pub(crate) fn char_index_of(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .find(needle)
        .map(|byte_index| haystack[..byte_index].chars().count())
}

/// Truncate preview text to [`PREVIEW_MAX_CHARS`] characters.
///
/// Text within the limit is returned unchanged; longer text is cut at the
/// limit with a `...` marker appended. Counts characters, not bytes, so the
/// cut never lands inside a multi-byte sequence.
pub fn preview_text(text: &str) -> String {
    preview_text_with_limit(text, PREVIEW_MAX_CHARS)
}

/// [`preview_text`] with an explicit character limit.
pub fn preview_text_with_limit(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

/// Strip combining marks from text: Arabic harakat, Latin diacritics.
///
/// Vocalized page text ("مِنْحَة") otherwise fails verbatim matching against the
/// unvocalized queries people actually type ("منحة"). Applied corpus-side,
/// before a snapshot reaches the engine - never inside scoring itself.
///
/// # Algorithm
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
#[cfg(feature = "unicode-normalization")]
pub fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Check if a character is a combining mark.
///
/// Covers the general combining blocks plus the Arabic harakat and Quranic
/// annotation ranges, since the content this serves is Arabic.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{0610}'..='\u{061A}' |  // Arabic signs (honorifics, small marks)
        '\u{064B}'..='\u{065F}' |  // Arabic harakat (fatha, damma, kasra, sukun, ...)
        '\u{0670}'           |     // Arabic letter superscript alef
        '\u{06D6}'..='\u{06ED}' |  // Arabic Quranic annotation marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
