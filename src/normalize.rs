//! Answer normalization for guess matching.

use alloc::borrow::ToOwned;
use alloc::string::String;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalizes an answer for comparison.
///
/// The text is lowercased, decomposed (NFD) with every combining mark
/// dropped, and trimmed. Nothing else is folded: punctuation, inner
/// whitespace, and word order still have to match.
///
/// ```
/// use topten::normalize_answer;
///
/// assert_eq!(normalize_answer("  São Paulo "), "sao paulo");
/// assert_eq!(normalize_answer("CRÈME BRÛLÉE"), "creme brulee");
/// ```
#[must_use]
pub fn normalize_answer(text: &str) -> String {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    folded.trim().to_owned()
}
