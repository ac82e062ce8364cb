//! Phrase normalization
//!
//! Applied to every lexicon spelling at load time and to every input phrase
//! before matching, so both sides agree on whitespace and joiners.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Zero-width non-joiner and joiner. ASR output is inconsistent about them.
const ZERO_WIDTH: [char; 2] = ['\u{200C}', '\u{200D}'];

/// Trim, drop zero-width joiners, collapse whitespace runs and lowercase
///
/// # Examples
/// ```
/// use indic_itn_core::normalize_phrase;
/// assert_eq!(normalize_phrase("  Minus   दोन\tहजार "), "minus दोन हजार");
/// ```
pub fn normalize_phrase(phrase: &str) -> String {
    let stripped: String = phrase.chars().filter(|c| !ZERO_WIDTH.contains(c)).collect();
    WHITESPACE
        .replace_all(stripped.trim(), " ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_phrase("दोन \t  शे\n"), "दोन शे");
    }

    #[test]
    fn test_strips_zero_width_joiners() {
        assert_eq!(normalize_phrase("ஹண்ட்ரட்\u{200C}"), "ஹண்ட்ரட்");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_phrase("   "), "");
    }
}
