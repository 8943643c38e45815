//! Text normalization and tokenization.
//!
//! Both matching strategies funnel every piece of text through these two
//! functions - at index build time and again at query time. That symmetry is
//! load-bearing: a query can only equal a title, and a query token can only
//! hit a posting, if both sides were normalized by the same code path.
//!
//! Deliberately no stop-word filtering and no stemming. Dropping "the" from
//! queries but not titles (or vice versa) breaks the exact-title ranking rule,
//! and stemming makes the inverted index disagree with the fuzzy scan.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a string for search: lowercase, strip diacritics, collapse whitespace.
///
/// This enables matching between ASCII and accented spellings:
/// - "café" → "cafe"
/// - "naïve" → "naive"
/// - "Instàllation  Guide" → "installation guide"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (general category M)
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split normalized text into tokens: maximal runs of alphanumeric characters.
///
/// Everything else (whitespace, punctuation, symbols) is a separator and is
/// discarded. Call this on `normalize`d text so case and diacritics are
/// already folded.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_alphanumeric() {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
