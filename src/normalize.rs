//! Text normalization for bilingual (Albanian/English) matching.
//!
//! Everything that gets compared — queries, catalog fields, dictionary
//! aliases — passes through [`normalize`] first, so "Këpucë", "Kepuce" and
//! "këpucë " all land on the same string.
//!
//! # Algorithm
//!
//! 1. Fold `ë`/`ç` to `e`/`c` (these are standalone letters in Albanian, so
//!    their NFD decomposition differs between platforms; fold them up front)
//! 2. NFD normalize (decompose characters into base + combining marks)
//! 3. Filter out combining marks (category Mn = Mark, Nonspacing)
//! 4. Lowercase
//! 5. Collapse whitespace

use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: fold Albanian letters, strip diacritics,
/// lowercase, and collapse whitespace.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
///
/// - "Këpucë"  → "kepuce"
/// - "çantë"   → "cante"
/// - "café"    → "cafe"
/// - "  Blu  " → "blu"
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .map(fold_albanian)
        .collect::<String>()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fold the two Albanian letters whose decomposition is ambiguous across
/// locales. NFD would handle both, but some upstream sources ship them
/// pre-composed and some don't, so the fold is explicit.
fn fold_albanian(c: char) -> char {
    match c {
        'ë' => 'e',
        'Ë' => 'E',
        'ç' => 'c',
        'Ç' => 'C',
        _ => c,
    }
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̈ (diaeresis), ̧ (cedilla)
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split text into tokens on any run of non-alphanumeric characters.
///
/// Empty tokens are discarded. Input is not normalized here — callers
/// normalize first so tokens stay in the folded token space.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Words with no search value in either supported language.
///
/// Defined literally (with diacritics) and normalized at build so the set
/// lives in the same token space as everything else.
static STOP_WORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    const ENGLISH: &[&str] = &[
        "the", "a", "an", "and", "or", "of", "for", "in", "on", "at", "with", "to", "is", "are",
        "this", "that",
    ];
    const ALBANIAN: &[&str] = &[
        "dhe", "e", "i", "të", "me", "për", "një", "nga", "në", "që", "ose", "po", "si", "kjo",
        "ky", "janë", "është",
    ];
    ENGLISH
        .iter()
        .chain(ALBANIAN.iter())
        .map(|w| normalize(w))
        .collect()
});

/// Drop stop words from a token list, preserving the order of what remains.
///
/// Unknown input degrades to an empty sequence; there is no error case.
pub fn remove_stop_words(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !STOP_WORDS.contains(t.as_str()))
        .collect()
}
