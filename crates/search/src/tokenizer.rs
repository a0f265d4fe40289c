//! Word segmentation for the indices
//!
//! Pipeline: UAX#29 word boundaries → normalize each word. There is no
//! stopword or length filtering and no stemming. Hawaiian particles (`e`,
//! `i`, `ka`, `ke`) are real search terms, and English stemming would
//! mangle the Hawaiian side of a bilingual corpus.

use unicode_segmentation::UnicodeSegmentation;

use crate::normalize::normalize;

/// Tokenize text into normalized index tokens
///
/// # Example
///
/// ```
/// use olelo_search::tokenize;
///
/// let tokens = tokenize("Aia i ka ʻōpua ke ola");
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0], "aia");
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(normalize).collect()
}
