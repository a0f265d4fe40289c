//! Token normalization
//!
//! Indexing and lookup must agree on one canonical spelling per token, or
//! composed/decomposed kahakō and letter case would silently split
//! buckets. Canonical decomposition (NFD) then case-fold, applied
//! identically on both paths.

use unicode_normalization::UnicodeNormalization;

/// Normalize a token for index storage and lookup
///
/// Canonical decomposition followed by case-folding. `Kōkua`, `kōkua`, and
/// `ko` + combining-macron + `kua` all normalize to the same string. The
/// kahakō itself is preserved: a long vowel is a different letter, not a
/// spelling variant of the short one.
pub fn normalize(token: &str) -> String {
    token.nfd().collect::<String>().to_lowercase()
}
