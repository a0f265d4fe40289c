//! Key collation policies
//!
//! The dictionary does not order keys by code point. Hawaiian sorts by its
//! own alphabet: the ʻokina (U+02BB) before every letter, each kahakō long
//! vowel immediately after its short counterpart, then the consonants. The
//! `Collation` trait makes the ordering injectable so the engine stays
//! policy-agnostic.

use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// Three-way comparator over dictionary keys
///
/// Implementations must define a total order: consistent and transitive
/// over the whole key domain. Keys comparing `Equal` are the same key as
/// far as the tree is concerned.
pub trait Collation {
    /// Compare two keys under this policy
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// The Hawaiian alphabet in collation order
///
/// ʻokina first, each kahakō vowel directly after its short vowel, then
/// the consonants in Hawaiian dictionary order.
const ALPHABET: &[char] = &[
    'ʻ', 'a', 'ā', 'e', 'ē', 'i', 'ī', 'o', 'ō', 'u', 'ū', 'h', 'k', 'l', 'm', 'n', 'p', 'w',
];

/// Rank shared by every character outside the alphabet
///
/// Strictly greater than all table entries. Unknown characters are not
/// distinguished further among themselves; ties fall through to the next
/// position in the key.
const UNKNOWN_RANK: u32 = ALPHABET.len() as u32;

static RANKS: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(rank, &c)| (c, rank as u32))
        .collect()
});

/// Hawaiian alphabet-rank collation (default policy)
///
/// Keys are canonically composed (NFC) and case-folded before ranking, so
/// `Ā`, `ā`, and `a` + combining macron all rank as the long vowel. The
/// comparison is lexicographic over the rank sequences; a shorter
/// prefix-equal key sorts first.
#[derive(Debug, Clone, Copy, Default)]
pub struct HawaiianCollation;

impl HawaiianCollation {
    fn ranks(s: &str) -> impl Iterator<Item = u32> + '_ {
        s.nfc()
            .flat_map(|c| c.to_lowercase())
            .map(|c| RANKS.get(&c).copied().unwrap_or(UNKNOWN_RANK))
    }
}

impl Collation for HawaiianCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        Self::ranks(a).cmp(Self::ranks(b))
    }
}

/// Plain code point order
///
/// The alternate policy: proves the engine works against any total order
/// and serves datasets with no Hawaiian text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexicographic;

impl Collation for Lexicographic {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}
