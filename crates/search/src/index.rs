//! Inverted word indices over sayings
//!
//! Two mappings from normalized token to the sayings containing it: one
//! over the Hawaiian phrases, one over the English renderings. A
//! `WordIndex` is an ordinary caller-owned value, so tests and embedders
//! can run any number of independent indices side by side.
//!
//! The index stores `Arc<Saying>` handles only; it never copies or
//! mutates record content.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use olelo_core::Saying;

use crate::normalize::normalize;
use crate::tokenizer::tokenize;

// ============================================================================
// PostingList
// ============================================================================

/// Insertion-ordered list of sayings containing a term
///
/// Duplicates are permitted: a term contributed by several inserted
/// records appears once per record, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    entries: Vec<Arc<Saying>>,
}

impl PostingList {
    fn add(&mut self, saying: Arc<Saying>) {
        self.entries.push(saying);
    }

    /// Number of postings for this term
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no postings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The postings in insertion order
    pub fn entries(&self) -> &[Arc<Saying>] {
        &self.entries
    }
}

// ============================================================================
// WordIndex
// ============================================================================

/// Two-sided inverted word index over sayings
///
/// Lookup misses are empty results, never errors. Bucket storage is
/// internally synchronized (`DashMap`), so indexing takes `&self`; bucket
/// contents keep insertion order.
#[derive(Debug, Default)]
pub struct WordIndex {
    hawaiian: DashMap<String, PostingList>,
    english: DashMap<String, PostingList>,
}

impl WordIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one inserted record
    ///
    /// Tokenizes the Hawaiian phrase into the Hawaiian side and the
    /// English rendering into the English side. The owner calls this once
    /// per record inserted into the dictionary. Re-indexing a replacement
    /// record appends new postings; postings of the superseded record are
    /// kept.
    pub fn index_saying(&self, saying: &Arc<Saying>) {
        let hawaiian_tokens = tokenize(&saying.hawaiian);
        let english_tokens = tokenize(&saying.english);
        debug!(
            key = %saying.key(),
            hawaiian = hawaiian_tokens.len(),
            english = english_tokens.len(),
            "indexing saying"
        );
        for token in hawaiian_tokens {
            self.hawaiian.entry(token).or_default().add(Arc::clone(saying));
        }
        for token in english_tokens {
            self.english.entry(token).or_default().add(Arc::clone(saying));
        }
    }

    /// All sayings whose Hawaiian phrase contains `word`
    ///
    /// The query token is normalized exactly like index tokens. Empty when
    /// the term is unknown.
    pub fn lookup_hawaiian(&self, word: &str) -> Vec<Arc<Saying>> {
        Self::lookup(&self.hawaiian, word)
    }

    /// All sayings whose English rendering contains `word`
    pub fn lookup_english(&self, word: &str) -> Vec<Arc<Saying>> {
        Self::lookup(&self.english, word)
    }

    /// Distinct indexed Hawaiian terms
    pub fn hawaiian_term_count(&self) -> usize {
        self.hawaiian.len()
    }

    /// Distinct indexed English terms
    pub fn english_term_count(&self) -> usize {
        self.english.len()
    }

    fn lookup(side: &DashMap<String, PostingList>, word: &str) -> Vec<Arc<Saying>> {
        side.get(&normalize(word))
            .map(|postings| postings.entries.to_vec())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saying(hawaiian: &str, english: &str) -> Arc<Saying> {
        Arc::new(Saying::new(hawaiian, english, "", ""))
    }

    #[test]
    fn test_lookup_by_hawaiian_word() {
        let index = WordIndex::new();
        let s = saying("ʻAʻohe hana nui ke alu ʻia", "No task is too big");
        index.index_saying(&s);
        let results = index.lookup_hawaiian("hana");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key(), s.key());
    }

    #[test]
    fn test_lookup_by_english_word() {
        let index = WordIndex::new();
        let s = saying("Aia i ka ʻōpua ke ola", "Life is in the clouds");
        index.index_saying(&s);
        assert_eq!(index.lookup_english("clouds").len(), 1);
        // sides are separate mappings
        assert!(index.lookup_hawaiian("clouds").is_empty());
        assert!(index.lookup_english("ʻōpua").is_empty());
    }

    #[test]
    fn test_miss_is_empty_never_error() {
        let index = WordIndex::new();
        assert!(index.lookup_hawaiian("hana").is_empty());
        assert!(index.lookup_english("work").is_empty());
    }

    #[test]
    fn test_bucket_keeps_insertion_order() {
        let index = WordIndex::new();
        let first = saying("He hana maikaʻi", "Good work indeed");
        let second = saying("Ka hana a ka makua", "The work of the parent");
        index.index_saying(&first);
        index.index_saying(&second);
        let results = index.lookup_hawaiian("hana");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].key(), first.key());
        assert_eq!(results[1].key(), second.key());
    }

    #[test]
    fn test_duplicate_token_in_one_record_appears_per_occurrence() {
        let index = WordIndex::new();
        let s = saying("ʻIke aku, ʻike mai", "Recognize others, be recognized");
        index.index_saying(&s);
        assert_eq!(index.lookup_hawaiian("ʻike").len(), 2);
    }

    #[test]
    fn test_lookup_normalizes_query() {
        let index = WordIndex::new();
        let s = saying("E kōkua aku", "Help others");
        index.index_saying(&s);
        assert_eq!(index.lookup_hawaiian("KŌKUA").len(), 1);
        assert_eq!(index.lookup_hawaiian("ko\u{0304}kua").len(), 1);
        // the kahakō is a different letter, not a spelling variant
        assert!(index.lookup_hawaiian("kokua").is_empty());
    }

    #[test]
    fn test_term_counts() {
        let index = WordIndex::new();
        index.index_saying(&saying("He aliʻi ka ʻāina", "The land is chief"));
        assert_eq!(index.hawaiian_term_count(), 4);
        assert_eq!(index.english_term_count(), 4);
    }

    #[test]
    fn test_indices_are_independent() {
        let left = WordIndex::new();
        let right = WordIndex::new();
        left.index_saying(&saying("He hana", "Some work"));
        assert_eq!(left.lookup_hawaiian("hana").len(), 1);
        assert!(right.lookup_hawaiian("hana").is_empty());
    }
}
