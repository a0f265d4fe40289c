//! Word search: both index sides, normalization, miss behavior

use crate::fixtures::{loaded_dictionary, AOHE, E_ULU, IKE};

#[test]
fn hawaiian_side_lookup() {
    let (_, index) = loaded_dictionary();
    let results = index.lookup_hawaiian("hana");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].key(), AOHE);
}

#[test]
fn english_side_lookup() {
    let (_, index) = loaded_dictionary();
    let results = index.lookup_english("clouds");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].english, "Life is in the clouds");
}

#[test]
fn shared_token_returns_records_in_insertion_order() {
    let (_, index) = loaded_dictionary();
    // "ke" appears in the first, third, and fourth sample sayings
    let results = index.lookup_hawaiian("ke");
    assert!(results.len() >= 3);
    assert_eq!(results[0].key(), AOHE);
}

#[test]
fn query_is_normalized_like_the_index() {
    let (_, index) = loaded_dictionary();
    // composed kahakō, decomposed kahakō, and upper case all hit "kōkua"
    assert_eq!(index.lookup_hawaiian("kōkua")[0].key(), IKE);
    assert_eq!(index.lookup_hawaiian("ko\u{0304}kua")[0].key(), IKE);
    assert_eq!(index.lookup_hawaiian("KŌKUA")[0].key(), IKE);
}

#[test]
fn particles_are_searchable() {
    let (_, index) = loaded_dictionary();
    let results = index.lookup_hawaiian("i");
    assert!(results.iter().any(|s| s.key() == E_ULU));
}

#[test]
fn misses_are_empty_on_both_sides() {
    let (_, index) = loaded_dictionary();
    assert!(index.lookup_hawaiian("puka").is_empty());
    assert!(index.lookup_english("nonexistent").is_empty());
}
