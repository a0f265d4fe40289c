//! Tree order: collated iteration, extremes, neighbors, replacement

use std::sync::Arc;

use olelo::{Error, Saying};

use crate::fixtures::{loaded_dictionary, AIA, AOHE, E_ULU, HE_ALII, IKE};

#[test]
fn iteration_follows_hawaiian_collation() {
    let (tree, _) = loaded_dictionary();
    let keys: Vec<&str> = tree.iter().map(|(key, _)| key).collect();
    // ʻokina-prefixed phrases first, then a < e < h
    assert_eq!(keys, vec![AOHE, IKE, AIA, E_ULU, HE_ALII]);
    assert_eq!(tree.len(), 5);
}

#[test]
fn extremes_are_okina_first_and_consonant_last() {
    let (tree, _) = loaded_dictionary();
    assert_eq!(tree.first().map(|s| s.key()), Some(AOHE));
    assert_eq!(tree.last().map(|s| s.key()), Some(HE_ALII));
}

#[test]
fn neighbors_of_the_middle_key() {
    let (tree, _) = loaded_dictionary();
    assert_eq!(tree.predecessor(E_ULU).map(|s| s.key()), Some(AIA));
    assert_eq!(tree.successor(E_ULU).map(|s| s.key()), Some(HE_ALII));
    assert_eq!(tree.predecessor(AOHE), None);
    assert_eq!(tree.successor(HE_ALII), None);
}

#[test]
fn membership_probes() {
    let (tree, _) = loaded_dictionary();
    assert!(tree.contains(AIA));
    assert!(!tree.contains("Kākou kākaʻikahi"));
}

#[test]
fn replacement_insert_is_visible_through_get_required() {
    let (mut tree, _) = loaded_dictionary();
    let updated = Arc::new(Saying::new(
        AIA,
        "UPDATED – Life abides in the clouds",
        "",
        "",
    ));
    tree.insert(updated.key().to_string(), Arc::clone(&updated));

    assert_eq!(tree.len(), 5, "replacement must not grow the dictionary");
    let stored = tree.get_required(AIA).expect("key must be present");
    assert_eq!(stored.english, "UPDATED – Life abides in the clouds");
}

#[test]
fn get_required_miss_is_a_hard_error() {
    let (tree, _) = loaded_dictionary();
    let err = tree.get_required("Kākou kākaʻikahi").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound(_)));
}
