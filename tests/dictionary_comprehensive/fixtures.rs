//! Shared fixtures: the five sample sayings, inserted and indexed

use std::sync::Arc;

use olelo::{AvlTree, Saying, WordIndex};

pub const AOHE: &str = "ʻAʻohe hana nui ke alu ʻia";
pub const AIA: &str = "Aia i ka ʻōpua ke ola";
pub const E_ULU: &str = "E ulu nō ka lālā i ke kumu";
pub const HE_ALII: &str = "He aliʻi ka ʻāina, he kauwā ke kanaka";
pub const IKE: &str = "ʻIke aku, ʻike mai, kōkua aku, kōkua mai; pela ihola ka nohona ʻohana";

pub fn sample_sayings() -> Vec<Saying> {
    vec![
        Saying::new(
            AOHE,
            "No task is too big when done together by all",
            "ʻAʻohe hana nui ke alu ʻia means if everyone contributes to the task, it lightens the load.",
            "This Hawaiian proverb emphasizes teamwork.",
        ),
        Saying::new(
            AIA,
            "Life is in the clouds",
            "Aia i ka ʻōpua ke ola means hope or life lies ahead.",
            "It suggests looking forward with optimism.",
        ),
        Saying::new(
            E_ULU,
            "The branches grow because of the trunk",
            "E ulu nō ka lālā i ke kumu means success comes from strong foundations.",
            "This reflects the importance of ancestry and guidance.",
        ),
        Saying::new(
            HE_ALII,
            "The land is chief; the people are its servants",
            "He aliʻi ka ʻāina, he kauwā ke kanaka means the land is of utmost importance.",
            "It teaches respect for nature.",
        ),
        Saying::new(
            IKE,
            "Recognize others, be recognized, help others, be helped – the family way",
            "This saying outlines the values of Hawaiian family life.",
            "It promotes empathy and support.",
        ),
    ]
}

/// Build the dictionary the way the driver does: insert + index per record
pub fn loaded_dictionary() -> (AvlTree<Arc<Saying>>, WordIndex) {
    let mut tree = AvlTree::new();
    let index = WordIndex::new();
    for saying in sample_sayings() {
        let saying = Arc::new(saying);
        tree.insert(saying.key().to_string(), Arc::clone(&saying));
        index.index_saying(&saying);
    }
    (tree, index)
}
