//! Built-in sample sayings and dataset file loading

use std::fs;
use std::path::Path;

use tracing::debug;

use olelo_core::{Error, Result, Saying};

/// The built-in demonstration sayings
pub fn builtin() -> Vec<Saying> {
    vec![
        Saying::new(
            "ʻAʻohe hana nui ke alu ʻia",
            "No task is too big when done together by all",
            "ʻAʻohe hana nui ke alu ʻia means if everyone contributes to the task, it lightens the load.",
            "This Hawaiian proverb emphasizes teamwork.",
        ),
        Saying::new(
            "Aia i ka ʻōpua ke ola",
            "Life is in the clouds",
            "Aia i ka ʻōpua ke ola means hope or life lies ahead.",
            "It suggests looking forward with optimism.",
        ),
        Saying::new(
            "E ulu nō ka lālā i ke kumu",
            "The branches grow because of the trunk",
            "E ulu nō ka lālā i ke kumu means success comes from strong foundations.",
            "This reflects the importance of ancestry and guidance.",
        ),
        Saying::new(
            "He aliʻi ka ʻāina, he kauwā ke kanaka",
            "The land is chief; the people are its servants",
            "He aliʻi ka ʻāina, he kauwā ke kanaka means the land is of utmost importance.",
            "It teaches respect for nature.",
        ),
        Saying::new(
            "ʻIke aku, ʻike mai, kōkua aku, kōkua mai; pela ihola ka nohona ʻohana",
            "Recognize others, be recognized, help others, be helped – the family way",
            "This saying outlines the values of Hawaiian family life.",
            "It promotes empathy and support.",
        ),
    ]
}

/// Load sayings from a JSON array file
pub fn load(path: &Path) -> Result<Vec<Saying>> {
    let raw = fs::read_to_string(path)?;
    let sayings: Vec<Saying> =
        serde_json::from_str(&raw).map_err(|e| Error::Dataset(e.to_string()))?;
    debug!(count = sayings.len(), path = %path.display(), "loaded dataset");
    Ok(sayings)
}
