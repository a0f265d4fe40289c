//! The bilingual saying record
//!
//! A `Saying` is the value stored by the dictionary: a Hawaiian phrase, its
//! English rendering, and one explanatory note per language. Records are
//! immutable once built; the dictionary shares them through `Arc` handles
//! and only ever replaces a stored handle, never mutates the record behind
//! it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bilingual saying (ʻōlelo noʻeau)
///
/// The Hawaiian phrase doubles as the dictionary key; the remaining fields
/// are payload. Notes are optional in dataset files and default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saying {
    /// The Hawaiian phrase (dictionary key)
    pub hawaiian: String,
    /// English rendering of the phrase
    pub english: String,
    /// Explanation in Hawaiian
    #[serde(default)]
    pub hawaiian_note: String,
    /// Explanation in English
    #[serde(default)]
    pub english_note: String,
}

impl Saying {
    /// Create a new saying
    pub fn new(
        hawaiian: impl Into<String>,
        english: impl Into<String>,
        hawaiian_note: impl Into<String>,
        english_note: impl Into<String>,
    ) -> Self {
        Saying {
            hawaiian: hawaiian.into(),
            english: english.into(),
            hawaiian_note: hawaiian_note.into(),
            english_note: english_note.into(),
        }
    }

    /// The field the dictionary orders by
    pub fn key(&self) -> &str {
        &self.hawaiian
    }
}

impl fmt::Display for Saying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ʻŌlelo: {}\nEnglish: {}", self.hawaiian, self.english)
    }
}
