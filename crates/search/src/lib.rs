//! Word-level search infrastructure for the olelo dictionary
//!
//! This crate provides:
//! - Token normalization (canonical decomposition + case-fold)
//! - A UAX#29 word tokenizer tuned for bilingual Hawaiian/English text
//! - WordIndex: two inverted indices (Hawaiian side, English side) mapping
//!   a normalized token to the ordered list of sayings containing it
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use olelo_core::Saying;
//! use olelo_search::WordIndex;
//!
//! let index = WordIndex::new();
//! let saying = Arc::new(Saying::new("Aia i ka ʻōpua ke ola", "Life is in the clouds", "", ""));
//! index.index_saying(&saying);
//! assert_eq!(index.lookup_hawaiian("ʻōpua").len(), 1);
//! assert_eq!(index.lookup_english("clouds").len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod normalize;
pub mod tokenizer;

pub use index::{PostingList, WordIndex};
pub use normalize::normalize;
pub use tokenizer::tokenize;
