//! ʻŌlelo — embedded collation-aware dictionary engine
//!
//! An AVL-balanced ordered dictionary from string keys to bilingual
//! sayings, ordered by a pluggable collation policy (Hawaiian alphabet by
//! default), plus two inverted word indices for exact-word lookup.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use olelo::{AvlTree, Saying, WordIndex};
//!
//! let mut tree = AvlTree::new();
//! let index = WordIndex::new();
//!
//! let saying = Arc::new(Saying::new("Aia i ka ʻōpua ke ola", "Life is in the clouds", "", ""));
//! tree.insert(saying.key().to_string(), Arc::clone(&saying));
//! index.index_saying(&saying);
//!
//! assert_eq!(tree.first().map(|s| s.key()), Some("Aia i ka ʻōpua ke ola"));
//! assert_eq!(index.lookup_english("clouds").len(), 1);
//! ```
//!
//! # Architecture
//!
//! The tree and the index are independent collaborators: the caller owns
//! both and indexes each record once as it inserts it. The tree never
//! mutates records; it stores shared handles and replaces a handle on
//! duplicate-key insert.

pub use olelo_core::{Error, Result, Saying};
pub use olelo_search::{normalize, tokenize, PostingList, WordIndex};
pub use olelo_tree::{AvlTree, Collation, HawaiianCollation, Iter, Lexicographic};
