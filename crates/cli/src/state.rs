//! Session state: the dictionary and its word index
//!
//! The tree and the index are separate collaborators; the session is the
//! caller that keeps them in step, indexing each record once as it is
//! inserted.

use std::sync::Arc;

use olelo_core::Saying;
use olelo_search::WordIndex;
use olelo_tree::AvlTree;

/// One loaded dictionary: collated tree plus word index
pub struct Session {
    /// Sayings keyed by Hawaiian phrase, in Hawaiian collation order
    pub sayings: AvlTree<Arc<Saying>>,
    /// Word-level lookup over both languages
    pub index: WordIndex,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Session {
            sayings: AvlTree::new(),
            index: WordIndex::new(),
        }
    }

    /// Insert a saying and index it
    pub fn insert(&mut self, saying: Saying) {
        let saying = Arc::new(saying);
        self.sayings
            .insert(saying.key().to_string(), Arc::clone(&saying));
        self.index.index_saying(&saying);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
