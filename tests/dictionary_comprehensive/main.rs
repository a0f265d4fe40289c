//! Dictionary comprehensive test suite
//!
//! End-to-end coverage of the public API against the five sample sayings:
//!
//! - **Tree order**: Hawaiian-collated iteration, extremes, neighbors,
//!   replacement inserts
//! - **Word search**: both index sides, normalization, miss behavior
//!
//! ```bash
//! cargo test --test dictionary_comprehensive
//! ```

mod fixtures;
mod tree_order;
mod word_search;
