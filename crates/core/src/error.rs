//! Error types for the olelo dictionary
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Lookup misses are not errors: the tree reports them as `Option` and the
//! word index as an empty list. The only hard lookup failure is
//! `KeyNotFound`, raised by accessors that express an unconditional
//! expectation that the key exists.

use std::io;
use thiserror::Error;

/// Result type alias for olelo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the olelo dictionary
#[derive(Debug, Error)]
pub enum Error {
    /// Required key missing from the dictionary
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// I/O error (dataset file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dataset file present but not parseable as a list of sayings
    #[error("malformed dataset: {0}")]
    Dataset(String),
}
