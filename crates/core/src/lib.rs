//! Core types for the olelo dictionary
//!
//! This crate defines the types shared by every other crate in the
//! workspace:
//! - Saying: the bilingual record stored in the dictionary
//! - Error / Result: the workspace error hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod saying;

pub use error::{Error, Result};
pub use saying::Saying;
