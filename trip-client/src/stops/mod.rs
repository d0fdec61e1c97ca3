//! Stop catalogue and informal name lookup.
//!
//! Loads the fixed catalogue of named stops once at startup and resolves
//! user-typed names such as "oslo s" to canonical stop place identifiers.

mod directory;
mod error;

pub use directory::{Stop, StopDirectory, stop_key};
pub use error::StopError;
