//! Public API traits and types for the xecies library
//!
//! This crate provides the public API surface shared by the xecies crates:
//! the error type returned by every operation and the [`Pke`] trait that the
//! concrete ECIES bindings implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::Pke;
