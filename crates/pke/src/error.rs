//! Error handling for PKE operations.
//!
//! All PKE operations report the shared [`xecies_api::Error`] type.

pub use xecies_api::error::{Error, Result};
