//! Error handling for ECIES operations

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Specialized result types for different operations
pub type KeyResult<T> = Result<T>;
pub type CipherResult<T> = Result<T>;
