//! Common implementations and shared functionality for the xecies library
//!
//! This crate provides the secret containers used for every sensitive
//! intermediate of an ECIES call (shared secrets, derived key material).

pub mod security;

// Re-export core security types
pub use security::{ct_eq, SecretVec};
