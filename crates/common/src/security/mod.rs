//! Security primitives and memory safety utilities
//!
//! Sensitive material is owned by types that wipe it on every exit path,
//! including early returns through `?`.

pub mod secret;

pub use secret::{ct_eq, SecretVec};
