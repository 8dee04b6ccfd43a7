//! Constants for the hash and symmetric primitives

pub mod hash;
pub mod symmetric;
