//! Constants for elliptic-curve key agreement

pub mod ecdh;
