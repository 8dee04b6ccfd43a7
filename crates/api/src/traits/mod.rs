//! Trait definitions for the xecies API

pub mod pke;

pub use pke::Pke;
