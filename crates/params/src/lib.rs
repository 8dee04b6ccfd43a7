//! Constant values for the xecies library
//!
//! Sizes of curve encodings, hash outputs and AEAD parameters used to frame
//! ECIES envelopes. Every value here is fixed by the underlying standard.

#![no_std]

pub mod traditional;
pub mod utils;
