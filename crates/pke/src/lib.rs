//! Public Key Encryption (PKE) schemes for the xecies library.
//!
//! The only scheme is ECIES in the X9.63/AES-GCM flavour used by Apple's
//! SecKey API: (cofactor) ECDH with a fresh ephemeral key, the ANSI X9.63
//! KDF over the shared secret with the ephemeral point as shared info, and
//! AES-GCM over the payload.

pub mod ecies;
pub mod error;

// Re-export key items
pub use ecies::{
    decrypt, encrypt, AeadAlgorithm, AppleAlgorithm, Ecies, EciesConfig, EciesCurve, EciesP256,
    EciesP384, EciesP521, KdfHash, NistP256, NistP384, NistP521,
};
pub use error::{Error, Result};
