//! # xecies
//!
//! ECIES (cofactor ECDH, ANSI X9.63 KDF, AES-GCM) over the NIST prime
//! curves, producing envelopes that Apple's SecKey ECIES algorithms accept.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xecies = "0.3"
//! ```
//!
//! ```
//! use xecies::prelude::*;
//!
//! let alg: AppleAlgorithm = "eciesEncryptionCofactorVariableIVX963SHA256AESGCM".parse()?;
//! let ecies = EciesP256::new(alg.config_for::<NistP256>());
//! let (pk, sk) = ecies.keypair(&mut OsRng)?;
//!
//! let envelope = ecies.encrypt(&pk, b"Hello!", None, &mut OsRng)?;
//! assert_eq!(ecies.decrypt(&sk, &envelope, None)?, b"Hello!");
//! # Ok::<(), xecies::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for the configuration types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`xecies-api`]: error type and the `Pke` trait
//! - [`xecies-common`]: zeroizing buffers and constant-time comparison
//! - [`xecies-params`]: curve, hash and AEAD size constants
//! - [`xecies-pke`]: the ECIES engine and per-curve bindings

pub use xecies_api as api;
pub use xecies_common as common;
pub use xecies_params as params;
pub use xecies_pke as pke;

/// Common imports for xecies users
pub mod prelude {
    pub use crate::api::{Error, Pke, Result};

    pub use crate::pke::{
        decrypt, encrypt, AeadAlgorithm, AppleAlgorithm, Ecies, EciesConfig, EciesCurve,
        EciesP256, EciesP384, EciesP521, KdfHash, NistP256, NistP384, NistP521,
    };

    pub use crate::common::{ct_eq, SecretVec};

    #[cfg(feature = "std")]
    pub use rand::rngs::OsRng;
}
