//! Elliptic Curve Integrated Encryption Scheme (ECIES).
//!
//! Components, leaf first:
//!
//! - [`codec`]: X9.63 uncompressed point encoding
//! - [`kdf`]: ANSI X9.63 key derivation
//! - [`agreement`]: (cofactor) ECDH and ephemeral key generation
//! - [`aead`]: AES-GCM framing
//! - [`cipher`]: `encrypt` / `decrypt` orchestration and the [`Ecies`] type
//!
//! # Example
//!
//! ```
//! use rand::rngs::OsRng;
//! use xecies_api::Pke;
//! use xecies_pke::{EciesConfig, EciesP256, KdfHash};
//!
//! let ecies = EciesP256::new(EciesConfig::default().with_hash(KdfHash::Sha384));
//! let (pk, sk) = ecies.keypair(&mut OsRng).unwrap();
//!
//! let envelope = ecies.encrypt(&pk, b"Hello!", None, &mut OsRng).unwrap();
//! assert_eq!(envelope.len(), 65 + 6 + 16);
//! assert_eq!(ecies.decrypt(&sk, &envelope, None).unwrap(), b"Hello!");
//! ```

pub mod aead;
pub mod agreement;
pub mod apple;
pub mod cipher;
pub mod codec;
pub mod config;
pub mod curve;
pub mod kdf;

pub mod p256;
pub mod p384;
pub mod p521;

pub use apple::AppleAlgorithm;
pub use cipher::{decrypt, encrypt, Ecies, Stage};
pub use codec::{decode_point, encode_point};
pub use config::{AeadAlgorithm, EciesConfig, KdfHash};
pub use curve::EciesCurve;

pub use self::p256::{EciesP256, NistP256};
pub use self::p384::{EciesP384, NistP384};
pub use self::p521::{EciesP521, NistP521};
