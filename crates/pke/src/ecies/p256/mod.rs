//! ECIES binding for NIST P-256.
//!
//! Apple's `…AESGCM` algorithms on this curve frame the payload with
//! AES-128-GCM and a 16-byte nonce; see [`AppleAlgorithm`](super::AppleAlgorithm).

use ::p256::{PublicKey, SecretKey};

pub use ::p256::NistP256;

use xecies_common::SecretVec;
use xecies_params::traditional::ecdh::{NIST_PRIME_CURVE_COFACTOR, P256_FIELD_SIZE, P256_ORDER_BITS};

use super::cipher::Ecies;
use super::curve::{self, EciesCurve};

/// ECIES over P-256.
pub type EciesP256 = Ecies<NistP256>;

impl EciesCurve for NistP256 {
    const NAME: &'static str = "P-256";
    const FIELD_SIZE: usize = P256_FIELD_SIZE;
    const ORDER_BITS: usize = P256_ORDER_BITS;
    const COFACTOR: u64 = NIST_PRIME_CURVE_COFACTOR;

    type SecretKey = SecretKey;
    type PublicKey = PublicKey;

    fn secret_key_from_bytes(bytes: &[u8]) -> Option<SecretKey> {
        curve::secret_key_from_bytes::<NistP256>(bytes)
    }

    fn public_key(secret: &SecretKey) -> PublicKey {
        secret.public_key()
    }

    fn write_coordinates(public: &PublicKey, out: &mut Vec<u8>) {
        curve::write_coordinates::<NistP256>(public, out)
    }

    fn from_coordinates(x: &[u8], y: &[u8]) -> Option<PublicKey> {
        curve::from_coordinates::<NistP256>(x, y)
    }

    fn diffie_hellman(secret: &SecretKey, public: &PublicKey, multiplier: u64) -> Option<SecretVec> {
        curve::diffie_hellman::<NistP256>(secret, public, multiplier)
    }
}
