//! ECIES binding for NIST P-521.
//!
//! Apple's `…AESGCM` algorithms on this curve frame the payload with
//! AES-256-GCM and a 16-byte nonce; see [`AppleAlgorithm`](super::AppleAlgorithm).

use ::p521::{PublicKey, SecretKey};

pub use ::p521::NistP521;

use xecies_common::SecretVec;
use xecies_params::traditional::ecdh::{NIST_PRIME_CURVE_COFACTOR, P521_FIELD_SIZE, P521_ORDER_BITS};

use super::cipher::Ecies;
use super::curve::{self, EciesCurve};

/// ECIES over P-521.
pub type EciesP521 = Ecies<NistP521>;

impl EciesCurve for NistP521 {
    const NAME: &'static str = "P-521";
    const FIELD_SIZE: usize = P521_FIELD_SIZE;
    const ORDER_BITS: usize = P521_ORDER_BITS;
    const COFACTOR: u64 = NIST_PRIME_CURVE_COFACTOR;

    type SecretKey = SecretKey;
    type PublicKey = PublicKey;

    fn secret_key_from_bytes(bytes: &[u8]) -> Option<SecretKey> {
        curve::secret_key_from_bytes::<NistP521>(bytes)
    }

    fn public_key(secret: &SecretKey) -> PublicKey {
        secret.public_key()
    }

    fn write_coordinates(public: &PublicKey, out: &mut Vec<u8>) {
        curve::write_coordinates::<NistP521>(public, out)
    }

    fn from_coordinates(x: &[u8], y: &[u8]) -> Option<PublicKey> {
        curve::from_coordinates::<NistP521>(x, y)
    }

    fn diffie_hellman(secret: &SecretKey, public: &PublicKey, multiplier: u64) -> Option<SecretVec> {
        curve::diffie_hellman::<NistP521>(secret, public, multiplier)
    }
}
