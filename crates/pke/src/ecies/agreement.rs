//! Key agreement and ephemeral key generation.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use xecies_api::error::KeyResult;
use xecies_common::SecretVec;

use super::curve::EciesCurve;
use crate::error::{Error, Result};

/// Sampling attempts before key generation gives up.
///
/// After masking, a candidate is rejected with probability below 2^-32 on
/// every supported curve, so reaching this bound means the entropy source is
/// broken.
pub const KEYGEN_MAX_ATTEMPTS: usize = 64;

/// Raw ECDH output: the x-coordinate of the agreed point, `FIELD_SIZE` bytes.
pub type SharedSecret = SecretVec;

/// Performs (cofactor) ECDH between `secret` and `peer`.
///
/// With `use_cofactor` the scalar is first multiplied by the curve cofactor;
/// on prime-order curves that is a no-op.
pub fn agree<C: EciesCurve>(
    secret: &C::SecretKey,
    peer: &C::PublicKey,
    use_cofactor: bool,
) -> Result<SharedSecret> {
    let multiplier = if use_cofactor { C::COFACTOR } else { 1 };
    C::diffie_hellman(secret, peer, multiplier).ok_or(Error::InvalidPeerKey {
        context: "key agreement produced the point at infinity",
    })
}

/// Draws a fresh secret scalar from `rng`.
///
/// Candidates are `FIELD_SIZE` random bytes with the bits above the group
/// order's bit length cleared; zero and out-of-range values are rejected and
/// resampled. Any entropy failure aborts immediately.
pub fn generate_secret_key<C, R>(rng: &mut R) -> KeyResult<C::SecretKey>
where
    C: EciesCurve,
    R: RngCore + CryptoRng,
{
    let mut candidate = Zeroizing::new(vec![0u8; C::FIELD_SIZE]);
    let mask = top_byte_mask(C::FIELD_SIZE, C::ORDER_BITS);

    for _ in 0..KEYGEN_MAX_ATTEMPTS {
        rng.try_fill_bytes(candidate.as_mut_slice())
            .map_err(|_| Error::KeyGenFailed {
                context: "entropy source failed",
            })?;
        candidate[0] &= mask;

        if let Some(secret) = C::secret_key_from_bytes(&candidate) {
            return Ok(secret);
        }
    }

    Err(Error::KeyGenFailed {
        context: "no valid scalar within the attempt limit",
    })
}

/// Generates a fresh key pair on curve `C`.
pub fn generate_keypair<C, R>(rng: &mut R) -> KeyResult<(C::SecretKey, C::PublicKey)>
where
    C: EciesCurve,
    R: RngCore + CryptoRng,
{
    let secret = generate_secret_key::<C, R>(rng)?;
    let public = C::public_key(&secret);
    Ok((secret, public))
}

fn top_byte_mask(field_size: usize, order_bits: usize) -> u8 {
    let excess = (field_size * 8).saturating_sub(order_bits);
    if excess >= 8 {
        0
    } else {
        0xFF >> excess
    }
}
