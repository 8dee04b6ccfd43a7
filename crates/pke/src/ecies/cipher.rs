//! ECIES encryption and decryption.
//!
//! Envelope layout, with no length prefixes or version byte:
//!
//! ```text
//! 0x04 || X || Y          (C::POINT_LEN bytes, ephemeral public key)
//! ciphertext || tag       (plaintext length + 16 bytes)
//! ```
//!
//! Each call walks `Start -> KeyAgreed -> KeyDerived -> Framed -> Done` and
//! stops at the first failure. Every secret intermediate is owned by a type
//! that wipes it on drop, so cleanup also happens on early returns.

use core::fmt;
use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

use xecies_api::Pke;
use xecies_common::SecretVec;
use xecies_params::utils::symmetric::GCM_MAX_NONCE_SIZE;

use super::aead;
use super::agreement::{self, agree, SharedSecret};
use super::codec::{decode_point, encode_point};
use super::config::EciesConfig;
use super::curve::EciesCurve;
use crate::error::{Error, Result};

/// Progress of a single encrypt or decrypt call, recorded in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Start,
    KeyAgreed,
    KeyDerived,
    Framed,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Key material split into the AEAD key and nonce.
///
/// Borrowing from the derived material keeps a single owner of the secret
/// bytes; the zero nonce for fixed-IV mode lives on the stack.
struct FrameKeys<'a> {
    key: &'a [u8],
    iv: [u8; GCM_MAX_NONCE_SIZE],
    iv_len: usize,
}

impl FrameKeys<'_> {
    fn iv(&self) -> &[u8] {
        &self.iv[..self.iv_len]
    }
}

impl Drop for FrameKeys<'_> {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.iv);
    }
}

/// Derives key material bound to the ephemeral point encoding.
fn derive_key_material(
    config: &EciesConfig,
    shared_secret: &SharedSecret,
    ephemeral_point: &[u8],
) -> Result<SecretVec> {
    config
        .hash
        .derive(shared_secret.as_slice(), ephemeral_point, config.key_material_len())
}

fn split_key_material<'a>(config: &EciesConfig, material: &'a SecretVec) -> Result<FrameKeys<'a>> {
    let key_len = config.aead.key_len();
    let iv_len = config.aead.nonce_len();
    let (key, rest) = material.split_at(key_len).ok_or_else(|| {
        Error::invalid_parameter("key material", "KDF output shorter than the AEAD key")
    })?;

    let mut iv = [0u8; GCM_MAX_NONCE_SIZE];
    if config.variable_iv {
        if rest.len() != iv_len {
            return Err(Error::invalid_parameter(
                "key material",
                "KDF output does not match the AEAD nonce length",
            ));
        }
        iv[..iv_len].copy_from_slice(rest);
    }

    Ok(FrameKeys { key, iv, iv_len })
}

fn log_failure(operation: &'static str, config: &EciesConfig, stage: Stage, error: &Error) {
    debug!(
        operation,
        algorithm = %config,
        stage = %stage,
        error = error.kind(),
        "ECIES operation failed"
    );
}

/// Encrypts `plaintext` to `recipient`, returning the envelope.
///
/// A fresh ephemeral key is drawn from `rng` for every call and dropped
/// (and wiped) before returning.
pub fn encrypt<C, R>(
    config: &EciesConfig,
    recipient: &C::PublicKey,
    plaintext: &[u8],
    aad: Option<&[u8]>,
    rng: &mut R,
) -> Result<Vec<u8>>
where
    C: EciesCurve,
    R: RngCore + CryptoRng,
{
    let mut stage = Stage::Start;
    encrypt_inner::<C, R>(config, recipient, plaintext, aad, rng, &mut stage).map_err(|e| {
        log_failure("encrypt", config, stage, &e);
        e
    })
}

fn encrypt_inner<C, R>(
    config: &EciesConfig,
    recipient: &C::PublicKey,
    plaintext: &[u8],
    aad: Option<&[u8]>,
    rng: &mut R,
    stage: &mut Stage,
) -> Result<Vec<u8>>
where
    C: EciesCurve,
    R: RngCore + CryptoRng,
{
    trace!(curve = C::NAME, algorithm = %config, stage = %stage, "ECIES encrypt");

    let (ephemeral_secret, ephemeral_public) = agreement::generate_keypair::<C, R>(rng)?;
    let shared_secret = agree::<C>(&ephemeral_secret, recipient, config.use_cofactor)?;
    drop(ephemeral_secret);
    *stage = Stage::KeyAgreed;
    trace!(stage = %stage, "ECIES stage reached");

    let ephemeral_point = encode_point::<C>(&ephemeral_public);
    let material = derive_key_material(config, &shared_secret, &ephemeral_point)?;
    drop(shared_secret);
    let keys = split_key_material(config, &material)?;
    *stage = Stage::KeyDerived;
    trace!(stage = %stage, "ECIES stage reached");

    let sealed = aead::seal(config.aead, keys.key, keys.iv(), aad, plaintext)?;
    *stage = Stage::Framed;
    trace!(stage = %stage, "ECIES stage reached");

    let mut envelope = ephemeral_point;
    envelope.reserve_exact(sealed.len());
    envelope.extend_from_slice(&sealed);

    *stage = Stage::Done;
    trace!(stage = %stage, envelope_len = envelope.len(), "ECIES encrypt complete");
    Ok(envelope)
}

/// Decrypts an envelope with the recipient's static secret key.
///
/// Returns the plaintext only after the tag has been verified. Envelopes
/// shorter than the point prefix fail with [`Error::MalformedInput`]; any
/// other failure is reported as [`Error::AuthenticationFailed`].
pub fn decrypt<C>(
    config: &EciesConfig,
    recipient: &C::SecretKey,
    envelope: &[u8],
    aad: Option<&[u8]>,
) -> Result<Vec<u8>>
where
    C: EciesCurve,
{
    let mut stage = Stage::Start;
    decrypt_inner::<C>(config, recipient, envelope, aad, &mut stage).map_err(|e| {
        log_failure("decrypt", config, stage, &e);
        conceal(e)
    })
}

/// Collapses every failure past the framing check into
/// `AuthenticationFailed`, so a bad ephemeral point is indistinguishable
/// from a bad tag.
fn conceal(error: Error) -> Error {
    match error {
        Error::MalformedInput { .. } => error,
        _ => Error::AuthenticationFailed,
    }
}

fn decrypt_inner<C>(
    config: &EciesConfig,
    recipient: &C::SecretKey,
    envelope: &[u8],
    aad: Option<&[u8]>,
    stage: &mut Stage,
) -> Result<Vec<u8>>
where
    C: EciesCurve,
{
    trace!(curve = C::NAME, algorithm = %config, stage = %stage, "ECIES decrypt");

    if envelope.len() < C::POINT_LEN {
        return Err(Error::MalformedInput {
            expected: C::POINT_LEN,
            actual: envelope.len(),
        });
    }
    let (ephemeral_point, sealed) = envelope.split_at(C::POINT_LEN);

    let ephemeral_public = decode_point::<C>(ephemeral_point)?;
    let shared_secret = agree::<C>(recipient, &ephemeral_public, config.use_cofactor)?;
    *stage = Stage::KeyAgreed;
    trace!(stage = %stage, "ECIES stage reached");

    let material = derive_key_material(config, &shared_secret, ephemeral_point)?;
    drop(shared_secret);
    let keys = split_key_material(config, &material)?;
    *stage = Stage::KeyDerived;
    trace!(stage = %stage, "ECIES stage reached");

    let plaintext = aead::open(config.aead, keys.key, keys.iv(), aad, sealed)?;
    *stage = Stage::Framed;
    trace!(stage = %stage, "ECIES stage reached");

    *stage = Stage::Done;
    trace!(stage = %stage, plaintext_len = plaintext.len(), "ECIES decrypt complete");
    Ok(plaintext)
}

/// ECIES bound to a curve and a configuration.
///
/// Stateless apart from the immutable configuration: a single instance can
/// be shared across threads and used concurrently.
pub struct Ecies<C: EciesCurve> {
    config: EciesConfig,
    _curve: PhantomData<fn() -> C>,
}

impl<C: EciesCurve> Clone for Ecies<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: EciesCurve> Copy for Ecies<C> {}

impl<C: EciesCurve> fmt::Debug for Ecies<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ecies")
            .field("curve", &C::NAME)
            .field("config", &self.config)
            .finish()
    }
}

impl<C: EciesCurve> Default for Ecies<C> {
    fn default() -> Self {
        Self::new(EciesConfig::default())
    }
}

impl<C: EciesCurve> Ecies<C> {
    pub fn new(config: EciesConfig) -> Self {
        Self {
            config,
            _curve: PhantomData,
        }
    }

    pub fn config(&self) -> &EciesConfig {
        &self.config
    }

    /// Length of the ephemeral point prefix of every envelope.
    pub fn point_len(&self) -> usize {
        C::POINT_LEN
    }

    /// Exact envelope length for a plaintext of `plaintext_len` bytes.
    pub fn envelope_len(&self, plaintext_len: usize) -> usize {
        C::POINT_LEN + plaintext_len + self.config.aead.tag_len()
    }

    /// Decodes an uncompressed public key received from a peer.
    pub fn public_key_from_bytes(&self, bytes: &[u8]) -> Result<C::PublicKey> {
        decode_point::<C>(bytes)
    }

    /// Encodes a public key as `0x04 || X || Y`.
    pub fn public_key_to_bytes(&self, public: &C::PublicKey) -> Vec<u8> {
        encode_point::<C>(public)
    }

    /// Imports a raw big-endian private scalar of exactly `FIELD_SIZE` bytes.
    pub fn secret_key_from_bytes(&self, bytes: &[u8]) -> Result<C::SecretKey> {
        if bytes.len() != C::FIELD_SIZE {
            return Err(Error::invalid_parameter(
                "secret key import",
                format!("expected {} bytes, got {}", C::FIELD_SIZE, bytes.len()),
            ));
        }
        C::secret_key_from_bytes(bytes).ok_or_else(|| {
            Error::invalid_parameter(
                "secret key import",
                "scalar is zero or not below the group order",
            )
        })
    }

    pub fn public_key(&self, secret: &C::SecretKey) -> C::PublicKey {
        C::public_key(secret)
    }
}

impl<C: EciesCurve> Pke for Ecies<C> {
    type PublicKey = C::PublicKey;
    type SecretKey = C::SecretKey;

    fn name(&self) -> String {
        format!("{}-{}", self.config.name(), C::NAME)
    }

    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)> {
        let (secret, public) = agreement::generate_keypair::<C, R>(rng)?;
        Ok((public, secret))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        encrypt::<C, R>(&self.config, pk_recipient, plaintext, aad, rng)
    }

    fn decrypt(
        &self,
        sk_recipient: &Self::SecretKey,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        decrypt::<C>(&self.config, sk_recipient, ciphertext, aad)
    }
}
