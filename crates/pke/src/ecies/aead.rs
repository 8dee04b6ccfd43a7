//! AEAD framing of the ECIES payload with AES-GCM.
//!
//! Absent associated data is authenticated as the empty string. `open`
//! reports every failure as [`Error::AuthenticationFailed`] and never returns
//! partial plaintext; tag comparison happens inside `aes-gcm` in constant
//! time.

use aes_gcm::aead::generic_array::typenum::{U12, U16};
use aes_gcm::aead::{Aead, AeadCore, KeyInit, Nonce, Payload};
use aes_gcm::aes::{Aes128, Aes256};
use aes_gcm::AesGcm;

use xecies_api::error::CipherResult;

use super::config::AeadAlgorithm;
use crate::error::Error;

type Aes128Gcm12 = AesGcm<Aes128, U12>;
type Aes256Gcm12 = AesGcm<Aes256, U12>;
type Aes128Gcm16 = AesGcm<Aes128, U16>;
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Encrypts `plaintext`, returning `ciphertext || tag`.
pub fn seal(
    aead: AeadAlgorithm,
    key: &[u8],
    iv: &[u8],
    aad: Option<&[u8]>,
    plaintext: &[u8],
) -> CipherResult<Vec<u8>> {
    let aad = aad.unwrap_or(&[]);
    match aead {
        AeadAlgorithm::Aes128Gcm => seal_with::<Aes128Gcm12>(key, iv, aad, plaintext),
        AeadAlgorithm::Aes256Gcm => seal_with::<Aes256Gcm12>(key, iv, aad, plaintext),
        AeadAlgorithm::Aes128Gcm16 => seal_with::<Aes128Gcm16>(key, iv, aad, plaintext),
        AeadAlgorithm::Aes256Gcm16 => seal_with::<Aes256Gcm16>(key, iv, aad, plaintext),
    }
}

/// Verifies and decrypts `ciphertext || tag`.
pub fn open(
    aead: AeadAlgorithm,
    key: &[u8],
    iv: &[u8],
    aad: Option<&[u8]>,
    ciphertext: &[u8],
) -> CipherResult<Vec<u8>> {
    let aad = aad.unwrap_or(&[]);
    match aead {
        AeadAlgorithm::Aes128Gcm => open_with::<Aes128Gcm12>(key, iv, aad, ciphertext),
        AeadAlgorithm::Aes256Gcm => open_with::<Aes256Gcm12>(key, iv, aad, ciphertext),
        AeadAlgorithm::Aes128Gcm16 => open_with::<Aes128Gcm16>(key, iv, aad, ciphertext),
        AeadAlgorithm::Aes256Gcm16 => open_with::<Aes256Gcm16>(key, iv, aad, ciphertext),
    }
}

fn seal_with<A>(key: &[u8], iv: &[u8], aad: &[u8], plaintext: &[u8]) -> CipherResult<Vec<u8>>
where
    A: Aead + KeyInit,
{
    let cipher = A::new_from_slice(key)
        .map_err(|_| Error::invalid_parameter("AEAD seal", "key has the wrong length"))?;
    if iv.len() != nonce_len::<A>() {
        return Err(Error::invalid_parameter("AEAD seal", "nonce has the wrong length"));
    }

    cipher
        .encrypt(Nonce::<A>::from_slice(iv), Payload { msg: plaintext, aad })
        .map_err(|_| Error::invalid_parameter("AEAD seal", "plaintext is too long"))
}

fn open_with<A>(key: &[u8], iv: &[u8], aad: &[u8], ciphertext: &[u8]) -> CipherResult<Vec<u8>>
where
    A: Aead + KeyInit,
{
    let cipher = A::new_from_slice(key).map_err(|_| Error::AuthenticationFailed)?;
    if iv.len() != nonce_len::<A>() {
        return Err(Error::AuthenticationFailed);
    }

    cipher
        .decrypt(Nonce::<A>::from_slice(iv), Payload { msg: ciphertext, aad })
        .map_err(|_| Error::AuthenticationFailed)
}

fn nonce_len<A: AeadCore>() -> usize {
    use aes_gcm::aead::generic_array::typenum::Unsigned;
    <A as AeadCore>::NonceSize::USIZE
}
