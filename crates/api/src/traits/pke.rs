//! Trait definition for Public Key Encryption (PKE) schemes.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::ZeroizeOnDrop;

/// Trait for Public Key Encryption schemes.
///
/// Unlike fixed-suite schemes, an ECIES instance is parameterised at runtime
/// (KDF hash, IV mode, cofactor mode, AEAD), so every operation takes `&self`.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme. Must wipe itself when dropped.
    type SecretKey: ZeroizeOnDrop + Clone;

    /// Returns the PKE algorithm name.
    fn name(&self) -> String;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext message using the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The message to encrypt.
    /// * `aad` - Optional Associated Additional Data to be authenticated.
    /// * `rng` - A cryptographically secure random number generator.
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        rng: &mut R,
    ) -> Result<Vec<u8>>;

    /// Decrypts a ciphertext using the recipient's secret key.
    ///
    /// Returns the original plaintext only if authentication succeeds.
    fn decrypt(
        &self,
        sk_recipient: &Self::SecretKey,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;
}
