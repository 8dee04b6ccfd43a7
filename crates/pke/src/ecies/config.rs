//! ECIES configuration: KDF hash, IV mode, cofactor mode and AEAD choice.
//!
//! The envelope carries no algorithm identifier, so both parties must agree
//! on every field of [`EciesConfig`] out of band. A mismatch is reported as
//! [`Error::AuthenticationFailed`](crate::Error::AuthenticationFailed) on the
//! decrypting side, never as a distinguishable "wrong configuration" error.

use core::fmt;

use sha2::{Sha224, Sha256, Sha384, Sha512};
use xecies_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA512_OUTPUT_SIZE,
};
use xecies_params::utils::symmetric::{
    AES128_KEY_SIZE, AES256_KEY_SIZE, GCM_EXTENDED_NONCE_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE,
};

use super::kdf;
use crate::error::Result;
use xecies_common::SecretVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hash function driving the X9.63 KDF.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KdfHash {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl KdfHash {
    /// Digest size in bytes, i.e. the KDF output per counter iteration.
    pub const fn output_size(self) -> usize {
        match self {
            KdfHash::Sha224 => SHA224_OUTPUT_SIZE,
            KdfHash::Sha256 => SHA256_OUTPUT_SIZE,
            KdfHash::Sha384 => SHA384_OUTPUT_SIZE,
            KdfHash::Sha512 => SHA512_OUTPUT_SIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            KdfHash::Sha224 => "SHA224",
            KdfHash::Sha256 => "SHA256",
            KdfHash::Sha384 => "SHA384",
            KdfHash::Sha512 => "SHA512",
        }
    }

    /// Runs the X9.63 KDF with this hash.
    pub fn derive(self, z: &[u8], shared_info: &[u8], output_len: usize) -> Result<SecretVec> {
        match self {
            KdfHash::Sha224 => kdf::derive::<Sha224>(z, shared_info, output_len),
            KdfHash::Sha256 => kdf::derive::<Sha256>(z, shared_info, output_len),
            KdfHash::Sha384 => kdf::derive::<Sha384>(z, shared_info, output_len),
            KdfHash::Sha512 => kdf::derive::<Sha512>(z, shared_info, output_len),
        }
    }
}

impl fmt::Display for KdfHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// AES-GCM variant used to frame the payload.
///
/// The `*16` variants use a 16-byte nonce, which is what Apple's SecKey ECIES
/// algorithms expect. All variants produce a 16-byte tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AeadAlgorithm {
    Aes128Gcm,
    Aes256Gcm,
    Aes128Gcm16,
    Aes256Gcm16,
}

impl AeadAlgorithm {
    pub const fn key_len(self) -> usize {
        match self {
            AeadAlgorithm::Aes128Gcm | AeadAlgorithm::Aes128Gcm16 => AES128_KEY_SIZE,
            AeadAlgorithm::Aes256Gcm | AeadAlgorithm::Aes256Gcm16 => AES256_KEY_SIZE,
        }
    }

    pub const fn nonce_len(self) -> usize {
        match self {
            AeadAlgorithm::Aes128Gcm | AeadAlgorithm::Aes256Gcm => GCM_NONCE_SIZE,
            AeadAlgorithm::Aes128Gcm16 | AeadAlgorithm::Aes256Gcm16 => GCM_EXTENDED_NONCE_SIZE,
        }
    }

    pub const fn tag_len(self) -> usize {
        GCM_TAG_SIZE
    }

    pub const fn name(self) -> &'static str {
        match self {
            AeadAlgorithm::Aes128Gcm => "AES128GCM",
            AeadAlgorithm::Aes256Gcm => "AES256GCM",
            AeadAlgorithm::Aes128Gcm16 => "AES128GCM16",
            AeadAlgorithm::Aes256Gcm16 => "AES256GCM16",
        }
    }
}

impl fmt::Display for AeadAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options that must match exactly between encrypting and decrypting parties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EciesConfig {
    /// Hash driving the X9.63 KDF.
    pub hash: KdfHash,
    /// Derive the GCM nonce from the KDF output (`true`) or use an all-zero
    /// nonce (`false`, kept for compatibility with fixed-IV peers).
    pub variable_iv: bool,
    /// Multiply the private scalar by the curve cofactor during agreement.
    pub use_cofactor: bool,
    /// AEAD framing the payload.
    pub aead: AeadAlgorithm,
}

impl Default for EciesConfig {
    fn default() -> Self {
        Self {
            hash: KdfHash::Sha256,
            variable_iv: true,
            use_cofactor: true,
            aead: AeadAlgorithm::Aes256Gcm,
        }
    }
}

impl EciesConfig {
    pub const fn new(hash: KdfHash, variable_iv: bool, use_cofactor: bool, aead: AeadAlgorithm) -> Self {
        Self {
            hash,
            variable_iv,
            use_cofactor,
            aead,
        }
    }

    pub fn with_hash(mut self, hash: KdfHash) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_variable_iv(mut self, variable_iv: bool) -> Self {
        self.variable_iv = variable_iv;
        self
    }

    pub fn with_cofactor(mut self, use_cofactor: bool) -> Self {
        self.use_cofactor = use_cofactor;
        self
    }

    pub fn with_aead(mut self, aead: AeadAlgorithm) -> Self {
        self.aead = aead;
        self
    }

    /// Number of bytes requested from the KDF: the AEAD key, followed by the
    /// nonce when the IV is variable.
    pub const fn key_material_len(&self) -> usize {
        if self.variable_iv {
            self.aead.key_len() + self.aead.nonce_len()
        } else {
            self.aead.key_len()
        }
    }

    /// Stable algorithm identifier, e.g.
    /// `ECIES-Cofactor-VariableIV-X963-SHA384-AES256GCM`.
    pub fn name(&self) -> String {
        let mut name = String::from("ECIES-");
        name.push_str(if self.use_cofactor { "Cofactor" } else { "Standard" });
        if self.variable_iv {
            name.push_str("-VariableIV");
        }
        name.push_str("-X963-");
        name.push_str(self.hash.name());
        name.push('-');
        name.push_str(self.aead.name());
        name
    }
}

impl fmt::Display for EciesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
