//! Apple SecKey ECIES algorithm identifiers.
//!
//! Apple names its ECIES variants
//! `kSecKeyAlgorithmECIESEncryption{Standard|Cofactor}[VariableIV]X963SHA{n}AESGCM`
//! (`.eciesEncryption…` in Swift). The name fixes the KDF hash and the IV
//! and cofactor modes; the AES key size follows the curve (AES-128 for
//! curves of 256 bits or less, AES-256 above that) and the GCM nonce is
//! always 16 bytes.

use core::fmt;
use core::str::FromStr;

use super::config::{AeadAlgorithm, EciesConfig, KdfHash};
use super::curve::EciesCurve;
use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const OBJC_PREFIX: &str = "kSecKeyAlgorithmECIESEncryption";
const SWIFT_PREFIX: &str = "eciesEncryption";

/// One of Apple's `…X963SHA…AESGCM` ECIES algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppleAlgorithm {
    pub hash: KdfHash,
    pub variable_iv: bool,
    pub use_cofactor: bool,
}

impl AppleAlgorithm {
    pub const fn new(hash: KdfHash, variable_iv: bool, use_cofactor: bool) -> Self {
        Self {
            hash,
            variable_iv,
            use_cofactor,
        }
    }

    /// AEAD Apple pairs with curve `C`.
    pub fn aead_for<C: EciesCurve>() -> AeadAlgorithm {
        if C::ORDER_BITS <= 256 {
            AeadAlgorithm::Aes128Gcm16
        } else {
            AeadAlgorithm::Aes256Gcm16
        }
    }

    /// Engine configuration equivalent to this algorithm on curve `C`.
    pub fn config_for<C: EciesCurve>(&self) -> EciesConfig {
        EciesConfig::new(
            self.hash,
            self.variable_iv,
            self.use_cofactor,
            Self::aead_for::<C>(),
        )
    }

    /// Swift spelling, e.g. `eciesEncryptionCofactorVariableIVX963SHA384AESGCM`.
    pub fn swift_name(&self) -> String {
        format!("{}{}", SWIFT_PREFIX, self.suffix())
    }

    fn suffix(&self) -> String {
        format!(
            "{}{}X963{}AESGCM",
            if self.use_cofactor { "Cofactor" } else { "Standard" },
            if self.variable_iv { "VariableIV" } else { "" },
            self.hash.name()
        )
    }
}

impl fmt::Display for AppleAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", OBJC_PREFIX, self.suffix())
    }
}

impl FromStr for AppleAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || {
            Error::invalid_parameter("Apple ECIES algorithm", format!("unrecognised name {s:?}"))
        };

        let rest = s
            .strip_prefix(OBJC_PREFIX)
            .or_else(|| s.strip_prefix(SWIFT_PREFIX))
            .or_else(|| s.strip_prefix('.').and_then(|r| r.strip_prefix(SWIFT_PREFIX)))
            .ok_or_else(unknown)?;

        let (use_cofactor, rest) = if let Some(r) = rest.strip_prefix("Cofactor") {
            (true, r)
        } else if let Some(r) = rest.strip_prefix("Standard") {
            (false, r)
        } else {
            return Err(unknown());
        };

        let (variable_iv, rest) = match rest.strip_prefix("VariableIV") {
            Some(r) => (true, r),
            None => (false, rest),
        };

        let digest = rest
            .strip_prefix("X963")
            .and_then(|r| r.strip_suffix("AESGCM"))
            .ok_or_else(unknown)?;

        let hash = match digest {
            "SHA224" => KdfHash::Sha224,
            "SHA256" => KdfHash::Sha256,
            "SHA384" => KdfHash::Sha384,
            "SHA512" => KdfHash::Sha512,
            "SHA1" => {
                return Err(Error::invalid_parameter(
                    "Apple ECIES algorithm",
                    "SHA-1 variants are not supported",
                ))
            }
            _ => return Err(unknown()),
        };

        Ok(Self::new(hash, variable_iv, use_cofactor))
    }
}
