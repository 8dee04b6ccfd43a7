//! Error type definitions for ECIES operations

use thiserror::Error as ThisError;

/// Primary error type for ECIES operations
///
/// Every error is terminal for the call that produced it. Decryption never
/// returns partial plaintext: it either yields the fully authenticated
/// message or one of these errors.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The entropy source failed or never produced a usable scalar
    #[error("ephemeral key generation failed: {context}")]
    KeyGenFailed { context: &'static str },

    /// The peer point is invalid or key agreement produced the identity
    #[error("invalid peer public key: {context}")]
    InvalidPeerKey { context: &'static str },

    /// Point bytes are not an uncompressed encoding of a curve point
    #[error("invalid point encoding: {context}")]
    InvalidEncoding { context: &'static str },

    /// The envelope is shorter than the minimum framing length
    #[error("malformed envelope: expected at least {expected} bytes, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    /// The KDF was asked for more output than its counter can address
    #[error("KDF output of {requested} bytes exceeds the limit of {limit} bytes")]
    OutputTooLarge { requested: usize, limit: u64 },

    /// AEAD tag verification failed.
    ///
    /// Wrong key, tampered ciphertext, wrong AAD and mismatched configuration
    /// all end up here.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Misuse of the API: bad key bytes, unknown algorithm names and the like
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for ECIES operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for [`Error::InvalidParameter`]
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Short, stable name of the error kind, suitable for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::KeyGenFailed { .. } => "KeyGenFailed",
            Self::InvalidPeerKey { .. } => "InvalidPeerKey",
            Self::InvalidEncoding { .. } => "InvalidEncoding",
            Self::MalformedInput { .. } => "MalformedInput",
            Self::OutputTooLarge { .. } => "OutputTooLarge",
            Self::AuthenticationFailed => "AuthenticationFailed",
            Self::InvalidParameter { .. } => "InvalidParameter",
        }
    }
}
