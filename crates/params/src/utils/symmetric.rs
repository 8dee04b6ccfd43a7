//! Constants for AES-GCM

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// Standard (96-bit) GCM nonce size in bytes
pub const GCM_NONCE_SIZE: usize = 12;

/// Extended GCM nonce size used by Apple's ECIES algorithms
pub const GCM_EXTENDED_NONCE_SIZE: usize = 16;

/// Largest GCM nonce size supported by the engine
pub const GCM_MAX_NONCE_SIZE: usize = GCM_EXTENDED_NONCE_SIZE;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;
