//! Constants for hash functions and the X9.63 KDF

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Largest number of hash blocks the 32-bit X9.63 counter can address
pub const X963_MAX_BLOCKS: u64 = u32::MAX as u64;
