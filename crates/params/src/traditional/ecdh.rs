//! Constants for Elliptic Curve Diffie-Hellman over the NIST prime curves

/// Leading octet of an X9.63 / SEC1 uncompressed point encoding
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Size of a P-256 field element (and of its ECDH shared secret) in bytes
pub const P256_FIELD_SIZE: usize = 32;

/// Bit length of the P-256 group order
pub const P256_ORDER_BITS: usize = 256;

/// Size of an uncompressed P-256 point encoding in bytes
pub const P256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P256_FIELD_SIZE;

/// Size of a P-384 field element (and of its ECDH shared secret) in bytes
pub const P384_FIELD_SIZE: usize = 48;

/// Bit length of the P-384 group order
pub const P384_ORDER_BITS: usize = 384;

/// Size of an uncompressed P-384 point encoding in bytes
pub const P384_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P384_FIELD_SIZE;

/// Size of a P-521 field element (and of its ECDH shared secret) in bytes
pub const P521_FIELD_SIZE: usize = 66;

/// Bit length of the P-521 group order
pub const P521_ORDER_BITS: usize = 521;

/// Size of an uncompressed P-521 point encoding in bytes
pub const P521_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P521_FIELD_SIZE;

/// Cofactor shared by all NIST prime-order curves
pub const NIST_PRIME_CURVE_COFACTOR: u64 = 1;
