//! ANSI X9.63 key derivation function.
//!
//! `K = Hash(Z || 1 || SharedInfo) || Hash(Z || 2 || SharedInfo) || ...`
//! truncated to the requested length, with the counter encoded as a 32-bit
//! big-endian integer starting at one.

use sha2::Digest;
use zeroize::Zeroize;

use xecies_common::SecretVec;
use xecies_params::utils::hash::X963_MAX_BLOCKS;

use crate::error::{Error, Result};

/// Largest output, in bytes, that `derive::<D>` will produce.
pub fn max_output_len<D: Digest>() -> u64 {
    X963_MAX_BLOCKS * <D as Digest>::output_size() as u64
}

/// Derives `output_len` bytes of key material from the shared secret `z`.
///
/// Fails with [`Error::OutputTooLarge`] when the request would overflow the
/// 32-bit block counter.
pub fn derive<D: Digest>(z: &[u8], shared_info: &[u8], output_len: usize) -> Result<SecretVec> {
    let limit = max_output_len::<D>();
    if output_len as u64 > limit {
        return Err(Error::OutputTooLarge {
            requested: output_len,
            limit,
        });
    }

    let mut output = SecretVec::zeroed(output_len);
    let mut counter: u32 = 1;

    for chunk in output.as_mut_slice().chunks_mut(<D as Digest>::output_size()) {
        let mut hasher = D::new();
        hasher.update(z);
        hasher.update(counter.to_be_bytes());
        hasher.update(shared_info);
        let mut block = hasher.finalize();

        chunk.copy_from_slice(&block[..chunk.len()]);
        block.as_mut_slice().zeroize();

        // bounded by the limit check above
        counter = counter.wrapping_add(1);
    }

    Ok(output)
}
