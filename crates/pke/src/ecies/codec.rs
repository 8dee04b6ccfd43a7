//! X9.63 uncompressed point encoding: `0x04 || X || Y`.

use xecies_params::traditional::ecdh::UNCOMPRESSED_POINT_TAG;

use super::curve::EciesCurve;
use crate::error::{Error, Result};

/// Encodes a public point as `0x04 || X || Y` (`C::POINT_LEN` bytes).
pub fn encode_point<C: EciesCurve>(public: &C::PublicKey) -> Vec<u8> {
    let mut out = Vec::with_capacity(C::POINT_LEN);
    out.push(UNCOMPRESSED_POINT_TAG);
    C::write_coordinates(public, &mut out);
    out
}

/// Decodes an uncompressed point, validating it against the curve.
pub fn decode_point<C: EciesCurve>(bytes: &[u8]) -> Result<C::PublicKey> {
    if bytes.len() != C::POINT_LEN {
        return Err(Error::InvalidEncoding {
            context: "point encoding has the wrong length",
        });
    }
    if bytes[0] != UNCOMPRESSED_POINT_TAG {
        return Err(Error::InvalidEncoding {
            context: "point encoding is not uncompressed",
        });
    }

    let (x, y) = bytes[1..].split_at(C::FIELD_SIZE);
    C::from_coordinates(x, y).ok_or(Error::InvalidEncoding {
        context: "coordinates are not a point on the curve",
    })
}
