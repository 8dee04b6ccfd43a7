//! Curve capability set consumed by the ECIES engine.
//!
//! The orchestration in [`cipher`](super::cipher) is written once against
//! [`EciesCurve`]; each supported curve binds the trait to its RustCrypto
//! arithmetic in its own module. The generic helpers at the bottom of this
//! file carry the `elliptic-curve` bounds so the per-curve impls stay small.

use core::fmt::Debug;

use elliptic_curve::generic_array::typenum::Unsigned;
use elliptic_curve::group::{Curve as _, Group as _};
use elliptic_curve::point::AffineCoordinates;
use elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, PublicKey, SecretKey};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use xecies_common::SecretVec;

/// Elliptic-curve operations and parameters needed by ECIES.
pub trait EciesCurve: Sized + 'static {
    /// Human-readable curve name, e.g. `P-256`.
    const NAME: &'static str;

    /// Size of a field element in bytes; also the shared secret length.
    const FIELD_SIZE: usize;

    /// Bit length of the group order, used to mask sampled scalars.
    const ORDER_BITS: usize;

    /// Curve cofactor `h`.
    const COFACTOR: u64;

    /// Length of the uncompressed point encoding: `1 + 2 * FIELD_SIZE`.
    const POINT_LEN: usize = 1 + 2 * Self::FIELD_SIZE;

    /// Private scalar; must wipe itself when dropped.
    type SecretKey: Clone + ZeroizeOnDrop;

    /// Validated, non-identity curve point.
    type PublicKey: Clone + Debug + PartialEq;

    /// Parses a big-endian scalar of exactly `FIELD_SIZE` bytes.
    ///
    /// Returns `None` for zero or for values not below the group order.
    fn secret_key_from_bytes(bytes: &[u8]) -> Option<Self::SecretKey>;

    fn public_key(secret: &Self::SecretKey) -> Self::PublicKey;

    /// Appends `X || Y`, each left-padded to `FIELD_SIZE` bytes.
    fn write_coordinates(public: &Self::PublicKey, out: &mut Vec<u8>);

    /// Builds a point from affine coordinates, rejecting points that are not
    /// on the curve.
    fn from_coordinates(x: &[u8], y: &[u8]) -> Option<Self::PublicKey>;

    /// Computes the x-coordinate of `(k * secret) * public`, where `k` is the
    /// multiplier applied to the scalar (the cofactor, or one).
    ///
    /// Returns `None` if the product is the point at infinity.
    fn diffie_hellman(
        secret: &Self::SecretKey,
        public: &Self::PublicKey,
        multiplier: u64,
    ) -> Option<SecretVec>;
}

pub(crate) fn secret_key_from_bytes<C>(bytes: &[u8]) -> Option<SecretKey<C>>
where
    C: CurveArithmetic,
{
    if bytes.len() != FieldBytesSize::<C>::USIZE {
        return None;
    }
    SecretKey::<C>::from_bytes(FieldBytes::<C>::from_slice(bytes)).ok()
}

pub(crate) fn write_coordinates<C>(public: &PublicKey<C>, out: &mut Vec<u8>)
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let encoded = public.to_encoded_point(false);
    // A PublicKey is never the identity, so an uncompressed encoding always
    // carries both coordinates.
    if let (Some(x), Some(y)) = (encoded.x(), encoded.y()) {
        out.extend_from_slice(x);
        out.extend_from_slice(y);
    }
}

pub(crate) fn from_coordinates<C>(x: &[u8], y: &[u8]) -> Option<PublicKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let size = FieldBytesSize::<C>::USIZE;
    if x.len() != size || y.len() != size {
        return None;
    }
    let encoded = EncodedPoint::<C>::from_affine_coordinates(
        FieldBytes::<C>::from_slice(x),
        FieldBytes::<C>::from_slice(y),
        false,
    );
    Option::from(PublicKey::<C>::from_encoded_point(&encoded))
}

pub(crate) fn diffie_hellman<C>(
    secret: &SecretKey<C>,
    public: &PublicKey<C>,
    multiplier: u64,
) -> Option<SecretVec>
where
    C: CurveArithmetic,
{
    let mut scalar = Zeroizing::new(*secret.to_nonzero_scalar());
    if multiplier != 1 {
        *scalar = *scalar * <C::Scalar as From<u64>>::from(multiplier);
    }

    let product = public.to_projective() * *scalar;
    if bool::from(product.is_identity()) {
        return None;
    }

    let mut x = product.to_affine().x();
    let shared = SecretVec::from_slice(&x);
    x.as_mut_slice().zeroize();
    Some(shared)
}
