use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar as DalekScalar;
use curve25519_dalek::traits::Identity;
use crypto_bigint::U256;
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha512};
use zeroize::Zeroize;

use crate::{Error, Group, Result};

/// Number of bytes in a Ristretto255 scalar or compressed element.
const RISTRETTO_BYTES: usize = 32;

/// Number of bytes used for wide scalar reduction.
const WIDE_REDUCTION_BYTES: usize = 64;

/// Ristretto255 group implementation providing fast, prime-order elliptic
/// curve operations.
///
/// The group law is written multiplicatively here to match the [`Group`]
/// abstraction: `multiply` is point addition, `exponentiate` is scalar
/// multiplication and `inverse` is negation.
#[derive(Clone, Debug)]
pub struct Ristretto255;

/// Scalar in the Ristretto255 group, zeroized on drop.
#[derive(Clone, Debug, Eq, PartialEq, Zeroize)]
#[zeroize(drop)]
pub struct Scalar(DalekScalar);

/// Element (point) in the Ristretto255 group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element(RistrettoPoint);

impl Scalar {
    /// Creates a new scalar from a curve25519_dalek scalar.
    pub fn new(value: DalekScalar) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner curve25519_dalek scalar.
    pub fn inner(&self) -> &DalekScalar {
        &self.0
    }
}

impl Element {
    /// Creates a new element from a RistrettoPoint.
    pub fn new(value: RistrettoPoint) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner RistrettoPoint.
    pub fn inner(&self) -> &RistrettoPoint {
        &self.0
    }
}

impl Ristretto255 {
    /// Derives an element with unknown discrete log relative to the base
    /// point, by hashing the label to the curve.
    ///
    /// Useful as the independent second base of a DH-tuple statement.
    pub fn derive_element(&self, label: &[u8]) -> Element {
        let mut hasher = Sha512::new();
        hasher.update(label);
        let hash = hasher.finalize();
        Element(RistrettoPoint::from_uniform_bytes(&hash.into()))
    }
}

impl Group for Ristretto255 {
    type Scalar = Scalar;
    type Element = Element;

    fn name(&self) -> &'static str {
        "Ristretto255"
    }

    fn generator(&self) -> Self::Element {
        Element(RISTRETTO_BASEPOINT_POINT)
    }

    fn order_bits(&self) -> u32 {
        group_order().bits()
    }

    fn identity(&self) -> Self::Element {
        Element(RistrettoPoint::identity())
    }

    fn is_identity(&self, element: &Self::Element) -> bool {
        element.0 == RistrettoPoint::identity()
    }

    fn is_member(&self, _element: &Self::Element) -> bool {
        // Every representable RistrettoPoint is in the prime-order group.
        true
    }

    fn validate_params(&self) -> bool {
        true
    }

    fn exponentiate(&self, base: &Self::Element, exp: &Self::Scalar) -> Self::Element {
        Element(base.0 * exp.0)
    }

    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Element(a.0 + b.0)
    }

    fn inverse(&self, element: &Self::Element) -> Self::Element {
        Element(-element.0)
    }

    fn encode_element(&self, element: &Self::Element) -> Vec<u8> {
        element.0.compress().to_bytes().to_vec()
    }

    fn decode_element(&self, bytes: &[u8]) -> Result<Self::Element> {
        if bytes.len() != RISTRETTO_BYTES {
            return Err(Error::InvalidGroupElement(format!(
                "Expected {} bytes, got {}",
                RISTRETTO_BYTES,
                bytes.len()
            )));
        }

        let mut arr = [0u8; RISTRETTO_BYTES];
        arr.copy_from_slice(bytes);

        match CompressedRistretto(arr).decompress() {
            Some(point) => Ok(Element(point)),
            None => Err(Error::InvalidGroupElement(
                "Bytes do not represent a valid Ristretto point".to_string(),
            )),
        }
    }

    fn random_scalar<R: CryptoRngCore>(&self, rng: &mut R) -> Self::Scalar {
        let mut wide = [0u8; WIDE_REDUCTION_BYTES];
        rng.fill_bytes(&mut wide);
        Scalar(DalekScalar::from_bytes_mod_order_wide(&wide))
    }

    fn scalar_from_uint(&self, value: &U256) -> Self::Scalar {
        let mut le = value.to_le_bytes();
        let scalar = DalekScalar::from_bytes_mod_order(le);
        le.zeroize();
        Scalar(scalar)
    }

    fn scalar_to_uint(&self, scalar: &Self::Scalar) -> U256 {
        U256::from_le_slice(&scalar.0.to_bytes())
    }

    fn scalar_from_be_bytes(&self, bytes: &[u8]) -> Result<Self::Scalar> {
        if bytes.len() > RISTRETTO_BYTES {
            return Err(Error::InvalidScalar(format!(
                "scalar encoding is {} bytes, wider than 256 bits",
                bytes.len()
            )));
        }
        let mut buf = [0u8; RISTRETTO_BYTES];
        buf[RISTRETTO_BYTES - bytes.len()..].copy_from_slice(bytes);
        Ok(self.scalar_from_uint(&U256::from_be_slice(&buf)))
    }

    fn scalar_add(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 + b.0)
    }

    fn scalar_mul(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 * b.0)
    }

    fn scalar_negate(&self, scalar: &Self::Scalar) -> Self::Scalar {
        Scalar(-scalar.0)
    }

    fn scalar_invert(&self, scalar: &Self::Scalar) -> Option<Self::Scalar> {
        if self.scalar_is_zero(scalar) {
            return None;
        }
        Some(Scalar(scalar.0.invert()))
    }

    fn scalar_is_zero(&self, scalar: &Self::Scalar) -> bool {
        scalar.0 == DalekScalar::ZERO
    }
}

/// The order of the Ristretto255 group,
/// `2^252 + 27742317777372353535851937790883648493`.
fn group_order() -> U256 {
    U256::from_be_hex("1000000000000000000000000000000014DEF9DEA2F79CD65812631A5CF5D3ED")
}
