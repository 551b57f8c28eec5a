use core::fmt::Debug;

use crypto_bigint::U256;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::Result;

/// Abstraction over a cyclic group of prime order `q`.
///
/// Implementations are *instances*, not marker types: group parameters may
/// arrive at runtime (e.g. `(p, q, g)` read from a session config file), so
/// every operation takes `&self`.
///
/// Exponents live in `[0, q)` and all exponent arithmetic reduces modulo
/// `q`. Scalars bridge to the wire codec through `U256`, which caps the
/// supported group order at 256 bits — enough for the MODP and Ristretto255
/// instances this crate ships.
pub trait Group: Clone + Debug + Send + Sync + 'static {
    /// Exponent residue modulo the group order.
    type Scalar: Clone + Debug + Eq + PartialEq + Zeroize + Send + Sync;
    /// Opaque group element.
    type Element: Clone + Debug + Eq + PartialEq + Send + Sync;

    /// Human-readable group identifier.
    fn name(&self) -> &'static str;

    /// The fixed generator `g` of the group.
    fn generator(&self) -> Self::Element;

    /// Bit length of the group order `q`.
    ///
    /// Soundness parameters must satisfy `t <= order_bits() - 1`.
    fn order_bits(&self) -> u32;

    /// The identity element.
    fn identity(&self) -> Self::Element;

    /// Whether `element` is the identity.
    fn is_identity(&self, element: &Self::Element) -> bool;

    /// Whether `element` belongs to the order-`q` subgroup.
    fn is_member(&self, element: &Self::Element) -> bool;

    /// Whether the group parameters themselves are consistent.
    fn validate_params(&self) -> bool;

    /// Computes `base^exp`.
    fn exponentiate(&self, base: &Self::Element, exp: &Self::Scalar) -> Self::Element;

    /// The group operation.
    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// The inverse of `element` under the group operation.
    fn inverse(&self, element: &Self::Element) -> Self::Element;

    /// Canonical, reversible element encoding.
    fn encode_element(&self, element: &Self::Element) -> Vec<u8>;

    /// Decodes and validates a canonical element encoding.
    fn decode_element(&self, bytes: &[u8]) -> Result<Self::Element>;

    /// Samples a scalar uniformly from `[0, q-1]`, both endpoints included.
    fn random_scalar<R: CryptoRngCore>(&self, rng: &mut R) -> Self::Scalar;

    /// Builds a scalar from an integer, reducing modulo `q`.
    fn scalar_from_uint(&self, value: &U256) -> Self::Scalar;

    /// The integer value of a scalar, in `[0, q)`.
    fn scalar_to_uint(&self, scalar: &Self::Scalar) -> U256;

    /// Interprets big-endian bytes (e.g. a challenge) as a scalar mod `q`.
    ///
    /// Fails if the input is wider than 256 bits.
    fn scalar_from_be_bytes(&self, bytes: &[u8]) -> Result<Self::Scalar>;

    /// Computes `a + b mod q`.
    fn scalar_add(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Computes `a * b mod q`.
    fn scalar_mul(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Computes `-s mod q`.
    fn scalar_negate(&self, scalar: &Self::Scalar) -> Self::Scalar;

    /// Computes `s^-1 mod q`, or `None` for zero.
    fn scalar_invert(&self, scalar: &Self::Scalar) -> Option<Self::Scalar>;

    /// Whether the scalar is zero.
    fn scalar_is_zero(&self, scalar: &Self::Scalar) -> bool;
}
