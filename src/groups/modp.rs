use crypto_bigint::{Encoding, NonZero, U256, U2048, Zero};
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::crypto::field::{from_decimal, to_decimal, MontyDomain};
use crate::{Error, Group, Result};

/// Exponentiation domain for element arithmetic mod `p`.
type ElementDomain = MontyDomain<{ U2048::LIMBS }>;
/// Exponentiation domain for scalar inversion mod `q`.
type OrderDomain = MontyDomain<{ U256::LIMBS }>;

/// Multiplicative subgroup of `Z_p^*` of prime order `q`, with generator `g`.
///
/// Parameters are runtime values so sessions can load `(p, q, g)` from
/// configuration. Safe-prime groups (`p = 2q + 1`) are the usual choice, but
/// any `q | p - 1` with `g` of order `q` works. Primality of `p` and `q` is a
/// trust assumption on the parameter source; both must be odd, and the
/// Montgomery domains for them are derived once at construction.
///
/// The canonical element encoding is the ASCII decimal of the representative,
/// which keeps the wire format of this crate interoperable with existing
/// deployments of the protocol.
#[derive(Clone, Debug)]
pub struct ModpGroup {
    p: U2048,
    q: U256,
    g: U2048,
    p_domain: ElementDomain,
    q_domain: OrderDomain,
}

/// Exponent residue modulo the group order `q`.
#[derive(Clone, Debug, Eq, PartialEq, Zeroize)]
#[zeroize(drop)]
pub struct Scalar(U256);

/// Subgroup element, represented by its value in `[1, p)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element(U2048);

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Scalar {
    /// Wraps a raw value. The caller is responsible for `value < q`.
    pub fn new(value: U256) -> Self {
        Self(value)
    }

    /// The raw value of this scalar.
    pub fn inner(&self) -> &U256 {
        &self.0
    }
}

impl Element {
    /// Wraps a raw representative. The caller is responsible for membership.
    pub fn new(value: U2048) -> Self {
        Self(value)
    }

    /// The raw representative of this element.
    pub fn inner(&self) -> &U2048 {
        &self.0
    }
}

impl ModpGroup {
    /// Creates a group from raw parameters, validating them.
    pub fn new(p: U2048, q: U256, g: U2048) -> Result<Self> {
        let p_domain = ElementDomain::new(&p)
            .map_err(|_| Error::InvalidParams("p must be odd and non-zero".to_string()))?;
        let q_domain = OrderDomain::new(&q)
            .map_err(|_| Error::InvalidParams("q must be odd and non-zero".to_string()))?;
        let group = Self {
            p,
            q,
            g,
            p_domain,
            q_domain,
        };
        if !group.validate_params() {
            return Err(Error::InvalidParams(
                "p, q, g do not describe an order-q subgroup of Zp*".to_string(),
            ));
        }
        Ok(group)
    }

    /// Creates a group from decimal parameter strings, as found in session
    /// configuration files.
    pub fn from_decimal_params(p: &str, q: &str, g: &str) -> Result<Self> {
        let p = from_decimal(p).map_err(|_| Error::InvalidParams("malformed p".to_string()))?;
        let q = from_decimal(q).map_err(|_| Error::InvalidParams("malformed q".to_string()))?;
        let g = from_decimal(g).map_err(|_| Error::InvalidParams("malformed g".to_string()))?;
        Self::new(p, q, g)
    }

    /// The RFC 5114 2048-bit MODP group with a 256-bit prime-order subgroup.
    pub fn rfc5114() -> Self {
        let p = rfc5114_p();
        let q = rfc5114_q();
        let p_domain = ElementDomain::new(&p)
            .unwrap_or_else(|_| unreachable!("the RFC 5114 modulus is odd"));
        let q_domain = OrderDomain::new(&q)
            .unwrap_or_else(|_| unreachable!("the RFC 5114 subgroup order is odd"));
        Self {
            p,
            q,
            g: rfc5114_g(),
            p_domain,
            q_domain,
        }
    }

    /// Parses a decimal scalar, rejecting values outside `[0, q)`.
    pub fn scalar_from_decimal(&self, digits: &str) -> Result<Scalar> {
        let value: U256 =
            from_decimal(digits).map_err(|_| Error::InvalidScalar("malformed scalar".to_string()))?;
        if value >= self.q {
            return Err(Error::InvalidScalar(
                "scalar must be less than the group order".to_string(),
            ));
        }
        Ok(Scalar(value))
    }

    /// The group order `q`.
    pub fn order(&self) -> &U256 {
        &self.q
    }

    /// The modulus `p`.
    pub fn modulus(&self) -> &U2048 {
        &self.p
    }

    fn nonzero_p(&self) -> NonZero<U2048> {
        let nonzero: Option<NonZero<U2048>> = NonZero::new(self.p).into();
        nonzero.unwrap_or_else(|| unreachable!("p was validated non-zero at construction"))
    }

    fn nonzero_q(&self) -> NonZero<U256> {
        let nonzero: Option<NonZero<U256>> = NonZero::new(self.q).into();
        nonzero.unwrap_or_else(|| unreachable!("q was validated non-zero at construction"))
    }
}

impl Group for ModpGroup {
    type Scalar = Scalar;
    type Element = Element;

    fn name(&self) -> &'static str {
        "MODP"
    }

    fn generator(&self) -> Self::Element {
        Element(self.g)
    }

    fn order_bits(&self) -> u32 {
        self.q.bits()
    }

    fn identity(&self) -> Self::Element {
        Element(U2048::ONE)
    }

    fn is_identity(&self, element: &Self::Element) -> bool {
        bool::from(element.0.ct_eq(&U2048::ONE))
    }

    fn is_member(&self, element: &Self::Element) -> bool {
        if bool::from(element.0.is_zero()) || element.0 >= self.p {
            return false;
        }
        // x is in the order-q subgroup iff x^q = 1 mod p.
        bool::from(
            self.p_domain
                .pow(&element.0, &widen(&self.q))
                .ct_eq(&U2048::ONE),
        )
    }

    fn validate_params(&self) -> bool {
        // Oddness of p and q is enforced when the domains are built; what
        // remains is the subgroup structure.
        let p_minus_one = self.p.wrapping_sub(&U2048::ONE);
        let q_wide: Option<NonZero<U2048>> = NonZero::new(widen(&self.q)).into();
        let q_wide = match q_wide {
            Some(q) => q,
            None => return false,
        };
        if !bool::from(p_minus_one.rem(&q_wide).is_zero()) {
            return false;
        }

        // g must be a non-trivial element of order q.
        if self.g <= U2048::ONE || self.g >= self.p {
            return false;
        }
        bool::from(
            self.p_domain
                .pow(&self.g, &widen(&self.q))
                .ct_eq(&U2048::ONE),
        )
    }

    fn exponentiate(&self, base: &Self::Element, exp: &Self::Scalar) -> Self::Element {
        Element(self.p_domain.pow(&base.0, &widen(&exp.0)))
    }

    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Element(a.0.mul_mod(&b.0, &self.nonzero_p()))
    }

    fn inverse(&self, element: &Self::Element) -> Self::Element {
        // For x of order dividing q, x^(q-1) = x^-1.
        let exp = widen(&self.q.wrapping_sub(&U256::ONE));
        Element(self.p_domain.pow(&element.0, &exp))
    }

    fn encode_element(&self, element: &Self::Element) -> Vec<u8> {
        to_decimal(&element.0).into_bytes()
    }

    fn decode_element(&self, bytes: &[u8]) -> Result<Self::Element> {
        let digits = core::str::from_utf8(bytes).map_err(|_| {
            Error::InvalidGroupElement("element encoding is not ASCII decimal".to_string())
        })?;
        let value: U2048 = from_decimal(digits)
            .map_err(|_| Error::InvalidGroupElement("malformed element encoding".to_string()))?;
        let element = Element(value);
        if !self.is_member(&element) {
            return Err(Error::InvalidGroupElement(
                "element is not in the correct subgroup".to_string(),
            ));
        }
        Ok(element)
    }

    fn random_scalar<R: CryptoRngCore>(&self, rng: &mut R) -> Self::Scalar {
        // Masked rejection sampling: draw exactly bitlen(q) bits per attempt,
        // so acceptance probability is at least 1/2 for any q and the result
        // is exactly uniform on [0, q-1].
        let bits = self.q.bits();
        let byte_len = ((bits + 7) / 8) as usize;
        let mask: u8 = if bits % 8 == 0 {
            0xff
        } else {
            (1u8 << (bits % 8)) - 1
        };

        let mut buf = [0u8; 32];
        loop {
            rng.fill_bytes(&mut buf[32 - byte_len..]);
            buf[32 - byte_len] &= mask;
            let candidate = U256::from_be_slice(&buf);
            if candidate < self.q {
                return Scalar(candidate);
            }
        }
    }

    fn scalar_from_uint(&self, value: &U256) -> Self::Scalar {
        Scalar(value.rem(&self.nonzero_q()))
    }

    fn scalar_to_uint(&self, scalar: &Self::Scalar) -> U256 {
        scalar.0
    }

    fn scalar_from_be_bytes(&self, bytes: &[u8]) -> Result<Self::Scalar> {
        if bytes.len() > 32 {
            return Err(Error::InvalidScalar(format!(
                "scalar encoding is {} bytes, wider than 256 bits",
                bytes.len()
            )));
        }
        let mut buf = [0u8; 32];
        buf[32 - bytes.len()..].copy_from_slice(bytes);
        Ok(self.scalar_from_uint(&U256::from_be_slice(&buf)))
    }

    fn scalar_add(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0.add_mod(&b.0, &self.nonzero_q()))
    }

    fn scalar_mul(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0.mul_mod(&b.0, &self.nonzero_q()))
    }

    fn scalar_negate(&self, scalar: &Self::Scalar) -> Self::Scalar {
        Scalar(scalar.0.neg_mod(&self.nonzero_q()))
    }

    fn scalar_invert(&self, scalar: &Self::Scalar) -> Option<Self::Scalar> {
        if self.scalar_is_zero(scalar) {
            return None;
        }
        // Fermat: s^(q-2) = s^-1 mod q for prime q.
        let exp = self.q.wrapping_sub(&U256::from_u8(2));
        Some(Scalar(self.q_domain.pow(&scalar.0, &exp)))
    }

    fn scalar_is_zero(&self, scalar: &Self::Scalar) -> bool {
        bool::from(scalar.0.is_zero())
    }
}

/// Widens a 256-bit exponent to the element width.
fn widen(value: &U256) -> U2048 {
    let mut bytes = [0u8; 256];
    bytes[256 - 32..].copy_from_slice(&value.to_be_bytes());
    U2048::from_be_bytes(bytes)
}

fn rfc5114_p() -> U2048 {
    U2048::from_be_hex(
        "87A8E61DB4B6663CFFBBD19C651959998CEEF608660DD0F25D2CEED4435E3B00E00DF8F1D61957D4FAF7DF4561B2AA3016C3D91134096FAA3BF4296D830E9A7C209E0C6497517ABD5A8A9D306BCF67ED91F9E6725B4758C022E0B1EF4275BF7B6C5BFC11D45F9088B941F54EB1E59BB8BC39A0BF12307F5C4FDB70C581B23F76B63ACAE1CAA6B7902D52526735488A0EF13C6D9A51BFA4AB3AD8347796524D8EF6A167B5A41825D967E144E5140564251CCACB83E6B486F6B3CA3F7971506026C0B857F689962856DED4010ABD0BE621C3A3960A54E710C375F26375D7014103A4B54330C198AF126116D2276E11715F693877FAD7EF09CADB094AE91E1A1597",
    )
}

fn rfc5114_q() -> U256 {
    U256::from_be_hex("8CF83642A709A097B447997640129DA299B1A47D1EB3750BA308B0FE64F5FBD3")
}

fn rfc5114_g() -> U2048 {
    U2048::from_be_hex(
        "3FB32C9B73134D0B2E77506660EDBD484CA7B18F21EF205407F4793A1A0BA12510DBC15077BE463FFF4FED4AAC0BB555BE3A6C1B0C6B47B1BC3773BF7E8C6F62901228F8C28CBB18A55AE31341000A650196F931C77A57F2DDF463E5E9EC144B777DE62AAAB8A8628AC376D282D6ED3864E67982428EBC831D14348F6F2F9193B5045AF2767164E1DFC967C1FB3F2E55A4BD1BFFE83B9C80D052B985D182EA0ADB2A3B7313D3FE14C8484B1E052588B9B7D2BBD2DF016199ECD06E1557CD0915B3353BBB64E0EC377FD028370DF92B52C7891428CDC67EB6184B523D1DB246C32F63078490F00EF8D647D148D47954515E2327CFEF98C582664B4C0F6CC41659",
    )
}

#[cfg(test)]
impl ModpGroup {
    /// The order-11 subgroup of quadratic residues mod the safe prime 23,
    /// generated by 2. Small enough to check transcripts by hand.
    pub(crate) fn tiny() -> Self {
        ModpGroup::new(U2048::from_u64(23), U256::from_u64(11), U2048::from_u64(2)).unwrap()
    }
}
