use crypto_bigint::modular::{MontyForm, MontyParams};
use crypto_bigint::{CheckedAdd, CheckedMul, NonZero, Odd, Uint, Zero};

use crate::{Error, Result};

/// Constant-time exponentiation domain for one fixed odd modulus.
///
/// Group moduli never change during a session, so the Montgomery parameters
/// are derived once per group and reused for every exponentiation instead of
/// being recomputed per call. Parameter derivation itself is vartime, which
/// is fine: moduli are public.
#[derive(Clone, Copy, Debug)]
pub struct MontyDomain<const LIMBS: usize> {
    params: MontyParams<LIMBS>,
}

impl<const LIMBS: usize> MontyDomain<LIMBS> {
    /// Builds the domain for `modulus`.
    ///
    /// Fails unless the modulus is odd (which also excludes zero), the
    /// requirement of Montgomery form.
    pub fn new(modulus: &Uint<LIMBS>) -> Result<Self> {
        let odd: Option<Odd<Uint<LIMBS>>> = Odd::new(*modulus).into();
        match odd {
            Some(modulus) => Ok(Self {
                params: MontyParams::new_vartime(modulus),
            }),
            None => Err(Error::InvalidParams(
                "modulus must be odd and non-zero".to_string(),
            )),
        }
    }

    /// Computes `base^exp` modulo the domain's modulus, in constant time.
    pub fn pow(&self, base: &Uint<LIMBS>, exp: &Uint<LIMBS>) -> Uint<LIMBS> {
        MontyForm::new(base, self.params).pow(exp).retrieve()
    }
}

/// Renders an unsigned big integer as its ASCII decimal representation.
///
/// This is the wire form of scalars and MODP group elements.
pub fn to_decimal<const LIMBS: usize>(value: &Uint<LIMBS>) -> String {
    if bool::from(value.is_zero()) {
        return "0".to_string();
    }

    let ten: Option<NonZero<Uint<LIMBS>>> = NonZero::new(Uint::from_u64(10)).into();
    let ten = ten.unwrap_or_else(|| unreachable!("10 is non-zero"));

    let mut remaining = *value;
    let mut digits = Vec::new();
    while !bool::from(remaining.is_zero()) {
        let (quotient, digit) = remaining.div_rem(&ten);
        digits.push(b'0' + digit.as_limbs()[0].0 as u8);
        remaining = quotient;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_else(|_| unreachable!("decimal digits are ASCII"))
}

/// Parses an ASCII decimal string into an unsigned big integer.
///
/// Rejects empty strings, signs, and values that overflow the target width.
/// Signed input is rejected deliberately: the legacy uninitialized-scalar
/// sentinel (`-100`) must never appear on the wire.
pub fn from_decimal<const LIMBS: usize>(digits: &str) -> Result<Uint<LIMBS>> {
    if digits.is_empty() {
        return Err(Error::InvalidInput("empty decimal integer".to_string()));
    }

    let ten: Uint<LIMBS> = Uint::from_u64(10);
    let mut value = Uint::ZERO;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(Error::InvalidInput(format!(
                "malformed decimal integer: unexpected byte {byte:#04x}"
            )));
        }

        let digit: Uint<LIMBS> = Uint::from_u64(u64::from(byte - b'0'));
        let shifted: Option<Uint<LIMBS>> = value.checked_mul(&ten).into();
        let shifted =
            shifted.ok_or_else(|| Error::InvalidInput("decimal integer overflows".to_string()))?;
        let accumulated: Option<Uint<LIMBS>> = shifted.checked_add(&digit).into();
        value = accumulated
            .ok_or_else(|| Error::InvalidInput("decimal integer overflows".to_string()))?;
    }
    Ok(value)
}
