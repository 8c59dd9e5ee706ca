//! Arbitrary-precision non-negative integer facade.

use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::{One, Zero};

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// An arbitrary-precision non-negative integer.
///
/// Thin wrapper around [`BigUint`] exposing only the operations the curve
/// arithmetic and ECDSA layers need: construction from decimal/hex text,
/// modular arithmetic, bit inspection, and decimal formatting.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Integer(BigUint);

impl Integer {
    /// The integer zero.
    pub fn zero() -> Self {
        Integer(BigUint::zero())
    }

    /// The integer one.
    pub fn one() -> Self {
        Integer(BigUint::one())
    }

    /// Build an [`Integer`] from a small unsigned value.
    pub fn from_u64(value: u64) -> Self {
        Integer(BigUint::from(value))
    }

    /// Parse a non-negative base-10 ASCII decimal string.
    pub fn from_decimal(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Parse);
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Integer)
            .ok_or(Error::Parse)
    }

    /// Parse a non-negative base-16 ASCII string (no `0x` prefix, any case).
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::Parse);
        }
        BigUint::parse_bytes(s.as_bytes(), 16)
            .map(Integer)
            .ok_or(Error::Parse)
    }

    /// Render as a base-10 ASCII decimal string.
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }

    /// `self == 0`.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Bit length. The bit length of zero is defined as `1`, matching the
    /// source's reliance on it during Montgomery-ladder setup.
    pub fn bit_length(&self) -> u64 {
        let bits = self.0.bits();
        if bits == 0 {
            1
        } else {
            bits
        }
    }

    /// Test bit at `index` (0 = least significant).
    pub fn test_bit(&self, index: u64) -> bool {
        self.0.bit(index)
    }

    /// Logical right shift by `shift` bits.
    pub fn shr(&self, shift: u64) -> Self {
        Integer(&self.0 >> shift)
    }

    /// Logical left shift by `shift` bits.
    pub fn shl(&self, shift: u64) -> Self {
        Integer(&self.0 << shift)
    }

    /// Unbounded addition.
    pub fn add(&self, other: &Self) -> Self {
        Integer(&self.0 + &other.0)
    }

    /// Unbounded subtraction. Returns `None` if `self < other` since this
    /// facade only represents non-negative integers.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.0 < other.0 {
            None
        } else {
            Some(Integer(&self.0 - &other.0))
        }
    }

    /// Unbounded multiplication.
    pub fn mul(&self, other: &Self) -> Self {
        Integer(&self.0 * &other.0)
    }

    /// Multiply by a small unsigned constant.
    pub fn mul_small(&self, small: u64) -> Self {
        Integer(&self.0 * BigUint::from(small))
    }

    /// `self mod modulus`.
    pub fn modulo(&self, modulus: &Self) -> Self {
        Integer(&self.0 % &modulus.0)
    }

    /// `(self + other) mod modulus`.
    pub fn add_mod(&self, other: &Self, modulus: &Self) -> Self {
        self.add(other).modulo(modulus)
    }

    /// `(self - other) mod modulus`, always returning a non-negative
    /// residue (i.e. `self` and `other` need not already be reduced, and
    /// `other` may be larger than `self`).
    pub fn sub_mod(&self, other: &Self, modulus: &Self) -> Self {
        let a = self.modulo(modulus);
        let b = other.modulo(modulus);
        if a.0 >= b.0 {
            Integer(&a.0 - &b.0)
        } else {
            Integer(&modulus.0 - &b.0 + &a.0)
        }
    }

    /// `(self * other) mod modulus`.
    pub fn mul_mod(&self, other: &Self, modulus: &Self) -> Self {
        self.mul(other).modulo(modulus)
    }

    /// Modular inverse of `self` modulo `modulus`, via the extended
    /// Euclidean algorithm. Raises [`Error::InverseOfZero`] if `self mod
    /// modulus == 0`, since zero has no multiplicative inverse.
    pub fn invert_mod(&self, modulus: &Self) -> Result<Self> {
        let a = self.modulo(modulus);
        if a.is_zero() {
            return Err(Error::InverseOfZero);
        }

        // Extended Euclidean algorithm over signed BigInt, then normalize
        // the Bezout coefficient into [0, modulus).
        use num_bigint::BigInt;
        let (gcd, x, _y) = extended_gcd(&BigInt::from(a.0.clone()), &BigInt::from(modulus.0.clone()));
        if gcd != BigInt::one() {
            return Err(Error::InverseOfZero);
        }
        let m = BigInt::from(modulus.0.clone());
        let inv = ((x % &m) + &m) % &m;
        Ok(Integer(inv.to_biguint().expect("non-negative by construction")))
    }
}

/// Extended Euclidean algorithm: returns `(gcd, x, y)` such that
/// `a*x + b*y == gcd`.
fn extended_gcd(
    a: &num_bigint::BigInt,
    b: &num_bigint::BigInt,
) -> (num_bigint::BigInt, num_bigint::BigInt, num_bigint::BigInt) {
    use num_bigint::BigInt;

    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (quotient, remainder) = old_r.div_rem(&r);
        old_r = r;
        r = remainder;

        let new_s = &old_s - &quotient * &s;
        old_s = s;
        s = new_s;

        let new_t = &old_t - &quotient * &t;
        old_t = t;
        t = new_t;
    }

    (old_r, old_s, old_t)
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Integer::from_u64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_round_trip() {
        let i = Integer::from_decimal("123456789012345678901234567890").unwrap();
        assert_eq!(i.to_decimal(), "123456789012345678901234567890");
    }

    #[test]
    fn hex_parses_as_expected_decimal() {
        let i = Integer::from_hex("ff").unwrap();
        assert_eq!(i.to_decimal(), "255");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Integer::from_decimal("").is_err());
        assert!(Integer::from_decimal("12a3").is_err());
        assert!(Integer::from_decimal("-5").is_err());
        assert!(Integer::from_hex("ffgg").is_err());
    }

    #[test]
    fn bit_length_of_zero_is_one() {
        assert_eq!(Integer::zero().bit_length(), 1);
        assert_eq!(Integer::from_u64(1).bit_length(), 1);
        assert_eq!(Integer::from_u64(2).bit_length(), 2);
        assert_eq!(Integer::from_u64(255).bit_length(), 8);
    }

    #[test]
    fn test_bit_matches_shifts() {
        let i = Integer::from_u64(0b1010);
        assert!(!i.test_bit(0));
        assert!(i.test_bit(1));
        assert!(!i.test_bit(2));
        assert!(i.test_bit(3));
    }

    #[test]
    fn shr_matches_division() {
        let i = Integer::from_u64(1024);
        assert_eq!(i.shr(3), Integer::from_u64(128));
    }

    #[test]
    fn sub_mod_handles_wraparound() {
        let p = Integer::from_u64(17);
        let a = Integer::from_u64(3);
        let b = Integer::from_u64(10);
        // 3 - 10 mod 17 == 10
        assert_eq!(a.sub_mod(&b, &p), Integer::from_u64(10));
    }

    #[test]
    fn invert_mod_is_correct() {
        let p = Integer::from_u64(17);
        let a = Integer::from_u64(5);
        let inv = a.invert_mod(&p).unwrap();
        assert_eq!(a.mul_mod(&inv, &p), Integer::from_u64(1));
    }

    #[test]
    fn invert_of_zero_errors() {
        let p = Integer::from_u64(17);
        assert_eq!(Integer::zero().invert_mod(&p), Err(Error::InverseOfZero));
    }

    #[test]
    fn mul_small_matches_mul() {
        let a = Integer::from_u64(12345);
        assert_eq!(a.mul_small(7), a.mul(&Integer::from_u64(7)));
    }
}
