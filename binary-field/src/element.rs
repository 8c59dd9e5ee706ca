//! Elements of `F_{2^m}`.

use crate::degree::{canonical_words, validate};
use crate::error::{Error, Result};
use crate::poly::Poly;
use crate::reduce;
use crate::sqr_table::SQR_T;
use alloc::vec;
use alloc::vec::Vec;
use bigint::Integer;

/// An element of `F_{2^m}`, represented as `⌈(m+1)/32⌉` little-endian 32-bit
/// words (word 0 holds the coefficients of `t^0..t^31`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinaryFieldElement {
    m: usize,
    words: Vec<u32>,
}

impl BinaryFieldElement {
    /// The zero element of `F_{2^m}`.
    pub fn zero(m: usize) -> Result<Self> {
        validate(m)?;
        Ok(BinaryFieldElement {
            m,
            words: vec![0u32; canonical_words(m)],
        })
    }

    /// The multiplicative identity of `F_{2^m}`.
    pub fn one(m: usize) -> Result<Self> {
        let mut element = Self::zero(m)?;
        element.words[0] = 1;
        Ok(element)
    }

    /// Build an element from raw little-endian words, truncating or
    /// zero-padding to the canonical width for `m`.
    pub fn from_words(m: usize, mut words: Vec<u32>) -> Result<Self> {
        validate(m)?;
        let w = canonical_words(m);
        words.resize(w, 0);
        let top_bits = (m as u32 % 32) + 1;
        if top_bits < 32 {
            words[w - 1] &= (1u32 << top_bits) - 1;
        }
        Ok(BinaryFieldElement { m, words })
    }

    /// Build an element by reading the bits of an arbitrary-precision
    /// integer, low bit first (the convention used to pass binary-curve
    /// coordinates across the public decimal-string API).
    pub fn from_integer(m: usize, value: &Integer) -> Result<Self> {
        validate(m)?;
        let w = canonical_words(m);
        let mut words = vec![0u32; w];
        for bit in 0..=(m as u64) {
            if value.test_bit(bit) {
                let word = (bit / 32) as usize;
                if word < w {
                    words[word] |= 1 << (bit % 32);
                }
            }
        }
        Self::from_words(m, words)
    }

    /// Convert back to an arbitrary-precision integer by setting bits.
    pub fn to_integer(&self) -> Integer {
        let mut value = Integer::zero();
        for (i, &word) in self.words.iter().enumerate() {
            if word == 0 {
                continue;
            }
            value = value.add(&Integer::from_u64(word as u64).shl((i as u64) * 32));
        }
        value
    }

    /// The extension degree this element belongs to.
    pub fn degree_param(&self) -> usize {
        self.m
    }

    /// `self == 0`.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// `self == 1`.
    pub fn is_one(&self) -> bool {
        self.words.first() == Some(&1) && self.words[1..].iter().all(|&w| w == 0)
    }

    /// Degree of this element as a polynomial (highest set bit, or `0` for
    /// the zero element).
    pub fn degree(&self) -> usize {
        for (i, &word) in self.words.iter().enumerate().rev() {
            if word != 0 {
                let bit = 31 - word.leading_zeros() as usize;
                return i * 32 + bit;
            }
        }
        0
    }

    fn require_same_degree(&self, other: &Self) -> Result<()> {
        if self.m != other.m {
            Err(Error::DegreeMismatch)
        } else {
            Ok(())
        }
    }

    /// Coefficient-wise XOR.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.require_same_degree(other)?;
        let words = self
            .words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| a ^ b)
            .collect();
        Self::from_words(self.m, words)
    }

    /// Schoolbook bit-serial multiplication followed by fast reduction.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.require_same_degree(other)?;
        let w = self.words.len();
        let mut acc = vec![0u32; 2 * w];
        let mut b = other.words.clone();
        b.resize(2 * w, 0);

        for k in 0..32u32 {
            for (j, &aw) in self.words.iter().enumerate() {
                if aw & (1 << k) != 0 {
                    for (i, &bw) in b.iter().enumerate() {
                        if j + i < acc.len() {
                            acc[j + i] ^= bw;
                        }
                    }
                }
            }
            if k != 31 {
                shl1(&mut b);
            }
        }

        reduce::reduce(&mut acc, self.m)?;
        Self::from_words(self.m, acc)
    }

    /// Squaring via the 256-entry bit-interleaving lookup table, followed by
    /// fast reduction.
    pub fn square(&self) -> Result<Self> {
        let w = self.words.len();
        let mut acc = vec![0u32; 2 * w];
        for (i, &word) in self.words.iter().enumerate() {
            let bytes = word.to_le_bytes();
            let lo = SQR_T[bytes[0] as usize] as u32 | (SQR_T[bytes[1] as usize] as u32) << 16;
            let hi = SQR_T[bytes[2] as usize] as u32 | (SQR_T[bytes[3] as usize] as u32) << 16;
            acc[2 * i] = lo;
            acc[2 * i + 1] = hi;
        }
        reduce::reduce(&mut acc, self.m)?;
        Self::from_words(self.m, acc)
    }

    /// Multiplicative inverse via the extended Euclidean algorithm for
    /// polynomials over `F_2` (Algorithm 2.48, *Guide to Elliptic Curve
    /// Cryptography*).
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::InverseOfZero);
        }

        let modulus = reduction_polynomial(self.m)?;
        let mut u = Poly::from_words(self.words.clone());
        let mut v = modulus;
        let mut g1 = Poly::one();
        let mut g2 = Poly::zero();

        while !u.is_one() {
            let mut j = u.degree() as i64 - v.degree() as i64;
            if j < 0 {
                core::mem::swap(&mut u, &mut v);
                core::mem::swap(&mut g1, &mut g2);
                j = -j;
            }
            u = u.add(&v.shl(j as usize));
            g1 = g1.add(&g2.shl(j as usize));
        }

        Self::from_words(self.m, g1.into_words())
    }
}

/// Build the reduction polynomial `f(t) = t^m + Σ t^e + 1` as a [`Poly`].
fn reduction_polynomial(m: usize) -> Result<Poly> {
    let terms = crate::degree::reduction_terms(m)?;
    let mut words = vec![0u32; canonical_words(m)];
    words[m / 32] |= 1 << (m % 32);
    for &e in terms {
        words[(e as usize) / 32] |= 1 << (e % 32);
    }
    Ok(Poly::from_words(words))
}

fn shl1(words: &mut [u32]) {
    let mut carry = 0u32;
    for word in words.iter_mut() {
        let new_carry = *word >> 31;
        *word = (*word << 1) | carry;
        carry = new_carry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_involutive() {
        let a = BinaryFieldElement::from_words(163, vec![5, 0, 0, 0, 0, 0]).unwrap();
        let b = BinaryFieldElement::from_words(163, vec![9, 0, 0, 0, 0, 0]).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.add(&b).unwrap(), a);
    }

    #[test]
    fn multiply_by_one_is_identity() {
        let a = BinaryFieldElement::from_words(163, vec![0x1234_5678, 0, 0, 0, 0, 0]).unwrap();
        let one = BinaryFieldElement::one(163).unwrap();
        assert_eq!(a.mul(&one).unwrap(), a);
    }

    #[test]
    fn square_matches_self_multiply() {
        let a = BinaryFieldElement::from_words(163, vec![0xABCD_1234, 0x55, 0, 0, 0, 0]).unwrap();
        assert_eq!(a.square().unwrap(), a.mul(&a).unwrap());
    }

    #[test]
    fn invert_round_trips() {
        let a = BinaryFieldElement::from_words(163, vec![0x1234_5678, 0, 0, 0, 0, 0]).unwrap();
        let inv = a.invert().unwrap();
        let product = a.mul(&inv).unwrap();
        assert!(product.is_one());
    }

    #[test]
    fn invert_of_zero_errors() {
        let zero = BinaryFieldElement::zero(163).unwrap();
        assert_eq!(zero.invert(), Err(Error::InverseOfZero));
    }

    #[test]
    fn integer_round_trip() {
        let value = Integer::from_decimal("123456789").unwrap();
        let element = BinaryFieldElement::from_integer(163, &value).unwrap();
        assert_eq!(element.to_integer(), value);
    }
}
