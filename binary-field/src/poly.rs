//! Variable-length `F_2[t]` polynomials used internally by extended-Euclidean
//! inversion, where intermediate quantities can temporarily grow beyond the
//! canonical `m`-bit width before folding back down.

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Debug)]
pub(crate) struct Poly {
    words: Vec<u32>,
}

impl Poly {
    pub(crate) fn zero() -> Self {
        Poly { words: vec![0] }
    }

    pub(crate) fn one() -> Self {
        Poly { words: vec![1] }
    }

    pub(crate) fn from_words(words: Vec<u32>) -> Self {
        let mut p = Poly { words };
        if p.words.is_empty() {
            p.words.push(0);
        }
        p
    }

    pub(crate) fn into_words(self) -> Vec<u32> {
        self.words
    }

    /// Degree of the highest set bit, or `0` if the polynomial is zero
    /// (matching the source's convention during inversion bookkeeping).
    pub(crate) fn degree(&self) -> usize {
        for (i, &word) in self.words.iter().enumerate().rev() {
            if word != 0 {
                let bit = 31 - word.leading_zeros() as usize;
                return i * 32 + bit;
            }
        }
        0
    }

    pub(crate) fn is_one(&self) -> bool {
        self.words.first() == Some(&1) && self.words[1..].iter().all(|&w| w == 0)
    }

    pub(crate) fn add(&self, other: &Poly) -> Poly {
        let len = self.words.len().max(other.words.len());
        let mut out = vec![0u32; len];
        for (i, word) in out.iter_mut().enumerate() {
            let a = self.words.get(i).copied().unwrap_or(0);
            let b = other.words.get(i).copied().unwrap_or(0);
            *word = a ^ b;
        }
        Poly::from_words(out)
    }

    /// Left-shift by `amount` bits, growing the word vector as needed.
    pub(crate) fn shl(&self, amount: usize) -> Poly {
        if amount == 0 {
            return self.clone();
        }

        let word_shift = amount / 32;
        let bit_shift = (amount % 32) as u32;
        let extra = if bit_shift == 0 { 0 } else { 1 };
        let mut out = vec![0u32; self.words.len() + word_shift + extra + 1];

        for (i, &word) in self.words.iter().enumerate() {
            if word == 0 {
                continue;
            }
            if bit_shift == 0 {
                out[i + word_shift] ^= word;
            } else {
                out[i + word_shift] ^= word << bit_shift;
                out[i + word_shift + 1] ^= word >> (32 - bit_shift);
            }
        }

        Poly::from_words(out)
    }
}
