//! The five supported Koblitz extension degrees and their fixed reduction
//! polynomials.

use crate::error::{Error, Result};

/// The extension degrees this crate supports, matching the Koblitz curves
/// K-163/233/283/409/571.
pub const SUPPORTED_DEGREES: [usize; 5] = [163, 233, 283, 409, 571];

/// Reduction-polynomial exponents for `m`, *excluding* the leading `t^m`
/// term but *including* the constant `1` (exponent `0`), sorted ascending.
///
/// `f(t) = t^m + Σ t^e` for `e` in the returned slice.
pub const fn reduction_terms(m: usize) -> Result<&'static [u32]> {
    match m {
        // t^163 + t^7 + t^6 + t^3 + 1
        163 => Ok(&[0, 3, 6, 7]),
        // t^233 + t^74 + 1
        233 => Ok(&[0, 74]),
        // t^283 + t^12 + t^7 + t^5 + 1
        283 => Ok(&[0, 5, 7, 12]),
        // t^409 + t^87 + 1
        409 => Ok(&[0, 87]),
        // t^571 + t^10 + t^5 + t^2 + 1
        571 => Ok(&[0, 2, 5, 10]),
        other => Err(Error::UnsupportedDegree(other)),
    }
}

/// Canonical word length `w = ⌈(m+1)/32⌉` for an element of degree `m`.
pub const fn canonical_words(m: usize) -> usize {
    (m + 1 + 31) / 32
}

/// Validate that `m` is one of the five supported Koblitz degrees.
pub const fn validate(m: usize) -> Result<()> {
    match reduction_terms(m) {
        Ok(_) => Ok(()),
        Err(e) => Err(e),
    }
}
