//! Name-to-parameters dispatch across both curve families.

use crate::binary::{self, BinaryCurveParams};
use crate::error::Result;
use crate::name::{CurveName, Family};
use crate::prime::{self, PrimeCurveParams};

/// The resolved domain parameters for a named curve, tagged by family.
#[derive(Clone, Debug)]
pub enum CurveParams {
    /// A short-Weierstrass curve over a prime field.
    Prime(PrimeCurveParams),
    /// A Koblitz curve over `F_{2^m}`.
    Binary(BinaryCurveParams),
}

impl CurveParams {
    /// The curve's name, regardless of family.
    pub fn name(&self) -> CurveName {
        match self {
            CurveParams::Prime(p) => p.name,
            CurveParams::Binary(b) => b.name,
        }
    }
}

/// Resolve a curve name (any spelling accepted by [`CurveName::parse`])
/// into its full domain parameters.
///
/// Each of the eleven curves is built at most once and cached behind a
/// `std::sync::OnceLock`; repeated calls for the same curve return the
/// cached parameters rather than re-parsing the hardcoded literals.
pub fn resolve(name: &str) -> Result<CurveParams> {
    let curve = CurveName::parse(name)?;
    resolve_curve(curve)
}

fn build(curve: CurveName) -> Result<CurveParams> {
    match curve.family() {
        Family::Prime => Ok(CurveParams::Prime(prime::params(curve)?)),
        Family::Binary => Ok(CurveParams::Binary(binary::params(curve)?)),
    }
}

/// Index of `curve` into [`CACHE`], matching [`CurveName`]'s declaration
/// order.
#[cfg(feature = "std")]
fn slot(curve: CurveName) -> usize {
    match curve {
        CurveName::P192 => 0,
        CurveName::P224 => 1,
        CurveName::P256 => 2,
        CurveName::P384 => 3,
        CurveName::P521 => 4,
        CurveName::Secp256k1 => 5,
        CurveName::K163 => 6,
        CurveName::K233 => 7,
        CurveName::K283 => 8,
        CurveName::K409 => 9,
        CurveName::K571 => 10,
    }
}

#[cfg(feature = "std")]
static CACHE: [std::sync::OnceLock<Result<CurveParams>>; 11] = [
    std::sync::OnceLock::new(),
    std::sync::OnceLock::new(),
    std::sync::OnceLock::new(),
    std::sync::OnceLock::new(),
    std::sync::OnceLock::new(),
    std::sync::OnceLock::new(),
    std::sync::OnceLock::new(),
    std::sync::OnceLock::new(),
    std::sync::OnceLock::new(),
    std::sync::OnceLock::new(),
    std::sync::OnceLock::new(),
];

#[cfg(feature = "std")]
fn resolve_curve(curve: CurveName) -> Result<CurveParams> {
    CACHE[slot(curve)].get_or_init(|| build(curve)).clone()
}

// `std::sync::OnceLock` has no `core`/`alloc` equivalent; without `std`
// there is nowhere to park a process-wide cache, so each call rebuilds.
#[cfg(not(feature = "std"))]
fn resolve_curve(curve: CurveName) -> Result<CurveParams> {
    build(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_prime_curve_by_name() {
        let params = resolve("P-256").unwrap();
        assert_eq!(params.name(), CurveName::P256);
        assert!(matches!(params, CurveParams::Prime(_)));
    }

    #[test]
    fn resolves_binary_curve_by_name() {
        let params = resolve("sect163k1").unwrap();
        assert_eq!(params.name(), CurveName::K163);
        assert!(matches!(params, CurveParams::Binary(_)));
    }

    #[test]
    fn rejects_unknown_name() {
        assert!(resolve("not-a-curve").is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn resolve_populates_the_cache_slot() {
        assert!(CACHE[slot(CurveName::P224)].get().is_none());
        let first = resolve("P-224").unwrap();
        assert!(CACHE[slot(CurveName::P224)].get().is_some());
        let second = resolve("secp224r1").unwrap();
        assert_eq!(first.name(), second.name());
    }
}
