//! Curve names and the two curve families this catalogue covers.

use crate::error::{Error, Result};
use alloc::string::ToString;

/// The curve family a [`CurveName`] belongs to: short-Weierstrass curves
/// over a prime field, or Koblitz curves over `F_{2^m}`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Family {
    /// Affine prime-field curves (component D).
    Prime,
    /// López-Dahab projective binary-field curves (component E).
    Binary,
}

/// The eleven named curves this catalogue resolves.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum CurveName {
    /// NIST P-192 / secp192r1.
    P192,
    /// NIST P-224 / secp224r1.
    P224,
    /// NIST P-256 / secp256r1.
    P256,
    /// NIST P-384 / secp384r1.
    P384,
    /// NIST P-521 / secp521r1.
    P521,
    /// The Bitcoin/Ethereum curve secp256k1.
    Secp256k1,
    /// Koblitz curve K-163 / sect163k1.
    K163,
    /// Koblitz curve K-233 / sect233k1.
    K233,
    /// Koblitz curve K-283 / sect283k1.
    K283,
    /// Koblitz curve K-409 / sect409k1.
    K409,
    /// Koblitz curve K-571 / sect571k1.
    K571,
}

impl CurveName {
    /// Parse a curve name, accepting the common spellings used by NIST,
    /// SEC 2 and the reference implementation this catalogue was built
    /// from (`"P-256"`, `"secp256r1"`, `"P256"`, `"K-163"`, `"sect163k1"`, ...).
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized: alloc::string::String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Ok(match normalized.as_str() {
            "p192" | "secp192r1" | "prime192v1" => CurveName::P192,
            "p224" | "secp224r1" => CurveName::P224,
            "p256" | "secp256r1" | "prime256v1" => CurveName::P256,
            "p384" | "secp384r1" => CurveName::P384,
            "p521" | "secp521r1" => CurveName::P521,
            "secp256k1" | "k256" => CurveName::Secp256k1,
            "k163" | "sect163k1" => CurveName::K163,
            "k233" | "sect233k1" => CurveName::K233,
            "k283" | "sect283k1" => CurveName::K283,
            "k409" | "sect409k1" => CurveName::K409,
            "k571" | "sect571k1" => CurveName::K571,
            _ => return Err(Error::UnknownCurve(raw.to_string())),
        })
    }

    /// The family this curve belongs to.
    pub fn family(self) -> Family {
        match self {
            CurveName::P192
            | CurveName::P224
            | CurveName::P256
            | CurveName::P384
            | CurveName::P521
            | CurveName::Secp256k1 => Family::Prime,
            CurveName::K163
            | CurveName::K233
            | CurveName::K283
            | CurveName::K409
            | CurveName::K571 => Family::Binary,
        }
    }

    /// Canonical display name.
    pub fn as_str(self) -> &'static str {
        match self {
            CurveName::P192 => "P-192",
            CurveName::P224 => "P-224",
            CurveName::P256 => "P-256",
            CurveName::P384 => "P-384",
            CurveName::P521 => "P-521",
            CurveName::Secp256k1 => "secp256k1",
            CurveName::K163 => "K-163",
            CurveName::K233 => "K-233",
            CurveName::K283 => "K-283",
            CurveName::K409 => "K-409",
            CurveName::K571 => "K-571",
        }
    }
}

impl core::fmt::Display for CurveName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!(CurveName::parse("P-256").unwrap(), CurveName::P256);
        assert_eq!(CurveName::parse("secp256r1").unwrap(), CurveName::P256);
        assert_eq!(CurveName::parse("p256").unwrap(), CurveName::P256);
        assert_eq!(CurveName::parse("sect163k1").unwrap(), CurveName::K163);
        assert_eq!(CurveName::parse("K-163").unwrap(), CurveName::K163);
    }

    #[test]
    fn rejects_unknown_name() {
        assert!(CurveName::parse("P-999").is_err());
    }

    #[test]
    fn family_matches_curve_kind() {
        assert_eq!(CurveName::P256.family(), Family::Prime);
        assert_eq!(CurveName::K571.family(), Family::Binary);
    }
}
