#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod error;

pub use crate::error::{Error, Result};
pub use curve_catalogue::CurveName;

use bigint::Integer;
use binary_field::BinaryFieldElement;
use binary_points::ProjectivePoint;
use curve_catalogue::CurveParams;
use prime_points::AffinePoint;
use tracing::instrument;

fn decimal(s: &str) -> Result<Integer> {
    Integer::from_decimal(s).map_err(Error::from)
}

/// `k·P`, for `P = (px, py)` on the named curve.
#[instrument(skip_all, fields(curve = curve_name))]
pub fn mul(curve_name: &str, px: &str, py: &str, k: &str) -> Result<(String, String)> {
    let curve = curve_catalogue::resolve(curve_name)?;
    let px = decimal(px)?;
    let py = decimal(py)?;
    let k = decimal(k)?;

    let result = match &curve {
        CurveParams::Prime(params) => {
            let r = AffinePoint::new(px, py).scalar_mul(&k, &params.p, &params.a)?;
            (r.x().to_decimal(), r.y().to_decimal())
        }
        CurveParams::Binary(params) => {
            let px = BinaryFieldElement::from_integer(params.m, &px)?;
            let py = BinaryFieldElement::from_integer(params.m, &py)?;
            let r = ProjectivePoint::from_affine(px, py)?.scalar_mul(&k)?;
            let (x, y) = r.normalize()?;
            (x.to_decimal(), y.to_decimal())
        }
    };

    tracing::info!(curve = curve_name, "mul succeeded");
    Ok(result)
}

/// `P + Q`, for `P = (px, py)` and `Q = (qx, qy)` on the named curve.
#[instrument(skip_all, fields(curve = curve_name))]
pub fn add(curve_name: &str, px: &str, py: &str, qx: &str, qy: &str) -> Result<(String, String)> {
    let curve = curve_catalogue::resolve(curve_name)?;
    let px = decimal(px)?;
    let py = decimal(py)?;
    let qx = decimal(qx)?;
    let qy = decimal(qy)?;

    let result = match &curve {
        CurveParams::Prime(params) => {
            let p = AffinePoint::new(px, py);
            let q = AffinePoint::new(qx, qy);
            let r = p.add(&q, &params.p)?;
            (r.x().to_decimal(), r.y().to_decimal())
        }
        CurveParams::Binary(params) => {
            let p = ProjectivePoint::from_affine(
                BinaryFieldElement::from_integer(params.m, &px)?,
                BinaryFieldElement::from_integer(params.m, &py)?,
            )?;
            let q = ProjectivePoint::from_affine(
                BinaryFieldElement::from_integer(params.m, &qx)?,
                BinaryFieldElement::from_integer(params.m, &qy)?,
            )?;
            let (x, y) = p.add(&q)?.normalize()?;
            (x.to_decimal(), y.to_decimal())
        }
    };

    tracing::info!(curve = curve_name, "add succeeded");
    Ok(result)
}

/// Sign `digest_hex` under private key `d` with per-signature nonce `k`,
/// on the named curve.
#[instrument(skip_all, fields(curve = curve_name))]
pub fn sign(curve_name: &str, digest_hex: &str, d: &str, k: &str) -> Result<(String, String)> {
    let curve = curve_catalogue::resolve(curve_name)?;
    let d = decimal(d)?;
    let k = decimal(k)?;

    match ecdsa_core::sign(&curve, &d, &k, digest_hex) {
        Ok((r, s)) => {
            tracing::info!(curve = curve_name, "sign succeeded");
            Ok((r.to_decimal(), s.to_decimal()))
        }
        Err(e) => {
            tracing::warn!(curve = curve_name, error = %e, "sign failed");
            Err(e.into())
        }
    }
}

/// Verify that `(r, s)` is a valid signature over `digest_hex` under
/// public key `(qx, qy)`, on the named curve.
#[instrument(skip_all, fields(curve = curve_name))]
pub fn verify(curve_name: &str, r: &str, s: &str, digest_hex: &str, qx: &str, qy: &str) -> Result<bool> {
    let curve = curve_catalogue::resolve(curve_name)?;
    let r = decimal(r)?;
    let s = decimal(s)?;
    let qx = decimal(qx)?;
    let qy = decimal(qy)?;

    match ecdsa_core::verify(&curve, &qx, &qy, &r, &s, digest_hex) {
        Ok(ok) => {
            tracing::info!(curve = curve_name, valid = ok, "verify completed");
            Ok(ok)
        }
        Err(e) => {
            tracing::warn!(curve = curve_name, error = %e, "verify failed");
            Err(e.into())
        }
    }
}
