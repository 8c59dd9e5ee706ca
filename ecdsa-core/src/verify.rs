//! ECDSA signature verification.

use crate::digest;
use crate::error::{Error, Result};
use bigint::Integer;
use binary_field::BinaryFieldElement;
use binary_points::ProjectivePoint;
use curve_catalogue::CurveParams;
use prime_points::AffinePoint;

/// Verify that `(r, s)` is a valid signature over `e_hex` (a digest, as
/// hex) under public key `(qx, qy)`, on the curve named by `curve`.
///
/// Returns [`Error::Precondition`] when `r` or `s` fails the `1 <= r, s
/// < n` precondition — a structural fault in the inputs, not a verdict
/// on the signature — and `Ok(false)` only once that precondition holds
/// and the signature equation itself fails to reproduce `r`.
pub fn verify(
    curve: &CurveParams,
    qx: &Integer,
    qy: &Integer,
    r: &Integer,
    s: &Integer,
    e_hex: &str,
) -> Result<bool> {
    match curve {
        CurveParams::Prime(params) => {
            if r.is_zero() || *r >= params.n || s.is_zero() || *s >= params.n {
                return Err(Error::Precondition);
            }

            let e = digest::truncate(e_hex, params.n.bit_length())?;
            let w = s.invert_mod(&params.n)?;
            let u1 = e.mul_mod(&w, &params.n);
            let u2 = r.mul_mod(&w, &params.n);

            let g = AffinePoint::new(params.gx.clone(), params.gy.clone());
            let q = AffinePoint::new(qx.clone(), qy.clone());
            let x_point = AffinePoint::shamir_multiply_add(&u1, &g, &u2, &q, &params.p, &params.a)?;

            Ok(x_point.x().modulo(&params.n) == *r)
        }
        CurveParams::Binary(params) => {
            if r.is_zero() || *r >= params.n || s.is_zero() || *s >= params.n {
                return Err(Error::Precondition);
            }

            let e = digest::truncate(e_hex, params.n.bit_length())?;
            let w = s.invert_mod(&params.n)?;
            let u1 = e.mul_mod(&w, &params.n);
            let u2 = r.mul_mod(&w, &params.n);

            let g = ProjectivePoint::from_affine(params.gx.clone(), params.gy.clone())?;
            let qx_elem = BinaryFieldElement::from_integer(params.m, qx)?;
            let qy_elem = BinaryFieldElement::from_integer(params.m, qy)?;
            let q = ProjectivePoint::from_affine(qx_elem, qy_elem)?;

            let x_point = g.scalar_mul(&u1)?.add(&q.scalar_mul(&u2)?)?;
            let (x, _y) = x_point.normalize()?;

            Ok(x.modulo(&params.n) == *r)
        }
    }
}
