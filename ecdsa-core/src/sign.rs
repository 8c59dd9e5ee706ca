//! ECDSA signature generation.

use crate::digest;
use crate::error::{Error, Result};
use bigint::Integer;
use binary_points::ProjectivePoint;
use curve_catalogue::CurveParams;
use prime_points::AffinePoint;

/// Sign `e_hex` (a digest, as hex) under private key `d` using the
/// per-signature secret nonce `k`, on the curve named by `curve`.
///
/// Callers are responsible for generating `k` (e.g. via RFC 6979) and for
/// hashing the message into `e_hex`; neither is done here. Returns
/// [`Error::ZeroR`] or [`Error::ZeroS`] if the unlucky-but-possible `r == 0`
/// or `s == 0` case occurs, in which case the caller should retry with a
/// fresh `k`.
pub fn sign(curve: &CurveParams, d: &Integer, k: &Integer, e_hex: &str) -> Result<(Integer, Integer)> {
    match curve {
        CurveParams::Prime(params) => {
            let g = AffinePoint::new(params.gx.clone(), params.gy.clone());
            let r_point = g.scalar_mul(k, &params.p, &params.a)?;
            let r = r_point.x().modulo(&params.n);
            if r.is_zero() {
                return Err(Error::ZeroR);
            }

            let e = digest::truncate(e_hex, params.n.bit_length())?;
            let k_inv = k.invert_mod(&params.n)?;
            let s = k_inv.mul_mod(&e.add_mod(&d.mul_mod(&r, &params.n), &params.n), &params.n);
            if s.is_zero() {
                return Err(Error::ZeroS);
            }

            Ok((r, s))
        }
        CurveParams::Binary(params) => {
            let g = ProjectivePoint::from_affine(params.gx.clone(), params.gy.clone())?;
            let r_point = g.scalar_mul(k)?;
            let (rx, _ry) = r_point.normalize()?;
            let r = rx.modulo(&params.n);
            if r.is_zero() {
                return Err(Error::ZeroR);
            }

            let e = digest::truncate(e_hex, params.n.bit_length())?;
            let k_inv = k.invert_mod(&params.n)?;
            let s = k_inv.mul_mod(&e.add_mod(&d.mul_mod(&r, &params.n), &params.n), &params.n);
            if s.is_zero() {
                return Err(Error::ZeroS);
            }

            Ok((r, s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_on_p256() {
        let curve = curve_catalogue::resolve("P-256").unwrap();
        let d = Integer::from_u64(12345);
        let k = Integer::from_u64(98765);
        let (r, s) = sign(&curve, &d, &k, "deadbeef").unwrap();
        assert!(!r.is_zero());
        assert!(!s.is_zero());
    }

    #[test]
    fn signs_on_k163() {
        let curve = curve_catalogue::resolve("K-163").unwrap();
        let d = Integer::from_u64(42);
        let k = Integer::from_u64(7);
        let (r, s) = sign(&curve, &d, &k, "c0ffee").unwrap();
        assert!(!r.is_zero());
        assert!(!s.is_zero());
    }
}
