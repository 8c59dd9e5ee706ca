//! Affine points and the operations over them.

use crate::error::{Error, Result};
use bigint::Integer;

/// An affine point `(x, y)` on a short-Weierstrass curve over `F_p`. The
/// point at infinity has no representation here; see the crate docs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    x: Integer,
    y: Integer,
}

impl AffinePoint {
    /// Build a point from its coordinates, without checking it lies on any
    /// particular curve.
    pub fn new(x: Integer, y: Integer) -> Self {
        AffinePoint { x, y }
    }

    /// The `x` coordinate.
    pub fn x(&self) -> &Integer {
        &self.x
    }

    /// The `y` coordinate.
    pub fn y(&self) -> &Integer {
        &self.y
    }

    /// `P + Q`, for `P != Q` and `P != -Q`. Use [`AffinePoint::double`] when
    /// the operands are the same point.
    ///
    /// ```text
    /// λ  = (y2 - y1) * (x2 - x1)^-1 mod p
    /// x3 = λ² - x1 - x2 mod p
    /// y3 = λ*(x1 - x3) - y1 mod p
    /// ```
    pub fn add(&self, other: &Self, p: &Integer) -> Result<Self> {
        let dx = other.x.sub_mod(&self.x, p);
        if dx.is_zero() {
            return Err(Error::PointsNotAddable);
        }
        let dy = other.y.sub_mod(&self.y, p);
        let lambda = dy.mul_mod(&dx.invert_mod(p)?, p);

        let x3 = lambda
            .mul_mod(&lambda, p)
            .sub_mod(&self.x, p)
            .sub_mod(&other.x, p);
        let y3 = lambda.mul_mod(&self.x.sub_mod(&x3, p), p).sub_mod(&self.y, p);

        Ok(AffinePoint { x: x3, y: y3 })
    }

    /// `2·P`, for `P`'s `y`-coordinate `!= 0`.
    ///
    /// ```text
    /// λ  = (3·x1² + a) * (2·y1)^-1 mod p
    /// x3 = λ² - 2·x1 mod p
    /// y3 = λ*(x1 - x3) - y1 mod p
    /// ```
    pub fn double(&self, p: &Integer, a: &Integer) -> Result<Self> {
        if self.y.is_zero() {
            return Err(Error::DoublingAtInfinity);
        }
        let three_x_sq = self.x.mul_mod(&self.x, p).mul_small(3).modulo(p);
        let numerator = three_x_sq.add_mod(a, p);
        let denominator = self.y.mul_small(2).modulo(p);
        let lambda = numerator.mul_mod(&denominator.invert_mod(p)?, p);

        let x3 = lambda
            .mul_mod(&lambda, p)
            .sub_mod(&self.x.mul_small(2).modulo(p), p);
        let y3 = lambda.mul_mod(&self.x.sub_mod(&x3, p), p).sub_mod(&self.y, p);

        Ok(AffinePoint { x: x3, y: y3 })
    }

    /// Constant-iteration Montgomery-ladder scalar multiplication `k·P`.
    ///
    /// Every iteration performs exactly one addition and one doubling,
    /// regardless of the corresponding bit of `k`, so the schedule of
    /// operations does not depend on `k`'s value.
    pub fn scalar_mul(&self, k: &Integer, p: &Integer, a: &Integer) -> Result<Self> {
        let k_bits = k.bit_length();
        let mut r0 = self.clone();
        if k_bits < 2 {
            return Ok(r0);
        }
        let mut r1 = self.double(p, a)?;

        for i in (0..=(k_bits - 2)).rev() {
            if k.test_bit(i) {
                r0 = r0.add(&r1, p)?;
                r1 = r1.double(p, a)?;
            } else {
                r1 = r0.add(&r1, p)?;
                r0 = r0.double(p, a)?;
            }
        }

        Ok(r0)
    }

    /// Shamir's simultaneous multiply-add: `k1·p1 + k2·p2`, at roughly the
    /// cost of a single scalar multiplication. Used by ECDSA verification,
    /// where both scalars are public.
    pub fn shamir_multiply_add(
        k1: &Integer,
        p1: &Self,
        k2: &Integer,
        p2: &Self,
        p: &Integer,
        a: &Integer,
    ) -> Result<Self> {
        let sum = p1.add(p2, p)?;
        let l = core::cmp::max(k1.bit_length(), k2.bit_length()) - 1;

        let mut r = match (k1.test_bit(l), k2.test_bit(l)) {
            (true, true) => sum.clone(),
            (true, false) => p1.clone(),
            (false, true) => p2.clone(),
            (false, false) => unreachable!("l is the top bit of the longer scalar"),
        };

        if l == 0 {
            return Ok(r);
        }

        for i in (0..l).rev() {
            r = r.double(p, a)?;
            r = match (k1.test_bit(i), k2.test_bit(i)) {
                (true, true) => r.add(&sum, p)?,
                (true, false) => r.add(p1, p)?,
                (false, true) => r.add(p2, p)?,
                (false, false) => r,
            };
        }

        Ok(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // secp256k1: p = 2^256 - 2^32 - 977, a = 0, b = 7.
    fn secp256k1_p() -> Integer {
        Integer::from_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f").unwrap()
    }

    fn secp256k1_a() -> Integer {
        Integer::zero()
    }

    fn secp256k1_g() -> AffinePoint {
        AffinePoint::new(
            Integer::from_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798").unwrap(),
            Integer::from_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8").unwrap(),
        )
    }

    #[test]
    fn doubling_matches_self_addition_order() {
        let p = secp256k1_p();
        let a = secp256k1_a();
        let g = secp256k1_g();
        let doubled = g.double(&p, &a).unwrap();
        let two = g.scalar_mul(&Integer::from_u64(2), &p, &a).unwrap();
        assert_eq!(doubled, two);
    }

    #[test]
    fn scalar_mul_is_additive() {
        let p = secp256k1_p();
        let a = secp256k1_a();
        let g = secp256k1_g();
        let three = g.scalar_mul(&Integer::from_u64(3), &p, &a).unwrap();
        let two_plus_one = g
            .scalar_mul(&Integer::from_u64(2), &p, &a)
            .unwrap()
            .add(&g, &p)
            .unwrap();
        assert_eq!(three, two_plus_one);
    }

    #[test]
    fn scalar_mul_by_one_is_identity() {
        let p = secp256k1_p();
        let a = secp256k1_a();
        let g = secp256k1_g();
        assert_eq!(g.scalar_mul(&Integer::from_u64(1), &p, &a).unwrap(), g);
    }

    #[test]
    fn adding_negation_errors() {
        let p = secp256k1_p();
        let g = secp256k1_g();
        let neg_g = AffinePoint::new(g.x().clone(), Integer::zero().sub_mod(g.y(), &p));
        assert_eq!(g.add(&neg_g, &p), Err(Error::PointsNotAddable));
    }

    #[test]
    fn shamir_matches_two_ladders_plus_add() {
        let p = secp256k1_p();
        let a = secp256k1_a();
        let g = secp256k1_g();
        let h = g.scalar_mul(&Integer::from_u64(5), &p, &a).unwrap();

        let k1 = Integer::from_u64(7);
        let k2 = Integer::from_u64(11);

        let direct = AffinePoint::shamir_multiply_add(&k1, &g, &k2, &h, &p, &a).unwrap();
        let expected = g
            .scalar_mul(&k1, &p, &a)
            .unwrap()
            .add(&h.scalar_mul(&k2, &p, &a).unwrap(), &p)
            .unwrap();
        assert_eq!(direct, expected);
    }
}
