//! López-Dahab projective points and the operations over them.

use crate::error::{Error, Result};
use bigint::Integer;
use binary_field::BinaryFieldElement;

/// A point `(X, Y, Z)` on a Koblitz curve `y² + xy = x³ + ax² + b` over
/// `F_{2^m}`, in López-Dahab projective coordinates. The affine point is
/// `(X/Z, Y/Z)` when `Z != 0`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectivePoint {
    x: BinaryFieldElement,
    y: BinaryFieldElement,
    z: BinaryFieldElement,
}

impl ProjectivePoint {
    /// Lift an affine point to projective form with `Z = 1`.
    pub fn from_affine(x: BinaryFieldElement, y: BinaryFieldElement) -> Result<Self> {
        let z = BinaryFieldElement::one(x.degree_param())?;
        Ok(ProjectivePoint { x, y, z })
    }

    /// The raw `X` coordinate.
    pub fn x(&self) -> &BinaryFieldElement {
        &self.x
    }

    /// The raw `Y` coordinate.
    pub fn y(&self) -> &BinaryFieldElement {
        &self.y
    }

    /// The raw `Z` coordinate.
    pub fn z(&self) -> &BinaryFieldElement {
        &self.z
    }

    /// López-Dahab doubling.
    ///
    /// ```text
    /// A = X²; B = Y·Z + A; C = X·Z; BC = B + C;
    /// D = C²; E = B·BC + D;
    /// X' = C·E
    /// Y' = BC·E + A²·C
    /// Z' = C·D
    /// ```
    pub fn double(&self) -> Result<Self> {
        let a = self.x.square()?;
        let b = self.y.mul(&self.z)?.add(&a)?;
        let c = self.x.mul(&self.z)?;
        let bc = b.add(&c)?;
        let d = c.square()?;
        let e = b.mul(&bc)?.add(&d)?;

        let x3 = c.mul(&e)?;
        let y3 = bc.mul(&e)?.add(&a.square()?.mul(&c)?)?;
        let z3 = c.mul(&d)?;

        Ok(ProjectivePoint { x: x3, y: y3, z: z3 })
    }

    /// López-Dahab addition.
    ///
    /// `Q == -P` is handled correctly (the formula yields `Z3 == 0`, the
    /// point at infinity, without any inversion). `Q == P` is not: it
    /// collapses the same way `B` does for `Q == -P`, but the result is
    /// wrong, so that case is rejected — callers must use [`Self::double`].
    /// The Montgomery ladder in [`Self::scalar_mul`] never triggers this,
    /// since it maintains `R1 - R0 = P` throughout.
    ///
    /// ```text
    /// Y1Z2 = Y1·Z2; X1Z2 = X1·Z2
    /// A = Z1·Y2 + Y1Z2; B = Z1·X2 + X1Z2; AB = A + B
    /// C = B²; D = Z1·Z2; E = B·C
    /// F = A·AB + C; F = F·D + E
    /// X3 = B·F
    /// Y3 = (A·X1Z2 + B·Y1Z2)·C + AB·F
    /// Z3 = E·D
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        let y1z2 = self.y.mul(&other.z)?;
        let x1z2 = self.x.mul(&other.z)?;

        let a = self.z.mul(&other.y)?.add(&y1z2)?;
        let b = self.z.mul(&other.x)?.add(&x1z2)?;
        if b.is_zero() && a.is_zero() {
            return Err(Error::PointsNotAddable);
        }
        let ab = a.add(&b)?;

        let c = b.square()?;
        let d = self.z.mul(&other.z)?;
        let e = b.mul(&c)?;

        let f = a.mul(&ab)?.add(&c)?;
        let f = f.mul(&d)?.add(&e)?;

        let x3 = b.mul(&f)?;
        let y3 = a
            .mul(&x1z2)?
            .add(&b.mul(&y1z2)?)?
            .mul(&c)?
            .add(&ab.mul(&f)?)?;
        let z3 = e.mul(&d)?;

        Ok(ProjectivePoint { x: x3, y: y3, z: z3 })
    }

    /// Constant-iteration Montgomery-ladder scalar multiplication `k·P`,
    /// identical in schedule to the prime-curve ladder but carried out in
    /// projective coordinates throughout; `R1` is seeded by doubling `P`
    /// directly in projective form.
    pub fn scalar_mul(&self, k: &Integer) -> Result<Self> {
        let k_bits = k.bit_length();
        let mut r0 = self.clone();
        if k_bits < 2 {
            return Ok(r0);
        }
        let mut r1 = self.double()?;

        for i in (0..=(k_bits - 2)).rev() {
            if k.test_bit(i) {
                r0 = r0.add(&r1)?;
                r1 = r1.double()?;
            } else {
                r1 = r0.add(&r1)?;
                r0 = r0.double()?;
            }
        }

        Ok(r0)
    }

    /// Normalize to affine coordinates, returned as big integers (each
    /// field element's bits set into an [`Integer`]).
    pub fn normalize(&self) -> Result<(Integer, Integer)> {
        if self.z.is_zero() {
            return Err(Error::ZAtInfinity);
        }
        let z_inv = self.z.invert()?;
        let x = self.x.mul(&z_inv)?;
        let y = self.y.mul(&z_inv)?;
        Ok((x.to_integer(), y.to_integer()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_catalogue::CurveParams;

    fn k163_params() -> curve_catalogue::BinaryCurveParams {
        match curve_catalogue::resolve("K-163").unwrap() {
            CurveParams::Binary(params) => params,
            CurveParams::Prime(_) => unreachable!("K-163 is a binary curve"),
        }
    }

    fn k163_generator() -> ProjectivePoint {
        let params = k163_params();
        ProjectivePoint::from_affine(params.gx, params.gy).unwrap()
    }

    #[test]
    fn doubling_matches_ladder_by_two() {
        let g = k163_generator();
        let doubled = g.double().unwrap();
        let two = g.scalar_mul(&Integer::from_u64(2)).unwrap();
        assert_eq!(doubled.normalize().unwrap(), two.normalize().unwrap());
    }

    #[test]
    fn scalar_mul_is_additive() {
        let g = k163_generator();
        let three = g.scalar_mul(&Integer::from_u64(3)).unwrap();
        let two_plus_one = g
            .scalar_mul(&Integer::from_u64(2))
            .unwrap()
            .add(&g)
            .unwrap();
        assert_eq!(three.normalize().unwrap(), two_plus_one.normalize().unwrap());
    }

    #[test]
    fn scalar_mul_by_one_normalizes_to_generator() {
        let params = k163_params();
        let g = ProjectivePoint::from_affine(params.gx.clone(), params.gy.clone()).unwrap();
        let (x, y) = g.scalar_mul(&Integer::from_u64(1)).unwrap().normalize().unwrap();
        assert_eq!(x, params.gx.to_integer());
        assert_eq!(y, params.gy.to_integer());
    }

    #[test]
    fn order_annihilates_generator_on_all_five_curves() {
        for name in ["K-163", "K-233", "K-283", "K-409", "K-571"] {
            let params = match curve_catalogue::resolve(name).unwrap() {
                CurveParams::Binary(params) => params,
                CurveParams::Prime(_) => unreachable!("{name} is a binary curve"),
            };
            let g = ProjectivePoint::from_affine(params.gx.clone(), params.gy.clone()).unwrap();

            let n_times_g = g.scalar_mul(&params.n).unwrap();
            assert_eq!(
                n_times_g.normalize(),
                Err(Error::ZAtInfinity),
                "{name}: n*G should be the point at infinity"
            );

            let n_plus_one_times_g = g.scalar_mul(&params.n.add(&Integer::from_u64(1))).unwrap();
            let (x, y) = n_plus_one_times_g.normalize().unwrap();
            assert_eq!(x, params.gx.to_integer(), "{name}: (n+1)*G should be G");
            assert_eq!(y, params.gy.to_integer(), "{name}: (n+1)*G should be G");
        }
    }

    #[test]
    fn add_of_equal_points_errors() {
        let g = k163_generator();
        assert_eq!(g.add(&g), Err(Error::PointsNotAddable));
    }

    #[test]
    fn normalize_of_z_zero_errors() {
        let params = k163_params();
        let g = ProjectivePoint::from_affine(params.gx.clone(), params.gy.clone()).unwrap();
        let zeroed = ProjectivePoint {
            x: g.x.clone(),
            y: g.y.clone(),
            z: BinaryFieldElement::zero(163).unwrap(),
        };
        assert_eq!(zeroed.normalize(), Err(Error::ZAtInfinity));
    }
}
