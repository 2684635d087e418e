use crate::bn254::{BN254Fq, BN254Scalar};
use crate::prelude::*;
use ark_bn254::{G1Affine, G1Projective};
use ark_ec::CurveGroup;

curve_group_wrapper!(
    /// The wrapped struct for `ark_bn254::G1Projective`
    BN254G1,
    G1Projective,
    G1Affine,
    BN254Scalar,
    32,
    64
);

impl BN254G1 {
    /// Get the x-coordinate of the BN254 affine point.
    #[inline]
    pub fn get_x(&self) -> BN254Fq {
        BN254Fq(self.0.into_affine().x)
    }

    /// Get the y-coordinate of the BN254 affine point.
    #[inline]
    pub fn get_y(&self) -> BN254Fq {
        BN254Fq(self.0.into_affine().y)
    }

    /// Construct from the affine coordinates, checking that the point is on the curve.
    pub fn from_xy(x: BN254Fq, y: BN254Fq) -> Result<Self> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self::get_identity());
        }
        let affine = G1Affine::new_unchecked(x.0, y.0);
        if !affine.is_on_curve() {
            return Err(AlgebraError::DeserializationError);
        }
        Ok(Self(affine.into()))
    }
}

#[cfg(test)]
mod tests {
    use crate::bn254::{BN254Fq, BN254G1};
    use crate::prelude::*;

    #[test]
    fn affine_coordinates() {
        let mut prng = test_rng();
        let p = BN254G1::random(&mut prng);
        assert_eq!(BN254G1::from_xy(p.get_x(), p.get_y()).unwrap(), p);
        assert!(BN254G1::from_xy(p.get_x(), p.get_y().add(&BN254Fq::one())).is_err());
    }
}
