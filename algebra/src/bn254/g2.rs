use crate::bn254::BN254Scalar;
use ark_bn254::{G2Affine, G2Projective};

curve_group_wrapper!(
    /// The wrapped struct for `ark_bn254::G2Projective`
    BN254G2,
    G2Projective,
    G2Affine,
    BN254Scalar,
    64,
    128
);
