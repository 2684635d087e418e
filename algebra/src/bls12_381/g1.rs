use crate::bls12_381::BLSScalar;
use ark_bls12_381::{G1Affine, G1Projective};

curve_group_wrapper!(
    /// The wrapped struct for `ark_bls12_381::G1Projective`
    BLSG1,
    G1Projective,
    G1Affine,
    BLSScalar,
    48,
    96
);
