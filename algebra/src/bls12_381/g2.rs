use crate::bls12_381::BLSScalar;
use ark_bls12_381::{G2Affine, G2Projective};

curve_group_wrapper!(
    /// The wrapped struct for `ark_bls12_381::G2Projective`
    BLSG2,
    G2Projective,
    G2Affine,
    BLSScalar,
    96,
    192
);
