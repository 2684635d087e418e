use crate::bls12_381::{BLSPairingEngine, BLSScalar, BLSG1, BLSG2};
use ark_bls12_381::{Bls12_381, Fq12};

target_group_wrapper!(
    /// The wrapped struct for `ark_bls12_381::Fq12`, which is the pairing result
    BLSGt,
    Fq12,
    Bls12_381,
    BLSPairingEngine,
    BLSScalar,
    BLSG1,
    BLSG2,
    576
);
