use crate::bn254::{BN254PairingEngine, BN254Scalar, BN254G1, BN254G2};
use ark_bn254::{Bn254, Fq12};

target_group_wrapper!(
    /// The wrapped struct for `ark_bn254::Fq12`, which is the pairing result
    BN254Gt,
    Fq12,
    Bn254,
    BN254PairingEngine,
    BN254Scalar,
    BN254G1,
    BN254G2,
    384
);
