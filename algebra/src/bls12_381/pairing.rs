use crate::bls12_381::{BLSGt, BLSScalar, BLSG1, BLSG2};

pairing_engine!(
    /// The pairing engine for BLS12-381
    BLSPairingEngine,
    ark_bls12_381::Bls12_381,
    BLSScalar,
    BLSG1,
    BLSG2,
    BLSGt
);
