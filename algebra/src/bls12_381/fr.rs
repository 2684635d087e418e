scalar_wrapper!(
    /// The wrapped struct for `ark_bls12_381::Fr`
    BLSScalar,
    ark_bls12_381::Fr
);
