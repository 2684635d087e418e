scalar_wrapper!(
    /// The wrapped struct for `ark_bn254::Fr`
    BN254Scalar,
    ark_bn254::Fr
);
