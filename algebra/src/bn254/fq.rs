scalar_wrapper!(
    /// The wrapped struct for `ark_bn254::Fq`
    BN254Fq,
    ark_bn254::Fq
);
