scalar_wrapper!(
    /// The wrapped struct for `ark_bls12_381::Fq`
    BLSFq,
    ark_bls12_381::Fq
);
