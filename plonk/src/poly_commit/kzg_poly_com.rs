use crate::poly_commit::{
    errors::{PolyComSchemeError, Result},
    field_polynomial::FpPolynomial,
    pcs::{HomomorphicPolyComElem, PolyComScheme, ToBytes},
};
use ark_std::{end_timer, format, start_timer};
use misc_algebra::bls12_381::BLSPairingEngine;
use misc_algebra::bn254::BN254PairingEngine;
use misc_algebra::prelude::*;

/// KZG commitment scheme over the `Group`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct KZGCommitment<G>(pub G);

impl<G: Group> ToBytes for KZGCommitment<G> {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_compressed_bytes()
    }
}

impl<G: Group> HomomorphicPolyComElem for KZGCommitment<G> {
    type Scalar = G::ScalarType;

    fn get_base() -> Self {
        KZGCommitment(G::get_base())
    }

    fn get_identity() -> Self {
        KZGCommitment(G::get_identity())
    }

    fn add(&self, other: &Self) -> Self {
        KZGCommitment(self.0.add(&other.0))
    }

    fn add_assign(&mut self, other: &Self) {
        self.0.add_assign(&other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        KZGCommitment(self.0.sub(&other.0))
    }

    fn sub_assign(&mut self, other: &Self) {
        self.0.sub_assign(&other.0)
    }

    fn mul(&self, exp: &G::ScalarType) -> Self {
        KZGCommitment(self.0.mul(exp))
    }

    fn mul_assign(&mut self, exp: &G::ScalarType) {
        self.0 = self.0.mul(exp)
    }
}

impl<F: Scalar> ToBytes for FpPolynomial<F> {
    fn to_bytes(&self) -> Vec<u8> {
        scalars_to_bytes(self.get_coefs_ref())
    }
}

impl<F: Scalar> HomomorphicPolyComElem for FpPolynomial<F> {
    type Scalar = F;

    fn get_base() -> Self {
        FpPolynomial::one()
    }

    fn get_identity() -> Self {
        FpPolynomial::zero()
    }

    fn add(&self, other: &Self) -> Self {
        self.add(other)
    }

    fn add_assign(&mut self, other: &Self) {
        self.add_assign(other)
    }

    fn sub(&self, other: &Self) -> Self {
        self.sub(other)
    }

    fn sub_assign(&mut self, other: &Self) {
        self.sub_assign(other)
    }

    fn mul(&self, exp: &F) -> Self {
        self.mul_scalar(exp)
    }

    fn mul_assign(&mut self, exp: &F) {
        self.mul_scalar_assign(exp)
    }
}

/// KZG commitment scheme about `PairingEngine`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KZGCommitmentScheme<P: Pairing> {
    /// public parameter about G1: `[s^i]_1` for `i < max_degree`.
    pub public_parameter_group_1: Vec<P::G1>,
    /// public parameter about G2: `[s^j]_2` for `j <= max_opening_points`.
    pub public_parameter_group_2: Vec<P::G2>,
    /// The toxic waste, only present right after an untrusted setup.
    #[serde(skip)]
    secret: Option<P::ScalarField>,
}

impl<P: Pairing> KZGCommitmentScheme<P> {
    /// Create a new instance of a KZG polynomial commitment scheme.
    /// `max_degree` - number of G1 powers, bounding the coefficient count,
    /// `max_opening_points` - the largest point set `verify_multiple` accepts,
    /// `prng` - pseudo-random generator.
    pub fn new<R: CryptoRng + RngCore>(
        max_degree: usize,
        max_opening_points: usize,
        prng: &mut R,
    ) -> KZGCommitmentScheme<P> {
        let setup_time = start_timer!(|| format!("KZG setup with {} powers", max_degree));
        let s = P::ScalarField::random(prng);

        let mut public_parameter_group_1: Vec<P::G1> = Vec::with_capacity(max_degree);
        let mut elem_g1 = P::G1::get_base();
        for _ in 0..max_degree {
            public_parameter_group_1.push(elem_g1);
            elem_g1 = elem_g1.mul(&s);
        }

        let mut public_parameter_group_2: Vec<P::G2> = Vec::new();
        let mut elem_g2 = P::G2::get_base();
        for _ in 0..=max_opening_points.max(1) {
            public_parameter_group_2.push(elem_g2);
            elem_g2 = elem_g2.mul(&s);
        }
        end_timer!(setup_time);

        KZGCommitmentScheme {
            public_parameter_group_1,
            public_parameter_group_2,
            secret: Some(s),
        }
    }

    /// Setup supporting single point openings only.
    pub fn untrusted_setup<R: CryptoRng + RngCore>(
        max_degree: usize,
        prng: &mut R,
    ) -> KZGCommitmentScheme<P> {
        Self::new(max_degree, 1, prng)
    }

    /// Return the secret of an untrusted setup, if it was not discarded.
    pub fn secret(&self) -> Option<&P::ScalarField> {
        self.secret.as_ref()
    }

    /// Forget the secret scalar.
    pub fn discard_secret(&mut self) {
        self.secret = None;
    }

    /// Open the polynomial at several distinct points at once.
    /// Returns the evaluations and the commitment to `(p - I) / Z`,
    /// `I` interpolating the evaluations and `Z` vanishing on the points.
    pub fn prove_multiple(
        &self,
        polynomial: &FpPolynomial<P::ScalarField>,
        points: &[P::ScalarField],
    ) -> Result<(Vec<P::ScalarField>, KZGCommitment<P::G1>)> {
        let evals: Vec<P::ScalarField> = points.iter().map(|z| polynomial.eval(z)).collect();
        let interpolation = FpPolynomial::lagrange(points, &evals)?;
        let vanishing = FpPolynomial::from_zeroes(points);
        let quotient = polynomial.sub(&interpolation).exact_div(&vanishing)?;
        let proof = self.commit(&quotient)?;
        Ok((evals, proof))
    }

    /// Verify a multiple point opening produced by `prove_multiple`.
    pub fn verify_multiple(
        &self,
        cm: &KZGCommitment<P::G1>,
        points: &[P::ScalarField],
        evals: &[P::ScalarField],
        proof: &KZGCommitment<P::G1>,
    ) -> Result<bool> {
        if points.len() + 1 > self.public_parameter_group_2.len() {
            return Err(PolyComSchemeError::DegreeError);
        }
        let interpolation = FpPolynomial::lagrange(points, evals)?;
        let vanishing = FpPolynomial::from_zeroes(points);

        let vanishing_g2 = vanishing
            .get_coefs_ref()
            .iter()
            .zip(self.public_parameter_group_2.iter())
            .fold(P::G2::get_identity(), |acc, (c, g)| acc.add(&g.mul(c)));
        let interpolation_g1 = self.commit(&interpolation)?;

        Ok(P::pairing_check(
            &proof.0,
            &vanishing_g2,
            &cm.0.sub(&interpolation_g1.0),
            &self.public_parameter_group_2[0].neg(),
        ))
    }

    /// Serialize the parameters to unchecked bytes.
    pub fn to_unchecked_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![];
        let len_1 = self.public_parameter_group_1.len() as u32;
        let len_2 = self.public_parameter_group_2.len() as u32;
        bytes.extend(len_1.to_le_bytes());
        bytes.extend(len_2.to_le_bytes());

        for i in &self.public_parameter_group_1 {
            bytes.extend(i.to_unchecked_bytes());
        }
        for i in &self.public_parameter_group_2 {
            bytes.extend(i.to_unchecked_bytes());
        }
        bytes
    }

    /// Deserialize the parameters from unchecked bytes.
    pub fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 8 {
            return Err(AlgebraError::DeserializationError.into());
        }
        let mut len_1_bytes = [0u8; 4];
        let mut len_2_bytes = [0u8; 4];
        len_1_bytes.copy_from_slice(&bytes[0..4]);
        len_2_bytes.copy_from_slice(&bytes[4..8]);
        let len_1 = u32::from_le_bytes(len_1_bytes) as usize;
        let len_2 = u32::from_le_bytes(len_2_bytes) as usize;
        let n_1 = P::G1::unchecked_size();
        let n_2 = P::G2::unchecked_size();
        if bytes.len() != 8 + n_1 * len_1 + n_2 * len_2 {
            return Err(AlgebraError::DeserializationError.into());
        }

        let bytes_1 = &bytes[8..8 + n_1 * len_1];
        let bytes_2 = &bytes[8 + n_1 * len_1..];
        let p1 = bytes_1
            .chunks(n_1)
            .map(P::G1::from_unchecked_bytes)
            .collect::<core::result::Result<Vec<_>, _>>()?;
        let p2 = bytes_2
            .chunks(n_2)
            .map(P::G2::from_unchecked_bytes)
            .collect::<core::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            public_parameter_group_1: p1,
            public_parameter_group_2: p2,
            secret: None,
        })
    }
}

/// KZG commitment scheme over the BLS12-381 curve
pub type KZGCommitmentSchemeBLS = KZGCommitmentScheme<BLSPairingEngine>;

/// KZG commitment scheme over the BN254 curve
pub type KZGCommitmentSchemeBN254 = KZGCommitmentScheme<BN254PairingEngine>;

impl<P: Pairing> PolyComScheme for KZGCommitmentScheme<P> {
    type Field = P::ScalarField;
    type Commitment = KZGCommitment<P::G1>;

    fn max_degree(&self) -> usize {
        self.public_parameter_group_1.len().saturating_sub(1)
    }

    fn commit(&self, polynomial: &FpPolynomial<P::ScalarField>) -> Result<Self::Commitment> {
        let coefs = polynomial.get_coefs_ref();
        if coefs.len() > self.public_parameter_group_1.len() {
            return Err(PolyComSchemeError::DegreeError);
        }

        let coefs_ref: Vec<&P::ScalarField> = coefs.iter().collect();
        let bases_ref: Vec<&P::G1> = self.public_parameter_group_1[0..coefs.len()]
            .iter()
            .collect();

        Ok(KZGCommitment(P::G1::multi_exp(&coefs_ref, &bases_ref)))
    }

    fn prove_single(
        &self,
        polynomial: &FpPolynomial<P::ScalarField>,
        point: &P::ScalarField,
        max_degree: usize,
    ) -> Result<(P::ScalarField, Self::Commitment)> {
        if polynomial.degree() > max_degree {
            return Err(PolyComSchemeError::DegreeError);
        }
        // (f(X) - f(z)) / (X - z)
        let (quotient, eval) = polynomial.div_by_linear(point);
        let proof = self.commit(&quotient)?;
        Ok((eval, proof))
    }

    fn verify_single(
        &self,
        cm: &Self::Commitment,
        point: &P::ScalarField,
        eval: &P::ScalarField,
        proof: &Self::Commitment,
    ) -> bool {
        if self.public_parameter_group_1.is_empty() || self.public_parameter_group_2.len() < 2 {
            return false;
        }
        let g1_0 = self.public_parameter_group_1[0];
        let g2_0 = self.public_parameter_group_2[0];
        let g2_1 = self.public_parameter_group_2[1];

        let s_minus_point = g2_1.sub(&g2_0.mul(point));
        let cm_minus_eval = cm.0.sub(&g1_0.mul(eval));

        P::pairing_check(&proof.0, &s_minus_point, &cm_minus_eval, &g2_0.neg())
    }

    fn shrink_to_verifier_only(&self) -> Self {
        let keep = self
            .public_parameter_group_2
            .len()
            .saturating_sub(1)
            .max(1)
            .min(self.public_parameter_group_1.len());
        Self {
            public_parameter_group_1: self.public_parameter_group_1[..keep].to_vec(),
            public_parameter_group_2: self.public_parameter_group_2.clone(),
            secret: None,
        }
    }
}

#[cfg(test)]
mod tests_kzg_impl {
    use crate::poly_commit::{
        errors::PolyComSchemeError,
        field_polynomial::FpPolynomial,
        kzg_poly_com::{
            KZGCommitment, KZGCommitmentScheme, KZGCommitmentSchemeBLS, KZGCommitmentSchemeBN254,
        },
        pcs::{HomomorphicPolyComElem, PolyComScheme},
    };
    use misc_algebra::{
        bls12_381::{BLSPairingEngine, BLSScalar, BLSG1},
        bn254::{BN254PairingEngine, BN254Scalar},
        prelude::*,
    };

    fn check_public_parameters_generation<P: Pairing>() {
        let param_size = 5;
        let mut prng = test_rng();
        let kzg_scheme = KZGCommitmentScheme::<P>::new(param_size, 3, &mut prng);
        assert_eq!(kzg_scheme.public_parameter_group_1.len(), param_size);
        assert_eq!(kzg_scheme.public_parameter_group_2.len(), 4);
        let s = *kzg_scheme.secret().unwrap();
        let g1_power1 = kzg_scheme.public_parameter_group_1[1];
        let g2_power1 = kzg_scheme.public_parameter_group_2[1];
        assert_eq!(g1_power1, P::G1::get_base().mul(&s));

        // Check parameters for G1
        for i in 0..param_size - 1 {
            let elem_first_group_1 = kzg_scheme.public_parameter_group_1[i];
            let elem_next_group_1 = kzg_scheme.public_parameter_group_1[i + 1];
            let elem_next_group_1_target =
                P::pairing(&elem_next_group_1, &P::G2::get_base(), true);
            let elem_next_group_1_target_recomputed =
                P::pairing(&elem_first_group_1, &g2_power1, true);
            assert_eq!(
                elem_next_group_1_target_recomputed,
                elem_next_group_1_target
            );
        }

        // Check parameters for G2
        for j in 0..3 {
            let elem = kzg_scheme.public_parameter_group_2[j];
            let next = kzg_scheme.public_parameter_group_2[j + 1];
            assert_eq!(next, elem.mul(&s));
        }
    }

    fn check_single_opening<P: Pairing>() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentScheme::<P>::untrusted_setup(16, &mut prng);
        let poly = FpPolynomial::<P::ScalarField>::random(&mut prng, 10);
        let cm = pcs.commit(&poly).unwrap();
        let point = P::ScalarField::random(&mut prng);
        let (eval, proof) = pcs.prove_single(&poly, &point, pcs.max_degree()).unwrap();
        assert_eq!(eval, poly.eval(&point));
        assert!(pcs.verify_single(&cm, &point, &eval, &proof));

        let one = P::ScalarField::one();
        assert!(!pcs.verify_single(&cm, &point, &eval.add(&one), &proof));
        assert!(!pcs.verify_single(&cm, &point.add(&one), &eval, &proof));
        let other_cm = cm.add(&KZGCommitment::get_base());
        assert!(!pcs.verify_single(&other_cm, &point, &eval, &proof));
        let other_proof = proof.add(&KZGCommitment::get_base());
        assert!(!pcs.verify_single(&cm, &point, &eval, &other_proof));

        let verifier = pcs.shrink_to_verifier_only();
        assert_eq!(verifier.public_parameter_group_1.len(), 1);
        assert!(verifier.secret().is_none());
        assert!(verifier.verify_single(&cm, &point, &eval, &proof));
    }

    #[test]
    fn test_public_parameters() {
        check_public_parameters_generation::<BLSPairingEngine>();
        check_public_parameters_generation::<BN254PairingEngine>();
    }

    #[test]
    fn test_single_opening() {
        check_single_opening::<BLSPairingEngine>();
        check_single_opening::<BN254PairingEngine>();
    }

    #[test]
    fn test_homomorphic_poly_com_elem() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBLS::untrusted_setup(20, &mut prng);
        let poly1 = FpPolynomial::<BLSScalar>::from_i64s(&[2, 3, 6]);
        let commitment1 = pcs.commit(&poly1).unwrap();
        let poly2 = FpPolynomial::from_i64s(&[1, 8, 4]);
        let commitment2 = pcs.commit(&poly2).unwrap();

        let commitment_sum = pcs.commit(&poly1.add(&poly2)).unwrap();
        assert_eq!(commitment_sum, commitment1.add(&commitment2));
        let commitment_diff = pcs.commit(&poly1.sub(&poly2)).unwrap();
        assert_eq!(commitment_diff, commitment1.sub(&commitment2));

        let five = BLSScalar::from(5u32);
        let commitment_poly1_mult_5 = pcs.commit(&poly1.mul_scalar(&five)).unwrap();
        let mut hom = commitment1;
        hom.mul_assign(&five);
        assert_eq!(commitment_poly1_mult_5, hom);
    }

    #[test]
    fn test_commit() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBLS::untrusted_setup(10, &mut prng);
        let fq_poly = FpPolynomial::<BLSScalar>::from_i64s(&[2, 3, 6]);
        let commitment = pcs.commit(&fq_poly).unwrap();

        // Doing the multiexp by hand
        let mut expected_committed_value = BLSG1::get_identity();
        for (i, coef) in fq_poly.get_coefs_ref().iter().enumerate() {
            let g_i = pcs.public_parameter_group_1[i];
            expected_committed_value = expected_committed_value.add(&g_i.mul(coef));
        }
        assert_eq!(expected_committed_value, commitment.0);

        let too_long = FpPolynomial::<BLSScalar>::random(&mut prng, 10);
        assert_eq!(pcs.commit(&too_long), Err(PolyComSchemeError::DegreeError));
        assert_eq!(
            pcs.prove_single(&fq_poly, &BLSScalar::one(), 1),
            Err(PolyComSchemeError::DegreeError)
        );
    }

    #[test]
    fn test_multiple_opening() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(16, 4, &mut prng);
        let poly = FpPolynomial::<BN254Scalar>::random(&mut prng, 12);
        let cm = pcs.commit(&poly).unwrap();
        let points: Vec<BN254Scalar> = (0..4).map(|_| BN254Scalar::random(&mut prng)).collect();
        let (evals, proof) = pcs.prove_multiple(&poly, &points).unwrap();
        for (z, y) in points.iter().zip(evals.iter()) {
            assert_eq!(poly.eval(z), *y);
        }
        assert!(pcs.verify_multiple(&cm, &points, &evals, &proof).unwrap());

        let mut wrong = evals.clone();
        wrong[2] = wrong[2].add(&BN254Scalar::one());
        assert!(!pcs.verify_multiple(&cm, &points, &wrong, &proof).unwrap());

        let verifier = pcs.shrink_to_verifier_only();
        assert!(verifier.verify_multiple(&cm, &points, &evals, &proof).unwrap());

        let dup = vec![points[0], points[0]];
        assert_eq!(
            pcs.prove_multiple(&poly, &dup),
            Err(PolyComSchemeError::DuplicatePoints)
        );

        let single = KZGCommitmentSchemeBN254::untrusted_setup(16, &mut prng);
        let cm = single.commit(&poly).unwrap();
        let (evals, proof) = single.prove_multiple(&poly, &points[..2]).unwrap();
        assert_eq!(
            single.verify_multiple(&cm, &points[..2], &evals, &proof),
            Err(PolyComSchemeError::DegreeError)
        );
    }

    #[test]
    fn test_serialization() {
        let mut prng = test_rng();
        let mut pcs = KZGCommitmentSchemeBLS::new(8, 2, &mut prng);
        assert!(pcs.secret().is_some());

        let json = serde_json::to_string(&pcs).unwrap();
        let from_json: KZGCommitmentSchemeBLS = serde_json::from_str(&json).unwrap();
        assert!(from_json.secret().is_none());
        assert_eq!(from_json.public_parameter_group_1, pcs.public_parameter_group_1);
        assert_eq!(from_json.public_parameter_group_2, pcs.public_parameter_group_2);

        let bin = bincode::serialize(&pcs).unwrap();
        let from_bin: KZGCommitmentSchemeBLS = bincode::deserialize(&bin).unwrap();
        assert_eq!(from_bin.public_parameter_group_1, pcs.public_parameter_group_1);

        let bytes = pcs.to_unchecked_bytes();
        let from_bytes = KZGCommitmentSchemeBLS::from_unchecked_bytes(&bytes).unwrap();
        assert_eq!(from_bytes.public_parameter_group_1, pcs.public_parameter_group_1);
        assert_eq!(from_bytes.public_parameter_group_2, pcs.public_parameter_group_2);
        assert!(KZGCommitmentSchemeBLS::from_unchecked_bytes(&bytes[..bytes.len() - 1]).is_err());

        let poly = FpPolynomial::from_i64s(&[1, 2, 3]);
        let cm = pcs.commit(&poly).unwrap();
        let cm_json = serde_json::to_string(&cm).unwrap();
        assert_eq!(serde_json::from_str::<KZGCommitment<BLSG1>>(&cm_json).unwrap(), cm);

        pcs.discard_secret();
        assert!(pcs.secret().is_none());
    }
}
