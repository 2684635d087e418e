use crate::errors::{PlonkError, Result};
use crate::plonk::{constraint_system::ConstraintSystem, helpers::compute_lagrange_constant};
use crate::poly_commit::{
    domain::EvaluationDomain, field_polynomial::FpPolynomial, pcs::PolyComScheme,
};
use ark_std::{end_timer, start_timer};
use misc_algebra::prelude::*;

/// The data structure of a Plonk proof.
#[derive(Debug, Deserialize, Eq, PartialEq, Serialize, Clone)]
pub struct PlonkProof<C, F> {
    /// The witness polynomial commitments.
    pub cm_w_vec: Vec<C>,
    /// The permutation running product commitment.
    pub cm_z: C,
    /// The split quotient polynomial commitments
    pub cm_t_vec: Vec<C>,
    /// The openings of witness polynomials at \zeta.
    pub w_polys_eval_zeta: Vec<F>,
    /// The openings of the first two permutation polynomials at \zeta.
    pub s_polys_eval_zeta: Vec<F>,
    /// The opening of z(X) at point \zeta * \omega.
    pub z_eval_zeta_omega: F,
    /// The opening of the quotient polynomial at \zeta.
    pub t_eval_zeta: F,
    /// The opening of the linearization polynomial at \zeta.
    pub r_eval_zeta: F,
    /// The witness for the batched opening at \zeta.
    pub opening_witness_zeta: C,
    /// The witness for the opening of z(X) at \zeta\omega.
    pub opening_witness_zeta_omega: C,
}

/// The type of the Plonk proof with a specific polynomial commitment scheme.
pub type PlonkPf<PCS> =
    PlonkProof<<PCS as PolyComScheme>::Commitment, <PCS as PolyComScheme>::Field>;

/// Plonk prover parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlonkProverParams<O, C, F> {
    /// The polynomials of the selectors.
    pub q_polys: Vec<O>,
    /// The polynomials of perm1, perm2, ..., perm_{n_wires_per_gate}.
    pub s_polys: Vec<O>,
    /// The Plonk verifier parameters.
    pub verifier_params: PlonkVerifierParams<C, F>,
    /// The points of the coset on which the quotient polynomial is computed.
    pub coset_quotient: Vec<F>,
    /// The first Lagrange basis polynomial on the coset.
    pub l1_coset_evals: Vec<F>,
    /// The inverse of the vanishing polynomial on the coset.
    pub z_h_inv_coset_evals: Vec<F>,
    /// The selector polynomials on the coset.
    pub q_coset_evals: Vec<Vec<F>>,
    /// The permutation polynomials on the coset.
    pub s_coset_evals: Vec<Vec<F>>,
}

/// Prover parameters over a particular polynomial commitment scheme.
pub type PlonkPK<PCS> = PlonkProverParams<
    FpPolynomial<<PCS as PolyComScheme>::Field>,
    <PCS as PolyComScheme>::Commitment,
    <PCS as PolyComScheme>::Field,
>;

impl<O, C, F> PlonkProverParams<O, C, F> {
    /// Return the verifier parameters.
    pub fn get_verifier_params(self) -> PlonkVerifierParams<C, F> {
        self.verifier_params
    }

    /// Return a reference of verifier parameters.
    pub fn get_verifier_params_ref(&self) -> &PlonkVerifierParams<C, F> {
        &self.verifier_params
    }
}

/// Plonk verifier parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlonkVerifierParams<C, F> {
    /// The commitments of the selectors `q_L, q_R, q_O, q_M, q_C`.
    pub cm_q_vec: Vec<C>,
    /// The commitments of perm1, perm2, ..., perm_{n_wires_per_gate}.
    pub cm_s_vec: Vec<C>,
    /// `n_wires_per_gate` coset representatives, the first one is one.
    pub k: Vec<F>,
    /// The generator of the evaluation domain.
    pub root: F,
    /// The size of constraint system.
    pub cs_size: usize,
    /// The public constrain variables indices.
    pub public_vars_constraint_indices: Vec<usize>,
    /// The constrain lagrange base by public constrain variables.
    pub lagrange_constants: Vec<F>,
}

/// Define the PLONK verifier params by given `PolyComScheme`.
pub type PlonkVK<PCS> =
    PlonkVerifierParams<<PCS as PolyComScheme>::Commitment, <PCS as PolyComScheme>::Field>;

/// Encode the permutation value, from an index to a group element:
/// position `j * n + i` becomes `k_j * \omega^i`.
pub fn encode_perm_to_group<F: Scalar>(group: &[F], perm: &[usize], k: &[F]) -> Vec<F> {
    let n = group.len();
    perm.iter()
        .map(|pi| k[pi / n].mul(&group[pi % n]))
        .collect()
}

/// Find `n_wires_per_gate` coset representatives for the subgroup of order `n`:
/// `k_0 = 1`, then the smallest integers from 2 whose cosets `k_j * H` are disjoint
/// from all previous ones, that is `(k_j / k_i)^n != 1`.
pub fn choose_ks<F: Scalar>(n: usize, n_wires_per_gate: usize) -> Result<Vec<F>> {
    let mut k = vec![F::one()];
    let exp = [n as u64];
    let mut candidate = 2u64;
    while k.len() < n_wires_per_gate {
        let ki = F::from(candidate);
        if ki.is_zero() {
            return Err(PlonkError::SetupError);
        }
        let mut disjoint = true;
        for prev in k.iter() {
            if ki.mul(&prev.inv()?).pow(&exp) == F::one() {
                disjoint = false;
                break;
            }
        }
        if disjoint {
            k.push(ki);
        }
        candidate += 1;
    }
    Ok(k)
}

/// Run the Plonk indexer.
/// The constraint system `cs` must have a power-of-two number of constraints.
pub fn indexer<PCS: PolyComScheme, CS: ConstraintSystem<Field = PCS::Field>>(
    cs: &CS,
    pcs: &PCS,
) -> Result<PlonkPK<PCS>> {
    let indexer_timer = start_timer!(|| "Plonk::Indexer");
    let n_wires_per_gate = CS::n_wires_per_gate();
    let n = cs.size();
    let m = cs.quot_eval_dom_size();
    if n == 0 {
        return Err(PlonkError::EmptyCircuit);
    }
    let factor = m / n;
    let perm = cs.permutation();
    if n * factor != m
        || perm.len() != n_wires_per_gate * n
        || perm.iter().any(|p| *p >= n_wires_per_gate * n)
    {
        return Err(PlonkError::SetupError);
    }

    let domain = EvaluationDomain::<PCS::Field>::new(n)?;
    let domain_m = EvaluationDomain::<PCS::Field>::new(m)?;
    let group = domain.elements();
    let k = choose_ks::<PCS::Field>(n, n_wires_per_gate)?;
    let shift = PCS::Field::multiplicative_generator();
    let coset_quotient: Vec<PCS::Field> = domain_m.elements().iter().map(|x| shift.mul(x)).collect();

    // Step 1: compute permutation polynomials and commit them.
    let perm_timer = start_timer!(|| "Permutation polynomials");
    let encoded_perm = encode_perm_to_group(group, perm, &k);
    let mut s_coset_evals = vec![];
    let mut s_polys = vec![];
    let mut cm_s_vec = vec![];
    for evals in encoded_perm.chunks(n) {
        let s_poly = FpPolynomial::from_coefs(domain.inverse_fft(evals)?);
        s_coset_evals.push(domain_m.coset_fft(s_poly.get_coefs_ref())?);
        cm_s_vec.push(pcs.commit(&s_poly).map_err(|_| PlonkError::SetupError)?);
        s_polys.push(s_poly);
    }
    end_timer!(perm_timer);

    // Step 2: compute selector polynomials and commit them.
    let selector_timer = start_timer!(|| "Selector polynomials");
    let mut q_coset_evals = vec![];
    let mut q_polys = vec![];
    let mut cm_q_vec = vec![];
    for i in 0..cs.num_selectors() {
        let q_poly = FpPolynomial::from_coefs(domain.inverse_fft(cs.selector(i)?)?);
        q_coset_evals.push(domain_m.coset_fft(q_poly.get_coefs_ref())?);
        cm_q_vec.push(pcs.commit(&q_poly).map_err(|_| PlonkError::SetupError)?);
        q_polys.push(q_poly);
    }
    end_timer!(selector_timer);

    // Step 3: precompute two helper functions, L1 and Z_H.
    let mut l1_evals = vec![PCS::Field::zero(); n];
    l1_evals[0] = PCS::Field::one();
    let l1_coset_evals = domain_m.coset_fft(&domain.inverse_fft(&l1_evals)?)?;

    let mut z_h_inv_coset_evals = Vec::with_capacity(m);
    for x in coset_quotient.iter() {
        z_h_inv_coset_evals.push(domain.vanishing_eval(x).inv()?);
    }

    // Step 4: compute the Lagrange interpolation constants.
    let mut lagrange_constants = vec![];
    for constraint_index in cs.public_vars_constraint_indices().iter() {
        if *constraint_index >= n {
            return Err(PlonkError::SetupError);
        }
        lagrange_constants.push(compute_lagrange_constant(group, *constraint_index)?);
    }

    let verifier_params = PlonkVerifierParams {
        cm_q_vec,
        cm_s_vec,
        k,
        root: domain.generator(),
        cs_size: n,
        public_vars_constraint_indices: cs.public_vars_constraint_indices().to_vec(),
        lagrange_constants,
    };
    end_timer!(indexer_timer);

    Ok(PlonkProverParams {
        q_polys,
        s_polys,
        verifier_params,
        coset_quotient,
        l1_coset_evals,
        z_h_inv_coset_evals,
        q_coset_evals,
        s_coset_evals,
    })
}

#[cfg(test)]
mod test {
    use crate::plonk::{
        constraint_system::{Circuit, ConstraintSystem},
        indexer::{choose_ks, encode_perm_to_group, indexer},
    };
    use crate::poly_commit::{kzg_poly_com::KZGCommitmentSchemeBLS, pcs::PolyComScheme};
    use ark_std::collections::BTreeMap;
    use misc_algebra::{bls12_381::BLSScalar, prelude::*, toy::F13};

    type F = BLSScalar;

    #[test]
    fn test_choose_ks() {
        let k = choose_ks::<F>(8, 3).unwrap();
        assert_eq!(k, vec![F::one(), F::from(2u32), F::from(3u32)]);

        // F13 has three cosets of the subgroup of order 4
        let k = choose_ks::<F13>(4, 3).unwrap();
        let exp = [4u64];
        assert_eq!(k[0], F13::one());
        for i in 1..3 {
            for j in 0..i {
                assert_ne!(k[i].mul(&k[j].inv().unwrap()).pow(&exp), F13::one());
            }
        }
        assert!(choose_ks::<F13>(4, 4).is_err());
    }

    #[test]
    fn encode_permutation() {
        let group = F13::roots_of_unity(4).unwrap();
        let k = vec![F13::one(), F13::from(2u32), F13::from(4u32)];
        let encoded = encode_perm_to_group(&group, &[0, 5, 11], &k);
        assert_eq!(
            encoded,
            vec![F13::one(), F13::from(3u32), F13::from(7u32)]
        );
    }

    #[test]
    fn indexer_commits_the_circuit() {
        let mut circuit = Circuit::<F>::new();
        let x = circuit.new_input("x").unwrap();
        let sq = circuit.gate_mul(x, x).unwrap();
        let sq_out = circuit.output(sq).unwrap();
        let sum = circuit.gate_add(sq_out, x).unwrap();
        let y = circuit.gate_public_input("y").unwrap();
        circuit.output_eq(sum, y).unwrap();

        let mut inputs = BTreeMap::new();
        inputs.insert("x".into(), F::from(3u32));
        inputs.insert("y".into(), F::from(12u32));
        circuit.calculate_witness(&inputs).unwrap();
        let cs = circuit.get_prover_input().unwrap();

        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBLS::untrusted_setup(cs.size() + 3, &mut prng);
        let params = indexer(&cs, &pcs).unwrap();
        let vk = params.get_verifier_params_ref();

        assert_eq!(vk.cs_size, 4);
        assert_eq!(vk.cm_q_vec.len(), 5);
        assert_eq!(vk.cm_s_vec.len(), 3);
        assert_eq!(vk.public_vars_constraint_indices, vec![2]);
        assert_eq!(vk.lagrange_constants.len(), 1);
        assert_eq!(params.q_coset_evals[0].len(), cs.quot_eval_dom_size());
        assert_eq!(cs.quot_eval_dom_size(), 32);

        // the selector polynomials interpolate the selector vectors
        let group = F::roots_of_unity(4).unwrap();
        for (i, q_poly) in params.q_polys.iter().enumerate() {
            for (x, q) in group.iter().zip(cs.selector(i).unwrap()) {
                assert_eq!(&q_poly.eval(x), q);
            }
            assert_eq!(pcs.commit(q_poly).unwrap(), vk.cm_q_vec[i]);
        }
    }
}
