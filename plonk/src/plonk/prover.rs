use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::ConstraintSystem,
    helpers::{
        first_lagrange_poly, hide_polynomial, linear_combination, opening_scalars, pi_poly,
        r_poly, split_t_and_commit, t_poly, z_poly, PlonkChallenges,
    },
    indexer::{PlonkPK, PlonkPf, PlonkProof},
    transcript::{
        transcript_get_plonk_challenge_alpha, transcript_get_plonk_challenge_beta,
        transcript_get_plonk_challenge_gamma, transcript_get_plonk_challenge_v,
        transcript_get_plonk_challenge_zeta, transcript_init_plonk,
    },
};
use crate::poly_commit::{
    domain::EvaluationDomain, field_polynomial::FpPolynomial, pcs::PolyComScheme,
    transcript::PolyComTranscript,
};
use ark_std::{end_timer, format, start_timer};
use merlin::Transcript;
use misc_algebra::prelude::*;

/// PLONK Prover: it produces a proof that `witness` satisfies the constraint system `cs`,
/// Proof verifier must use a transcript with same state as prover and match the public parameters,
/// It returns [PlonkError] if an error occurs in computing proof commitments, meaning parameters of the polynomial
/// commitment scheme `pcs` do not match the constraint system parameters.
///
/// `witness` holds the wire values column by column, `a || b || c`; the public
/// values are read from the `a` column at the public input gates.
/// # Example
/// ```
/// use misc_plonk::plonk::{
///     constraint_system::Circuit,
///     verifier::verifier,
///     prover::prover,
///     indexer::indexer
/// };
/// use misc_plonk::poly_commit::kzg_poly_com::KZGCommitmentSchemeBLS;
/// use merlin::Transcript;
/// use misc_algebra::{prelude::*, bls12_381::BLSScalar};
/// use std::collections::BTreeMap;
///
/// let mut prng = test_rng();
///
/// // circuit x * x == y
/// let mut circuit = Circuit::<BLSScalar>::new();
/// let x = circuit.new_input("x").unwrap();
/// let sq = circuit.gate_mul(x, x).unwrap();
/// let y = circuit.gate_public_input("y").unwrap();
/// circuit.output_eq(sq, y).unwrap();
///
/// let mut inputs = BTreeMap::new();
/// inputs.insert("x".to_string(), BLSScalar::from(3u32));
/// inputs.insert("y".to_string(), BLSScalar::from(9u32));
/// circuit.calculate_witness(&inputs).unwrap();
/// let cs = circuit.get_prover_input().unwrap();
///
/// let pcs = KZGCommitmentSchemeBLS::untrusted_setup(cs.size() + 3, &mut prng);
/// let prover_params = indexer(&cs, &pcs).unwrap();
///
/// let proof = {
///     let mut transcript = Transcript::new(b"Test");
///     prover(
///         &mut prng,
///         &mut transcript,
///         &pcs,
///         &cs,
///         &prover_params,
///         &cs.witness(),
///     )
///         .unwrap()
/// };
///
/// let mut transcript = Transcript::new(b"Test");
/// let pi = [BLSScalar::from(9u32)];
/// assert!(
///     verifier(&mut transcript, &pcs, &prover_params.get_verifier_params(), &pi, &proof).unwrap()
/// )
/// ```
pub fn prover<
    R: CryptoRng + RngCore,
    PCS: PolyComScheme,
    CS: ConstraintSystem<Field = PCS::Field>,
>(
    prng: &mut R,
    transcript: &mut Transcript,
    pcs: &PCS,
    cs: &CS,
    prover_params: &PlonkPK<PCS>,
    w: &[PCS::Field],
) -> Result<PlonkPf<PCS>> {
    let n_wires_per_gate = CS::n_wires_per_gate();
    let n_constraints = cs.size();
    if w.len() != n_wires_per_gate * n_constraints
        || prover_params.verifier_params.cs_size != n_constraints
    {
        return Err(PlonkError::FuncParamsError);
    }
    cs.verify_witness(w)?;

    let prover_timer = start_timer!(|| "Plonk::Prover");

    let domain = EvaluationDomain::<PCS::Field>::new(n_constraints)?;
    let root = domain.generator();

    let online_values: Vec<PCS::Field> = cs
        .public_vars_constraint_indices()
        .iter()
        .map(|index| w[*index])
        .collect();

    // Init transcript
    transcript_init_plonk(transcript, &prover_params.verifier_params, &online_values);
    let mut challenges = PlonkChallenges::new();

    let pi = pi_poly(&domain, cs.public_vars_constraint_indices(), &online_values)?;

    // 1. build witness polynomials, hide them and commit
    let w_timer = start_timer!(|| "Round 1: witness polynomials");
    let mut w_polys = vec![];
    let mut cm_w_vec = vec![];
    for (i, column) in w.chunks(n_constraints).enumerate() {
        let this_w_timer = start_timer!(|| format!("Round 1: processing wire {}", i));
        let mut f_coefs = FpPolynomial::from_coefs(domain.inverse_fft(column)?);
        hide_polynomial(prng, &mut f_coefs, 2, n_constraints);

        let cm_w = pcs
            .commit(&f_coefs)
            .map_err(|_| PlonkError::CommitmentError)?;
        transcript.append_commitment::<PCS::Commitment>(&cm_w);

        w_polys.push(f_coefs);
        cm_w_vec.push(cm_w);
        end_timer!(this_w_timer);
    }
    end_timer!(w_timer);

    // 2. get challenges beta and gamma
    let beta = transcript_get_plonk_challenge_beta(transcript);
    let gamma = transcript_get_plonk_challenge_gamma(transcript);
    challenges.insert_beta_gamma(beta, gamma)?;

    // 3. build the z polynomial, hide it and commit
    let z_timer = start_timer!(|| "Round 2: z polynomial");
    let mut z_poly = z_poly::<PCS, CS>(cs, prover_params, &domain, w, &challenges)?;
    hide_polynomial(prng, &mut z_poly, 3, n_constraints);
    let cm_z = pcs
        .commit(&z_poly)
        .map_err(|_| PlonkError::CommitmentError)?;
    transcript.append_commitment::<PCS::Commitment>(&cm_z);
    end_timer!(z_timer);

    // 4. get challenge alpha
    let alpha = transcript_get_plonk_challenge_alpha(transcript);
    challenges.insert_alpha(alpha)?;

    // 5. build t, split into `n_wires_per_gate` polynomials of N+2 coefficients and commit
    let t_timer = start_timer!(|| "Round 3: t polynomial");
    let t_poly = t_poly::<PCS, CS>(cs, prover_params, &w_polys, &z_poly, &challenges, &pi)?;
    let (cm_t_vec, t_polys) =
        split_t_and_commit(prng, pcs, &t_poly, n_wires_per_gate, n_constraints + 2)?;
    for cm_t in cm_t_vec.iter() {
        transcript.append_commitment::<PCS::Commitment>(cm_t);
    }
    end_timer!(t_timer);

    // 6. get challenge zeta
    let zeta = transcript_get_plonk_challenge_zeta(transcript, n_constraints);
    challenges.insert_zeta(zeta)?;

    // 7. a) Evaluate the openings of witness/permutation polynomials at \zeta, and
    // evaluate the opening of z(X) at point \omega * \zeta.
    let r_timer = start_timer!(|| "Round 4: evaluations and r polynomial");
    let w_polys_eval_zeta: Vec<PCS::Field> =
        w_polys.iter().map(|poly| pcs.eval(poly, &zeta)).collect();
    let s_polys_eval_zeta: Vec<PCS::Field> = prover_params
        .s_polys
        .iter()
        .take(n_wires_per_gate - 1)
        .map(|poly| pcs.eval(poly, &zeta))
        .collect();
    let zeta_omega = root.mul(&zeta);
    let z_eval_zeta_omega = pcs.eval(&z_poly, &zeta_omega);
    let t_eval_zeta = pcs.eval(&t_poly, &zeta);

    //  b). build the r polynomial, and eval at zeta
    let w_polys_eval_zeta_as_ref: Vec<&PCS::Field> = w_polys_eval_zeta.iter().collect();
    let s_polys_eval_zeta_as_ref: Vec<&PCS::Field> = s_polys_eval_zeta.iter().collect();
    let (_, first_lagrange_eval_zeta) =
        first_lagrange_poly(&challenges, n_constraints as u64)?;
    let r_poly = r_poly::<PCS, CS>(
        prover_params,
        &z_poly,
        &w_polys_eval_zeta_as_ref,
        &s_polys_eval_zeta_as_ref,
        &z_eval_zeta_omega,
        &challenges,
        &first_lagrange_eval_zeta,
    )?;
    let r_eval_zeta = pcs.eval(&r_poly, &zeta);

    for eval_zeta in w_polys_eval_zeta.iter().chain(s_polys_eval_zeta.iter()) {
        transcript.append_field_elem(eval_zeta);
    }
    transcript.append_field_elem(&z_eval_zeta_omega);
    transcript.append_field_elem(&t_eval_zeta);
    transcript.append_field_elem(&r_eval_zeta);
    end_timer!(r_timer);

    // 8. get challenge v
    let v = transcript_get_plonk_challenge_v(transcript);
    challenges.insert_v(v)?;

    // 9. open the batched polynomial at \zeta and z(X) at \zeta\omega
    let open_timer = start_timer!(|| "Round 5: opening witnesses");
    let polys_to_open: Vec<&FpPolynomial<PCS::Field>> = t_polys
        .iter()
        .chain([&r_poly])
        .chain(w_polys.iter())
        .chain(prover_params.s_polys.iter().take(n_wires_per_gate - 1))
        .collect();
    let scalars = opening_scalars(&challenges, n_constraints + 2)?;
    let batched_poly = linear_combination(&polys_to_open, &scalars)?;

    let (_, opening_witness_zeta) = pcs
        .prove_single(&batched_poly, &zeta, pcs.max_degree())
        .map_err(|_| PlonkError::ProofError)?;
    let (_, opening_witness_zeta_omega) = pcs
        .prove_single(&z_poly, &zeta_omega, pcs.max_degree())
        .map_err(|_| PlonkError::ProofError)?;
    end_timer!(open_timer);
    end_timer!(prover_timer);

    Ok(PlonkProof {
        cm_w_vec,
        cm_z,
        cm_t_vec,
        w_polys_eval_zeta,
        s_polys_eval_zeta,
        z_eval_zeta_omega,
        t_eval_zeta,
        r_eval_zeta,
        opening_witness_zeta,
        opening_witness_zeta_omega,
    })
}
