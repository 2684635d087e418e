use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::{prover_input::ProverInput, ConstraintSystem},
    helpers::{
        eval_pi_poly, first_lagrange_poly, linear_combination, opening_scalars, r_commitment,
        r_complement_eval_zeta, PlonkChallenges,
    },
    indexer::{PlonkPf, PlonkVK},
    transcript::{
        transcript_get_plonk_challenge_alpha, transcript_get_plonk_challenge_beta,
        transcript_get_plonk_challenge_gamma, transcript_get_plonk_challenge_v,
        transcript_get_plonk_challenge_zeta, transcript_init_plonk,
    },
};
use crate::poly_commit::{pcs::PolyComScheme, transcript::PolyComTranscript};
use ark_std::{end_timer, start_timer};
use merlin::Transcript;
use misc_algebra::prelude::*;

/// Verify a proof.
///
/// Returns `Ok(false)` when the proof is rejected, and an error when the public
/// inputs or the proof do not have the shape the verifier parameters expect.
pub fn verifier<PCS: PolyComScheme>(
    transcript: &mut Transcript,
    pcs: &PCS,
    verifier_params: &PlonkVK<PCS>,
    pi: &[PCS::Field],
    proof: &PlonkPf<PCS>,
) -> Result<bool> {
    let n_wires_per_gate = ProverInput::<PCS::Field>::n_wires_per_gate();
    if proof.cm_w_vec.len() != n_wires_per_gate
        || proof.cm_t_vec.len() != n_wires_per_gate
        || proof.w_polys_eval_zeta.len() != n_wires_per_gate
        || proof.s_polys_eval_zeta.len() != n_wires_per_gate - 1
    {
        return Err(PlonkError::ProofError);
    }
    if pi.len() != verifier_params.public_vars_constraint_indices.len()
        || verifier_params.lagrange_constants.len() != pi.len()
    {
        return Err(PlonkError::FuncParamsError);
    }

    let verifier_timer = start_timer!(|| "Plonk::Verifier");
    let n = verifier_params.cs_size;
    transcript_init_plonk(transcript, verifier_params, pi);

    // 1. compute all challenges such as gamma, beta, alpha, zeta and v.
    let mut challenges = PlonkChallenges::new();
    compute_challenges::<PCS>(&mut challenges, transcript, proof, n)?;

    // 2. compute Z_h(\zeta) and L_1(\zeta).
    let (z_h_eval_zeta, first_lagrange_eval_zeta) =
        first_lagrange_poly::<PCS::Field>(&challenges, n as u64)?;

    // 3. compute PI(\zeta).
    let zeta = *challenges.get_zeta()?;
    let pi_eval_zeta = eval_pi_poly::<PCS>(verifier_params, pi, &zeta)?;

    // 4. check the quotient identity at \zeta.
    let complement = r_complement_eval_zeta(
        &proof.w_polys_eval_zeta,
        &proof.s_polys_eval_zeta,
        &proof.z_eval_zeta_omega,
        &challenges,
        &pi_eval_zeta,
        &first_lagrange_eval_zeta,
    )?;
    if proof.t_eval_zeta.mul(&z_h_eval_zeta) != proof.r_eval_zeta.add(&complement) {
        end_timer!(verifier_timer);
        return Ok(false);
    }

    // 5. derive the linearization polynomial commitment.
    let w_polys_eval_zeta_as_ref: Vec<&PCS::Field> = proof.w_polys_eval_zeta.iter().collect();
    let s_eval_zeta_as_ref: Vec<&PCS::Field> = proof.s_polys_eval_zeta.iter().collect();
    let cm_r = r_commitment::<PCS, ProverInput<PCS::Field>>(
        verifier_params,
        &proof.cm_z,
        &w_polys_eval_zeta_as_ref,
        &s_eval_zeta_as_ref,
        &proof.z_eval_zeta_omega,
        &challenges,
        &first_lagrange_eval_zeta,
    )?;

    // 6. verify the opening proofs.
    let commitments: Vec<&PCS::Commitment> = proof
        .cm_t_vec
        .iter()
        .chain([&cm_r])
        .chain(proof.cm_w_vec.iter())
        .chain(verifier_params.cm_s_vec.iter().take(n_wires_per_gate - 1))
        .collect();
    let values: Vec<PCS::Field> = [proof.t_eval_zeta, PCS::Field::zero(), PCS::Field::zero()]
        .iter()
        .chain([&proof.r_eval_zeta])
        .chain(proof.w_polys_eval_zeta.iter())
        .chain(proof.s_polys_eval_zeta.iter())
        .copied()
        .collect();
    if commitments.len() != values.len() {
        return Err(PlonkError::FuncParamsError);
    }
    let scalars = opening_scalars(&challenges, n + 2)?;
    let cm_batched = linear_combination(&commitments, &scalars)?;
    let eval_batched = values
        .iter()
        .zip(scalars.iter())
        .fold(PCS::Field::zero(), |acc, (value, scalar)| {
            acc.add(&value.mul(scalar))
        });

    let zeta_omega = zeta.mul(&verifier_params.root);
    let res = pcs.verify_single(&cm_batched, &zeta, &eval_batched, &proof.opening_witness_zeta)
        && pcs.verify_single(
            &proof.cm_z,
            &zeta_omega,
            &proof.z_eval_zeta_omega,
            &proof.opening_witness_zeta_omega,
        );
    end_timer!(verifier_timer);
    Ok(res)
}

fn compute_challenges<PCS: PolyComScheme>(
    challenges: &mut PlonkChallenges<PCS::Field>,
    transcript: &mut Transcript,
    proof: &PlonkPf<PCS>,
    group_order: usize,
) -> Result<()> {
    // 1. compute gamma and beta challenges.
    for cm_w in proof.cm_w_vec.iter() {
        transcript.append_commitment::<PCS::Commitment>(cm_w);
    }
    let beta = transcript_get_plonk_challenge_beta(transcript);
    let gamma = transcript_get_plonk_challenge_gamma(transcript);
    challenges.insert_beta_gamma(beta, gamma)?;

    // 2. compute alpha challenge.
    transcript.append_commitment::<PCS::Commitment>(&proof.cm_z);
    let alpha = transcript_get_plonk_challenge_alpha(transcript);
    challenges.insert_alpha(alpha)?;

    // 3. compute zeta challenge.
    for cm_t in proof.cm_t_vec.iter() {
        transcript.append_commitment::<PCS::Commitment>(cm_t);
    }
    let zeta = transcript_get_plonk_challenge_zeta(transcript, group_order);
    challenges.insert_zeta(zeta)?;

    // 4. compute v challenge.
    for eval_zeta in proof
        .w_polys_eval_zeta
        .iter()
        .chain(proof.s_polys_eval_zeta.iter())
    {
        transcript.append_field_elem(eval_zeta);
    }
    transcript.append_field_elem(&proof.z_eval_zeta_omega);
    transcript.append_field_elem(&proof.t_eval_zeta);
    transcript.append_field_elem(&proof.r_eval_zeta);
    let v = transcript_get_plonk_challenge_v(transcript);
    challenges.insert_v(v)
}

#[cfg(test)]
mod test {
    use crate::errors::PlonkError;
    use crate::plonk::{
        constraint_system::{Circuit, ProverInput},
        indexer::{indexer, PlonkPK, PlonkPf},
        prover::prover,
        verifier::verifier,
    };
    use crate::poly_commit::{
        kzg_poly_com::{KZGCommitmentScheme, KZGCommitmentSchemeBLS, KZGCommitmentSchemeBN254},
        pcs::PolyComScheme,
    };
    use ark_std::collections::BTreeMap;
    use merlin::Transcript;
    use misc_algebra::prelude::*;

    // y == x^3 + x + const
    fn cubic_input<F: Scalar>(x: u32, y: u32) -> ProverInput<F> {
        let mut cs = Circuit::new();
        let x_wire = cs.new_input("x").unwrap();
        let x2 = cs.gate_mul(x_wire, x_wire).unwrap();
        let x3 = cs.gate_mul(cs.output(x2).unwrap(), x_wire).unwrap();
        let x3_x = cs.gate_add(cs.output(x3).unwrap(), x_wire).unwrap();
        let c = cs.gate_public_input("const").unwrap();
        let sum = cs
            .gate_add(cs.output(x3_x).unwrap(), cs.output(c).unwrap())
            .unwrap();
        let y_gate = cs.gate_public_input("y").unwrap();
        cs.output_eq(sum, y_gate).unwrap();

        let mut inputs = BTreeMap::new();
        inputs.insert("x".to_string(), F::from(x));
        inputs.insert("const".to_string(), F::from(5u32));
        inputs.insert("y".to_string(), F::from(y));
        cs.calculate_witness(&inputs).unwrap();
        cs.get_prover_input().unwrap()
    }

    fn prove<PCS: PolyComScheme>(
        pcs: &PCS,
        cs: &ProverInput<PCS::Field>,
    ) -> (PlonkPK<PCS>, PlonkPf<PCS>) {
        let mut prng = test_rng();
        cs.pre_proving_check().unwrap();
        let params = indexer(cs, pcs).unwrap();
        let mut transcript = Transcript::new(b"TestPlonk");
        let proof = prover(&mut prng, &mut transcript, pcs, cs, &params, &cs.witness()).unwrap();
        (params, proof)
    }

    fn verify<PCS: PolyComScheme>(
        pcs: &PCS,
        params: &PlonkPK<PCS>,
        pi: &[PCS::Field],
        proof: &PlonkPf<PCS>,
    ) -> bool {
        let mut transcript = Transcript::new(b"TestPlonk");
        verifier(
            &mut transcript,
            pcs,
            params.get_verifier_params_ref(),
            pi,
            proof,
        )
        .unwrap()
    }

    fn check_end_to_end<P: Pairing>() {
        let mut prng = test_rng();
        let cs = cubic_input::<P::ScalarField>(3, 35);
        let pcs = KZGCommitmentScheme::<P>::untrusted_setup(cs.size() + 3, &mut prng);
        let (params, proof) = prove(&pcs, &cs);

        let pi = [P::ScalarField::from(5u32), P::ScalarField::from(35u32)];
        assert!(verify(&pcs, &params, &pi, &proof));

        // the verifier only needs the first powers of the SRS
        let verifier_pcs = pcs.shrink_to_verifier_only();
        assert!(verify(&verifier_pcs, &params, &pi, &proof));

        let wrong_pi = [P::ScalarField::from(5u32), P::ScalarField::from(36u32)];
        assert!(!verify(&pcs, &params, &wrong_pi, &proof));

        let mut tampered = proof.clone();
        tampered.r_eval_zeta.add_assign(&P::ScalarField::one());
        assert!(!verify(&pcs, &params, &pi, &tampered));

        let mut tampered = proof.clone();
        tampered.z_eval_zeta_omega = tampered.w_polys_eval_zeta[0];
        assert!(!verify(&pcs, &params, &pi, &tampered));

        let mut tampered = proof.clone();
        tampered.opening_witness_zeta_omega = tampered.opening_witness_zeta.clone();
        assert!(!verify(&pcs, &params, &pi, &tampered));
    }

    #[test]
    fn end_to_end_bn254() {
        check_end_to_end::<misc_algebra::bn254::BN254PairingEngine>();
    }

    #[test]
    fn end_to_end_bls12_381() {
        check_end_to_end::<misc_algebra::bls12_381::BLSPairingEngine>();
    }

    #[test]
    fn malformed_inputs_are_errors() {
        let mut prng = test_rng();
        let cs = cubic_input::<misc_algebra::bn254::BN254Scalar>(2, 15);
        let pcs = KZGCommitmentSchemeBN254::untrusted_setup(cs.size() + 3, &mut prng);
        let (params, proof) = prove(&pcs, &cs);
        let vk = params.get_verifier_params_ref();

        let mut transcript = Transcript::new(b"TestPlonk");
        let short_pi = [misc_algebra::bn254::BN254Scalar::from(5u32)];
        assert_eq!(
            verifier(&mut transcript, &pcs, vk, &short_pi, &proof),
            Err(PlonkError::FuncParamsError)
        );

        let mut truncated = proof.clone();
        truncated.cm_t_vec.pop();
        let mut transcript = Transcript::new(b"TestPlonk");
        let pi = [
            misc_algebra::bn254::BN254Scalar::from(5u32),
            misc_algebra::bn254::BN254Scalar::from(15u32),
        ];
        assert_eq!(
            verifier(&mut transcript, &pcs, vk, &pi, &truncated),
            Err(PlonkError::ProofError)
        );
    }

    #[test]
    fn prover_rejects_a_bad_witness() {
        let mut prng = test_rng();
        let cs = cubic_input::<misc_algebra::bls12_381::BLSScalar>(3, 35);
        let pcs = KZGCommitmentSchemeBLS::untrusted_setup(cs.size() + 3, &mut prng);
        let params = indexer(&cs, &pcs).unwrap();

        let mut witness = cs.witness();
        witness[1] = witness[1].add(&misc_algebra::bls12_381::BLSScalar::one());
        let mut transcript = Transcript::new(b"TestPlonk");
        assert_eq!(
            prover(&mut prng, &mut transcript, &pcs, &cs, &params, &witness).unwrap_err(),
            PlonkError::GateNotSatisfied(1)
        );

        let mut transcript = Transcript::new(b"TestPlonk");
        assert_eq!(
            prover(&mut prng, &mut transcript, &pcs, &cs, &params, &witness[1..]).unwrap_err(),
            PlonkError::FuncParamsError
        );
    }

    #[test]
    fn proof_serialization() {
        let mut prng = test_rng();
        let cs = cubic_input::<misc_algebra::bls12_381::BLSScalar>(4, 73);
        let pcs = KZGCommitmentSchemeBLS::untrusted_setup(cs.size() + 3, &mut prng);
        let (params, proof) = prove(&pcs, &cs);

        let bytes = bincode::serialize(&proof).unwrap();
        let decoded: PlonkPf<KZGCommitmentSchemeBLS> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, proof);

        let json = serde_json::to_string(params.get_verifier_params_ref()).unwrap();
        let vk: crate::plonk::indexer::PlonkVK<KZGCommitmentSchemeBLS> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(&vk, params.get_verifier_params_ref());

        let pi = [
            misc_algebra::bls12_381::BLSScalar::from(5u32),
            misc_algebra::bls12_381::BLSScalar::from(73u32),
        ];
        let mut transcript = Transcript::new(b"TestPlonk");
        assert!(verifier(&mut transcript, &pcs, &vk, &pi, &decoded).unwrap());
    }
}
