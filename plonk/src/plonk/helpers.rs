use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::{
        prover_input::{public_input_evaluations, running_product},
        ConstraintSystem,
    },
    indexer::{encode_perm_to_group, PlonkPK, PlonkVK},
};
use crate::poly_commit::{
    domain::EvaluationDomain,
    field_polynomial::FpPolynomial,
    pcs::{HomomorphicPolyComElem, PolyComScheme},
};
use ark_std::{cfg_into_iter, cmp::min};
use misc_algebra::prelude::*;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The data structure for challenges in Plonk.
#[derive(Default)]
pub(super) struct PlonkChallenges<F> {
    challenges: Vec<F>,
}

impl<F: Scalar> PlonkChallenges<F> {
    /// Create a challenges with capacity 5.
    pub(super) fn new() -> PlonkChallenges<F> {
        PlonkChallenges {
            challenges: Vec::with_capacity(5),
        }
    }

    /// Insert beta and gamma.
    pub(super) fn insert_beta_gamma(&mut self, beta: F, gamma: F) -> Result<()> {
        if self.challenges.is_empty() {
            self.challenges.push(beta);
            self.challenges.push(gamma);
            Ok(())
        } else {
            Err(PlonkError::ChallengeError)
        }
    }

    /// Insert alpha.
    pub(super) fn insert_alpha(&mut self, alpha: F) -> Result<()> {
        self.insert_at(2, alpha)
    }

    /// Insert zeta.
    pub(super) fn insert_zeta(&mut self, zeta: F) -> Result<()> {
        self.insert_at(3, zeta)
    }

    /// Insert v.
    pub(super) fn insert_v(&mut self, v: F) -> Result<()> {
        self.insert_at(4, v)
    }

    fn insert_at(&mut self, position: usize, challenge: F) -> Result<()> {
        if self.challenges.len() == position {
            self.challenges.push(challenge);
            Ok(())
        } else {
            Err(PlonkError::ChallengeError)
        }
    }

    /// Return beta and gamma.
    pub(super) fn get_beta_gamma(&self) -> Result<(&F, &F)> {
        if self.challenges.len() > 1 {
            Ok((&self.challenges[0], &self.challenges[1]))
        } else {
            Err(PlonkError::ChallengeError)
        }
    }

    /// Return alpha.
    pub(super) fn get_alpha(&self) -> Result<&F> {
        self.challenges.get(2).ok_or(PlonkError::ChallengeError)
    }

    /// Return zeta.
    pub(super) fn get_zeta(&self) -> Result<&F> {
        self.challenges.get(3).ok_or(PlonkError::ChallengeError)
    }

    /// Return v.
    pub(super) fn get_v(&self) -> Result<&F> {
        self.challenges.get(4).ok_or(PlonkError::ChallengeError)
    }
}

/// Return the PI polynomial.
pub(super) fn pi_poly<F: Scalar>(
    domain: &EvaluationDomain<F>,
    positions: &[usize],
    pi: &[F],
) -> Result<FpPolynomial<F>> {
    let evals = public_input_evaluations(domain.size(), positions, pi);
    Ok(FpPolynomial::from_coefs(domain.inverse_fft(&evals)?))
}

/// Add `(b_0 + b_1 X + ... + b_{num_blinds-1} X^{num_blinds-1}) * (X^{zeroing_degree} - 1)`
/// with random `b_i` to `polynomial`, leaving its values on the subgroup of order
/// `zeroing_degree` unchanged.
pub(super) fn hide_polynomial<R: CryptoRng + RngCore, F: Scalar>(
    prng: &mut R,
    polynomial: &mut FpPolynomial<F>,
    num_blinds: usize,
    zeroing_degree: usize,
) -> Vec<F> {
    let mut blinds = Vec::with_capacity(num_blinds);
    for i in 0..num_blinds {
        let blind = F::random(prng);
        blinds.push(blind);
        polynomial.add_coef_assign(&blind, zeroing_degree + i);
        polynomial.add_coef_assign(&blind.neg(), i);
    }
    blinds
}

/// Build the z polynomial, by interpolating
/// z(\omega^{i+1}) = z(\omega^i)\prod_{j=1}^{n_wires_per_gate}(fj(\omega^i)
/// + \beta * k_j * \omega^i +\gamma)/(fj(\omega^i) + \beta * perm_j(\omega^i) +\gamma)
/// and setting z(1) = 1 for the base case
pub(super) fn z_poly<PCS: PolyComScheme, CS: ConstraintSystem<Field = PCS::Field>>(
    cs: &CS,
    prover_params: &PlonkPK<PCS>,
    domain: &EvaluationDomain<PCS::Field>,
    w: &[PCS::Field],
    challenges: &PlonkChallenges<PCS::Field>,
) -> Result<FpPolynomial<PCS::Field>> {
    let n = cs.size();
    let (beta, gamma) = challenges.get_beta_gamma()?;
    let k = &prover_params.verifier_params.k;
    let group = domain.elements();

    let ids: Vec<Vec<PCS::Field>> = k
        .iter()
        .map(|k_j| group.iter().map(|x| k_j.mul(x)).collect())
        .collect();
    let perm = encode_perm_to_group(group, cs.permutation(), k);

    let values: Vec<&[PCS::Field]> = w.chunks(n).collect();
    let ids: Vec<&[PCS::Field]> = ids.iter().map(|v| v.as_slice()).collect();
    let sigmas: Vec<&[PCS::Field]> = perm.chunks(n).collect();
    let z_evals = running_product(beta, gamma, &values, &ids, &sigmas)?;

    Ok(FpPolynomial::from_coefs(domain.inverse_fft(&z_evals)?))
}

/// Compute the t polynomial.
pub(super) fn t_poly<PCS: PolyComScheme, CS: ConstraintSystem<Field = PCS::Field>>(
    cs: &CS,
    prover_params: &PlonkPK<PCS>,
    w_polys: &[FpPolynomial<PCS::Field>],
    z: &FpPolynomial<PCS::Field>,
    challenges: &PlonkChallenges<PCS::Field>,
    pi: &FpPolynomial<PCS::Field>,
) -> Result<FpPolynomial<PCS::Field>> {
    let n = cs.size();
    let m = cs.quot_eval_dom_size();
    let factor = m / n;
    if n * factor != m {
        return Err(PlonkError::SetupError);
    }
    let domain_m = EvaluationDomain::<PCS::Field>::new(m)?;
    let k = &prover_params.verifier_params.k;

    // Compute the evaluations of w/pi/z polynomials on the coset g * <root_m>.
    let mut w_polys_coset_evals = Vec::with_capacity(w_polys.len());
    for poly in w_polys.iter() {
        w_polys_coset_evals.push(domain_m.coset_fft(poly.get_coefs_ref())?);
    }
    let pi_coset_evals = domain_m.coset_fft(pi.get_coefs_ref())?;
    let z_coset_evals = domain_m.coset_fft(z.get_coefs_ref())?;

    // Compute the evaluations of the quotient polynomial on the coset.
    let (beta, gamma) = challenges.get_beta_gamma()?;
    let alpha = challenges.get_alpha()?;
    let alpha_sq = alpha.mul(alpha);
    let one = PCS::Field::one();
    let q_coset_evals = &prover_params.q_coset_evals;
    let s_coset_evals = &prover_params.s_coset_evals;
    let l1_coset_evals = &prover_params.l1_coset_evals;
    let z_h_inv_coset_evals = &prover_params.z_h_inv_coset_evals;
    let coset_quotient = &prover_params.coset_quotient;

    let t_coset_evals = cfg_into_iter!(0..m)
        .map(|point| -> Result<PCS::Field> {
            let w_vals: Vec<&PCS::Field> = w_polys_coset_evals
                .iter()
                .map(|poly_coset_evals| &poly_coset_evals[point])
                .collect();
            let q_vals: Vec<&PCS::Field> = q_coset_evals
                .iter()
                .map(|poly_coset_evals| &poly_coset_evals[point])
                .collect();
            // q * w
            let term1 = CS::eval_gate_func(&w_vals, &q_vals, &pi_coset_evals[point])?;

            // alpha * [z(X)\prod_j (fj(X) + beta * kj * X + gamma)]
            let mut term2 = alpha.mul(&z_coset_evals[point]);
            for (w_val, k_j) in w_vals.iter().zip(k.iter()) {
                let tmp = w_val
                    .add(gamma)
                    .add(&beta.mul(&k_j.mul(&coset_quotient[point])));
                term2.mul_assign(&tmp);
            }

            // alpha * [z(\omega * X)\prod_j (fj(X) + beta * perm_j(X) + gamma)]
            let mut term3 = alpha.mul(&z_coset_evals[(point + factor) % m]);
            for (w_val, s_evals) in w_vals.iter().zip(s_coset_evals.iter()) {
                let tmp = w_val.add(gamma).add(&beta.mul(&s_evals[point]));
                term3.mul_assign(&tmp);
            }

            // alpha^2 * (z(X) - 1) * L_1(X)
            let term4 = alpha_sq
                .mul(&l1_coset_evals[point])
                .mul(&z_coset_evals[point].sub(&one));

            let numerator = term1.add(&term2).add(&term4.sub(&term3));
            Ok(numerator.mul(&z_h_inv_coset_evals[point]))
        })
        .collect::<Result<Vec<PCS::Field>>>()?;

    Ok(FpPolynomial::from_coefs(
        domain_m.coset_inverse_fft(&t_coset_evals)?,
    ))
}

/// Compute r polynomial or commitment.
fn r_poly_or_comm<F: Scalar, PCSType: HomomorphicPolyComElem<Scalar = F>>(
    w: &[F],
    q_polys_or_comms: &[PCSType],
    k: &[F],
    last_s_poly_or_comm: &PCSType,
    z_poly_or_comm: &PCSType,
    w_polys_eval_zeta: &[&F],
    s_polys_eval_zeta: &[&F],
    z_eval_zeta_omega: &F,
    challenges: &PlonkChallenges<F>,
    first_lagrange_eval_zeta: &F,
) -> Result<PCSType> {
    let (beta, gamma) = challenges.get_beta_gamma()?;
    let alpha = challenges.get_alpha()?;

    // 1. sum_{i=1..n_selectors} wi * qi(X)
    let mut l = PCSType::get_identity();
    for (q, w_i) in q_polys_or_comms.iter().zip(w.iter()) {
        l.add_assign(&q.mul(w_i));
    }

    // 2. z(X) [ alpha * prod_{j=1..n_wires_per_gate} (fj(zeta) + beta * kj * zeta + gamma)
    //              + alpha^2 * L1(zeta)]
    let z_scalar =
        compute_z_scalar_in_r(w_polys_eval_zeta, k, challenges, first_lagrange_eval_zeta)?;
    l.add_assign(&z_poly_or_comm.mul(&z_scalar));

    // 3. - perm_{n_wires_per_gate}(X) [alpha * z(zeta * omega) * beta
    //    * prod_{j=1..n_wires_per_gate-1}(fj(zeta) + beta * perm_j(zeta) + gamma)]
    let mut s_last_poly_scalar = alpha.mul(&z_eval_zeta_omega.mul(beta));
    for (w_eval, s_eval) in w_polys_eval_zeta.iter().zip(s_polys_eval_zeta.iter()) {
        let tmp = w_eval.add(&beta.mul(*s_eval)).add(gamma);
        s_last_poly_scalar.mul_assign(&tmp);
    }
    l.sub_assign(&last_s_poly_or_comm.mul(&s_last_poly_scalar));
    Ok(l)
}

/// Compute the r polynomial.
pub(super) fn r_poly<PCS: PolyComScheme, CS: ConstraintSystem<Field = PCS::Field>>(
    prover_params: &PlonkPK<PCS>,
    z: &FpPolynomial<PCS::Field>,
    w_polys_eval_zeta: &[&PCS::Field],
    s_polys_eval_zeta: &[&PCS::Field],
    z_eval_zeta_omega: &PCS::Field,
    challenges: &PlonkChallenges<PCS::Field>,
    first_lagrange_eval_zeta: &PCS::Field,
) -> Result<FpPolynomial<PCS::Field>> {
    let w = CS::eval_selector_multipliers(w_polys_eval_zeta)?;
    let last_s_poly = prover_params
        .s_polys
        .get(CS::n_wires_per_gate() - 1)
        .ok_or(PlonkError::SetupError)?;
    r_poly_or_comm::<PCS::Field, FpPolynomial<PCS::Field>>(
        &w,
        &prover_params.q_polys,
        &prover_params.verifier_params.k,
        last_s_poly,
        z,
        w_polys_eval_zeta,
        s_polys_eval_zeta,
        z_eval_zeta_omega,
        challenges,
        first_lagrange_eval_zeta,
    )
}

/// Commit the r commitment.
pub(super) fn r_commitment<PCS: PolyComScheme, CS: ConstraintSystem<Field = PCS::Field>>(
    verifier_params: &PlonkVK<PCS>,
    cm_z: &PCS::Commitment,
    w_polys_eval_zeta: &[&PCS::Field],
    s_polys_eval_zeta: &[&PCS::Field],
    z_eval_zeta_omega: &PCS::Field,
    challenges: &PlonkChallenges<PCS::Field>,
    first_lagrange_eval_zeta: &PCS::Field,
) -> Result<PCS::Commitment> {
    let w = CS::eval_selector_multipliers(w_polys_eval_zeta)?;
    let last_cm_s = verifier_params
        .cm_s_vec
        .get(CS::n_wires_per_gate() - 1)
        .ok_or(PlonkError::FuncParamsError)?;
    r_poly_or_comm::<PCS::Field, PCS::Commitment>(
        &w,
        &verifier_params.cm_q_vec,
        &verifier_params.k,
        last_cm_s,
        cm_z,
        w_polys_eval_zeta,
        s_polys_eval_zeta,
        z_eval_zeta_omega,
        challenges,
        first_lagrange_eval_zeta,
    )
}

/// Compute sum_{i=1}^\ell w_i L_j(X), where j is the constraint
/// index for the i-th public value. L_j(X) = c_j (X^n-1) / (X - \omega^j) is
/// the j-th lagrange base (zero for every X = \omega^i, except when i == j)
pub(super) fn eval_pi_poly<PCS: PolyComScheme>(
    verifier_params: &PlonkVK<PCS>,
    public_inputs: &[PCS::Field],
    eval_point: &PCS::Field,
) -> Result<PCS::Field> {
    let mut eval = PCS::Field::zero();
    // compute X ^ n - 1
    let x_to_n = eval_point.pow(&[verifier_params.cs_size as u64]);
    let num = x_to_n.sub(&PCS::Field::one());

    for ((constraint_index, public_value), lagrange_constant) in verifier_params
        .public_vars_constraint_indices
        .iter()
        .zip(public_inputs)
        .zip(verifier_params.lagrange_constants.iter())
    {
        // X - \omega^j j-th Lagrange denominator
        let root_to_j = verifier_params.root.pow(&[*constraint_index as u64]);
        let denominator = eval_point.sub(&root_to_j);
        let lagrange_i = lagrange_constant.mul(&denominator.inv()?);
        // the PI polynomial takes minus the public value
        eval.sub_assign(&lagrange_i.mul(public_value));
    }
    Ok(eval.mul(&num))
}

/// Compute constant c_j such that 1 = c_j * prod_{i != j} (\omega^j - \omega^i).
/// In such case, j-th lagrange base can be represented
/// by L_j(X) = c_j (X^n-1) / (X- \omega^j)
pub(super) fn compute_lagrange_constant<F: Scalar>(group: &[F], base_index: usize) -> Result<F> {
    let mut constant_inv = F::one();
    for (i, elem) in group.iter().enumerate() {
        if i == base_index {
            continue;
        }
        constant_inv.mul_assign(&group[base_index].sub(elem));
    }
    Ok(constant_inv.inv()?)
}

/// Return `Z_H(\zeta) = \zeta^n - 1` and `L_1(\zeta) = Z_H(\zeta) / (n (\zeta - 1))`.
pub(super) fn first_lagrange_poly<F: Scalar>(
    challenges: &PlonkChallenges<F>,
    group_order: u64,
) -> Result<(F, F)> {
    let zeta = challenges.get_zeta()?;
    let one = F::one();
    let z_h_eval_zeta = zeta.pow(&[group_order]).sub(&one);
    let denominator = zeta.sub(&one).mul(&F::from(group_order));
    let first_lagrange_eval_zeta = z_h_eval_zeta.mul(&denominator.inv()?);
    Ok((z_h_eval_zeta, first_lagrange_eval_zeta))
}

/// compute the scalar factor of z(X) in the r poly.
/// prod(fi(\zeta) + \beta * k_i * \zeta + \gamma) * \alpha
///       + L_1(\zeta) * \alpha^2
fn compute_z_scalar_in_r<F: Scalar>(
    w_polys_eval_zeta: &[&F],
    k: &[F],
    challenges: &PlonkChallenges<F>,
    first_lagrange_eval_zeta: &F,
) -> Result<F> {
    let (beta, gamma) = challenges.get_beta_gamma()?;
    let alpha = challenges.get_alpha()?;
    let zeta = challenges.get_zeta()?;

    // 1. alpha * prod_{i=1..n_wires_per_gate}(fi(\zeta) + \beta * k_i * \zeta + \gamma)
    let beta_zeta = beta.mul(zeta);
    let mut z_scalar = *alpha;
    for (w_eval, k_i) in w_polys_eval_zeta.iter().zip(k.iter()) {
        let tmp = w_eval.add(&k_i.mul(&beta_zeta)).add(gamma);
        z_scalar.mul_assign(&tmp);
    }

    // 2. alpha^2 * L_1(\zeta)
    let alpha_sq = alpha.mul(alpha);
    z_scalar.add_assign(&first_lagrange_eval_zeta.mul(&alpha_sq));
    Ok(z_scalar)
}

/// The part of the quotient identity at \zeta that does not involve r(\zeta):
/// PI(\zeta) - \alpha (a + \beta s1 + \gamma)(b + \beta s2 + \gamma)(c + \gamma) z(\zeta\omega)
///   - \alpha^2 L_1(\zeta).
pub(super) fn r_complement_eval_zeta<F: Scalar>(
    w_polys_eval_zeta: &[F],
    s_polys_eval_zeta: &[F],
    z_eval_zeta_omega: &F,
    challenges: &PlonkChallenges<F>,
    pi_eval_zeta: &F,
    first_lagrange_eval_zeta: &F,
) -> Result<F> {
    let alpha = challenges.get_alpha()?;
    let (beta, gamma) = challenges.get_beta_gamma()?;
    let (last_w_eval, w_evals) = w_polys_eval_zeta
        .split_last()
        .ok_or(PlonkError::ProofError)?;

    let mut term1 = alpha.mul(z_eval_zeta_omega);
    for (w_eval, s_eval) in w_evals.iter().zip(s_polys_eval_zeta.iter()) {
        let b = w_eval.add(&beta.mul(s_eval)).add(gamma);
        term1.mul_assign(&b);
    }
    term1.mul_assign(&last_w_eval.add(gamma));

    let term2 = first_lagrange_eval_zeta.mul(&alpha.mul(alpha));
    Ok(pi_eval_zeta.sub(&term1).sub(&term2))
}

/// The scalars of the batched opening at \zeta, in the order
/// `t_lo, t_mid, t_hi, r, a, b, c, S1, S2`:
/// `1, \zeta^{n+2}, \zeta^{2(n+2)}, v, v^2, ..., v^6`.
pub(super) fn opening_scalars<F: Scalar>(
    challenges: &PlonkChallenges<F>,
    chunk_size: usize,
) -> Result<Vec<F>> {
    let zeta = challenges.get_zeta()?;
    let v = challenges.get_v()?;
    let zeta_chunk = zeta.pow(&[chunk_size as u64]);

    let mut scalars = vec![F::one(), zeta_chunk, zeta_chunk.mul(&zeta_chunk)];
    let mut power = *v;
    for _ in 0..6 {
        scalars.push(power);
        power.mul_assign(v);
    }
    Ok(scalars)
}

/// Compute `sum_i scalars_i * items_i` for polynomials or commitments.
pub(super) fn linear_combination<F: Scalar, PCSType: HomomorphicPolyComElem<Scalar = F>>(
    items: &[&PCSType],
    scalars: &[F],
) -> Result<PCSType> {
    if items.len() != scalars.len() {
        return Err(PlonkError::FuncParamsError);
    }
    let mut res = PCSType::get_identity();
    for (item, scalar) in items.iter().zip(scalars.iter()) {
        res.add_assign(&item.mul(scalar));
    }
    Ok(res)
}

/// Split the t polynomial into `n_wires_per_gate` polynomials of `chunk_size`
/// coefficients, blind the split and commit.
/// The blinds cancel in `t_0 + X^{chunk_size} t_1 + X^{2 chunk_size} t_2`.
pub(crate) fn split_t_and_commit<R: CryptoRng + RngCore, PCS: PolyComScheme>(
    prng: &mut R,
    pcs: &PCS,
    t: &FpPolynomial<PCS::Field>,
    n_wires_per_gate: usize,
    chunk_size: usize,
) -> Result<(Vec<PCS::Commitment>, Vec<FpPolynomial<PCS::Field>>)> {
    let coefs_len = t.get_coefs_ref().len();
    if coefs_len > n_wires_per_gate * chunk_size {
        return Err(PlonkError::ProofError);
    }

    let mut cm_t_vec = vec![];
    let mut t_polys = vec![];
    let zero = PCS::Field::zero();
    let mut prev_blind = zero;

    for i in 0..n_wires_per_gate {
        let coefs_start = i * chunk_size;
        let coefs_end = min(coefs_len, (i + 1) * chunk_size);
        let mut coefs = if coefs_start < coefs_len {
            t.get_coefs_ref()[coefs_start..coefs_end].to_vec()
        } else {
            vec![]
        };
        coefs.resize(chunk_size, zero);
        coefs[0].sub_assign(&prev_blind);

        if i != n_wires_per_gate - 1 {
            let blind = PCS::Field::random(prng);
            coefs.push(blind);
            prev_blind = blind;
        }

        let t_poly = FpPolynomial::from_coefs(coefs);
        let cm_t = pcs
            .commit(&t_poly)
            .map_err(|_| PlonkError::CommitmentError)?;
        cm_t_vec.push(cm_t);
        t_polys.push(t_poly);
    }

    Ok((cm_t_vec, t_polys))
}

#[cfg(test)]
mod test {
    use super::{
        compute_lagrange_constant, first_lagrange_poly, hide_polynomial, linear_combination,
        opening_scalars, split_t_and_commit, PlonkChallenges,
    };
    use crate::errors::PlonkError;
    use crate::poly_commit::{
        field_polynomial::FpPolynomial,
        kzg_poly_com::KZGCommitmentSchemeBN254,
        pcs::PolyComScheme,
    };
    use misc_algebra::{bn254::BN254Scalar, prelude::*, toy::F13};

    type F = BN254Scalar;

    #[test]
    fn challenges_come_in_order() {
        let mut challenges = PlonkChallenges::<F13>::new();
        assert_eq!(challenges.insert_alpha(F13::one()), Err(PlonkError::ChallengeError));
        assert!(challenges.get_beta_gamma().is_err());
        challenges
            .insert_beta_gamma(F13::from(2u32), F13::from(3u32))
            .unwrap();
        challenges.insert_alpha(F13::from(4u32)).unwrap();
        assert!(challenges.insert_v(F13::from(6u32)).is_err());
        challenges.insert_zeta(F13::from(5u32)).unwrap();
        challenges.insert_v(F13::from(6u32)).unwrap();
        assert_eq!(
            challenges.get_beta_gamma().unwrap(),
            (&F13::from(2u32), &F13::from(3u32))
        );
        assert_eq!(challenges.get_v().unwrap(), &F13::from(6u32));
    }

    #[test]
    fn first_lagrange_at_zeta() {
        let challenges_at = |zeta: u32| {
            let mut challenges = PlonkChallenges::<F13>::new();
            challenges
                .insert_beta_gamma(F13::from(2u32), F13::from(3u32))
                .unwrap();
            challenges.insert_alpha(F13::from(4u32)).unwrap();
            challenges.insert_zeta(F13::from(zeta)).unwrap();
            challenges
        };

        // Z_H(2) = 2^4 - 1 and L1(2) = 15 / (4 * 1)
        let (z_h, l1) = first_lagrange_poly(&challenges_at(2), 4).unwrap();
        assert_eq!(z_h, F13::from(2u32));
        assert_eq!(l1, F13::from(15u32).mul(&F13::from(4u32).inv().unwrap()));

        // L1 vanishes on the rest of the subgroup
        for root in F13::roots_of_unity(4).unwrap().iter().skip(1) {
            let zeta: u32 = (1..13).find(|v| F13::from(*v) == *root).unwrap();
            let (z_h, l1) = first_lagrange_poly(&challenges_at(zeta), 4).unwrap();
            assert!(z_h.is_zero());
            assert!(l1.is_zero());
        }

        assert!(first_lagrange_poly(&challenges_at(1), 4).is_err());
    }

    #[test]
    fn hiding_keeps_domain_values() {
        let mut prng = test_rng();
        let poly = FpPolynomial::from_coefs(vec![F13::from(3u32), F13::from(7u32)]);
        let mut hidden = poly.clone();
        let blinds = hide_polynomial(&mut prng, &mut hidden, 2, 4);
        assert_eq!(blinds.len(), 2);
        for x in F13::roots_of_unity(4).unwrap() {
            assert_eq!(poly.eval(&x), hidden.eval(&x));
        }
    }

    #[test]
    fn lagrange_constants() {
        let group = F13::roots_of_unity(4).unwrap();
        for j in 0..4 {
            let c = compute_lagrange_constant(&group, j).unwrap();
            // c_j = omega^j / n
            assert_eq!(c.mul(&F13::from(4u32)), group[j]);
        }
    }

    #[test]
    fn split_t_cancels_blinds() {
        let mut prng = test_rng();
        let n = 4;
        let pcs = KZGCommitmentSchemeBN254::untrusted_setup(n + 3, &mut prng);
        let t = FpPolynomial::<F>::random(&mut prng, 3 * n + 5);
        let (cm_t_vec, t_polys) = split_t_and_commit(&mut prng, &pcs, &t, 3, n + 2).unwrap();
        assert_eq!(cm_t_vec.len(), 3);
        for (cm, poly) in cm_t_vec.iter().zip(t_polys.iter()) {
            assert!(poly.degree() <= n + 2);
            assert_eq!(&pcs.commit(poly).unwrap(), cm);
        }

        let x = F::random(&mut prng);
        let x_chunk = x.pow(&[(n + 2) as u64]);
        let combined = t_polys[0]
            .eval(&x)
            .add(&x_chunk.mul(&t_polys[1].eval(&x)))
            .add(&x_chunk.mul(&x_chunk).mul(&t_polys[2].eval(&x)));
        assert_eq!(combined, t.eval(&x));

        let too_long = FpPolynomial::<F>::random(&mut prng, 3 * n + 6);
        assert!(split_t_and_commit(&mut prng, &pcs, &too_long, 3, n + 2).is_err());
    }

    #[test]
    fn batched_opening_scalars() {
        let mut challenges = PlonkChallenges::<F13>::new();
        challenges
            .insert_beta_gamma(F13::one(), F13::one())
            .unwrap();
        challenges.insert_alpha(F13::one()).unwrap();
        challenges.insert_zeta(F13::from(2u32)).unwrap();
        challenges.insert_v(F13::from(3u32)).unwrap();
        let scalars = opening_scalars(&challenges, 3).unwrap();
        let expected: Vec<F13> = [1u32, 8, 12, 3, 9, 1, 3, 9, 1]
            .iter()
            .map(|x| F13::from(*x))
            .collect();
        assert_eq!(scalars, expected);

        let p = FpPolynomial::from_coefs(vec![F13::one(), F13::from(2u32)]);
        let q = FpPolynomial::from_coefs(vec![F13::zero(), F13::one()]);
        let combined = linear_combination(&[&p, &q], &[F13::from(2u32), F13::from(5u32)]).unwrap();
        assert_eq!(
            combined,
            FpPolynomial::from_coefs(vec![F13::from(2u32), F13::from(9u32)])
        );
        assert!(linear_combination(&[&p], &[]).is_err());
    }
}
