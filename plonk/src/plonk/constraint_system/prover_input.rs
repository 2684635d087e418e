use crate::errors::{PlonkError, Result};
use crate::plonk::constraint_system::ConstraintSystem;
use misc_algebra::prelude::*;

/// A circuit with a calculated witness, in PLONK gate-vector form.
///
/// Position `i` of each vector describes gate `i`. The `*_indices` vectors hold
/// the equality group of the wire in that slot, `None` for unused slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverInput<F> {
    /// Values of the left slots.
    pub a: Vec<F>,
    /// Values of the right slots.
    pub b: Vec<F>,
    /// Values of the output slots.
    pub c: Vec<F>,
    /// Wire indices of the left slots.
    pub a_indices: Vec<Option<usize>>,
    /// Wire indices of the right slots.
    pub b_indices: Vec<Option<usize>>,
    /// Wire indices of the output slots.
    pub c_indices: Vec<Option<usize>>,
    /// The left selector.
    pub q_left: Vec<F>,
    /// The right selector.
    pub q_right: Vec<F>,
    /// The output selector.
    pub q_output: Vec<F>,
    /// The multiplication selector.
    pub q_mul: Vec<F>,
    /// The constant selector.
    pub q_const: Vec<F>,
    /// The public values, in gate order.
    pub public_inputs: Vec<F>,
    /// The gates holding the public values.
    pub public_input_positions: Vec<usize>,
    /// The copy constraint permutation on `[0, 3n)`.
    pub permutation: Vec<usize>,
}

impl<F: Scalar> ProverInput<F> {
    /// The number of gates.
    pub fn size(&self) -> usize {
        self.a.len()
    }

    /// Per-gate values of the public input polynomial: minus the public value at
    /// public input gates, zero elsewhere.
    pub fn public_input_evaluations(&self) -> Vec<F> {
        public_input_evaluations(
            self.size(),
            &self.public_input_positions,
            &self.public_inputs,
        )
    }

    /// The concatenation `a || b || c`, indexed like the permutation.
    pub fn witness(&self) -> Vec<F> {
        let mut w = Vec::with_capacity(3 * self.size());
        w.extend_from_slice(&self.a);
        w.extend_from_slice(&self.b);
        w.extend_from_slice(&self.c);
        w
    }

    /// Check the selector identity on every gate and the copy constraints on every position.
    pub fn pre_proving_check(&self) -> Result<()> {
        let consistent = self.public_inputs.len() == self.public_input_positions.len()
            && self
                .public_input_positions
                .iter()
                .zip(self.public_inputs.iter())
                .all(|(p, v)| self.a.get(*p) == Some(v));
        if !consistent {
            return Err(PlonkError::FuncParamsError);
        }
        self.verify_witness(&self.witness())
    }
}

impl<F: Scalar> ConstraintSystem for ProverInput<F> {
    type Field = F;

    fn size(&self) -> usize {
        self.a.len()
    }

    fn selector(&self, index: usize) -> Result<&[F]> {
        match index {
            0 => Ok(&self.q_left),
            1 => Ok(&self.q_right),
            2 => Ok(&self.q_output),
            3 => Ok(&self.q_mul),
            4 => Ok(&self.q_const),
            _ => Err(PlonkError::FuncParamsError),
        }
    }

    fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    fn public_vars_constraint_indices(&self) -> &[usize] {
        &self.public_input_positions
    }
}

/// The public input polynomial evaluations on a domain of size `n`.
pub fn public_input_evaluations<F: Scalar>(n: usize, positions: &[usize], values: &[F]) -> Vec<F> {
    let mut evals = vec![F::zero(); n];
    for (pos, value) in positions.iter().zip(values.iter()) {
        evals[*pos] = value.neg();
    }
    evals
}

/// Compute the copy constraint permutation over the concatenated columns.
///
/// Every position maps to the previous position holding the same wire index, the
/// first one to the last; positions without a wire map to themselves.
pub fn compute_permutation(columns: &[&[Option<usize>]]) -> Vec<usize> {
    let flat: Vec<Option<usize>> = columns.iter().flat_map(|c| c.iter().copied()).collect();
    let mut perm: Vec<usize> = (0..flat.len()).collect();
    // last position seen for every wire index, and its first position
    let mut last: Vec<Option<(usize, usize)>> = Vec::new();
    for (pos, index) in flat.iter().enumerate() {
        if let Some(index) = index {
            if last.len() <= *index {
                last.resize(*index + 1, None);
            }
            match last[*index] {
                Some((first, prev)) => {
                    perm[pos] = prev;
                    perm[first] = pos;
                    last[*index] = Some((first, pos));
                }
                None => last[*index] = Some((pos, pos)),
            }
        }
    }
    perm
}

/// The running product of the permutation argument on the domain points.
///
/// Column `j` row `i` contributes `(f + β·id + γ) / (f + β·σ + γ)`; the product starts
/// at one and the `i`-th output accumulates rows `0..i`.
pub fn running_product<F: Scalar>(
    beta: &F,
    gamma: &F,
    values: &[&[F]],
    ids: &[&[F]],
    sigmas: &[&[F]],
) -> Result<Vec<F>> {
    let n = values.first().map_or(0, |v| v.len());
    let mut z = Vec::with_capacity(n);
    let mut prev = F::one();
    z.push(prev);
    for i in 0..n.saturating_sub(1) {
        let mut numerator = F::one();
        let mut denominator = F::one();
        for ((f, id), sigma) in values.iter().zip(ids.iter()).zip(sigmas.iter()) {
            numerator.mul_assign(&f[i].add(&beta.mul(&id[i])).add(gamma));
            denominator.mul_assign(&f[i].add(&beta.mul(&sigma[i])).add(gamma));
        }
        prev.mul_assign(&numerator.mul(&denominator.inv()?));
        z.push(prev);
    }
    Ok(z)
}
