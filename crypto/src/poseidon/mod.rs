use crate::errors::{PoseidonError, Result};
use misc_algebra::prelude::*;

/// The module for deriving the matrix, the round constants and the round numbers.
mod params;

pub use params::{get_constants, get_matrix, get_pseudo_random, recommend_parameter};

/// The seed of the default instances.
pub const DEFAULT_SEED: &[u8] = b"poseidon";

/// A Poseidon instance of width `t`: `rounds_f` full rounds split evenly around
/// `rounds_p` partial rounds, with the S-box `x^5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseidonInstance<F> {
    /// The state width.
    pub t: usize,
    /// The number of full rounds.
    pub rounds_f: usize,
    /// The number of partial rounds.
    pub rounds_p: usize,
    /// The `t x t` mixing matrix.
    pub matrix: Vec<Vec<F>>,
    /// One constant per round.
    pub constants: Vec<F>,
}

impl<F: Scalar> PoseidonInstance<F> {
    /// Derive an instance from the seed.
    pub fn new(t: usize, rounds_f: usize, rounds_p: usize, seed: &[u8]) -> Result<Self> {
        if rounds_f % 2 != 0 {
            return Err(PoseidonError::ParameterError);
        }
        let matrix = get_matrix(t, seed)?;
        let constants = get_constants(seed, rounds_f + rounds_p);
        Ok(Self {
            t,
            rounds_f,
            rounds_p,
            matrix,
            constants,
        })
    }

    /// Create the instance recommended for `n_inputs` inputs, with the default seed.
    pub fn from_inputs_len(n_inputs: usize) -> Result<Self> {
        let (t, rounds_f, rounds_p) = recommend_parameter(n_inputs)?;
        Self::new(t, rounds_f, rounds_p, DEFAULT_SEED)
    }

    /// Hash between one and `t` field elements into one.
    pub fn hash(&self, inputs: &[F]) -> Result<F> {
        if inputs.is_empty() || inputs.len() > self.t {
            return Err(PoseidonError::InputLengthError);
        }

        let mut state = inputs.to_vec();
        state.resize(self.t, F::zero());

        let half_f = self.rounds_f / 2;
        for (i, c) in self.constants.iter().enumerate() {
            state.iter_mut().for_each(|s| s.add_assign(c));
            if i < half_f || i >= half_f + self.rounds_p {
                state.iter_mut().for_each(|s| *s = sigma(s));
            } else {
                state[0] = sigma(&state[0]);
            }
            state = self.mix(&state);
        }
        Ok(state[0])
    }

    fn mix(&self, state: &[F]) -> Vec<F> {
        self.matrix
            .iter()
            .map(|row| row.iter().zip(state.iter()).map(|(m, s)| m.mul(s)).sum())
            .collect()
    }
}

/// The S-box `x^5`.
#[inline]
fn sigma<F: Scalar>(x: &F) -> F {
    let x4 = x.square().square();
    x4.mul(x)
}
