use crate::errors::{PoseidonError, Result};
use blake2::{digest::consts::U32, Blake2b, Digest};
use ark_std::format;
use misc_algebra::prelude::*;

type Blake2b256 = Blake2b<U32>;

/// The number of nonces tried before giving up on a matrix seed.
const MAX_MATRIX_NONCE: usize = 10000;

/// Derive `n` field elements from `seed` by iterating blake2b-256 over it,
/// each digest read as a little-endian integer reduced mod `p`.
pub fn get_pseudo_random<F: Scalar>(seed: &[u8], n: usize) -> Vec<F> {
    let mut h = seed.to_vec();
    let mut res = Vec::with_capacity(n);
    for _ in 0..n {
        h = Blake2b256::digest(&h).to_vec();
        res.push(F::from_le_bytes_mod_order(&h));
    }
    res
}

/// Return true if the elements are all nonzero and pairwise different.
fn all_different<F: Scalar>(elems: &[F]) -> bool {
    elems.iter().enumerate().all(|(i, a)| {
        !a.is_zero() && elems[i + 1..].iter().all(|b| a != b)
    })
}

/// Derive the `t x t` Cauchy matrix `M[i][j] = 1 / (c_i - c_{t+j})`.
///
/// The elements `c` are drawn from `seed || "_matrix_" || nonce` with a four-digit
/// nonce starting at `0000`, and the nonce is bumped until all `t * t` drawn
/// elements are nonzero and distinct.
pub fn get_matrix<F: Scalar>(t: usize, seed: &[u8]) -> Result<Vec<Vec<F>>> {
    if t < 2 {
        return Err(PoseidonError::ParameterError);
    }

    let mut cmatrix = None;
    for nonce in 0..MAX_MATRIX_NONCE {
        let mut nonce_seed = seed.to_vec();
        nonce_seed.extend_from_slice(b"_matrix_");
        nonce_seed.extend_from_slice(format!("{:04}", nonce).as_bytes());

        let elems = get_pseudo_random::<F>(&nonce_seed, t * t);
        if all_different(&elems) {
            cmatrix = Some(elems);
            break;
        }
    }
    let cmatrix = cmatrix.ok_or(PoseidonError::ParameterError)?;

    let mut matrix = Vec::with_capacity(t);
    for i in 0..t {
        let row = (0..t)
            .map(|j| cmatrix[i].sub(&cmatrix[t + j]).inv())
            .collect::<core::result::Result<Vec<F>, AlgebraError>>()?;
        matrix.push(row);
    }
    Ok(matrix)
}

/// Derive one round constant per round from `seed || "_constants"`.
/// The same constant is added to every lane of the state.
pub fn get_constants<F: Scalar>(seed: &[u8], rounds: usize) -> Vec<F> {
    let mut constants_seed = seed.to_vec();
    constants_seed.extend_from_slice(b"_constants");
    get_pseudo_random(&constants_seed, rounds)
}

/// Return `(t, rounds_f, rounds_p)` for hashing `n_inputs` elements
/// at the 128-bit security level over a 254-bit field.
pub fn recommend_parameter(n_inputs: usize) -> Result<(usize, usize, usize)> {
    if n_inputs < 2 {
        return Err(PoseidonError::ParameterError);
    }
    // one lane of capacity
    let t = n_inputs + 1;
    let rounds_p = match t {
        3 => 49,
        4..=7 => 50,
        8..=14 => 51,
        15..=29 => 52,
        _ => return Err(PoseidonError::ParameterError),
    };
    Ok((t, 8, rounds_p))
}
