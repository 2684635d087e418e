//! Tiny prime fields whose arithmetic can be followed by hand.
//!
//! `F13` has a multiplicative subgroup of order 4 and `F337` one of order 16, enough
//! to exercise FFTs, interpolation and permutation arguments in unit tests.

use ark_ff::fields::{Fp64, MontBackend, MontConfig};

#[derive(MontConfig)]
#[modulus = "13"]
#[generator = "2"]
pub struct F13Config;

#[derive(MontConfig)]
#[modulus = "337"]
#[generator = "10"]
pub struct F337Config;

scalar_wrapper!(
    /// The prime field of order 13
    F13,
    Fp64<MontBackend<F13Config, 1>>
);

scalar_wrapper!(
    /// The prime field of order 337
    F337,
    Fp64<MontBackend<F337Config, 1>>
);

#[cfg(test)]
mod tests {
    use super::{F13, F337};
    use crate::prelude::*;
    use crate::traits::group_tests::{test_roots_of_unity, test_scalar_operations};

    #[test]
    fn toy_field_arithmetic() {
        assert_eq!(F13::from(7u32).add(&F13::from(9u32)), F13::from(3u32));
        assert_eq!(F13::from(4u32).mul(&F13::from(10u32)), F13::one());
        assert_eq!(F13::from(4u32).inv().unwrap(), F13::from(10u32));
        assert_eq!(F13::from_i64(-1), F13::from(12u32));
        assert_eq!(F337::from(336u32).add(&F337::one()), F337::zero());
        test_scalar_operations::<F13>();
        test_scalar_operations::<F337>();
    }

    #[test]
    fn toy_field_bytes() {
        assert_eq!(F13::bytes_len(), 1);
        assert_eq!(F337::bytes_len(), 2);
        assert_eq!(F337::from(300u32).to_bytes(), vec![1, 44]);
        assert_eq!(F337::from_bytes(&[1, 44]).unwrap(), F337::from(300u32));
        assert!(F337::from_bytes(&[1, 81]).is_err());
        assert_eq!(F337::from_be_bytes_mod_order(&[1, 81]), F337::zero());
    }

    #[test]
    fn toy_roots_of_unity() {
        let expected: Vec<F337> = [1u32, 85, 148, 111, 336, 252, 189, 226]
            .iter()
            .map(|x| F337::from(*x))
            .collect();
        assert_eq!(F337::roots_of_unity(8).unwrap(), expected);
        test_roots_of_unity::<F337>(16);

        let f13: Vec<F13> = [1u32, 8, 12, 5].iter().map(|x| F13::from(*x)).collect();
        assert_eq!(F13::roots_of_unity(4).unwrap(), f13);
        assert_eq!(F13::roots_of_unity(8), Err(AlgebraError::DomainSizeError));
        assert_eq!(F13::roots_of_unity(3), Err(AlgebraError::DomainSizeError));
        assert_eq!(F13::roots_of_unity(0), Err(AlgebraError::DomainSizeError));
    }
}
