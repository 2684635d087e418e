//! Prime fields, elliptic curve groups and pairings behind the `Scalar`, `Group` and
//! `Pairing` traits, with BN254 and BLS12-381 backends and two toy fields for tests.
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
mod macros;

/// Module for the BLS12-381 curve
pub mod bls12_381;

/// Module for the BN254 curve
pub mod bn254;

/// Module for the small test fields
pub mod toy;

/// Module for error handling
pub mod errors;

/// Module for traits
pub mod traits;

/// Module for serialization of scalars and group elements
pub mod serialization;

/// Module for utils
pub mod utils;

/// Module for prelude
#[doc(hidden)]
pub mod prelude;

/// Module for test rngs
pub mod rand_helper;

#[doc(hidden)]
pub use ark_std::{
    borrow, fmt, iter, marker, ops, rand, One, UniformRand, Zero,
};
