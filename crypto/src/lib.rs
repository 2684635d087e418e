//! The crate implements the hash primitives that sit next to the PLONK prover,
//! currently the Poseidon permutation and the derivation of its parameters.
#![deny(unused_import_braces, unused_qualifications, trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(stable_features, unreachable_pub, non_shorthand_field_patterns)]
#![deny(unused_attributes, unused_imports, unused_mut, missing_docs)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]
#![forbid(unsafe_code)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]

#[macro_use]
extern crate serde_derive;

/// The module for error handling.
pub mod errors;

/// The module for the Poseidon hash.
pub mod poseidon;
