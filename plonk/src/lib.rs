//! Polynomials over prime fields, the KZG commitment scheme, an arithmetic circuit
//! compiler and the PLONK prover and verifier built on top of them.
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// Module for error handling.
pub mod errors;

/// Module for the PLONK protocol.
pub mod plonk;

/// Module for polynomials and polynomial commitments.
pub mod poly_commit;
