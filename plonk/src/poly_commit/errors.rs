use ark_std::{error, fmt};
use misc_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, PolyComSchemeError>;

/// Polynomial and polynomial commitment scheme errors.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PolyComSchemeError {
    /// It is not possible to compute the proof as F(x) != y.
    PCSProveEvalError,
    /// The degree of the polynomial is higher than the maximum degree allowed.
    DegreeError,
    /// The division leaves a nonzero remainder.
    NotExactlyDivisible,
    /// Division by the zero polynomial.
    DivisionByZero,
    /// The evaluation points are not pairwise distinct.
    DuplicatePoints,
    /// Points and values have different lengths.
    LengthMismatch,
    /// The evaluation domain cannot hold the input.
    DomainError,
    /// Algebra error.
    Algebra(AlgebraError),
}

impl fmt::Display for PolyComSchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PolyComSchemeError::*;
        match self {
            PCSProveEvalError => f.write_str("It is not possible to compute the proof as F(x) != y."),
            DegreeError => f.write_str(
                "The degree of the polynomial is higher than the maximum degree allowed.",
            ),
            NotExactlyDivisible => f.write_str("The polynomial is not exactly divisible."),
            DivisionByZero => f.write_str("Division by the zero polynomial."),
            DuplicatePoints => f.write_str("Evaluation points must be distinct."),
            LengthMismatch => f.write_str("Points and values differ in length."),
            DomainError => f.write_str("The evaluation domain is too small for the input."),
            Algebra(e) => write!(f, "Algebra: {}", e),
        }
    }
}

impl error::Error for PolyComSchemeError {}

impl From<AlgebraError> for PolyComSchemeError {
    fn from(e: AlgebraError) -> PolyComSchemeError {
        match e {
            AlgebraError::DivisionByZero => PolyComSchemeError::DivisionByZero,
            e => PolyComSchemeError::Algebra(e),
        }
    }
}
