use ark_std::{error, fmt};
use misc_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, PoseidonError>;

#[derive(Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum PoseidonError {
    ParameterError,
    InputLengthError,
    Algebra(AlgebraError),
}

impl fmt::Display for PoseidonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PoseidonError::*;
        match self {
            ParameterError => f.write_str("No recommended Poseidon parameters for this input length"),
            InputLengthError => f.write_str("The input is empty or longer than the state width"),
            Algebra(e) => write!(f, "Algebra: {}", e),
        }
    }
}

impl error::Error for PoseidonError {}

impl From<AlgebraError> for PoseidonError {
    fn from(e: AlgebraError) -> PoseidonError {
        PoseidonError::Algebra(e)
    }
}
