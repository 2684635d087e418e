use ark_std::{error, fmt};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum AlgebraError {
    DivisionByZero,
    DeserializationError,
    SerializationError,
    ParameterError,
    DomainSizeError,
    IndexError,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AlgebraError::*;
        f.write_str(match self {
            DivisionByZero => "Field element zero is not invertible",
            DeserializationError => "Could not deserialize object",
            SerializationError => "Could not serialize object",
            ParameterError => "Unexpected parameter for method or function",
            DomainSizeError => "No subgroup of the requested order in the multiplicative group",
            IndexError => "Index out of bounds",
        })
    }
}

impl error::Error for AlgebraError {}
