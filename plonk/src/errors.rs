use crate::poly_commit::errors::PolyComSchemeError;
use ark_std::{error, fmt, string::String};
use misc_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, PlonkError>;

/// Errors of the circuit compiler and the PLONK protocol.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PlonkError {
    /// Algebra error.
    Algebra(AlgebraError),
    /// Polynomial or commitment error.
    PolyCom(PolyComSchemeError),
    /// A wire that already holds a value was assigned again.
    WireContradiction(usize),
    /// Wires linked by an equality constraint hold different values.
    EqualityMismatch(usize),
    /// The input mapping lacks a named input.
    MissingInput(String),
    /// The input mapping names an input that the circuit does not have.
    UnknownInput(String),
    /// A gate reads a wire that has no value.
    UnassignedWire(usize),
    /// A handle does not belong to this circuit.
    InvalidHandle(usize),
    /// The circuit cannot be modified after witness calculation.
    CircuitFinalized,
    /// The witness has not been calculated yet.
    WitnessNotCalculated,
    /// The circuit has no gates.
    EmptyCircuit,
    /// The selector identity fails at this gate.
    GateNotSatisfied(usize),
    /// The witness differs from its image under the permutation at this position.
    PermutationMismatch(usize),
    /// Error occurred when setup.
    SetupError,
    /// Polynomial commitment error.
    CommitmentError,
    /// Error occurred when prove.
    ProofError,
    /// Division by zero.
    DivisionByZero,
    /// Function params error.
    FuncParamsError,
    /// Challenge error.
    ChallengeError,
}

impl fmt::Display for PlonkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlonkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            PolyCom(e) => write!(f, "Polynomial commitment: {}", e),
            WireContradiction(w) => write!(f, "Wire {} is assigned twice.", w),
            EqualityMismatch(g) => write!(f, "Equality group {} holds different values.", g),
            MissingInput(name) => write!(f, "Missing value for input {}.", name),
            UnknownInput(name) => write!(f, "The circuit has no input named {}.", name),
            UnassignedWire(w) => write!(f, "Wire {} is read before it has a value.", w),
            InvalidHandle(h) => write!(f, "Handle {} does not belong to the circuit.", h),
            CircuitFinalized => f.write_str("The circuit is already finalized."),
            WitnessNotCalculated => f.write_str("The witness is not calculated."),
            EmptyCircuit => f.write_str("The circuit has no gates."),
            GateNotSatisfied(i) => write!(f, "Gate {} is not satisfied.", i),
            PermutationMismatch(i) => write!(f, "Copy constraint broken at position {}.", i),
            SetupError => f.write_str("Setup error."),
            CommitmentError => f.write_str("Commitment error."),
            ProofError => f.write_str("Proof error."),
            DivisionByZero => f.write_str("Division by zero."),
            FuncParamsError => f.write_str("Function params error"),
            ChallengeError => f.write_str("Challenge error"),
        }
    }
}

impl error::Error for PlonkError {}

impl From<AlgebraError> for PlonkError {
    fn from(e: AlgebraError) -> PlonkError {
        match e {
            AlgebraError::DivisionByZero => PlonkError::DivisionByZero,
            e => PlonkError::Algebra(e),
        }
    }
}

impl From<PolyComSchemeError> for PlonkError {
    fn from(e: PolyComSchemeError) -> PlonkError {
        PlonkError::PolyCom(e)
    }
}
