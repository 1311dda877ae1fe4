//! Error types for rx-algebra

use thiserror::Error;

/// Errors raised while constructing relational algebra trees
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// RA001: Tuple width does not match the header
    #[error("[RA001] Tuple {index} has {actual} values but the header has {expected} attributes")]
    TupleArity {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// RA002: Attribute name not present in the header
    #[error("[RA002] Unknown attribute '{name}'")]
    UnknownAttribute { name: String },
}

/// Result type alias for AlgebraError
pub type AlgebraResult<T> = Result<T, AlgebraError>;
