// ============================================================================
// Vector Errors
// Error taxonomy for vector construction and arithmetic
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

/// Errors that can occur while building or operating on vectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// Construction with zero coordinates
    EmptyVector,
    /// Construction input was a bare scalar, not a sequence
    NotIterable,
    /// A coordinate could not be converted to a decimal
    Conversion { input: String },
    /// Binary operation on vectors of different dimension
    DimensionMismatch { expected: usize, found: usize },
    /// Normalization of the zero vector
    ZeroVector,
    /// Angle computation with a zero-vector operand
    ZeroVectorAngle,
    /// Arccos argument outside [-1, 1] (only under `ArccosDomain::Reject`)
    NumericDomain { value: Decimal },
    /// Result exceeded the decimal range
    Overflow,
    /// Configuration failed validation
    InvalidConfig { reason: String },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::EmptyVector => write!(f, "the coordinates must be nonempty"),
            VectorError::NotIterable => write!(f, "the coordinates must be an iterable"),
            VectorError::Conversion { input } => {
                write!(f, "coordinate must be numeric: {:?}", input)
            },
            VectorError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {}, found {}",
                expected, found
            ),
            VectorError::ZeroVector => write!(f, "cannot normalize the zero vector"),
            VectorError::ZeroVectorAngle => {
                write!(f, "cannot compute the angle with the zero vector")
            },
            VectorError::NumericDomain { value } => {
                write!(f, "arccos argument {} lies outside [-1, 1]", value)
            },
            VectorError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
            VectorError::InvalidConfig { reason } => {
                write!(f, "invalid vector configuration: {}", reason)
            },
        }
    }
}

impl std::error::Error for VectorError {}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;
