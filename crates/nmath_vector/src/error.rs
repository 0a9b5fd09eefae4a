//! Vector error types

use thiserror::Error;

/// Errors raised by vector operations that have no defined result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Division by a zero scalar, or by a vector with a zero component
    #[error("division by zero")]
    DivisionByZero,

    /// Normalization of a vector whose length is zero
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthNormalization,

    /// Component index outside `0..dim`
    #[error("component index {index} is out of range for a {dim}D vector")]
    IndexOutOfRange { index: usize, dim: usize },
}
