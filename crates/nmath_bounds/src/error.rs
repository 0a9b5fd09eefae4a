//! Bounds error types

use nmath_vector::Scalar;
use thiserror::Error;

/// Errors raised when constructing or updating a bounding primitive
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoundsError {
    /// Radius is negative or NaN
    #[error("invalid radius {radius}: must be a non-negative number")]
    InvalidRadius { radius: Scalar },
}
