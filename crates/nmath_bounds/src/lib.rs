//! Bounding primitives
//!
//! Geometric bounds built on the `nmath_vector` types:
//! - [`BoundingCircle`] - a 2D bounding sphere (origin + radius)
//! - [`BoundsError`] - rejected construction parameters

mod circle;
mod error;

pub use circle::BoundingCircle;
pub use error::BoundsError;
