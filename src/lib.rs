//! nmath - vector algebra and bounding primitives
//!
//! This crate gathers the workspace into one dependency:
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] and the [`func`] API from `nmath_vector`
//! - [`BoundingCircle`] from `nmath_bounds`
//! - [`config`], [`logging`], [`compare`] and [`format`] for applications
//!
//! Switch every component to `f64` with the `double-precision` feature.

pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use error::{Error, Result};

pub use nmath_vector::{cross, dot, lerp, consts, Scalar, Vector, Vector2, Vector3, Vector4, VectorError, EPSILON};
pub use nmath_vector::{func, mat4, Mat4};
pub use nmath_bounds::{BoundingCircle, BoundsError};

/// Common imports
pub mod prelude {
    pub use crate::{cross, dot, BoundingCircle, Scalar, Vector, Vector2, Vector3, Vector4};
}
