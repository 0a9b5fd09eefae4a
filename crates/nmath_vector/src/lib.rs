//! Vector Mathematics Library
//!
//! Fixed-size vector value types over a configurable [`Scalar`], plus the
//! small matrix support needed to transform homogeneous coordinates.
//!
//! ## Core Types
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - value-type vectors with operator overloads
//! - [`Vector`] - trait shared by all three dimensions
//! - [`Mat4`] - 4x4 column-major matrix
//! - [`VectorError`] - division by zero, zero-length normalization, bad index
//!
//! ## Conversions
//!
//! Widening (`Vector3::from_vector2`) fills new components with zero and is
//! also available through `From`. Narrowing (`Vector2::from_vector3`) drops
//! components and is only available as a named constructor.
//!
//! The [`func`] module offers the same operations as plain functions
//! (`vec3_add`, `vec3_cross`, ...).

mod error;
mod scalar;
mod vector;
mod vec2;
mod vec3;
mod vec4;
pub mod func;
pub mod mat4;

pub use error::VectorError;
pub use scalar::{consts, Scalar, EPSILON};
pub use vector::{dot, Vector};
pub use vec2::Vector2;
pub use vec3::{cross, lerp, Vector3};
pub use vec4::Vector4;
pub use mat4::Mat4;
