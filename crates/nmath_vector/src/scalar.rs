//! Scalar precision
//!
//! Every component in this crate is a [`Scalar`]. It is `f32` unless the
//! `double-precision` feature is enabled.

/// Floating-point type used for all vector components
#[cfg(not(feature = "double-precision"))]
pub type Scalar = f32;

/// Floating-point type used for all vector components
#[cfg(feature = "double-precision")]
pub type Scalar = f64;

/// Mathematical constants at [`Scalar`] precision
#[cfg(not(feature = "double-precision"))]
pub use std::f32::consts;

/// Mathematical constants at [`Scalar`] precision
#[cfg(feature = "double-precision")]
pub use std::f64::consts;

/// Machine epsilon at [`Scalar`] precision
pub const EPSILON: Scalar = Scalar::EPSILON;
