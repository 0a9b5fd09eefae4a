//! Tolerance-based comparison
//!
//! Vector `==` is exact. These helpers compare within the tolerance set in
//! [`ToleranceConfig`].

use approx::RelativeEq;

use crate::config::ToleranceConfig;
use crate::{Scalar, Vector};

/// Whether `a` and `b` are equal within the configured tolerance
///
/// Works for [`Scalar`] and every vector type.
pub fn approx_eq<T>(a: &T, b: &T, tolerance: &ToleranceConfig) -> bool
where
    T: RelativeEq<Epsilon = Scalar> + ?Sized,
{
    a.relative_eq(b, tolerance.epsilon, tolerance.max_relative)
}

/// Whether `v` has unit length within the configured tolerance
pub fn is_unit<V: Vector>(v: V, tolerance: &ToleranceConfig) -> bool {
    approx_eq(&v.length(), &1.0, tolerance)
}
