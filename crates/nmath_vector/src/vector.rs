//! Behaviour shared by all vector types
//!
//! [`Vector2`](crate::Vector2), [`Vector3`](crate::Vector3) and
//! [`Vector4`](crate::Vector4) get their operators, length and normalization
//! from the `impl_vector!` macro, so every dimension runs the same code. The
//! [`Vector`] trait exposes that common surface to generic callers.

use crate::{Scalar, VectorError};
use std::ops::{Add, Mul, Neg, Sub};

/// Common interface of the fixed-size vector types
pub trait Vector:
    Copy
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Scalar, Output = Self>
{
    /// Number of components
    const DIM: usize;

    /// Components in x, y, z, w order
    fn as_slice(&self) -> &[Scalar];

    /// Sum of pairwise component products
    fn dot(self, other: Self) -> Scalar;

    /// Sum of squared components
    fn length_squared(self) -> Scalar;

    /// Euclidean norm
    fn length(self) -> Scalar;

    /// Unit-length copy of this vector
    fn normalized(self) -> Result<Self, VectorError>;
}

/// Dot product of two vectors of the same dimension
#[inline]
pub fn dot<V: Vector>(a: V, b: V) -> Scalar {
    a.dot(b)
}

/// Generates the inherent methods, operators, formatting and tolerance
/// comparison for a `#[repr(C)]` Pod vector struct.
macro_rules! impl_vector {
    ($ty:ident, $dim:literal, $($f:ident),+) => {
        impl $ty {
            /// Components as a fixed-size array view
            #[inline]
            pub fn as_array(&self) -> &[$crate::Scalar; $dim] {
                ::bytemuck::cast_ref(self)
            }

            /// Components as a mutable fixed-size array view
            #[inline]
            pub fn as_mut_array(&mut self) -> &mut [$crate::Scalar; $dim] {
                ::bytemuck::cast_mut(self)
            }

            /// Copy the components into an array
            #[inline]
            pub fn to_array(self) -> [$crate::Scalar; $dim] {
                [$(self.$f),+]
            }

            /// Build a vector from an array of components
            #[inline]
            pub fn from_array(components: [$crate::Scalar; $dim]) -> Self {
                ::bytemuck::cast(components)
            }

            /// Component at `index`, or `IndexOutOfRange`
            #[inline]
            pub fn get(&self, index: usize) -> Result<$crate::Scalar, $crate::VectorError> {
                self.as_array()
                    .get(index)
                    .copied()
                    .ok_or($crate::VectorError::IndexOutOfRange { index, dim: $dim })
            }

            /// Mutable component at `index`, or `IndexOutOfRange`
            #[inline]
            pub fn get_mut(&mut self, index: usize) -> Result<&mut $crate::Scalar, $crate::VectorError> {
                self.as_mut_array()
                    .get_mut(index)
                    .ok_or($crate::VectorError::IndexOutOfRange { index, dim: $dim })
            }

            /// Dot product
            #[inline]
            pub fn dot(self, other: Self) -> $crate::Scalar {
                let mut sum = 0.0;
                $(sum += self.$f * other.$f;)+
                sum
            }

            /// Length squared (no square root)
            #[inline]
            pub fn length_squared(self) -> $crate::Scalar {
                self.dot(self)
            }

            /// Largest absolute component, or NaN if any component is NaN
            #[inline]
            fn max_abs_component(self) -> $crate::Scalar {
                let mut scale: $crate::Scalar = 0.0;
                $(
                    if self.$f.is_nan() {
                        return $crate::Scalar::NAN;
                    }
                    scale = scale.max(self.$f.abs());
                )+
                scale
            }

            /// Length (magnitude)
            ///
            /// Components are scaled by the largest one before squaring, so
            /// the result neither overflows nor underflows while the true
            /// length is representable.
            #[inline]
            pub fn length(self) -> $crate::Scalar {
                let scale = self.max_abs_component();
                if scale == 0.0 || !scale.is_finite() {
                    return scale;
                }
                let mut sum: $crate::Scalar = 0.0;
                $(sum += (self.$f / scale) * (self.$f / scale);)+
                scale * sum.sqrt()
            }

            /// Normalize in place
            ///
            /// A vector whose components are all zero is left untouched and
            /// reported as `ZeroLengthNormalization`.
            #[inline]
            pub fn normalize(&mut self) -> Result<&mut Self, $crate::VectorError> {
                *self = self.normalized()?;
                Ok(self)
            }

            /// Unit-length copy of this vector
            ///
            /// Fails with `ZeroLengthNormalization` only when every component
            /// is zero. Very large and very small vectors normalize normally.
            #[inline]
            pub fn normalized(self) -> Result<Self, $crate::VectorError> {
                let scale = self.max_abs_component();
                if scale == 0.0 {
                    return Err($crate::VectorError::ZeroLengthNormalization);
                }
                let scaled = Self { $($f: self.$f / scale),+ };
                let len = scaled.length_squared().sqrt();
                Ok(Self { $($f: scaled.$f / len),+ })
            }

            /// Component-wise division, rejecting any zero divisor component
            #[inline]
            pub fn try_div(self, rhs: Self) -> Result<Self, $crate::VectorError> {
                if rhs.as_array().contains(&0.0) {
                    return Err($crate::VectorError::DivisionByZero);
                }
                Ok(Self { $($f: self.$f / rhs.$f),+ })
            }

            /// Division by a scalar, rejecting zero
            #[inline]
            pub fn try_div_scalar(self, scalar: $crate::Scalar) -> Result<Self, $crate::VectorError> {
                if scalar == 0.0 {
                    return Err($crate::VectorError::DivisionByZero);
                }
                Ok(Self { $($f: self.$f / scalar),+ })
            }

            /// In-place component-wise division; `self` is unchanged on error
            #[inline]
            pub fn try_div_assign(&mut self, rhs: Self) -> Result<&mut Self, $crate::VectorError> {
                *self = self.try_div(rhs)?;
                Ok(self)
            }

            /// In-place division by a scalar; `self` is unchanged on error
            #[inline]
            pub fn try_div_assign_scalar(&mut self, scalar: $crate::Scalar) -> Result<&mut Self, $crate::VectorError> {
                *self = self.try_div_scalar(scalar)?;
                Ok(self)
            }
        }

        impl $crate::Vector for $ty {
            const DIM: usize = $dim;

            #[inline]
            fn as_slice(&self) -> &[$crate::Scalar] {
                self.as_array()
            }

            #[inline]
            fn dot(self, other: Self) -> $crate::Scalar {
                <$ty>::dot(self, other)
            }

            #[inline]
            fn length_squared(self) -> $crate::Scalar {
                <$ty>::length_squared(self)
            }

            #[inline]
            fn length(self) -> $crate::Scalar {
                <$ty>::length(self)
            }

            #[inline]
            fn normalized(self) -> Result<Self, $crate::VectorError> {
                <$ty>::normalized(self)
            }
        }

        impl ::std::ops::Index<usize> for $ty {
            type Output = $crate::Scalar;
            #[inline]
            fn index(&self, index: usize) -> &$crate::Scalar {
                match self.as_array().get(index) {
                    Some(component) => component,
                    None => panic!("{}", $crate::VectorError::IndexOutOfRange { index, dim: $dim }),
                }
            }
        }

        impl ::std::ops::IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut $crate::Scalar {
                match self.as_mut_array().get_mut(index) {
                    Some(component) => component,
                    None => panic!("{}", $crate::VectorError::IndexOutOfRange { index, dim: $dim }),
                }
            }
        }

        // Operator overloads

        impl ::std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl ::std::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $($f: self.$f + other.$f),+ }
            }
        }

        impl ::std::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self { $($f: self.$f - other.$f),+ }
            }
        }

        impl ::std::ops::Mul for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, other: Self) -> Self {
                Self { $($f: self.$f * other.$f),+ }
            }
        }

        impl ::std::ops::Div for $ty {
            type Output = Self;
            /// Panics if any component of `other` is zero; see [`Self::try_div`]
            #[inline]
            fn div(self, other: Self) -> Self {
                match self.try_div(other) {
                    Ok(v) => v,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl ::std::ops::Add<$crate::Scalar> for $ty {
            type Output = Self;
            #[inline]
            fn add(self, scalar: $crate::Scalar) -> Self {
                Self { $($f: self.$f + scalar),+ }
            }
        }

        impl ::std::ops::Add<$ty> for $crate::Scalar {
            type Output = $ty;
            #[inline]
            fn add(self, v: $ty) -> $ty {
                v + self
            }
        }

        impl ::std::ops::Sub<$crate::Scalar> for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, scalar: $crate::Scalar) -> Self {
                Self { $($f: self.$f - scalar),+ }
            }
        }

        impl ::std::ops::Mul<$crate::Scalar> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: $crate::Scalar) -> Self {
                Self { $($f: self.$f * scalar),+ }
            }
        }

        impl ::std::ops::Mul<$ty> for $crate::Scalar {
            type Output = $ty;
            #[inline]
            fn mul(self, v: $ty) -> $ty {
                v * self
            }
        }

        impl ::std::ops::Div<$crate::Scalar> for $ty {
            type Output = Self;
            /// Panics if `scalar` is zero; see [`Self::try_div_scalar`]
            #[inline]
            fn div(self, scalar: $crate::Scalar) -> Self {
                match self.try_div_scalar(scalar) {
                    Ok(v) => v,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl ::std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                $(self.$f += other.$f;)+
            }
        }

        impl ::std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                $(self.$f -= other.$f;)+
            }
        }

        impl ::std::ops::MulAssign for $ty {
            #[inline]
            fn mul_assign(&mut self, other: Self) {
                $(self.$f *= other.$f;)+
            }
        }

        impl ::std::ops::DivAssign for $ty {
            #[inline]
            fn div_assign(&mut self, other: Self) {
                *self = *self / other;
            }
        }

        impl ::std::ops::AddAssign<$crate::Scalar> for $ty {
            #[inline]
            fn add_assign(&mut self, scalar: $crate::Scalar) {
                $(self.$f += scalar;)+
            }
        }

        impl ::std::ops::SubAssign<$crate::Scalar> for $ty {
            #[inline]
            fn sub_assign(&mut self, scalar: $crate::Scalar) {
                $(self.$f -= scalar;)+
            }
        }

        impl ::std::ops::MulAssign<$crate::Scalar> for $ty {
            #[inline]
            fn mul_assign(&mut self, scalar: $crate::Scalar) {
                $(self.$f *= scalar;)+
            }
        }

        impl ::std::ops::DivAssign<$crate::Scalar> for $ty {
            #[inline]
            fn div_assign(&mut self, scalar: $crate::Scalar) {
                *self = *self / scalar;
            }
        }

        /// Renders as `(x, y, ...)`, forwarding any precision to each component
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("(")?;
                for (i, component) in self.as_array().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match f.precision() {
                        Some(precision) => write!(f, "{component:.precision$}")?,
                        None => write!(f, "{component}")?,
                    }
                }
                f.write_str(")")
            }
        }

        impl ::approx::AbsDiffEq for $ty {
            type Epsilon = $crate::Scalar;

            #[inline]
            fn default_epsilon() -> $crate::Scalar {
                <$crate::Scalar as ::approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: $crate::Scalar) -> bool {
                true $(&& ::approx::AbsDiffEq::abs_diff_eq(&self.$f, &other.$f, epsilon))+
            }
        }

        impl ::approx::RelativeEq for $ty {
            #[inline]
            fn default_max_relative() -> $crate::Scalar {
                <$crate::Scalar as ::approx::RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: $crate::Scalar, max_relative: $crate::Scalar) -> bool {
                true $(&& ::approx::RelativeEq::relative_eq(&self.$f, &other.$f, epsilon, max_relative))+
            }
        }
    };
}

pub(crate) use impl_vector;
