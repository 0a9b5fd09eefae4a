//! 3D Vector type

use bytemuck::{Pod, Zeroable};

use crate::vector::impl_vector;
use crate::{Scalar, Vector2, Vector4};

/// 3D Vector with x, y, z components
///
/// Used for points, directions and surface normals.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Vector3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vector3
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Widen a Vector2, with z = 0
    #[inline]
    pub const fn from_vector2(v: Vector2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }

    /// Drop the w component of a Vector4
    #[inline]
    pub const fn from_vector4(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Linear interpolation between two vectors
    ///
    /// `t` is not clamped. `t = 0` yields `self` and `t = 1` yields `other`
    /// exactly.
    #[inline]
    pub fn lerp(self, other: Self, t: Scalar) -> Self {
        self * (1.0 - t) + other * t
    }
}

impl_vector!(Vector3, 3, x, y, z);

impl From<Vector2> for Vector3 {
    #[inline]
    fn from(v: Vector2) -> Self {
        Self::from_vector2(v)
    }
}

/// Cross product of two 3D vectors
#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(b)
}

/// Linear interpolation, evaluated as `a * (1 - t) + b * t`
#[inline]
pub fn lerp(a: Vector3, b: Vector3, t: Scalar) -> Vector3 {
    a.lerp(b, t)
}
