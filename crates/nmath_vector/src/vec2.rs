//! 2D Vector type

use bytemuck::{Pod, Zeroable};

use crate::vector::impl_vector;
use crate::{Scalar, Vector3, Vector4};

/// 2D Vector with x, y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vector2 {
    pub x: Scalar,
    pub y: Scalar,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vector2
    #[inline]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// Drop the z component of a Vector3
    #[inline]
    pub const fn from_vector3(v: Vector3) -> Self {
        Self::new(v.x, v.y)
    }

    /// Drop the z and w components of a Vector4
    #[inline]
    pub const fn from_vector4(v: Vector4) -> Self {
        Self::new(v.x, v.y)
    }
}

impl_vector!(Vector2, 2, x, y);
