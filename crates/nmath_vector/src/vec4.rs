//! 4D Vector type

use bytemuck::{Pod, Zeroable};

use crate::mat4::{self, Mat4};
use crate::vector::impl_vector;
use crate::{Scalar, Vector2, Vector3};

/// 4D Vector with x, y, z, w components
/// The w component is the homogeneous coordinate and defaults to 0
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vector4 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

impl Vector4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vector4
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    /// Widen a Vector2, with z = w = 0
    #[inline]
    pub const fn from_vector2(v: Vector2) -> Self {
        Self::new(v.x, v.y, 0.0, 0.0)
    }

    /// Widen a Vector3, with w = 0
    #[inline]
    pub const fn from_vector3(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Transform by a column-major matrix: result = M * v
    #[inline]
    pub fn transform(self, m: Mat4) -> Self {
        mat4::transform(m, self)
    }
}

impl_vector!(Vector4, 4, x, y, z, w);

impl From<Vector2> for Vector4 {
    #[inline]
    fn from(v: Vector2) -> Self {
        Self::from_vector2(v)
    }
}

impl From<Vector3> for Vector4 {
    #[inline]
    fn from(v: Vector3) -> Self {
        Self::from_vector3(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VectorError;

    #[test]
    fn test_new() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_partial_construction_defaults_to_zero() {
        let v = Vector4 { x: 1.0, y: 2.0, ..Default::default() };
        assert_eq!(v, Vector4::new(1.0, 2.0, 0.0, 0.0));
    }

    #[test]
    fn test_widening() {
        assert_eq!(Vector4::from_vector2(Vector2::new(1.0, 2.0)), Vector4::new(1.0, 2.0, 0.0, 0.0));
        assert_eq!(Vector4::from(Vector3::new(1.0, 2.0, 3.0)), Vector4::new(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn test_dot() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length() {
        let v = Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(v.length(), 1.0);

        let v2 = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v2.length(), 2.0);
    }

    #[test]
    fn test_normalized() {
        let n = Vector4::new(3.0, 0.0, 0.0, 0.0).normalized().unwrap();
        assert_eq!(n, Vector4::X);
        assert_eq!(Vector4::ZERO.normalized(), Err(VectorError::ZeroLengthNormalization));
    }

    #[test]
    fn test_add() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vector4::new(6.0, 8.0, 10.0, 12.0));
    }

    #[test]
    fn test_sub() {
        let a = Vector4::new(5.0, 6.0, 7.0, 8.0);
        let b = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a - b, Vector4::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn test_mul() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a * 2.0, Vector4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a * Vector4::new(2.0, 3.0, 4.0, 5.0), Vector4::new(2.0, 6.0, 12.0, 20.0));
    }

    #[test]
    fn test_neg() {
        let v = Vector4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-v, Vector4::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn test_index_w() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        assert_eq!(v.get(4), Err(VectorError::IndexOutOfRange { index: 4, dim: 4 }));
    }

    #[test]
    fn test_transform_identity() {
        let v = Vector4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(v.transform(mat4::IDENTITY), v);
    }

    #[test]
    fn test_transform_translation() {
        // Translation lives in column 3 and only moves points (w = 1)
        let mut m = mat4::IDENTITY;
        m[3][0] = 10.0;
        m[3][1] = 20.0;
        m[3][2] = 30.0;

        let point = Vector4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(point.transform(m), Vector4::new(11.0, 22.0, 33.0, 1.0));

        let direction = Vector4::new(1.0, 2.0, 3.0, 0.0);
        assert_eq!(direction.transform(m), direction);
    }
}
