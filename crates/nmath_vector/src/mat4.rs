//! 4x4 matrix utilities
//!
//! Just enough matrix support to transform homogeneous [`Vector4`] values.
//! Matrices are column-major (`m[column][row]`) and act on column vectors,
//! so `transform(m, v)` computes `M * v`.

use crate::{Scalar, Vector4};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[Scalar; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Transform a Vector4 by a 4x4 matrix (column-major)
///
/// result = M * v
///
/// # Example
/// ```
/// use nmath_vector::mat4::{transform, IDENTITY};
/// use nmath_vector::Vector4;
///
/// let mut m = IDENTITY;
/// m[3][0] = 2.0; // translate x by 2
/// assert_eq!(transform(m, Vector4::W), Vector4::new(2.0, 0.0, 0.0, 1.0));
/// ```
pub fn transform(m: Mat4, v: Vector4) -> Vector4 {
    Vector4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}
