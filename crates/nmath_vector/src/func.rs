//! Functional vector API
//!
//! Plain functions over vector values, for callers that prefer
//! `vec3_add(a, b)` to `a + b`. Each one forwards to the value-type
//! implementation.

use std::io::{self, Write};

use crate::mat4::Mat4;
use crate::{Scalar, Vector2, Vector3, Vector4, VectorError};

// 2D

#[inline]
pub fn vec2_pack(x: Scalar, y: Scalar) -> Vector2 {
    Vector2::new(x, y)
}

#[inline]
pub fn vec2_add(v1: Vector2, v2: Vector2) -> Vector2 {
    v1 + v2
}

#[inline]
pub fn vec2_sub(v1: Vector2, v2: Vector2) -> Vector2 {
    v1 - v2
}

#[inline]
pub fn vec2_neg(v: Vector2) -> Vector2 {
    -v
}

/// Component-wise product
#[inline]
pub fn vec2_mul(v1: Vector2, v2: Vector2) -> Vector2 {
    v1 * v2
}

#[inline]
pub fn vec2_scale(v: Vector2, s: Scalar) -> Vector2 {
    v * s
}

#[inline]
pub fn vec2_length(v: Vector2) -> Scalar {
    v.length()
}

#[inline]
pub fn vec2_length_sq(v: Vector2) -> Scalar {
    v.length_squared()
}

#[inline]
pub fn vec2_normalize(v: Vector2) -> Result<Vector2, VectorError> {
    v.normalized()
}

#[inline]
pub fn vec2_dot(v1: Vector2, v2: Vector2) -> Scalar {
    v1.dot(v2)
}

/// Write `v` followed by a newline
pub fn vec2_print<W: Write>(out: &mut W, v: Vector2) -> io::Result<()> {
    writeln!(out, "{v}")
}

// 3D

#[inline]
pub fn vec3_pack(x: Scalar, y: Scalar, z: Scalar) -> Vector3 {
    Vector3::new(x, y, z)
}

#[inline]
pub fn vec3_add(v1: Vector3, v2: Vector3) -> Vector3 {
    v1 + v2
}

#[inline]
pub fn vec3_sub(v1: Vector3, v2: Vector3) -> Vector3 {
    v1 - v2
}

#[inline]
pub fn vec3_neg(v: Vector3) -> Vector3 {
    -v
}

/// Component-wise product
#[inline]
pub fn vec3_mul(v1: Vector3, v2: Vector3) -> Vector3 {
    v1 * v2
}

#[inline]
pub fn vec3_scale(v: Vector3, s: Scalar) -> Vector3 {
    v * s
}

#[inline]
pub fn vec3_length(v: Vector3) -> Scalar {
    v.length()
}

#[inline]
pub fn vec3_length_sq(v: Vector3) -> Scalar {
    v.length_squared()
}

#[inline]
pub fn vec3_normalize(v: Vector3) -> Result<Vector3, VectorError> {
    v.normalized()
}

#[inline]
pub fn vec3_dot(v1: Vector3, v2: Vector3) -> Scalar {
    v1.dot(v2)
}

#[inline]
pub fn vec3_cross(v1: Vector3, v2: Vector3) -> Vector3 {
    v1.cross(v2)
}

#[inline]
pub fn vec3_lerp(v1: Vector3, v2: Vector3, t: Scalar) -> Vector3 {
    v1.lerp(v2, t)
}

/// Write `v` followed by a newline
pub fn vec3_print<W: Write>(out: &mut W, v: Vector3) -> io::Result<()> {
    writeln!(out, "{v}")
}

// 4D

#[inline]
pub fn vec4_pack(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Vector4 {
    Vector4::new(x, y, z, w)
}

#[inline]
pub fn vec4_add(v1: Vector4, v2: Vector4) -> Vector4 {
    v1 + v2
}

#[inline]
pub fn vec4_sub(v1: Vector4, v2: Vector4) -> Vector4 {
    v1 - v2
}

#[inline]
pub fn vec4_neg(v: Vector4) -> Vector4 {
    -v
}

/// Component-wise product
#[inline]
pub fn vec4_mul(v1: Vector4, v2: Vector4) -> Vector4 {
    v1 * v2
}

#[inline]
pub fn vec4_scale(v: Vector4, s: Scalar) -> Vector4 {
    v * s
}

#[inline]
pub fn vec4_length(v: Vector4) -> Scalar {
    v.length()
}

#[inline]
pub fn vec4_length_sq(v: Vector4) -> Scalar {
    v.length_squared()
}

#[inline]
pub fn vec4_normalize(v: Vector4) -> Result<Vector4, VectorError> {
    v.normalized()
}

#[inline]
pub fn vec4_dot(v1: Vector4, v2: Vector4) -> Scalar {
    v1.dot(v2)
}

/// M * v with a column-major matrix
#[inline]
pub fn vec4_transform(v: Vector4, m: Mat4) -> Vector4 {
    v.transform(m)
}
