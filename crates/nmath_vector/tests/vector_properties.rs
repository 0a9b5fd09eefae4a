//! Algebraic properties of the vector types
//!
//! Each property is checked over a fixed set of sample vectors in every
//! dimension it applies to. Samples use dyadic components so that exact
//! equality holds where the algebra says it should.

use approx::assert_relative_eq;
use nmath_vector::{cross, dot, lerp, Scalar, Vector, Vector2, Vector3, Vector4, VectorError};

const SAMPLES: [[Scalar; 4]; 6] = [
    [0.0, 0.0, 0.0, 0.0],
    [1.0, 2.0, 3.0, 4.0],
    [-1.5, 0.25, 8.0, -2.0],
    [100.0, -0.5, 0.125, 3.0],
    [-7.0, -7.0, -7.0, -7.0],
    [0.0, 0.0, 0.0, 1.0],
];

fn samples2() -> Vec<Vector2> {
    SAMPLES.iter().map(|s| Vector2::new(s[0], s[1])).collect()
}

fn samples3() -> Vec<Vector3> {
    SAMPLES.iter().map(|s| Vector3::new(s[0], s[1], s[2])).collect()
}

fn samples4() -> Vec<Vector4> {
    SAMPLES.iter().map(|&s| Vector4::from_array(s)).collect()
}

fn check_common_properties<V>(vs: &[V])
where
    V: Vector + std::fmt::Debug,
{
    for &a in vs {
        assert_eq!(-(-a), a);
        assert_eq!(dot(a, a), a.length_squared());
        assert!(a.length() >= 0.0);

        match a.normalized() {
            Ok(n) => assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5),
            Err(e) => {
                assert_eq!(e, VectorError::ZeroLengthNormalization);
                assert_eq!(a, V::default());
            }
        }

        for &b in vs {
            assert_eq!(a + b - b, a);
            assert_eq!(a + b, b + a);
            assert_eq!(dot(a, b), dot(b, a));
        }
    }
}

// ==================== All Dimensions ====================

#[test]
fn test_vector2_properties() {
    check_common_properties(&samples2());
}

#[test]
fn test_vector3_properties() {
    check_common_properties(&samples3());
}

#[test]
fn test_vector4_properties() {
    check_common_properties(&samples4());
}

#[test]
fn test_zero_vector_cannot_be_normalized() {
    assert_eq!(Vector2::ZERO.normalized(), Err(VectorError::ZeroLengthNormalization));
    assert_eq!(Vector3::ZERO.normalized(), Err(VectorError::ZeroLengthNormalization));
    assert_eq!(Vector4::ZERO.normalized(), Err(VectorError::ZeroLengthNormalization));
}

// ==================== Extreme Magnitudes ====================

#[test]
fn test_huge_vector_length_and_normalize() {
    // Squaring 1e20 overflows f32
    let v = Vector2::new(1e20, 0.0);
    assert_relative_eq!(v.length(), 1e20, max_relative = 1e-6);
    assert_eq!(v.normalized(), Ok(Vector2::X));

    let w = Vector4::new(0.0, -3e30, 4e30, 0.0);
    assert_relative_eq!(w.length(), 5e30, max_relative = 1e-6);
    assert_relative_eq!(w.normalized().unwrap(), Vector4::new(0.0, -0.6, 0.8, 0.0), epsilon = 1e-6);
}

#[test]
fn test_tiny_vector_length_and_normalize() {
    // Squaring 1e-25 underflows f32 to zero
    let v = Vector3::new(1e-25, 0.0, 0.0);
    assert_eq!(v.normalized(), Ok(Vector3::X));
    assert_relative_eq!(v.length(), 1e-25, max_relative = 1e-6);

    let mut u = Vector2::new(-3e-30, 4e-30);
    u.normalize().unwrap();
    assert_relative_eq!(u, Vector2::new(-0.6, 0.8), epsilon = 1e-6);
}

// ==================== Cross Product ====================

#[test]
fn test_cross_anticommutative() {
    let vs = samples3();
    for &a in &vs {
        for &b in &vs {
            assert_eq!(cross(a, b), -cross(b, a));
        }
    }
}

#[test]
fn test_cross_with_self_is_zero() {
    for v in samples3() {
        assert_eq!(cross(v, v), Vector3::ZERO);
    }
}

// ==================== Interpolation ====================

#[test]
fn test_lerp_endpoints() {
    let vs = samples3();
    for &a in &vs {
        for &b in &vs {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }
}

// ==================== Conversions ====================

#[test]
fn test_widening_and_narrowing() {
    assert_eq!(Vector3::from_vector2(Vector2::new(3.0, 4.0)), Vector3::new(3.0, 4.0, 0.0));
    assert_eq!(Vector2::from_vector3(Vector3::new(3.0, 4.0, 5.0)), Vector2::new(3.0, 4.0));

    let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(Vector4::from_vector3(Vector3::from_vector4(v)), Vector4::new(1.0, 2.0, 3.0, 0.0));
    assert_eq!(Vector4::from(Vector2::from_vector4(v)), Vector4::new(1.0, 2.0, 0.0, 0.0));
}

// ==================== Indexing ====================

#[test]
fn test_index_out_of_range() {
    let v = Vector2::new(1.0, 2.0);
    assert_eq!(v.get(3), Err(VectorError::IndexOutOfRange { index: 3, dim: 2 }));
    assert_eq!(Vector3::X.get(3), Err(VectorError::IndexOutOfRange { index: 3, dim: 3 }));
    assert_eq!(Vector4::W.get(3), Ok(1.0));
}

#[test]
fn test_index_matches_fields() {
    for v in samples4() {
        assert_eq!([v[0], v[1], v[2], v[3]], [v.x, v.y, v.z, v.w]);
    }
}

// ==================== Division ====================

#[test]
fn test_division_by_zero_is_reported() {
    assert_eq!(Vector2::new(1.0, 1.0).try_div_scalar(0.0), Err(VectorError::DivisionByZero));
    assert_eq!(Vector3::X.try_div_scalar(-0.0), Err(VectorError::DivisionByZero));
    assert_eq!(Vector4::W.try_div(Vector4::X), Err(VectorError::DivisionByZero));
    assert_eq!(Vector4::W.try_div_scalar(4.0), Ok(Vector4::new(0.0, 0.0, 0.0, 0.25)));
}
