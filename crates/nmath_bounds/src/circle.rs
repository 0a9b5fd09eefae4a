//! 2D bounding sphere

use nmath_vector::{Scalar, Vector2};

use crate::BoundsError;

/// A circle enclosing some 2D extent, defined by origin and radius
///
/// The radius is never negative. The default circle is a point at the origin
/// (radius 0).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingCircle {
    origin: Vector2,
    radius: Scalar,
}

impl BoundingCircle {
    /// Create a circle at `origin` with the given radius
    ///
    /// Fails with [`BoundsError::InvalidRadius`] if `radius` is negative or NaN.
    pub fn new(origin: Vector2, radius: Scalar) -> Result<Self, BoundsError> {
        let radius = validate_radius(radius)?;
        Ok(Self { origin, radius })
    }

    /// Centre of the circle
    #[inline]
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// Radius of the circle
    #[inline]
    pub fn radius(&self) -> Scalar {
        self.radius
    }

    /// Move the circle
    #[inline]
    pub fn set_origin(&mut self, origin: Vector2) -> &mut Self {
        self.origin = origin;
        self
    }

    /// Change the radius; on error the circle is unchanged
    pub fn set_radius(&mut self, radius: Scalar) -> Result<&mut Self, BoundsError> {
        self.radius = validate_radius(radius)?;
        Ok(self)
    }
}

fn validate_radius(radius: Scalar) -> Result<Scalar, BoundsError> {
    // Also rejects NaN
    if radius >= 0.0 {
        Ok(radius)
    } else {
        log::debug!("rejecting bounding circle radius {radius}");
        Err(BoundsError::InvalidRadius { radius })
    }
}
