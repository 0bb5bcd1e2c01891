use crate::DVec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized on construction, so intersection code can
/// treat the quadratic's leading coefficient as 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    /// Create a new ray. `direction` does not need to be normalized.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray starting at the world origin (the eye point).
    pub fn from_direction(direction: DVec3) -> Self {
        Self::new(DVec3::ZERO, direction)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the unit direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Mirror this ray's direction about `normal`, starting at `point`.
    pub fn reflect(&self, point: DVec3, normal: DVec3) -> Ray {
        let d = self.direction;
        Ray::new(point, d - 2.0 * normal.dot(d) * normal)
    }
}
