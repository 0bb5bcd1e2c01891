//! Image-plane frustum for an eye at the origin looking down -Z.

use crate::DVec3;
use serde::{Deserialize, Serialize};

/// The viewing frustum: the image plane sits at `z = -near` and spans
/// `[left, right] x [bottom, top]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    pub near: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Frustum {
    /// Create a new frustum.
    pub fn new(near: f64, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            near,
            left,
            right,
            bottom,
            top,
        }
    }

    /// Half the horizontal extent of the image plane.
    pub fn half_width(&self) -> f64 {
        (self.left - self.right).abs() * 0.5
    }

    /// Half the vertical extent of the image plane.
    pub fn half_height(&self) -> f64 {
        (self.top - self.bottom).abs() * 0.5
    }

    /// Map pixel `(x, y)` of a `width x height` image onto the image plane.
    ///
    /// Pixel (0, 0) lands exactly on the top-left corner; there is no
    /// half-pixel offset.
    pub fn image_plane_point(&self, x: u32, y: u32, width: u32, height: u32) -> DVec3 {
        let u = self.left + self.half_width() * 2.0 * x as f64 / width as f64;
        let v = self.top - self.half_height() * 2.0 * y as f64 / height as f64;
        DVec3::new(u, v, -self.near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_extents() {
        let frustum = Frustum::new(1.0, -2.0, 2.0, -1.0, 1.0);

        assert_eq!(frustum.half_width(), 2.0);
        assert_eq!(frustum.half_height(), 1.0);
    }

    #[test]
    fn test_image_plane_corners() {
        let frustum = Frustum::new(1.0, -1.0, 1.0, -1.0, 1.0);

        assert_eq!(
            frustum.image_plane_point(0, 0, 4, 4),
            DVec3::new(-1.0, 1.0, -1.0)
        );
        assert_eq!(
            frustum.image_plane_point(2, 2, 4, 4),
            DVec3::new(0.0, 0.0, -1.0)
        );
        // Last pixel stops one step short of the right/bottom edge
        assert_eq!(
            frustum.image_plane_point(3, 3, 4, 4),
            DVec3::new(0.5, -0.5, -1.0)
        );
    }
}
