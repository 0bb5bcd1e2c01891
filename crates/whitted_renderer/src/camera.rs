//! Camera for primary ray generation.
//!
//! The eye sits at the world origin looking down -Z. Each pixel maps to a
//! point on the image plane, and that point is used directly as the ray
//! direction.

use whitted_core::Scene;
use whitted_math::{Frustum, Ray};

/// Maps pixels onto the frustum's image plane.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    frustum: Frustum,
}

impl Camera {
    /// Create a camera for a `width x height` image.
    pub fn new(frustum: Frustum, width: u32, height: u32) -> Self {
        Self {
            image_width: width,
            image_height: height,
            frustum,
        }
    }

    /// Camera matching a scene's frustum and resolution.
    pub fn from_scene(scene: &Scene) -> Self {
        Self::new(scene.frustum, scene.width, scene.height)
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Primary ray through pixel (x, y), with (0, 0) at the top left.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let direction = self
            .frustum
            .image_plane_point(x, y, self.image_width, self.image_height);
        Ray::from_direction(direction)
    }
}
