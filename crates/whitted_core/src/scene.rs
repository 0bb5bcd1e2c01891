//! Scene description consumed by the renderer.
//!
//! A `Scene` is built once (by hand or by `scene_file`) and then only read.

use serde::Deserialize;
use thiserror::Error;
use whitted_math::{DVec3, Frustum};

use crate::{Color, Light, Sphere};

/// Reasons a scene cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Invalid resolution {width}x{height}: both dimensions must be positive")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Near plane must be positive and finite, got {0}")]
    InvalidNearPlane(f64),

    #[error("Frustum bounds must be finite")]
    NonFiniteFrustum,

    #[error("Sphere '{name}' has degenerate scale {scale}")]
    DegenerateScale { name: String, scale: DVec3 },
}

/// Everything needed to render one image.
#[derive(Clone, Debug, Deserialize)]
pub struct Scene {
    /// Image plane bounds
    pub frustum: Frustum,

    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Color of primary rays that hit nothing
    #[serde(default)]
    pub background: Color,

    /// Scene-wide ambient light
    #[serde(default)]
    pub ambient: Color,

    #[serde(default)]
    pub spheres: Vec<Sphere>,

    #[serde(default)]
    pub lights: Vec<Light>,

    /// Output file name requested by the scene file, if any
    #[serde(default)]
    pub output: Option<String>,
}

impl Scene {
    /// Create an empty scene with black background and ambient.
    pub fn new(frustum: Frustum, width: u32, height: u32) -> Self {
        Self {
            frustum,
            width,
            height,
            background: Color::ZERO,
            ambient: Color::ZERO,
            spheres: Vec::new(),
            lights: Vec::new(),
            output: None,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the ambient light color.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    /// Set the requested output file name.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Number of pixels in the output image.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check the invariants the renderer relies on.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }

        let f = &self.frustum;
        if !(f.near > 0.0 && f.near.is_finite()) {
            return Err(SceneError::InvalidNearPlane(f.near));
        }
        if ![f.left, f.right, f.bottom, f.top].iter().all(|v| v.is_finite()) {
            return Err(SceneError::NonFiniteFrustum);
        }

        for sphere in &self.spheres {
            let scale = sphere.scale();
            if !scale.is_finite() || scale.x == 0.0 || scale.y == 0.0 || scale.z == 0.0 {
                return Err(SceneError::DegenerateScale {
                    name: sphere.name().to_string(),
                    scale,
                });
            }
        }

        Ok(())
    }
}
