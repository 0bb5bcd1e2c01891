//! Point lights.

use serde::{Deserialize, Serialize};
use whitted_math::DVec3;

use crate::Color;

/// An immutable point light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    name: String,
    position: DVec3,
    intensity: Color,
}

impl Light {
    /// Create a new point light. Intensity is not clamped.
    pub fn new(name: impl Into<String>, position: DVec3, intensity: Color) -> Self {
        Self {
            name: name.into(),
            position,
            intensity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// World-space position.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }
}
