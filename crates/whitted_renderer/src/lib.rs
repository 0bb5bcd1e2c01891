//! Whitted Renderer - recursive CPU ray tracing of sphere scenes.
//!
//! Traces one primary ray per pixel from an eye at the origin, shades hits
//! with the Phong model, casts shadow rays to every point light and follows
//! mirror reflections up to a fixed depth.

mod camera;
mod pixel_buffer;
mod renderer;

pub use camera::Camera;
pub use pixel_buffer::{color_to_rgb, ImageError, PixelBuffer};
pub use renderer::{render, Intersection, RenderConfig, RenderStats, Raytracer, MAX_DEPTH};

/// Re-export scene and math types used in the public API
pub use whitted_core::{Color, Light, Scene, SceneError, Sphere, SphereParams};
pub use whitted_math::{DVec3, Frustum, Ray};
