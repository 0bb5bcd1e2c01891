//! Whitted Core - Scene description for the sphere ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`
//! - **Intersection queries**: `Sphere::intersect` for primary and reflected
//!   rays, `Sphere::is_occluding` for shadow rays
//! - **Scene files**: loading the line-based text format and JSON
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::scene_file::load_scene;
//!
//! let scene = load_scene("scenes/reflection.txt")?;
//! println!("Loaded {} spheres, {} lights", scene.spheres.len(), scene.lights.len());
//! ```

pub mod light;
pub mod scene;
pub mod scene_file;
pub mod sphere;

use whitted_math::DVec3;

/// Color type alias (RGB values typically 0-1, never clamped on storage)
pub type Color = DVec3;

// Re-export commonly used types
pub use light::Light;
pub use scene::{Scene, SceneError};
pub use scene_file::{load_scene, parse_scene, parse_scene_json};
pub use sphere::{Sphere, SphereParams, SurfaceHit};
