//! Core recursive ray tracer.
//!
//! Implements Whitted-style ray tracing with:
//! - Phong shading (ambient, diffuse, specular) per point light
//! - Hard shadows from shadow rays
//! - Mirror reflection with a bounded recursion depth

use std::fmt;
use std::time::Instant;

use whitted_core::{Color, Scene, SceneError, Sphere};
use whitted_math::{DVec3, Interval, Ray, EPSILON};

use crate::pixel_buffer::{color_to_rgb, PixelBuffer};
use crate::Camera;

/// Deepest reflection bounce that still gets shaded.
pub const MAX_DEPTH: u32 = 3;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum reflection depth; primary rays are depth 0
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

/// Counters collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub primary_rays: u64,
    pub shade_calls: u64,
    pub shadow_rays: u64,
    pub max_depth_reached: u32,
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} primary rays, {} shade calls, {} shadow rays, max depth {}",
            self.primary_rays, self.shade_calls, self.shadow_rays, self.max_depth_reached
        )
    }
}

/// The closest surface hit by a ray.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Sphere that was hit, borrowed from the scene
    pub sphere: &'a Sphere,
    pub point: DVec3,
    pub normal: DVec3,
}

/// Renders a borrowed scene into RGB bytes.
pub struct Raytracer<'a> {
    scene: &'a Scene,
    camera: Camera,
    config: RenderConfig,
    stats: RenderStats,
}

impl<'a> Raytracer<'a> {
    /// Create a raytracer for `scene`, rejecting scenes that cannot be rendered.
    pub fn new(scene: &'a Scene, config: RenderConfig) -> Result<Self, SceneError> {
        scene.validate()?;
        Ok(Self {
            scene,
            camera: Camera::from_scene(scene),
            config,
            stats: RenderStats::default(),
        })
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Trace every pixel, top row first, and return the image.
    pub fn render(&mut self) -> PixelBuffer {
        let width = self.camera.image_width;
        let height = self.camera.image_height;
        log::debug!(
            "Rendering {}x{}: {} spheres, {} lights, max depth {}",
            width,
            height,
            self.scene.spheres.len(),
            self.scene.lights.len(),
            self.config.max_depth
        );

        let start = Instant::now();
        let mut bytes = Vec::with_capacity(3 * self.scene.pixel_count());

        for y in 0..height {
            for x in 0..width {
                let ray = self.camera.get_ray(x, y);
                self.stats.primary_rays += 1;
                let color = self.shade(&ray, 0);
                bytes.extend_from_slice(&color_to_rgb(color));
            }
        }

        log::info!(
            "Raytrace completed in {:.3} seconds",
            start.elapsed().as_secs_f64()
        );
        log::info!("{}", self.stats);

        PixelBuffer::from_raw_parts(width, height, bytes)
    }

    /// Compute the color seen along `ray`, recursing on mirror reflections.
    ///
    /// The result is clamped to [0, 1] per channel after everything has been
    /// accumulated.
    pub fn shade(&mut self, ray: &Ray, depth: u32) -> Color {
        self.stats.shade_calls += 1;
        self.stats.max_depth_reached = self.stats.max_depth_reached.max(depth);

        if depth > self.config.max_depth {
            return Color::ZERO;
        }

        let scene = self.scene;
        let Some(hit) = self.nearest_hit(ray, depth) else {
            // Only primary rays see the background
            let miss = if depth == 0 {
                scene.background
            } else {
                Color::ZERO
            };
            return Interval::UNIT.clamp_vec(miss);
        };

        let sphere = hit.sphere;
        let view = ray.direction();
        let mut normal = hit.normal;

        let mut color = sphere.ambient() * scene.ambient * sphere.color();

        for light in &scene.lights {
            let shadow_ray = Ray::new(hit.point, light.position() - hit.point);
            self.stats.shadow_rays += 1;

            if self.is_shadowed(&shadow_ray, light.position()) {
                continue;
            }

            // Seen from inside, e.g. a sphere cut open by the image plane
            if normal.dot(view) > 0.0 {
                normal = -normal;
            }

            let to_light = shadow_ray.direction();
            let n_dot_l = normal.dot(to_light);
            if n_dot_l <= 0.0 {
                continue;
            }

            color += sphere.diffuse() * light.intensity() * n_dot_l * sphere.color();

            let reflection = (to_light - 2.0 * n_dot_l * normal).normalize();
            let r_dot_v = reflection.dot(view);
            if r_dot_v > 0.0 {
                color += sphere.specular() * r_dot_v.powf(sphere.specular_exponent()) * light.intensity();
            }
        }

        // Bounces past max_depth contribute black and are not traced
        if sphere.reflectivity() > EPSILON && depth < self.config.max_depth {
            let reflected = ray.reflect(hit.point, normal);
            color += sphere.reflectivity() * self.shade(&reflected, depth + 1);
        }

        Interval::UNIT.clamp_vec(color)
    }

    /// Find the closest sphere along `ray`.
    ///
    /// "Closest" means the greatest world-space z, since the camera looks down
    /// -Z from the origin.
    pub fn nearest_hit(&self, ray: &Ray, depth: u32) -> Option<Intersection<'a>> {
        let scene = self.scene;
        let mut nearest = None;
        let mut nearest_z = f64::NEG_INFINITY;

        for sphere in &scene.spheres {
            if let Some(hit) = sphere.intersect(ray, scene.frustum.near, depth) {
                if hit.point.z > nearest_z {
                    nearest_z = hit.point.z;
                    nearest = Some(Intersection {
                        sphere,
                        point: hit.point,
                        normal: hit.normal,
                    });
                }
            }
        }

        nearest
    }

    /// True if any sphere blocks `shadow_ray` before it reaches the light.
    pub fn is_shadowed(&self, shadow_ray: &Ray, light_position: DVec3) -> bool {
        self.scene
            .spheres
            .iter()
            .any(|sphere| sphere.is_occluding(shadow_ray, light_position))
    }
}

/// Render a scene with the given configuration.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<PixelBuffer, SceneError> {
    let mut raytracer = Raytracer::new(scene, config.clone())?;
    Ok(raytracer.render())
}
