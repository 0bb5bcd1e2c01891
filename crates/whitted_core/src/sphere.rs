//! Sphere primitive for ray tracing.
//!
//! Every sphere is the unit sphere at the origin of its own object space,
//! carried into world space by a scale followed by a translation. Rays are
//! moved into object space for the intersection test and results are moved
//! back out.

use serde::{Deserialize, Serialize};
use whitted_math::{solve_quadratic, DMat4, DVec3, DiagonalAffine, QuadraticRoots, Ray, ScaleTranslate, EPSILON};

use crate::Color;

/// Construction parameters for a sphere, in scene-file order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    pub name: String,
    pub position: DVec3,
    pub scale: DVec3,
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub reflectivity: f64,
    pub specular_exponent: f64,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: DVec3::ZERO,
            scale: DVec3::ONE,
            color: Color::ONE,
            ambient: 0.0,
            diffuse: 0.0,
            specular: 0.0,
            reflectivity: 0.0,
            specular_exponent: 1.0,
        }
    }
}

impl SphereParams {
    /// Parameters with only placement and color set; all coefficients zero.
    pub fn new(name: impl Into<String>, position: DVec3, scale: DVec3, color: Color) -> Self {
        Self {
            name: name.into(),
            position,
            scale,
            color,
            ..Default::default()
        }
    }
}

/// World-space result of a primary or reflected ray hitting a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Intersection point
    pub point: DVec3,
    /// Unit outward surface normal
    pub normal: DVec3,
}

/// A scaled and translated sphere with Phong material coefficients.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "SphereParams")]
pub struct Sphere {
    params: SphereParams,
    transform: ScaleTranslate,
    inverse: ScaleTranslate,
    normal_matrix: DMat4,
}

impl From<SphereParams> for Sphere {
    fn from(params: SphereParams) -> Self {
        Self::new(params)
    }
}

impl Sphere {
    /// Create a sphere and derive its transforms.
    pub fn new(params: SphereParams) -> Self {
        let transform = ScaleTranslate::new(params.scale, params.position);
        Self {
            inverse: transform.inverse(),
            normal_matrix: transform.normal_matrix(),
            transform,
            params,
        }
    }

    pub fn name(&self) -> &str {
        &self.params.name
    }

    pub fn position(&self) -> DVec3 {
        self.params.position
    }

    pub fn scale(&self) -> DVec3 {
        self.params.scale
    }

    pub fn color(&self) -> Color {
        self.params.color
    }

    pub fn ambient(&self) -> f64 {
        self.params.ambient
    }

    pub fn diffuse(&self) -> f64 {
        self.params.diffuse
    }

    pub fn specular(&self) -> f64 {
        self.params.specular
    }

    pub fn reflectivity(&self) -> f64 {
        self.params.reflectivity
    }

    pub fn specular_exponent(&self) -> f64 {
        self.params.specular_exponent
    }

    /// Construction parameters this sphere was built from.
    pub fn params(&self) -> &SphereParams {
        &self.params
    }

    /// Object-to-world transform.
    pub fn transform(&self) -> &ScaleTranslate {
        &self.transform
    }

    /// Intersect a primary or reflected ray.
    ///
    /// Primary rays (`depth == 0`) are clipped by the image plane at
    /// `z = -near`: a hit in front of the plane falls back to the far root,
    /// and if that is also in front the ray misses.
    pub fn intersect(&self, ray: &Ray, near: f64, depth: u32) -> Option<SurfaceHit> {
        let local = self.to_object_space(ray);
        let roots = solve_unit_sphere(&local)?;

        let mut object_point = local.at(roots.near());
        let mut point = self.transform.transform_point(object_point);

        if depth == 0 && point.z > -near {
            object_point = local.at(roots.far());
            point = self.transform.transform_point(object_point);

            if point.z > -near {
                return None;
            }
        }

        let normal = self
            .normal_matrix
            .transform_direction(object_point)
            .normalize();

        Some(SurfaceHit { point, normal })
    }

    /// Shadow test: does this sphere block `ray` before it reaches the light?
    ///
    /// Distances are compared in object space, where both the hit parameter
    /// and the light distance are measured along the same normalized direction.
    pub fn is_occluding(&self, ray: &Ray, light_position: DVec3) -> bool {
        let local = self.to_object_space(ray);
        let Some(roots) = solve_unit_sphere(&local) else {
            return false;
        };

        // Skip the surface the shadow ray starts on
        let mut t = roots.near();
        if t < EPSILON {
            t = roots.far();
        }

        let light = self.inverse.transform_point(light_position);
        let distance_to_light = (light - local.origin()).length();

        t < distance_to_light
    }

    /// Move a world-space ray into object space. The direction is renormalized.
    fn to_object_space(&self, ray: &Ray) -> Ray {
        Ray::new(
            self.inverse.transform_point(ray.origin()),
            self.inverse.transform_direction(ray.direction()),
        )
    }
}

/// Solve |o + t d|² = 1 for a normalized object-space ray.
fn solve_unit_sphere(ray: &Ray) -> Option<QuadraticRoots> {
    let origin = ray.origin();
    let b = 2.0 * origin.dot(ray.direction());
    let c = origin.length_squared() - 1.0;
    solve_quadratic(b, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(SphereParams::new("unit", DVec3::ZERO, DVec3::ONE, Color::ONE))
    }

    fn approx_eq(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere();
        let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::NEG_Z);

        let hit = sphere.intersect(&ray, 1.0, 1).expect("ray should hit");
        assert!(approx_eq(hit.point, DVec3::new(0.0, 0.0, 1.0)));
        assert!(approx_eq(hit.normal, DVec3::Z));
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere();
        let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::X);

        assert!(sphere.intersect(&ray, 1.0, 1).is_none());
        assert!(sphere.intersect(&ray, 1.0, 0).is_none());
    }

    #[test]
    fn test_sphere_behind_ray_misses() {
        let sphere = unit_sphere();
        let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::Z);

        assert!(sphere.intersect(&ray, 1.0, 1).is_none());
    }

    #[test]
    fn test_scaled_sphere_normal() {
        // Ellipsoid stretched along X, translated down -Z
        let sphere = Sphere::new(SphereParams::new(
            "ellipsoid",
            DVec3::new(0.0, 0.0, -10.0),
            DVec3::new(4.0, 1.0, 1.0),
            Color::ONE,
        ));

        // Straight down the axis: hit the near pole at z = -9
        let ray = Ray::from_direction(DVec3::NEG_Z);
        let hit = sphere.intersect(&ray, 1.0, 0).expect("ray should hit");
        assert!(approx_eq(hit.point, DVec3::new(0.0, 0.0, -9.0)));
        assert!(approx_eq(hit.normal, DVec3::Z));

        // Side hit from +X: the normal is the object-space point divided by scale
        let side = Ray::new(DVec3::new(10.0, 0.0, -10.0), DVec3::NEG_X);
        let hit = sphere.intersect(&side, 1.0, 1).expect("side should hit");
        assert!(approx_eq(hit.point, DVec3::new(4.0, 0.0, -10.0)));
        assert!(approx_eq(hit.normal, DVec3::X));
    }

    #[test]
    fn test_primary_ray_clipped_by_image_plane() {
        // Sphere straddling the image plane at z = -1
        let sphere = Sphere::new(SphereParams::new(
            "straddle",
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::splat(0.5),
            Color::ONE,
        ));
        let ray = Ray::from_direction(DVec3::NEG_Z);

        // Near root at z = -0.5 is in front of the plane, so the far root is used
        let hit = sphere.intersect(&ray, 1.0, 0).expect("far side visible");
        assert!(approx_eq(hit.point, DVec3::new(0.0, 0.0, -1.5)));

        // Reflected rays are not clipped
        let hit = sphere.intersect(&ray, 1.0, 1).expect("near side visible");
        assert!(approx_eq(hit.point, DVec3::new(0.0, 0.0, -0.5)));
    }

    #[test]
    fn test_primary_ray_sphere_entirely_in_front_of_plane() {
        let sphere = Sphere::new(SphereParams::new(
            "close",
            DVec3::new(0.0, 0.0, -0.5),
            DVec3::splat(0.25),
            Color::ONE,
        ));
        let ray = Ray::from_direction(DVec3::NEG_Z);

        assert!(sphere.intersect(&ray, 1.0, 0).is_none());
        assert!(sphere.intersect(&ray, 1.0, 1).is_some());
    }

    #[test]
    fn test_occluder_between_point_and_light() {
        let blocker = Sphere::new(SphereParams::new(
            "blocker",
            DVec3::new(0.0, 5.0, 0.0),
            DVec3::ONE,
            Color::ONE,
        ));
        let ray = Ray::new(DVec3::ZERO, DVec3::Y);

        assert!(blocker.is_occluding(&ray, DVec3::new(0.0, 10.0, 0.0)));
    }

    #[test]
    fn test_sphere_beyond_light_does_not_occlude() {
        let beyond = Sphere::new(SphereParams::new(
            "beyond",
            DVec3::new(0.0, 5.0, 0.0),
            DVec3::ONE,
            Color::ONE,
        ));
        let ray = Ray::new(DVec3::ZERO, DVec3::Y);

        assert!(!beyond.is_occluding(&ray, DVec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_shadow_ray_leaving_own_surface() {
        let sphere = unit_sphere();

        // Leaving the top of the sphere towards a light above: not occluded
        let up = Ray::new(DVec3::Y, DVec3::Y);
        assert!(!sphere.is_occluding(&up, DVec3::new(0.0, 10.0, 0.0)));

        // Leaving the top towards a light below the sphere: self-shadowed
        let down = Ray::new(DVec3::Y, DVec3::NEG_Y);
        assert!(sphere.is_occluding(&down, DVec3::new(0.0, -10.0, 0.0)));
    }

    #[test]
    fn test_derived_transforms() {
        let sphere = Sphere::new(SphereParams {
            name: "s".to_string(),
            position: DVec3::new(1.0, 2.0, 3.0),
            scale: DVec3::new(2.0, 2.0, 2.0),
            color: Color::new(1.0, 0.0, 0.0),
            ambient: 0.1,
            diffuse: 0.2,
            specular: 0.3,
            reflectivity: 0.4,
            specular_exponent: 10.0,
        });

        assert_eq!(sphere.transform().translation(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(sphere.transform().scale(), DVec3::splat(2.0));
        assert_eq!(sphere.specular_exponent(), 10.0);
        assert_eq!(sphere.reflectivity(), 0.4);
    }
}
