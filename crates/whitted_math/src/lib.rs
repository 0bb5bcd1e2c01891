// Re-export glam for convenience
pub use glam::*;

// Whitted math types
mod frustum;
mod interval;
mod quadratic;
mod ray;
mod transform;

pub use frustum::Frustum;
pub use interval::Interval;
pub use quadratic::{roots, solve_quadratic, QuadraticRoots, EPSILON};
pub use ray::Ray;
pub use transform::{DiagonalAffine, ScaleTranslate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_creation() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_dvec3_operations() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, DVec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, DVec3::new(4.0, 10.0, 18.0));
    }
}
