// Transform utilities for DMat4
//
// Scene objects are only ever scaled and translated, so every matrix built
// here is diagonal plus a translation column. The products in `DiagonalAffine`
// depend on that and skip the off-diagonal terms.

use glam::{DMat4, DVec3};

/// Extension trait for matrices built by `ScaleTranslate`.
pub trait DiagonalAffine {
    /// Transform a point: per-axis scale plus translation.
    fn transform_point(&self, point: DVec3) -> DVec3;

    /// Transform a direction or normal: per-axis scale only.
    fn transform_direction(&self, direction: DVec3) -> DVec3;
}

impl DiagonalAffine for DMat4 {
    #[inline]
    fn transform_point(&self, point: DVec3) -> DVec3 {
        DVec3::new(
            self.x_axis.x * point.x + self.w_axis.x,
            self.y_axis.y * point.y + self.w_axis.y,
            self.z_axis.z * point.z + self.w_axis.z,
        )
    }

    #[inline]
    fn transform_direction(&self, direction: DVec3) -> DVec3 {
        DVec3::new(
            self.x_axis.x * direction.x,
            self.y_axis.y * direction.y,
            self.z_axis.z * direction.z,
        )
    }
}

/// An affine transform with no rotation or shear: scale, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTranslate {
    matrix: DMat4,
}

impl ScaleTranslate {
    /// Build the transform that scales by `scale` and then moves to `translation`.
    pub fn new(scale: DVec3, translation: DVec3) -> Self {
        Self {
            matrix: DMat4::from_translation(translation) * DMat4::from_scale(scale),
        }
    }

    /// The underlying 4x4 matrix.
    #[inline]
    pub fn matrix(&self) -> &DMat4 {
        &self.matrix
    }

    /// Scale factors on the diagonal.
    pub fn scale(&self) -> DVec3 {
        DVec3::new(self.matrix.x_axis.x, self.matrix.y_axis.y, self.matrix.z_axis.z)
    }

    /// Translation column.
    pub fn translation(&self) -> DVec3 {
        self.matrix.w_axis.truncate()
    }

    /// Inverse transform. Still a scale followed by a translation.
    pub fn inverse(&self) -> Self {
        Self {
            matrix: self.matrix.inverse(),
        }
    }

    /// Transpose of the inverse, for carrying normals out of object space.
    ///
    /// Only the diagonal is meaningful to `transform_direction`; the
    /// translation ends up in the bottom row and is ignored.
    pub fn normal_matrix(&self) -> DMat4 {
        self.matrix.inverse().transpose()
    }

    /// Transform a point.
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.matrix.transform_point(point)
    }

    /// Transform a direction, ignoring translation. The result is not normalized.
    #[inline]
    pub fn transform_direction(&self, direction: DVec3) -> DVec3 {
        self.matrix.transform_direction(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_transform_point_scale_then_translate() {
        let transform = ScaleTranslate::new(DVec3::new(2.0, 3.0, 4.0), DVec3::new(10.0, 20.0, 30.0));
        let transformed = transform.transform_point(DVec3::new(1.0, 1.0, 1.0));

        assert_eq!(transformed, DVec3::new(12.0, 23.0, 34.0));
    }

    #[test]
    fn test_transform_direction_no_translation() {
        let transform = ScaleTranslate::new(DVec3::new(2.0, 1.0, 1.0), DVec3::new(10.0, 20.0, 30.0));
        let transformed = transform.transform_direction(DVec3::X);

        // Translation should NOT affect directions
        assert_eq!(transformed, DVec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_shortcut_matches_full_multiply() {
        let transform = ScaleTranslate::new(DVec3::new(0.5, 2.0, 3.0), DVec3::new(-1.0, 4.0, -7.0));
        let point = DVec3::new(0.3, -1.2, 5.0);

        assert!(approx_eq(
            transform.transform_point(point),
            transform.matrix().transform_point3(point)
        ));
        assert!(approx_eq(
            transform.transform_direction(point),
            transform.matrix().transform_vector3(point)
        ));
    }

    #[test]
    fn test_inverse_roundtrip() {
        let transform = ScaleTranslate::new(DVec3::new(2.0, 4.0, 0.5), DVec3::new(1.0, 2.0, 3.0));
        let inverse = transform.inverse();

        let point = DVec3::new(5.0, 3.0, 2.0);
        let back = inverse.transform_point(transform.transform_point(point));
        assert!(approx_eq(back, point));

        assert!(approx_eq(inverse.scale(), DVec3::new(0.5, 0.25, 2.0)));
        assert!(approx_eq(inverse.translation(), DVec3::new(-0.5, -0.5, -6.0)));
    }

    #[test]
    fn test_normal_matrix_uses_inverse_scale() {
        let transform = ScaleTranslate::new(DVec3::new(2.0, 1.0, 1.0), DVec3::new(5.0, 5.0, 5.0));
        let normal_matrix = transform.normal_matrix();

        // Translation must not leak into normals
        let n = normal_matrix.transform_direction(DVec3::new(1.0, 1.0, 0.0));
        assert!(approx_eq(n, DVec3::new(0.5, 1.0, 0.0)));
    }
}
