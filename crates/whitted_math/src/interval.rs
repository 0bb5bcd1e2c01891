use crate::DVec3;

/// A closed interval of `f64` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max]. NaN is not a color.
    pub fn clamp(&self, x: f64) -> f64 {
        debug_assert!(!x.is_nan(), "clamping NaN");
        x.clamp(self.min, self.max)
    }

    /// Clamps every component of `v`.
    pub fn clamp_vec(&self, v: DVec3) -> DVec3 {
        DVec3::new(self.clamp(v.x), self.clamp(v.y), self.clamp(v.z))
    }

    /// Returns true if every component of `v` is inside the interval.
    pub fn contains_vec(&self, v: DVec3) -> bool {
        self.contains(v.x) && self.contains(v.y) && self.contains(v.z)
    }

    /// The color range [0, 1].
    pub const UNIT: Interval = Interval::new(0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_unit_clamp_vec() {
        let clamped = Interval::UNIT.clamp_vec(DVec3::new(-0.5, 0.25, 3.0));

        assert_eq!(clamped, DVec3::new(0.0, 0.25, 1.0));
        assert!(Interval::UNIT.contains_vec(clamped));
        assert!(!Interval::UNIT.contains_vec(DVec3::new(0.0, 1.5, 0.0)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "clamping NaN")]
    fn test_clamp_rejects_nan() {
        Interval::UNIT.clamp_vec(DVec3::new(0.5, f64::NAN, 0.5));
    }
}
