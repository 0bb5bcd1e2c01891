//! Quadratic solver for ray/unit-sphere intersection.
//!
//! Rays carry normalized directions, so the `a` term of `a t² + b t + c` is
//! always 1 and only `b` and `c` are passed in.

/// Tolerance used for tangent classification and self-intersection rejection.
pub const EPSILON: f64 = 0.001;

/// The two roots of `t² + b t + c = 0`.
///
/// When the equation has no real roots both values are `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticRoots {
    pub t0: f64,
    pub t1: f64,
}

impl QuadraticRoots {
    /// The smaller of the two roots.
    #[inline]
    pub fn near(&self) -> f64 {
        self.t0.min(self.t1)
    }

    /// The larger of the two roots.
    #[inline]
    pub fn far(&self) -> f64 {
        self.t0.max(self.t1)
    }

    /// True if at least one finite root lies meaningfully in front of the ray origin.
    #[inline]
    pub fn has_positive(&self) -> bool {
        let ahead = |t: f64| t.is_finite() && t > EPSILON;
        ahead(self.t0) || ahead(self.t1)
    }
}

/// Compute the roots of `t² + b t + c = 0`.
///
/// A discriminant within `EPSILON` of zero is treated as a single repeated
/// root, which is how grazing rays get classified as hits.
pub fn roots(b: f64, c: f64) -> QuadraticRoots {
    let discriminant = b * b - 4.0 * c;

    if discriminant < -EPSILON {
        return QuadraticRoots {
            t0: f64::INFINITY,
            t1: f64::INFINITY,
        };
    }

    if discriminant <= EPSILON {
        let t = -b / 2.0;
        return QuadraticRoots { t0: t, t1: t };
    }

    let sqrt_discriminant = discriminant.sqrt();
    QuadraticRoots {
        t0: (-b + sqrt_discriminant) / 2.0,
        t1: (-b - sqrt_discriminant) / 2.0,
    }
}

/// Solve `t² + b t + c = 0`, returning the roots only if they are real and at
/// least one of them is greater than `EPSILON`.
pub fn solve_quadratic(b: f64, c: f64) -> Option<QuadraticRoots> {
    if b * b - 4.0 * c < -EPSILON {
        return None;
    }
    let roots = roots(b, c);
    roots.has_positive().then_some(roots)
}
