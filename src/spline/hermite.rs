//! Cubic Hermite basis evaluation for one spline segment.
//!
//! A segment runs from `p0` along the outgoing tangent `t0` to `p1`
//! arriving along `t1`, with the local parameter `a ∈ [0, 1]`. Tangents
//! are unnormalized; their magnitude controls how hard the curve is
//! pulled along them.

use crate::math::{Point3, Vector3};

/// Evaluates the segment position at local parameter `a`.
#[must_use]
pub fn position(p0: Point3, t0: Vector3, p1: Point3, t1: Vector3, a: f64) -> Point3 {
    let a2 = a * a;
    let a3 = a2 * a;
    let h00 = 2.0 * a3 - 3.0 * a2 + 1.0;
    let h10 = a3 - 2.0 * a2 + a;
    let h01 = a3 - a2;
    let h11 = -2.0 * a3 + 3.0 * a2;
    Point3::from(p0.coords * h00 + t0 * h10 + t1 * h01 + p1.coords * h11)
}

/// Power-basis coefficients of the segment derivative:
/// `derivative(a) = (c1·a + c2)·a + c3`.
///
/// This form is what the arc-length integrand evaluates at each
/// quadrature node, so it is exposed separately from [`derivative`].
#[must_use]
pub fn derivative_coefficients(
    p0: Point3,
    t0: Vector3,
    p1: Point3,
    t1: Vector3,
) -> (Vector3, Vector3, Vector3) {
    let c1 = ((p0 - p1) * 2.0 + t0 + t1) * 3.0;
    let c2 = (p1 - p0) * 6.0 - t0 * 4.0 - t1 * 2.0;
    let c3 = t0;
    (c1, c2, c3)
}

/// Evaluates the unnormalized segment derivative at local parameter `a`.
#[must_use]
pub fn derivative(p0: Point3, t0: Vector3, p1: Point3, t1: Vector3, a: f64) -> Vector3 {
    let (c1, c2, c3) = derivative_coefficients(p0, t0, p1, t1);
    (c1 * a + c2) * a + c3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn segment() -> (Point3, Vector3, Point3, Vector3) {
        (
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 0.0),
            Point3::new(4.0, 1.0, -2.0),
            Vector3::new(0.0, -1.0, 3.0),
        )
    }

    #[test]
    fn position_hits_endpoints() {
        let (p0, t0, p1, t1) = segment();
        assert_relative_eq!(position(p0, t0, p1, t1, 0.0), p0);
        assert_relative_eq!(position(p0, t0, p1, t1, 1.0), p1);
    }

    #[test]
    fn derivative_matches_tangents_at_endpoints() {
        let (p0, t0, p1, t1) = segment();
        assert_relative_eq!(derivative(p0, t0, p1, t1, 0.0), t0);
        assert_relative_eq!(derivative(p0, t0, p1, t1, 1.0), t1, epsilon = 1e-12);
    }

    #[test]
    fn derivative_agrees_with_finite_difference() {
        let (p0, t0, p1, t1) = segment();
        let a = 0.37;
        let h = 1e-6;
        let numeric =
            (position(p0, t0, p1, t1, a + h) - position(p0, t0, p1, t1, a - h)) / (2.0 * h);
        let analytic = derivative(p0, t0, p1, t1, a);
        assert_relative_eq!(numeric, analytic, epsilon = 1e-5);
    }

    #[test]
    fn straight_segment_midpoint() {
        // p0=(0,0,0), t0=(1,0,0), p1=(1,0,0), t1=(1,0,0): the Hermite
        // evaluation at a=0.5 lands exactly on (0.5, 0, 0).
        let p = position(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            0.5,
        );
        assert_relative_eq!(p, Point3::new(0.5, 0.0, 0.0), epsilon = 1e-12);
    }
}
