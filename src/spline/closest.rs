//! Closest point on a single cubic segment.
//!
//! The segment is given in Bezier control-point form. Minimizing squared
//! distance to the query point means finding a root of a degree-5
//! polynomial: one root is bracketed by bisection, the quintic is deflated
//! by it, and the remaining quartic is solved in closed form. All
//! candidates are clamped into `[0, 1]` and compared by squared distance.
//!
//! Based on "Cubic bezier distance" by gleboneloner
//! (<https://www.shadertoy.com/view/7lsBW2>).

use crate::math::quartic::solve_quartic;
use crate::math::Point3;

const BISECTION_ITERATIONS: usize = 20;

/// Returns `(parameter, squared distance)` of the point on the Bezier
/// segment `c0..c3` closest to `query`, with the parameter clamped into
/// `[0, 1]`.
///
/// The bisection-derived candidate always exists, so a result is returned
/// even when the quartic step finds no real roots.
#[must_use]
pub(crate) fn closest_on_segment(
    c0: Point3,
    c1: Point3,
    c2: Point3,
    c3: Point3,
    query: Point3,
) -> (f64, f64) {
    // Power-basis vector coefficients of the curve relative to the query:
    // r(t) = ((s1·t + s2)·t + s3)·t + s4.
    let s1 = (c1 - c2) * 3.0 + (c3 - c0);
    let s2 = ((c2 - c1) + (c0 - c1)) * 3.0;
    let s3 = (c1 - c0) * 3.0;
    let s4 = c0 - query;

    // Scalar coefficients of the derivative-of-squared-distance quintic.
    let u1 = 3.0 * s1.dot(&s1);
    let u2 = 5.0 * s1.dot(&s2);
    let u3 = 4.0 * s1.dot(&s3) + 2.0 * s2.dot(&s2);
    let u4 = 3.0 * s1.dot(&s4) + 3.0 * s2.dot(&s3);
    let u5 = 2.0 * s2.dot(&s4) + s3.dot(&s3);
    let u6 = s3.dot(&s4);

    // Bisect for a sign change of the quintic over s ∈ [-1, 1], mapped to
    // an unbounded parameter by k = s/(1 − |s|). An odd-degree polynomial
    // always has a real root, so the bracket always closes.
    let mut s_lo: f64 = -1.0;
    let mut s_hi = 1.0;
    let mut h_lo = -1.0;
    let mut h_hi = 1.0;
    for _ in 0..BISECTION_ITERATIONS {
        let s_mid = 0.5 * (s_lo + s_hi);
        let k = s_mid / (1.0 - s_mid.abs());
        let h_mid = k * (k * (k * (k * (u1 * k + u2) + u3) + u4) + u5) + u6;
        if h_lo * h_mid <= 0.0 {
            s_hi = s_mid;
            h_hi = h_mid;
        } else {
            s_lo = s_mid;
            h_lo = h_mid;
        }
    }

    // Secant through the final bracket, mapped back off the bounded axis.
    let seed = (s_lo * h_hi - s_hi * h_lo) / (h_hi - h_lo);
    let seed = seed / (1.0 - seed.abs());

    // Deflate the quintic by the seed root; the quartic holds the rest.
    let b1 = u1;
    let b2 = u2 + seed * b1;
    let b3 = u3 + seed * b2;
    let b4 = u4 + seed * b3;
    let b5 = u5 + seed * b4;
    let roots = solve_quartic(b1, b2, b3, b4, b5);

    let dist_sq_at = |t: f64| {
        let offset = ((s1 * t + s2) * t + s3) * t + s4;
        offset.dot(&offset)
    };

    let mut best_param = seed.clamp(0.0, 1.0);
    let mut best_dist_sq = dist_sq_at(best_param);
    for &root in roots.as_slice() {
        let t = root.clamp(0.0, 1.0);
        let dist_sq = dist_sq_at(t);
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best_param = t;
        }
    }

    (best_param, best_dist_sq)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_segment() -> (Point3, Point3, Point3, Point3) {
        // Uniform-speed straight Bezier from (0,0,0) to (3,0,0).
        (
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        )
    }

    #[test]
    fn perpendicular_query_projects_to_midpoint() {
        let (c0, c1, c2, c3) = straight_segment();
        let (param, dist_sq) = closest_on_segment(c0, c1, c2, c3, Point3::new(1.5, 2.0, 0.0));
        assert!((param - 0.5).abs() < 1e-4, "param={param}");
        assert!((dist_sq - 4.0).abs() < 1e-4, "dist_sq={dist_sq}");
    }

    #[test]
    fn query_beyond_end_clamps_to_one() {
        let (c0, c1, c2, c3) = straight_segment();
        let (param, dist_sq) = closest_on_segment(c0, c1, c2, c3, Point3::new(5.0, 0.0, 0.0));
        assert!((param - 1.0).abs() < 1e-6, "param={param}");
        assert!((dist_sq - 4.0).abs() < 1e-6, "dist_sq={dist_sq}");
    }

    #[test]
    fn query_before_start_clamps_to_zero() {
        let (c0, c1, c2, c3) = straight_segment();
        let (param, dist_sq) = closest_on_segment(c0, c1, c2, c3, Point3::new(-2.0, 1.0, 0.0));
        assert!(param.abs() < 1e-6, "param={param}");
        assert!((dist_sq - 5.0).abs() < 1e-6, "dist_sq={dist_sq}");
    }

    #[test]
    fn query_on_curve_has_zero_distance() {
        // A genuinely curved segment.
        let c0 = Point3::new(0.0, 0.0, 0.0);
        let c1 = Point3::new(1.0, 2.0, 0.0);
        let c2 = Point3::new(2.0, 2.0, 1.0);
        let c3 = Point3::new(3.0, 0.0, 1.0);

        // Evaluate the Bezier at t = 0.3 by de Casteljau.
        let t = 0.3;
        let lerp = |a: Point3, b: Point3| Point3::from(a.coords * (1.0 - t) + b.coords * t);
        let q0 = lerp(c0, c1);
        let q1 = lerp(c1, c2);
        let q2 = lerp(c2, c3);
        let r0 = lerp(q0, q1);
        let r1 = lerp(q1, q2);
        let on_curve = lerp(r0, r1);

        let (param, dist_sq) = closest_on_segment(c0, c1, c2, c3, on_curve);
        assert!((param - t).abs() < 1e-4, "param={param}");
        assert!(dist_sq < 1e-8, "dist_sq={dist_sq}");
    }

    #[test]
    fn curved_segment_result_is_a_true_minimum() {
        let c0 = Point3::new(0.0, 0.0, 0.0);
        let c1 = Point3::new(0.0, 3.0, 0.0);
        let c2 = Point3::new(3.0, 3.0, 0.0);
        let c3 = Point3::new(3.0, 0.0, 0.0);
        let query = Point3::new(1.5, 4.0, 0.5);

        let (param, dist_sq) = closest_on_segment(c0, c1, c2, c3, query);

        // Dense scan must not find a meaningfully closer parameter.
        let mut scan_best = f64::INFINITY;
        for i in 0..=1000 {
            let t = f64::from(i) / 1000.0;
            let lerp = |a: Point3, b: Point3| Point3::from(a.coords * (1.0 - t) + b.coords * t);
            let q0 = lerp(c0, c1);
            let q1 = lerp(c1, c2);
            let q2 = lerp(c2, c3);
            let r0 = lerp(q0, q1);
            let r1 = lerp(q1, q2);
            let p = lerp(r0, r1);
            scan_best = scan_best.min((p - query).norm_squared());
        }
        assert!(
            dist_sq <= scan_best + 1e-6,
            "param={param} dist_sq={dist_sq} scan_best={scan_best}"
        );
    }
}
