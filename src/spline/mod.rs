mod closest;
pub mod hermite;

use crate::error::{Result, SplineError};
use crate::math::interp::sample_monotonic;
use crate::math::quadrature::gauss_legendre_5;
use crate::math::{smoothstep, Point3, Vector3, TOLERANCE};

/// Reparameterization samples per segment.
const REPARAM_SAMPLES_PER_SEGMENT: usize = 25;

/// A spline control point: position, outgoing tangent, and banking roll.
///
/// The tangent is deliberately unnormalized; its magnitude controls how
/// hard the curve is pulled along it. `roll` is the banking angle in
/// radians applied to the frame at this point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub position: Point3,
    pub tangent: Vector3,
    pub roll: f64,
}

impl ControlPoint {
    /// Creates a new control point.
    #[must_use]
    pub fn new(position: Point3, tangent: Vector3, roll: f64) -> Self {
        Self {
            position,
            tangent,
            roll,
        }
    }
}

/// One row of the arc-length reparameterization table.
///
/// Both fields are non-decreasing along the table; `key` covers `[0, N]`
/// and `distance` covers `[0, length]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReparamSample {
    pub key: f64,
    pub distance: f64,
}

/// An orthonormal, banked basis at a point on the spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub forward: Vector3,
    pub right: Vector3,
    pub up: Vector3,
}

/// Transient evaluation state for one key: the two bounding control
/// points and the local Hermite parameter within the segment.
///
/// Self-contained by value, so it never outlives or dangles into the
/// spline it came from. Useful to callers batching several evaluations
/// (position, derivative, frame) at the same key.
#[derive(Debug, Clone, Copy)]
pub struct SegmentInterpolant {
    p0: ControlPoint,
    p1: ControlPoint,
    local: f64,
}

impl SegmentInterpolant {
    /// Returns the local Hermite parameter in `[0, 1)`.
    #[must_use]
    pub fn local(&self) -> f64 {
        self.local
    }

    /// Evaluates the position on the segment.
    #[must_use]
    pub fn position(&self) -> Point3 {
        hermite::position(
            self.p0.position,
            self.p0.tangent,
            self.p1.position,
            self.p1.tangent,
            self.local,
        )
    }

    /// Evaluates the unnormalized derivative (tangent) on the segment.
    #[must_use]
    pub fn derivative(&self) -> Vector3 {
        hermite::derivative(
            self.p0.position,
            self.p0.tangent,
            self.p1.position,
            self.p1.tangent,
            self.local,
        )
    }

    /// Computes the banked orthonormal frame on the segment.
    ///
    /// The base frame is derived from the derivative and the fixed world
    /// up axis `(0, 0, 1)`; the two endpoint roll angles are blended with
    /// a smoothstep-eased local parameter and applied as an in-plane
    /// rotation of the right/up pair.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::DegenerateFrame`] if the derivative is zero
    /// or parallel to the world up axis.
    pub fn frame(&self) -> Result<Frame> {
        let derivative = self.derivative();
        if derivative.norm() < TOLERANCE {
            return Err(SplineError::DegenerateFrame);
        }
        let forward = derivative.normalize();

        let world_up = Vector3::new(0.0, 0.0, 1.0);
        let side = world_up.cross(&forward);
        if side.norm() < TOLERANCE {
            return Err(SplineError::DegenerateFrame);
        }
        let base_right = side.normalize();
        let base_up = forward.cross(&base_right);

        let eased = smoothstep(self.local);
        let roll = self.p0.roll + (self.p1.roll - self.p0.roll) * eased;
        let (sin, cos) = roll.sin_cos();

        Ok(Frame {
            forward,
            right: base_right * cos - base_up * sin,
            up: base_up * cos + base_right * sin,
        })
    }
}

/// A closed-loop piecewise-cubic Hermite spline with an arc-length
/// reparameterization table.
///
/// Control point N wraps back to control point 0. Construction
/// precomputes the key↔distance table; afterwards the spline is an
/// immutable value and every query takes `&self`.
#[derive(Debug, Clone)]
pub struct Spline {
    points: Vec<ControlPoint>,
    reparam: Vec<ReparamSample>,
    length: f64,
}

impl Spline {
    /// Builds a closed loop from an ordered control-point sequence.
    ///
    /// Per segment, arc length is integrated with a 5-point
    /// Gauss–Legendre rule at 25 evenly spaced local parameters, and the
    /// table closes with a sentinel sample at `(N, total length)`.
    /// Degenerate segments (zero tangents, coincident points) are
    /// permitted and simply contribute near-zero length.
    #[must_use]
    pub fn new(points: Vec<ControlPoint>) -> Self {
        let count = points.len();
        let mut reparam = Vec::with_capacity(count * REPARAM_SAMPLES_PER_SEGMENT + 1);
        let mut total = 0.0;

        for (index, p0) in points.iter().enumerate() {
            let p1 = &points[(index + 1) % count];
            let (c1, c2, c3) = hermite::derivative_coefficients(
                p0.position,
                p0.tangent,
                p1.position,
                p1.tangent,
            );
            let arc_length_to =
                |a: f64| gauss_legendre_5(a, |alpha| ((c1 * alpha + c2) * alpha + c3).norm());

            for sample in 0..REPARAM_SAMPLES_PER_SEGMENT {
                let a = sample as f64 / REPARAM_SAMPLES_PER_SEGMENT as f64;
                reparam.push(ReparamSample {
                    key: index as f64 + a,
                    distance: total + arc_length_to(a),
                });
            }
            total += arc_length_to(1.0);
        }

        reparam.push(ReparamSample {
            key: count as f64,
            distance: total,
        });

        Self {
            points,
            reparam,
            length: total,
        }
    }

    /// Returns the total arc length of the loop.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the control points, in loop order.
    #[must_use]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Returns the number of segments (equal to the number of control
    /// points, since the loop is closed).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len()
    }

    /// Converts a key to an arc-length distance along the loop.
    ///
    /// Keys outside `[0, N]` are clamped, not reported. An empty spline
    /// returns 0.
    #[must_use]
    pub fn key_to_distance(&self, key: f64) -> f64 {
        sample_monotonic(&self.reparam, key, |s| s.key, |s| s.distance).unwrap_or(0.0)
    }

    /// Converts an arc-length distance to a key.
    ///
    /// Distances outside `[0, length]` are clamped, not reported. An
    /// empty spline returns 0.
    #[must_use]
    pub fn distance_to_key(&self, distance: f64) -> f64 {
        sample_monotonic(&self.reparam, distance, |s| s.distance, |s| s.key).unwrap_or(0.0)
    }

    /// Resolves a key to its bounding control points and local parameter.
    ///
    /// The key is clamped to `[0, N]`. The seam resolves `key == N` to
    /// segment 0 at parameter 0, not segment N−1 at parameter 1: the
    /// physical point is the same, but the derivative and frame at the
    /// seam are segment 0's.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::EmptySpline`] if the spline has no control
    /// points.
    pub fn interpolant_at_key(&self, key: f64) -> Result<SegmentInterpolant> {
        if self.points.is_empty() {
            return Err(SplineError::EmptySpline);
        }

        let count = self.points.len();
        let key = key.clamp(0.0, count as f64);
        let segment = key as usize;
        if segment == count {
            return Ok(SegmentInterpolant {
                p0: self.points[0],
                p1: self.points[1 % count],
                local: 0.0,
            });
        }

        Ok(SegmentInterpolant {
            p0: self.points[segment],
            p1: self.points[(segment + 1) % count],
            local: key - segment as f64,
        })
    }

    /// Evaluates the position at a key.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::EmptySpline`] if the spline has no control
    /// points.
    pub fn position_at_key(&self, key: f64) -> Result<Point3> {
        Ok(self.interpolant_at_key(key)?.position())
    }

    /// Evaluates the unnormalized derivative at a key.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::EmptySpline`] if the spline has no control
    /// points.
    pub fn derivative_at_key(&self, key: f64) -> Result<Vector3> {
        Ok(self.interpolant_at_key(key)?.derivative())
    }

    /// Computes the banked orthonormal frame at a key.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::EmptySpline`] if the spline has no control
    /// points, or [`SplineError::DegenerateFrame`] if no frame exists at
    /// the key.
    pub fn frame_at_key(&self, key: f64) -> Result<Frame> {
        self.interpolant_at_key(key)?.frame()
    }

    /// Finds the key of the point on the loop closest to `point`.
    ///
    /// Without a hint every segment is searched. With `Some(hint)` only
    /// the segments `hint − 1, hint, hint + 1` (modulo N) are searched,
    /// for callers exploiting temporal coherence between successive
    /// queries. Ties are first-found-wins with no epsilon.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::EmptySpline`] if the spline has no control
    /// points.
    pub fn closest_key_to_position(&self, point: &Point3, hint: Option<usize>) -> Result<f64> {
        if self.points.is_empty() {
            return Err(SplineError::EmptySpline);
        }

        let count = self.points.len();
        let mut best_key = 0.0;
        let mut best_dist_sq = f64::INFINITY;

        let mut visit = |segment: usize| {
            let p0 = &self.points[segment];
            let p1 = &self.points[(segment + 1) % count];

            // Hermite segment in Bezier control-point form.
            let c0 = p0.position;
            let c1 = p0.position + p0.tangent / 3.0;
            let c2 = p1.position - p1.tangent / 3.0;
            let c3 = p1.position;

            let (param, dist_sq) = closest::closest_on_segment(c0, c1, c2, c3, *point);
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best_key = segment as f64 + param;
            }
        };

        if let Some(hinted) = hint {
            let count = count as i64;
            for offset in -1..=1 {
                let segment = (hinted as i64 + offset).rem_euclid(count) as usize;
                visit(segment);
            }
        } else {
            for segment in 0..count {
                visit(segment);
            }
        }

        Ok(best_key)
    }
}
