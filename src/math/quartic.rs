//! Closed-form real-root extraction for quartic polynomials.
//!
//! Based on "Cubic bezier distance" by gleboneloner
//! (<https://www.shadertoy.com/view/7lsBW2>).

/// Real roots of a quartic polynomial.
///
/// Roots are recovered in pairs from two quadratic factors, so the count
/// is always 0, 2, or 4.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuarticRoots {
    roots: [f64; 4],
    count: usize,
}

impl QuarticRoots {
    /// Returns the roots found, in factor order (not sorted).
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.roots[..self.count]
    }

    /// Returns the number of real roots found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` when no real roots were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn push_pair(&mut self, r0: f64, r1: f64) {
        self.roots[self.count] = r0;
        self.roots[self.count + 1] = r1;
        self.count += 2;
    }
}

/// Finds the real roots of `a·x⁴ + b·x³ + c·x² + d·x + e`, `a ≠ 0`.
///
/// Reduces to a depressed quartic, solves the resolvent cubic in closed
/// form (Cardano branch for one real root, trigonometric branch for
/// three), polishes the resolved value with two Newton iterations, and
/// recovers real roots from the two resulting quadratic factors. A
/// quartic with no real roots returns an empty set; this is a normal
/// outcome, not an error.
#[must_use]
pub fn solve_quartic(a: f64, b: f64, c: f64, d: f64, e: f64) -> QuarticRoots {
    let b = b / a;
    let c = c / a;
    let d = d / a;
    let e = e / a;

    // Depressed quartic y⁴ + p·y² + q·y + r, with x = y - b/4.
    let bb = b * b;
    let p = (8.0 * c - 3.0 * bb) / 8.0;
    let q = (8.0 * d - 4.0 * c * b + bb * b) / 8.0;
    let r = (256.0 * e - 64.0 * d * b + 16.0 * c * bb - 3.0 * bb * bb) / 256.0;

    // Resolvent cubic λ³ + ra·λ² + rb·λ + rc.
    let ra = 2.0 * p;
    let rb = p * p - 4.0 * r;
    let rc = -q * q;

    // Shift λ → λ − ra/3 to depress the cubic.
    let ru = ra / 3.0;
    let rp = rb - ra * ru;
    let rq = rc - (rb - 2.0 * ra * ra / 9.0) * ru;

    let rh = 0.25 * rq * rq + rp * rp * rp / 27.0;
    let mut lambda = if rh > 0.0 {
        // One real cubic root: Cardano.
        let rh = rh.sqrt();
        let ro = -0.5 * rq;
        (ro - rh).cbrt() + (ro + rh).cbrt() - ru
    } else {
        // Three real roots: trigonometric form.
        let rm = (-rp / 3.0).sqrt();
        -2.0 * rm * ((1.5 * rq / (rp * rm)).asin() / 3.0).sin() - ru
    };

    // Two Newton iterations on the undepressed resolvent, evaluated by
    // Horner-style synthetic division.
    for _ in 0..2 {
        let a2 = ra + lambda;
        let a1 = rb + lambda * a2;
        let b2 = a2 + lambda;
        let f = rc + lambda * a1;
        let f1 = a1 + lambda * b2;
        lambda -= f / f1;
    }

    let mut found = QuarticRoots::default();
    if lambda < 0.0 {
        return found;
    }

    let t = lambda.sqrt();
    let alpha = 2.0 * q / t;
    let beta = lambda + ra;
    let shift = 0.25 * b;
    let t = t * 0.5;

    // Quadratic factor discriminants; a non-positive value means the
    // factor's roots are complex and the pair is dropped.
    let z = -alpha - beta;
    if z > 0.0 {
        let z = z.sqrt() * 0.5;
        let h = t - shift;
        found.push_pair(h + z, h - z);
    }

    let w = alpha - beta;
    if w > 0.0 {
        let w = w.sqrt() * 0.5;
        let h = -t - shift;
        found.push_pair(h + w, h - w);
    }

    found
}
