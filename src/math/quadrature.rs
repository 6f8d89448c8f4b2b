//! Fixed-order Gauss–Legendre quadrature.

/// Node/weight pairs of the 5-point Gauss–Legendre rule on `[-1, 1]`.
const GAUSS_LEGENDRE_5: [(f64, f64); 5] = [
    (0.0, 0.568_888_9),
    (-0.538_469_3, 0.478_628_67),
    (0.538_469_3, 0.478_628_67),
    (-0.906_179_85, 0.236_926_88),
    (0.906_179_85, 0.236_926_88),
];

/// Integrates `f` over `[0, upper]` with the fixed 5-point
/// Gauss–Legendre rule.
///
/// Exact (up to the precision of the tabulated nodes) for polynomial
/// integrands of degree ≤ 9; for the spline's speed function this gives
/// arc length well below the reparameterization table's resolution.
#[must_use]
pub fn gauss_legendre_5(upper: f64, f: impl Fn(f64) -> f64) -> f64 {
    let half = upper * 0.5;
    let mut acc = 0.0;
    for (node, weight) in GAUSS_LEGENDRE_5 {
        let alpha = half * (1.0 + node);
        acc += f(alpha) * weight;
    }
    acc * half
}
