pub mod interp;
pub mod quadrature;
pub mod quartic;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Hermite-eased blend factor: clamps `x` to `[0, 1]` and applies
/// `x²(3 − 2x)`.
#[must_use]
pub fn smoothstep(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn smoothstep_endpoints() {
        assert!(smoothstep(0.0).abs() < TOL);
        assert!((smoothstep(1.0) - 1.0).abs() < TOL);
    }

    #[test]
    fn smoothstep_midpoint() {
        // 0.25 * (3 - 1) = 0.5
        assert!((smoothstep(0.5) - 0.5).abs() < TOL);
    }

    #[test]
    fn smoothstep_clamps_outside_unit_range() {
        assert!(smoothstep(-3.0).abs() < TOL);
        assert!((smoothstep(7.0) - 1.0).abs() < TOL);
    }
}
