use thiserror::Error;

/// Top-level error type for the loopspline engine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SplineError {
    /// The spline owns no control points, so there is nothing to evaluate.
    #[error("spline has no control points")]
    EmptySpline,

    /// The derivative is zero or parallel to the world up axis, so no
    /// orthonormal frame exists at the requested key.
    #[error("curve frame is undefined at the requested key")]
    DegenerateFrame,
}

/// Convenience type alias for results using [`SplineError`].
pub type Result<T> = std::result::Result<T, SplineError>;
