pub mod error;
pub mod math;
pub mod spline;

pub use error::{Result, SplineError};
pub use spline::{ControlPoint, Frame, ReparamSample, SegmentInterpolant, Spline};
