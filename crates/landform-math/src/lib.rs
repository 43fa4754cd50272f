//! Scalar interpolation helpers and remap curves for the landform terrain pipeline.

mod curve;
mod interp;

pub use curve::{Curve, CurveKey};
pub use interp::{clamp01, inverse_lerp, lerp};
