//! Linear interpolation primitives shared by the sampler, colorizer, and falloff mask.

/// Linear interpolation from `a` to `b` by factor `t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse linear interpolation: the factor at which `v` sits between `a` and `b`.
///
/// The result is unclamped; callers that need [0, 1] wrap it in [`clamp01`].
/// A degenerate range (`a == b`) maps to 0.5, the midpoint, so a perfectly
/// flat height field normalizes without dividing by zero.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    let range = b - a;
    if range.abs() <= f32::EPSILON {
        0.5
    } else {
        (v - a) / range
    }
}

/// Clamp a value to the unit interval.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
