//! Piecewise-linear remap curves over the unit interval.
//!
//! Curves stand in for editor-authored animation curves: the height curve
//! sculpts the elevation distribution (e.g. flatten lowlands) and the falloff
//! curve shapes the edge taper. Both map [0, 1] to [0, 1].

use serde::{Deserialize, Serialize};

use crate::interp::{clamp01, lerp};

/// A single control point of a [`Curve`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    /// Input position in [0, 1].
    pub input: f32,
    /// Output value at that position.
    pub output: f32,
}

impl CurveKey {
    /// Create a control point.
    pub fn new(input: f32, output: f32) -> Self {
        Self { input, output }
    }
}

/// A piecewise-linear remapping curve over [0, 1].
///
/// Evaluation interpolates linearly between neighboring control points and
/// holds the first/last output outside their span. An empty curve evaluates
/// as the identity so sampling can never dereference an undefined curve;
/// config sanitization replaces empty curves up front and reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    keys: Vec<CurveKey>,
}

impl Curve {
    /// Build a curve from control points. Keys are sorted by input position.
    pub fn from_keys(mut keys: Vec<CurveKey>) -> Self {
        keys.sort_by(|a, b| a.input.total_cmp(&b.input));
        Self { keys }
    }

    /// The identity curve: 0 -> 0, 1 -> 1.
    pub fn identity() -> Self {
        Self::from_keys(vec![CurveKey::new(0.0, 0.0), CurveKey::new(1.0, 1.0)])
    }

    /// Returns `true` if the curve has no control points.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The control points, sorted by input position.
    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Evaluate the curve at `t`.
    ///
    /// `t` is clamped to [0, 1] before lookup. With no control points the
    /// clamped input is returned unchanged (identity fallback); with a single
    /// control point its output is returned for every input.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = clamp01(t);
        let Some(first) = self.keys.first() else {
            return t;
        };
        if t <= first.input {
            return first.output;
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.input {
                let span = b.input - a.input;
                if span <= f32::EPSILON {
                    return b.output;
                }
                return lerp(a.output, b.output, (t - a.input) / span);
            }
        }
        // Past the last key: hold its output.
        self.keys[self.keys.len() - 1].output
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::identity()
    }
}
