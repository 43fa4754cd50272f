//! Terrain generation configuration with degenerate-value substitution.
//!
//! Generation is best-effort and never fails outright: values that would make
//! sampling undefined (zero-sized grid, non-positive noise scale, zero
//! octaves, empty curves) are replaced with the nearest usable value before a
//! build. Every substitution is reported as a [`ConfigWarning`] and logged,
//! but generation proceeds.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use landform_math::Curve;

/// Smallest usable noise scale; anything at or below zero is raised to this.
pub const MIN_NOISE_SCALE: f32 = 1e-4;

/// Maximum number of noise octaves a build will run.
pub const MAX_OCTAVES: u32 = 16;

/// Tuning-panel slider range for grid width/depth, in cells.
///
/// The UI ranges bound the sliders of an interactive tuning panel; the
/// engine itself only substitutes degenerate values, so programmatic callers
/// may use grids outside these ranges (e.g. tiny grids in tests).
pub const GRID_SIZE_UI_RANGE: RangeInclusive<u32> = 15..=500;
/// Tuning-panel slider range for the noise scale.
pub const NOISE_SCALE_UI_RANGE: RangeInclusive<f32> = 0.001..=1.0;
/// Tuning-panel slider range for the octave count.
pub const OCTAVE_UI_RANGE: RangeInclusive<u32> = 1..=16;
/// Tuning-panel slider range for lacunarity.
pub const LACUNARITY_UI_RANGE: RangeInclusive<f32> = 1.0..=4.0;
/// Tuning-panel slider range for the height multiplier.
pub const HEIGHT_MULTIPLIER_UI_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Tuning-panel slider range for the water level.
pub const WATER_LEVEL_UI_RANGE: RangeInclusive<f32> = 0.0..=6.0;

/// A configuration value that was substituted before generation.
///
/// These are warnings, not errors: the build continues with the reported
/// replacement value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigWarning {
    /// Grid width was zero.
    #[error("grid width {requested} is degenerate, using {actual}")]
    Width { requested: u32, actual: u32 },
    /// Grid depth was zero.
    #[error("grid depth {requested} is degenerate, using {actual}")]
    Depth { requested: u32, actual: u32 },
    /// Octave count was outside [1, MAX_OCTAVES].
    #[error("octave count {requested} outside [1, {MAX_OCTAVES}], using {actual}")]
    OctaveCount { requested: u32, actual: u32 },
    /// Noise scale was at or below zero.
    #[error("noise scale {requested} would divide by zero, using {actual}")]
    NoiseScale { requested: f32, actual: f32 },
    /// Lacunarity was below 1.
    #[error("lacunarity {requested} below 1, using {actual}")]
    Lacunarity { requested: f32, actual: f32 },
    /// Persistence was outside [0, 1].
    #[error("persistence {requested} outside [0, 1], using {actual}")]
    Persistence { requested: f32, actual: f32 },
    /// Height multiplier was negative.
    #[error("height multiplier {requested} negative, using {actual}")]
    HeightMultiplier { requested: f32, actual: f32 },
    /// Falloff start was outside [0, 1].
    #[error("falloff start {requested} outside [0, 1], using {actual}")]
    FalloffStart { requested: f32, actual: f32 },
    /// Falloff strength was outside [0, 1].
    #[error("falloff strength {requested} outside [0, 1], using {actual}")]
    FalloffStrength { requested: f32, actual: f32 },
    /// The height remap curve had no control points.
    #[error("height curve has no control points, using identity")]
    EmptyHeightCurve,
    /// The falloff curve had no control points.
    #[error("falloff curve has no control points, using identity")]
    EmptyFalloffCurve,
}

/// Immutable-per-build snapshot of every terrain generation parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid width in cells; the vertex grid is `(width + 1)` nodes wide.
    pub width: u32,
    /// Grid depth in cells; the vertex grid is `(depth + 1)` nodes deep.
    pub depth: u32,
    /// Seed for the octave offset stream. Same seed, same terrain.
    pub seed: u64,
    /// Spatial scale of the base octave; smaller values zoom the noise out.
    pub noise_scale: f32,
    /// Number of noise layers composited per sample.
    pub octave_count: u32,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f32,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f32,
    /// Scales the accumulated noise into world-space height units.
    pub height_multiplier: f32,
    /// Elevation below which vertices are colored as water.
    pub water_level: f32,
    /// Normalized Chebyshev distance from the grid center at which the edge
    /// falloff begins; 1 disables the falloff entirely.
    pub falloff_start: f32,
    /// How strongly the falloff pulls edge heights toward zero, in [0, 1].
    pub falloff_strength: f32,
    /// Remap applied to normalized noise before amplitude scaling.
    pub height_curve: Curve,
    /// Shape of the edge taper between `falloff_start` and the grid edge.
    pub falloff_curve: Curve,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 120,
            depth: 120,
            seed: 0,
            noise_scale: 0.3,
            octave_count: 4,
            lacunarity: 2.0,
            persistence: 0.5,
            height_multiplier: 10.0,
            water_level: 2.0,
            falloff_start: 0.6,
            falloff_strength: 1.0,
            height_curve: Curve::identity(),
            falloff_curve: Curve::identity(),
        }
    }
}

impl TerrainConfig {
    /// Produce a copy safe to generate from, substituting degenerate values.
    ///
    /// Returns the sanitized snapshot together with one warning per
    /// substitution. Each substitution is also logged at `warn` level.
    pub fn sanitized(&self) -> (Self, Vec<ConfigWarning>) {
        let mut config = self.clone();
        let mut warnings = Vec::new();

        if config.width < 1 {
            warnings.push(ConfigWarning::Width {
                requested: config.width,
                actual: 1,
            });
            config.width = 1;
        }
        if config.depth < 1 {
            warnings.push(ConfigWarning::Depth {
                requested: config.depth,
                actual: 1,
            });
            config.depth = 1;
        }
        if config.octave_count < 1 || config.octave_count > MAX_OCTAVES {
            let actual = config.octave_count.clamp(1, MAX_OCTAVES);
            warnings.push(ConfigWarning::OctaveCount {
                requested: config.octave_count,
                actual,
            });
            config.octave_count = actual;
        }
        if config.noise_scale <= 0.0 {
            warnings.push(ConfigWarning::NoiseScale {
                requested: config.noise_scale,
                actual: MIN_NOISE_SCALE,
            });
            config.noise_scale = MIN_NOISE_SCALE;
        }
        if config.lacunarity < 1.0 {
            warnings.push(ConfigWarning::Lacunarity {
                requested: config.lacunarity,
                actual: 1.0,
            });
            config.lacunarity = 1.0;
        }
        if !(0.0..=1.0).contains(&config.persistence) {
            let actual = config.persistence.clamp(0.0, 1.0);
            warnings.push(ConfigWarning::Persistence {
                requested: config.persistence,
                actual,
            });
            config.persistence = actual;
        }
        if config.height_multiplier < 0.0 {
            warnings.push(ConfigWarning::HeightMultiplier {
                requested: config.height_multiplier,
                actual: 0.0,
            });
            config.height_multiplier = 0.0;
        }
        if !(0.0..=1.0).contains(&config.falloff_start) {
            let actual = config.falloff_start.clamp(0.0, 1.0);
            warnings.push(ConfigWarning::FalloffStart {
                requested: config.falloff_start,
                actual,
            });
            config.falloff_start = actual;
        }
        if !(0.0..=1.0).contains(&config.falloff_strength) {
            let actual = config.falloff_strength.clamp(0.0, 1.0);
            warnings.push(ConfigWarning::FalloffStrength {
                requested: config.falloff_strength,
                actual,
            });
            config.falloff_strength = actual;
        }
        if config.height_curve.is_empty() {
            warnings.push(ConfigWarning::EmptyHeightCurve);
            config.height_curve = Curve::identity();
        }
        if config.falloff_curve.is_empty() {
            warnings.push(ConfigWarning::EmptyFalloffCurve);
            config.falloff_curve = Curve::identity();
        }

        for warning in &warnings {
            tracing::warn!(%warning, "terrain config value substituted");
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_sanitizes_clean() {
        let (config, warnings) = TerrainConfig::default().sanitized();
        assert!(warnings.is_empty(), "default config should not warn: {warnings:?}");
        assert_eq!(config, TerrainConfig::default());
    }

    #[test]
    fn test_zero_octave_count_raised_to_one() {
        let requested = TerrainConfig {
            octave_count: 0,
            ..TerrainConfig::default()
        };
        let (config, warnings) = requested.sanitized();
        assert_eq!(config.octave_count, 1);
        assert!(warnings.contains(&ConfigWarning::OctaveCount {
            requested: 0,
            actual: 1
        }));
    }

    #[test]
    fn test_excess_octave_count_capped() {
        let requested = TerrainConfig {
            octave_count: 40,
            ..TerrainConfig::default()
        };
        let (config, warnings) = requested.sanitized();
        assert_eq!(config.octave_count, MAX_OCTAVES);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_non_positive_noise_scale_substituted() {
        let requested = TerrainConfig {
            noise_scale: 0.0,
            ..TerrainConfig::default()
        };
        let (config, warnings) = requested.sanitized();
        assert_eq!(config.noise_scale, MIN_NOISE_SCALE);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_zero_grid_raised_to_one_cell() {
        let requested = TerrainConfig {
            width: 0,
            depth: 0,
            ..TerrainConfig::default()
        };
        let (config, warnings) = requested.sanitized();
        assert_eq!((config.width, config.depth), (1, 1));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_unit_interval_fields_clamped() {
        let requested = TerrainConfig {
            persistence: 1.5,
            falloff_start: -0.2,
            falloff_strength: 2.0,
            height_multiplier: -3.0,
            ..TerrainConfig::default()
        };
        let (config, warnings) = requested.sanitized();
        assert_eq!(config.persistence, 1.0);
        assert_eq!(config.falloff_start, 0.0);
        assert_eq!(config.falloff_strength, 1.0);
        assert_eq!(config.height_multiplier, 0.0);
        assert_eq!(warnings.len(), 4);
    }

    #[test]
    fn test_empty_curves_replaced_with_identity() {
        let requested = TerrainConfig {
            height_curve: Curve::from_keys(Vec::new()),
            falloff_curve: Curve::from_keys(Vec::new()),
            ..TerrainConfig::default()
        };
        let (config, warnings) = requested.sanitized();
        assert_eq!(config.height_curve, Curve::identity());
        assert_eq!(config.falloff_curve, Curve::identity());
        assert!(warnings.contains(&ConfigWarning::EmptyHeightCurve));
        assert!(warnings.contains(&ConfigWarning::EmptyFalloffCurve));
    }

    #[test]
    fn test_small_test_grids_pass_through_unclamped() {
        // The UI slider range starts at 15 cells, but the engine must not
        // force programmatic configs into it.
        let requested = TerrainConfig {
            width: 2,
            depth: 2,
            ..TerrainConfig::default()
        };
        let (config, warnings) = requested.sanitized();
        assert_eq!((config.width, config.depth), (2, 2));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_warning_messages_name_the_substitution() {
        let warning = ConfigWarning::NoiseScale {
            requested: 0.0,
            actual: MIN_NOISE_SCALE,
        };
        let text = warning.to_string();
        assert!(text.contains("noise scale"), "unexpected message: {text}");
    }
}
