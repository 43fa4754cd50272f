//! Multi-octave fractal noise sampling at grid coordinates.
//!
//! Composites `octave_count` layers of Perlin noise, each at a seed-derived
//! offset, with frequency growing by `lacunarity` and amplitude decaying by
//! `persistence` per layer. The accumulated value is the raw elevation before
//! the height multiplier and edge falloff are applied.

use glam::DVec2;
use noise::{NoiseFn, Perlin};

use crate::config::{MIN_NOISE_SCALE, TerrainConfig};
use crate::offsets::generate_offsets;

/// Seed of the shared gradient-noise primitive.
///
/// The permutation table is intentionally independent of the terrain seed;
/// terrain variation comes entirely from the octave offsets.
const NOISE_PRIMITIVE_SEED: u32 = 0;

/// Evaluates layered fractal noise at grid nodes.
///
/// Owns the gradient-noise primitive and the per-octave offset table derived
/// from the config's seed. Sampling is pure: the same sampler and config
/// produce bit-identical values for a coordinate on any platform.
pub struct FractalSampler {
    noise: Perlin,
    offsets: Vec<DVec2>,
}

impl FractalSampler {
    /// Build a sampler for a sanitized config, deriving its octave offsets.
    pub fn new(config: &TerrainConfig) -> Self {
        Self {
            noise: Perlin::new(NOISE_PRIMITIVE_SEED),
            offsets: generate_offsets(config.seed, config.octave_count),
        }
    }

    /// The per-octave offsets this sampler was built with.
    pub fn offsets(&self) -> &[DVec2] {
        &self.offsets
    }

    /// Sample the fractal sum at grid node `(x, z)`.
    ///
    /// The node position is normalized to [0, 1] by the grid dimensions, so
    /// the noise footprint is resolution independent. Returns the height
    /// remap curve's accumulated output, not yet scaled by the height
    /// multiplier.
    pub fn sample(&self, x: u32, z: u32, config: &TerrainConfig) -> f32 {
        let scale = f64::from(config.noise_scale.max(MIN_NOISE_SCALE));
        let norm_x = f64::from(x) / f64::from(config.width.max(1));
        let norm_z = f64::from(z) / f64::from(config.depth.max(1));

        let mut frequency = 1.0_f64;
        let mut amplitude = 1.0_f32;
        let mut total = 0.0_f32;

        for offset in &self.offsets {
            let sx = norm_x / scale * frequency + offset.x;
            let sz = norm_z / scale * frequency + offset.y;

            // Gradient noise in [-1, 1], remapped to [0, 1] for the curve.
            let signed = self.noise.get([sx, sz]);
            let normalized = ((signed + 1.0) * 0.5) as f32;

            total += config.height_curve.evaluate(normalized) * amplitude;
            amplitude *= config.persistence;
            frequency *= f64::from(config.lacunarity);
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landform_math::{Curve, CurveKey, clamp01};

    const EPSILON: f32 = 1e-6;

    fn config() -> TerrainConfig {
        TerrainConfig {
            width: 32,
            depth: 32,
            seed: 42,
            noise_scale: 0.5,
            octave_count: 4,
            lacunarity: 2.0,
            persistence: 0.5,
            ..TerrainConfig::default()
        }
    }

    #[test]
    fn test_sample_deterministic_for_fixed_seed() {
        let config = config();
        let a = FractalSampler::new(&config);
        let b = FractalSampler::new(&config);
        for (x, z) in [(0, 0), (5, 9), (32, 32)] {
            assert_eq!(
                a.sample(x, z, &config),
                b.sample(x, z, &config),
                "sample at ({x}, {z}) must be bit-identical across samplers"
            );
        }
    }

    #[test]
    fn test_different_seeds_change_the_field() {
        let config_a = config();
        let config_b = TerrainConfig {
            seed: 99,
            ..config()
        };
        let a = FractalSampler::new(&config_a);
        let b = FractalSampler::new(&config_b);

        let differing = (0..=32)
            .filter(|&x| (a.sample(x, x, &config_a) - b.sample(x, x, &config_b)).abs() > EPSILON)
            .count();
        assert!(differing > 0, "seed change should move at least some samples");
    }

    #[test]
    fn test_single_octave_matches_reference_noise() {
        // One octave with an identity curve reduces to the remapped primitive
        // at the offset sample coordinate.
        let config = TerrainConfig {
            octave_count: 1,
            ..config()
        };
        let sampler = FractalSampler::new(&config);
        let offset = sampler.offsets()[0];
        let reference = Perlin::new(NOISE_PRIMITIVE_SEED);

        for (x, z) in [(0_u32, 0_u32), (7, 3), (16, 31)] {
            let sx = f64::from(x) / 32.0 / 0.5 + offset.x;
            let sz = f64::from(z) / 32.0 / 0.5 + offset.y;
            let expected = clamp01(((reference.get([sx, sz]) + 1.0) * 0.5) as f32);

            let sampled = sampler.sample(x, z, &config);
            assert!(
                (sampled - expected).abs() < 1e-5,
                "sample at ({x}, {z}): expected {expected}, got {sampled}"
            );
        }
    }

    #[test]
    fn test_zero_persistence_keeps_only_first_octave() {
        let multi = TerrainConfig {
            persistence: 0.0,
            ..config()
        };
        let single = TerrainConfig {
            octave_count: 1,
            ..config()
        };
        let sampler_multi = FractalSampler::new(&multi);
        let sampler_single = FractalSampler::new(&single);

        for (x, z) in [(0, 0), (10, 20), (32, 1)] {
            let a = sampler_multi.sample(x, z, &multi);
            let b = sampler_single.sample(x, z, &single);
            assert!(
                (a - b).abs() < EPSILON,
                "zero persistence should silence octaves past the first: {a} vs {b}"
            );
        }
    }

    #[test]
    fn test_height_curve_reshapes_output() {
        let flat_lowlands = Curve::from_keys(vec![
            CurveKey::new(0.0, 0.0),
            CurveKey::new(0.6, 0.0),
            CurveKey::new(1.0, 1.0),
        ]);
        let curved = TerrainConfig {
            height_curve: flat_lowlands,
            ..config()
        };
        let identity = config();
        let sampler = FractalSampler::new(&identity);

        let mut reshaped = 0;
        for x in 0..=32 {
            for z in 0..=32 {
                let a = sampler.sample(x, z, &identity);
                let b = sampler.sample(x, z, &curved);
                // The flattening curve never raises a value.
                assert!(b <= a + EPSILON, "curve should not raise values: {b} > {a}");
                if (a - b).abs() > EPSILON {
                    reshaped += 1;
                }
            }
        }
        assert!(reshaped > 0, "curve should reshape at least some samples");
    }

    #[test]
    fn test_sum_bounded_by_geometric_amplitude_series() {
        let config = config();
        let sampler = FractalSampler::new(&config);
        // Identity curve output is in [0, 1], so the sum is bounded by
        // 1 + p + p^2 + p^3.
        let bound: f32 = (0..config.octave_count)
            .map(|i| config.persistence.powi(i as i32))
            .sum();

        for x in 0..=32 {
            for z in 0..=32 {
                let v = sampler.sample(x, z, &config);
                assert!(
                    (0.0..=bound + EPSILON).contains(&v),
                    "sample {v} at ({x}, {z}) outside [0, {bound}]"
                );
            }
        }
    }
}
