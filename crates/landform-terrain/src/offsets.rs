//! Deterministic per-octave offset generation.
//!
//! Each octave samples the noise field at a distinct, seed-derived 2D offset,
//! decorrelating the layers while keeping the whole terrain a pure function
//! of the seed. The noise primitive itself is fixed; all seed variation flows
//! through these offsets.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Magnitude bound of each offset coordinate; drawn uniformly as an integer
/// in `[-OFFSET_COORD_RANGE, OFFSET_COORD_RANGE]`.
pub const OFFSET_COORD_RANGE: i32 = 100_000;

/// Derive the per-octave offset sequence for a seed.
///
/// Uses a ChaCha8 stream so the sequence is identical for the same
/// `(seed, octave_count)` on every platform. Offsets are consumed in index
/// order: `offsets[i]` belongs to octave `i`, so extending the octave count
/// preserves the offsets of the existing octaves.
pub fn generate_offsets(seed: u64, octave_count: u32) -> Vec<DVec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..octave_count)
        .map(|_| {
            let dx = rng.random_range(-OFFSET_COORD_RANGE..=OFFSET_COORD_RANGE);
            let dy = rng.random_range(-OFFSET_COORD_RANGE..=OFFSET_COORD_RANGE);
            DVec2::new(f64::from(dx), f64::from(dy))
        })
        .collect()
}
