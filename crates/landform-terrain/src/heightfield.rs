//! Height grid construction: fractal sampling plus edge falloff, with
//! min/max tracked in the same pass.

use landform_math::clamp01;

use crate::config::TerrainConfig;
use crate::sampler::FractalSampler;

/// A `(width + 1) × (depth + 1)` grid of final node heights.
///
/// Stored row-major with x fastest: node `(x, z)` lives at
/// `z * (width + 1) + x`, the same ordering the mesh vertex buffer uses.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    width: u32,
    depth: u32,
    values: Vec<f32>,
}

impl HeightGrid {
    /// Create a zero-filled grid for `width × depth` cells.
    pub fn new(width: u32, depth: u32) -> Self {
        let nodes = (width as usize + 1) * (depth as usize + 1);
        Self {
            width,
            depth,
            values: vec![0.0; nodes],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid depth in cells.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of nodes along the x axis (`width + 1`).
    pub fn nodes_x(&self) -> u32 {
        self.width + 1
    }

    /// Number of nodes along the z axis (`depth + 1`).
    pub fn nodes_z(&self) -> u32 {
        self.depth + 1
    }

    /// Total node count.
    pub fn node_count(&self) -> usize {
        self.values.len()
    }

    /// Flat index of node `(x, z)`.
    #[inline]
    pub fn index(&self, x: u32, z: u32) -> usize {
        (z * self.nodes_x() + x) as usize
    }

    /// Height at node `(x, z)`.
    ///
    /// # Panics
    ///
    /// Panics if `x > width` or `z > depth`.
    #[inline]
    pub fn get(&self, x: u32, z: u32) -> f32 {
        self.values[self.index(x, z)]
    }

    /// Set the height at node `(x, z)`.
    #[inline]
    pub fn set(&mut self, x: u32, z: u32, height: f32) {
        let idx = self.index(x, z);
        self.values[idx] = height;
    }

    /// All node heights in row-major order (x fastest).
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// A built height grid together with its observed elevation range.
///
/// `min_height`/`max_height` always describe exactly this grid; the
/// colorizer normalizes against them and must never see a stale pair.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    /// Final node heights (post-falloff, post-multiplier).
    pub grid: HeightGrid,
    /// Smallest height in the grid.
    pub min_height: f32,
    /// Largest height in the grid.
    pub max_height: f32,
}

/// Multiplicative edge taper for node `(x, z)`.
///
/// Distance from the grid center is measured as the Chebyshev maximum of the
/// per-axis normalized distances, which gives the falloff a square footprint
/// aligned with the grid edges rather than a circular one. Inside
/// `falloff_start` the factor is exactly 1.
pub fn falloff_factor(x: u32, z: u32, config: &TerrainConfig) -> f32 {
    let half_w = config.width as f32 / 2.0;
    let half_d = config.depth as f32 / 2.0;
    let dx = (x as f32 - half_w).abs() / half_w;
    let dz = (z as f32 - half_d).abs() / half_d;
    let dist = dx.max(dz);

    if dist <= config.falloff_start {
        return 1.0;
    }

    let span = 1.0 - config.falloff_start;
    // falloff_start == 1 leaves no span to ramp over; the taper is fully
    // engaged the moment the threshold is exceeded.
    let t = if span <= f32::EPSILON {
        1.0
    } else {
        clamp01((dist - config.falloff_start) / span)
    };

    1.0 - config.falloff_curve.evaluate(t) * config.falloff_strength
}

/// Build the full height field for a sanitized config.
///
/// Samples the fractal noise at every node, applies the height multiplier and
/// edge falloff, and tracks the running min/max in the same pass.
pub fn build_height_field(config: &TerrainConfig, sampler: &FractalSampler) -> HeightField {
    let mut grid = HeightGrid::new(config.width, config.depth);
    let mut min_height = f32::INFINITY;
    let mut max_height = f32::NEG_INFINITY;

    for z in 0..=config.depth {
        for x in 0..=config.width {
            let raw = sampler.sample(x, z, config);
            let height = raw * config.height_multiplier * falloff_factor(x, z, config);

            min_height = min_height.min(height);
            max_height = max_height.max(height);
            grid.set(x, z, height);
        }
    }

    HeightField {
        grid,
        min_height,
        max_height,
    }
}
