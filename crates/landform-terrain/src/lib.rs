//! Height-field terrain synthesis: deterministic octave offsets, multi-octave
//! fractal noise sampling, and edge-falloff height grid construction.

mod config;
mod heightfield;
mod offsets;
mod sampler;

pub use config::{
    ConfigWarning, GRID_SIZE_UI_RANGE, HEIGHT_MULTIPLIER_UI_RANGE, LACUNARITY_UI_RANGE,
    MAX_OCTAVES, MIN_NOISE_SCALE, NOISE_SCALE_UI_RANGE, OCTAVE_UI_RANGE, TerrainConfig,
    WATER_LEVEL_UI_RANGE,
};
pub use heightfield::{HeightField, HeightGrid, build_height_field, falloff_factor};
pub use offsets::{OFFSET_COORD_RANGE, generate_offsets};
pub use sampler::FractalSampler;
