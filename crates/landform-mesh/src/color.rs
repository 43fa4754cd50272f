//! Elevation-based vertex coloring.
//!
//! Maps each vertex height, relative to the water level and the grid's
//! observed height range, onto a fixed color ladder: deep water → water →
//! sand → grass → mountain → snow, with linear RGB blending inside each zone.

use glam::Vec4;

use landform_math::{clamp01, inverse_lerp};
use landform_terrain::HeightField;

/// Elevation window above the water level blended from water to sand.
pub const SHORE_BAND: f32 = 2.0;

/// Snow cap color.
pub const COLOR_SNOW: Vec4 = Vec4::new(0.95, 0.95, 0.95, 1.0);
/// Rocky mountain color.
pub const COLOR_MOUNTAIN: Vec4 = Vec4::new(0.4, 0.25, 0.1, 1.0);
/// Lowland grass color.
pub const COLOR_GRASS: Vec4 = Vec4::new(0.15, 0.8, 0.15, 1.0);
/// Beach sand color.
pub const COLOR_SAND: Vec4 = Vec4::new(0.85, 0.75, 0.55, 1.0);
/// Shallow water color.
pub const COLOR_WATER: Vec4 = Vec4::new(0.2, 0.4, 0.6, 1.0);
/// Deep water color.
pub const COLOR_DEEP_WATER: Vec4 = Vec4::new(0.1, 0.2, 0.4, 1.0);

// Normalized-height zone thresholds of the terrestrial ladder.
const SNOW_START: f32 = 0.7;
const SNOW_FULL: f32 = 0.85;
const MOUNTAIN_START: f32 = 0.4;
const MOUNTAIN_FULL: f32 = 0.65;
const GRASS_START: f32 = 0.1;
const GRASS_FULL: f32 = 0.35;

/// Classify a vertex height into an RGBA color.
///
/// Heights below the water level blend from water down to deep water as they
/// approach the grid minimum; the first [`SHORE_BAND`] units above water
/// blend water into sand; everything else is placed on the terrestrial
/// ladder by its normalized height within `[min_height, max_height]`.
pub fn classify(height: f32, min_height: f32, max_height: f32, water_level: f32) -> Vec4 {
    let normalized = clamp01(inverse_lerp(min_height, max_height, height));

    if height < water_level {
        let t = clamp01(inverse_lerp(water_level, min_height, height));
        return COLOR_WATER.lerp(COLOR_DEEP_WATER, t);
    }
    if height < water_level + SHORE_BAND {
        let t = clamp01(inverse_lerp(water_level, water_level + SHORE_BAND, height));
        return COLOR_WATER.lerp(COLOR_SAND, t);
    }

    if normalized > SNOW_START {
        let t = clamp01(inverse_lerp(SNOW_START, SNOW_FULL, normalized));
        COLOR_MOUNTAIN.lerp(COLOR_SNOW, t)
    } else if normalized > MOUNTAIN_START {
        let t = clamp01(inverse_lerp(MOUNTAIN_START, MOUNTAIN_FULL, normalized));
        COLOR_GRASS.lerp(COLOR_MOUNTAIN, t)
    } else if normalized > GRASS_START {
        let t = clamp01(inverse_lerp(GRASS_START, GRASS_FULL, normalized));
        COLOR_SAND.lerp(COLOR_GRASS, t)
    } else {
        COLOR_SAND
    }
}

/// Color every grid node of a height field.
///
/// The grid's row-major node order matches the triangulated vertex order, so
/// the result aligns 1:1 with the mesh vertex buffer.
pub fn colorize(field: &HeightField, water_level: f32) -> Vec<Vec4> {
    field
        .grid
        .values()
        .iter()
        .map(|&height| classify(height, field.min_height, field.max_height, water_level))
        .collect()
}
