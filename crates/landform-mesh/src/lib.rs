//! Terrain mesh construction: grid triangulation with fixed winding and
//! elevation-based vertex coloring.

mod color;
mod mesh;
mod triangulate;

pub use color::{
    COLOR_DEEP_WATER, COLOR_GRASS, COLOR_MOUNTAIN, COLOR_SAND, COLOR_SNOW, COLOR_WATER, SHORE_BAND,
    classify, colorize,
};
pub use mesh::TerrainMesh;
pub use triangulate::triangulate;
