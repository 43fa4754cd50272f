//! Terrain engine: owns the configuration, runs the generation pipeline in
//! dependency order, and scopes regeneration to the cheapest sufficient tier.

mod engine;

pub use engine::{RegenScope, TerrainEngine};
