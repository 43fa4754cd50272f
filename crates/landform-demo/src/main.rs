//! Demo binary that generates a terrain and writes PNG previews.
//!
//! Run with `cargo run -p landform-demo` for the default terrain, or override
//! parameters: `cargo run -p landform-demo -- --width 200 --depth 200 --seed 7`.

mod image;
mod render;

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use landform_engine::TerrainEngine;
use landform_terrain::TerrainConfig;

use crate::image::PreviewError;
use crate::render::{render_colormap, render_heightmap};

#[derive(Parser, Debug)]
#[command(name = "landform-demo", about = "Generate a terrain and write PNG previews")]
struct Args {
    /// Grid width in cells.
    #[arg(long, default_value_t = 120)]
    width: u32,

    /// Grid depth in cells.
    #[arg(long, default_value_t = 120)]
    depth: u32,

    /// Terrain seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of noise octaves.
    #[arg(long, default_value_t = 4)]
    octaves: u32,

    /// Base noise scale.
    #[arg(long, default_value_t = 0.3)]
    noise_scale: f32,

    /// Frequency multiplier between octaves.
    #[arg(long, default_value_t = 2.0)]
    lacunarity: f32,

    /// Amplitude multiplier between octaves.
    #[arg(long, default_value_t = 0.5)]
    persistence: f32,

    /// World-space height multiplier.
    #[arg(long, default_value_t = 10.0)]
    height_multiplier: f32,

    /// Water level for vertex coloring.
    #[arg(long, default_value_t = 2.0)]
    water_level: f32,

    /// Output path for the grayscale heightmap preview.
    #[arg(long, default_value = "heightmap.png")]
    heightmap_out: PathBuf,

    /// Output path for the vertex-color preview.
    #[arg(long, default_value = "colormap.png")]
    colormap_out: PathBuf,
}

fn main() {
    landform_log::init_logging(None);
    let args = Args::parse();

    if let Err(err) = run(&args) {
        tracing::error!(%err, "terrain preview generation failed");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PreviewError> {
    let config = TerrainConfig {
        width: args.width,
        depth: args.depth,
        seed: args.seed,
        octave_count: args.octaves,
        noise_scale: args.noise_scale,
        lacunarity: args.lacunarity,
        persistence: args.persistence,
        height_multiplier: args.height_multiplier,
        water_level: args.water_level,
        ..TerrainConfig::default()
    };

    let mut engine = TerrainEngine::new(config);
    let mesh = engine.generate();

    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "terrain generated"
    );
    for warning in engine.warnings() {
        warn!(%warning, "config value substituted");
    }

    let field = engine
        .height_field()
        .expect("height field exists after generate");
    info!(
        min_height = field.min_height,
        max_height = field.max_height,
        "observed height range"
    );

    render_heightmap(field).save_png(&args.heightmap_out)?;
    render_colormap(field, &engine.mesh().colors).save_png(&args.colormap_out)?;

    info!(
        heightmap = %args.heightmap_out.display(),
        colormap = %args.colormap_out.display(),
        "previews written"
    );
    Ok(())
}
