//! Generation orchestration and the regeneration-scope policy.

use landform_math::Curve;
use landform_mesh::{TerrainMesh, colorize, triangulate};
use landform_terrain::{
    ConfigWarning, FractalSampler, HeightField, TerrainConfig, build_height_field,
};

/// How much of the pipeline a configuration change requires rerunning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegenScope {
    /// Nothing changed; the cached mesh stands.
    None,
    /// Only the vertex colors need recomputing; geometry is reused.
    ColorOnly,
    /// Offsets, height field, geometry, and colors are all rebuilt.
    Full,
}

/// Owns the terrain configuration and the last-generated outputs.
///
/// Setters only record pending values; [`TerrainEngine::regenerate`] diffs
/// the pending config against the last-applied snapshot once and then runs
/// the cheapest sufficient tier. Outputs are rebuilt wholesale and swapped
/// in at the end of a build, so an observer never sees a partially-updated
/// mesh.
pub struct TerrainEngine {
    pending: TerrainConfig,
    applied: Option<TerrainConfig>,
    field: Option<HeightField>,
    mesh: TerrainMesh,
    warnings: Vec<ConfigWarning>,
}

impl TerrainEngine {
    /// Create an engine with the given starting configuration.
    ///
    /// No generation happens until [`generate`](Self::generate) or
    /// [`regenerate`](Self::regenerate) is called.
    pub fn new(config: TerrainConfig) -> Self {
        Self {
            pending: config,
            applied: None,
            field: None,
            mesh: TerrainMesh::new(),
            warnings: Vec::new(),
        }
    }

    /// Run the full pipeline: sanitize, derive offsets, build the height
    /// field, triangulate, and colorize. Replaces all cached outputs and
    /// returns the new mesh.
    pub fn generate(&mut self) -> &TerrainMesh {
        let (config, warnings) = self.pending.sanitized();
        self.rebuild(config, warnings);
        &self.mesh
    }

    fn rebuild(&mut self, config: TerrainConfig, warnings: Vec<ConfigWarning>) {
        let sampler = FractalSampler::new(&config);
        let field = build_height_field(&config, &sampler);
        let mut mesh = triangulate(&field.grid);
        mesh.colors = colorize(&field, config.water_level);

        tracing::debug!(
            width = config.width,
            depth = config.depth,
            seed = config.seed,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            min_height = field.min_height,
            max_height = field.max_height,
            "terrain generated"
        );

        self.warnings = warnings;
        self.field = Some(field);
        self.mesh = mesh;
        self.applied = Some(config);
    }

    /// Apply pending configuration changes, rerunning only what they touch.
    ///
    /// Returns the scope that was executed. A change to any geometry
    /// parameter triggers a full rebuild; a water-level change alone
    /// recomputes vertex colors over the existing height field; no change is
    /// a no-op. The first call always performs a full build.
    pub fn regenerate(&mut self) -> RegenScope {
        let (next, warnings) = self.pending.sanitized();
        let scope = match &self.applied {
            Some(applied) => regen_scope(applied, &next),
            None => RegenScope::Full,
        };

        match scope {
            RegenScope::Full => {
                self.rebuild(next, warnings);
            }
            RegenScope::ColorOnly => {
                if let Some(field) = &self.field {
                    self.mesh.colors = colorize(field, next.water_level);
                }
                tracing::debug!(water_level = next.water_level, "terrain recolored");
                self.warnings = warnings;
                self.applied = Some(next);
            }
            RegenScope::None => {}
        }
        scope
    }

    /// The last-generated mesh (empty before the first generation).
    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    /// The last-built height field, if any generation has run.
    pub fn height_field(&self) -> Option<&HeightField> {
        self.field.as_ref()
    }

    /// The pending configuration, including unapplied setter changes.
    pub fn config(&self) -> &TerrainConfig {
        &self.pending
    }

    /// The sanitized snapshot used by the most recent build, if any.
    pub fn applied_config(&self) -> Option<&TerrainConfig> {
        self.applied.as_ref()
    }

    /// Substitution warnings from the most recent build.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Set the grid dimensions in cells.
    pub fn set_grid_size(&mut self, width: u32, depth: u32) {
        self.pending.width = width;
        self.pending.depth = depth;
    }

    /// Set the octave offset seed.
    pub fn set_seed(&mut self, seed: u64) {
        self.pending.seed = seed;
    }

    /// Set the base noise scale.
    pub fn set_noise_scale(&mut self, noise_scale: f32) {
        self.pending.noise_scale = noise_scale;
    }

    /// Set the number of noise octaves.
    pub fn set_octave_count(&mut self, octave_count: u32) {
        self.pending.octave_count = octave_count;
    }

    /// Set the per-octave frequency multiplier.
    pub fn set_lacunarity(&mut self, lacunarity: f32) {
        self.pending.lacunarity = lacunarity;
    }

    /// Set the per-octave amplitude multiplier.
    pub fn set_persistence(&mut self, persistence: f32) {
        self.pending.persistence = persistence;
    }

    /// Set the world-space height multiplier.
    pub fn set_height_multiplier(&mut self, height_multiplier: f32) {
        self.pending.height_multiplier = height_multiplier;
    }

    /// Set the water level used for vertex coloring.
    pub fn set_water_level(&mut self, water_level: f32) {
        self.pending.water_level = water_level;
    }

    /// Set where the edge falloff begins.
    pub fn set_falloff_start(&mut self, falloff_start: f32) {
        self.pending.falloff_start = falloff_start;
    }

    /// Set how strongly the edge falloff tapers heights.
    pub fn set_falloff_strength(&mut self, falloff_strength: f32) {
        self.pending.falloff_strength = falloff_strength;
    }

    /// Replace the height remap curve.
    pub fn set_height_curve(&mut self, curve: Curve) {
        self.pending.height_curve = curve;
    }

    /// Replace the falloff shape curve.
    pub fn set_falloff_curve(&mut self, curve: Curve) {
        self.pending.falloff_curve = curve;
    }
}

/// Classify the difference between two sanitized config snapshots.
///
/// `water_level` only feeds the colorizer; every other field participates in
/// the fractal sum, the falloff mask, or the vertex positions, so changing
/// one of them invalidates the geometry. Persistence scales per-octave
/// amplitudes and is therefore geometry-affecting in this design.
fn regen_scope(applied: &TerrainConfig, next: &TerrainConfig) -> RegenScope {
    let geometry_changed = applied.width != next.width
        || applied.depth != next.depth
        || applied.seed != next.seed
        || applied.noise_scale != next.noise_scale
        || applied.octave_count != next.octave_count
        || applied.lacunarity != next.lacunarity
        || applied.persistence != next.persistence
        || applied.height_multiplier != next.height_multiplier
        || applied.falloff_start != next.falloff_start
        || applied.falloff_strength != next.falloff_strength
        || applied.height_curve != next.height_curve
        || applied.falloff_curve != next.falloff_curve;

    if geometry_changed {
        RegenScope::Full
    } else if applied.water_level != next.water_level {
        RegenScope::ColorOnly
    } else {
        RegenScope::None
    }
}
