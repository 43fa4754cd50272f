//! CPU-side terrain mesh value handed to the external renderer.

use glam::{Vec2, Vec3, Vec4};

/// The mesh output of a terrain build.
///
/// Plain vertex/index buffers ready for upload; the renderer derives its own
/// normals and tangents. `uvs` and `colors` align 1:1 with `vertices`, and
/// `triangles` holds three indices per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainMesh {
    /// Vertex positions, one per grid node, row-major with x fastest.
    pub vertices: Vec<Vec3>,
    /// Texture coordinates in [0, 1]², aligned with `vertices`.
    pub uvs: Vec<Vec2>,
    /// Triangle index buffer (3 indices per triangle).
    pub triangles: Vec<u32>,
    /// RGBA vertex colors, aligned with `vertices`.
    pub colors: Vec<Vec4>,
}

impl TerrainMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with buffer capacity for a `width × depth` grid.
    pub fn with_grid_capacity(width: u32, depth: u32) -> Self {
        let nodes = (width as usize + 1) * (depth as usize + 1);
        let indices = width as usize * depth as usize * 6;
        Self {
            vertices: Vec::with_capacity(nodes),
            uvs: Vec::with_capacity(nodes),
            triangles: Vec::with_capacity(indices),
            colors: Vec::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mesh_is_empty() {
        let mesh = TerrainMesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.uvs.is_empty());
        assert!(mesh.colors.is_empty());
    }

    #[test]
    fn test_triangle_count_is_index_triples() {
        let mesh = TerrainMesh {
            triangles: vec![0, 1, 2, 2, 1, 3],
            ..TerrainMesh::new()
        };
        assert_eq!(mesh.triangle_count(), 2);
    }
}
