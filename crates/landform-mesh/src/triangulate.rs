//! Height grid triangulation with fixed, predictable winding.

use glam::{Vec2, Vec3};

use landform_terrain::HeightGrid;

use crate::mesh::TerrainMesh;

/// Convert a height grid into vertices, UVs, and triangle indices.
///
/// Vertex `(x, z)` lands at index `z * (width + 1) + x` with position
/// `(x, height, z)` and UV `(x / width, z / depth)`. Each cell emits two
/// triangles over its corners — with bottom-left `(x, z)`, top-left
/// `(x, z+1)`, bottom-right `(x+1, z)`, top-right `(x+1, z+1)`:
/// triangle A is (bottom-left, top-left, bottom-right) and triangle B is
/// (bottom-right, top-left, top-right). The winding is part of the output
/// contract; the renderer relies on it for front-face orientation.
///
/// Colors are left empty; the colorizer fills them in a separate pass so a
/// color-only regeneration can reuse this geometry untouched.
pub fn triangulate(grid: &HeightGrid) -> TerrainMesh {
    let width = grid.width();
    let depth = grid.depth();
    let nodes_x = width + 1;
    let mut mesh = TerrainMesh::with_grid_capacity(width, depth);

    for z in 0..=depth {
        for x in 0..=width {
            mesh.vertices
                .push(Vec3::new(x as f32, grid.get(x, z), z as f32));
            mesh.uvs
                .push(Vec2::new(x as f32 / width as f32, z as f32 / depth as f32));
        }
    }

    for z in 0..depth {
        for x in 0..width {
            let bottom_left = z * nodes_x + x;
            let bottom_right = bottom_left + 1;
            let top_left = bottom_left + nodes_x;
            let top_right = top_left + 1;

            mesh.triangles.extend_from_slice(&[
                bottom_left,
                top_left,
                bottom_right,
                bottom_right,
                top_left,
                top_right,
            ]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_grid(width: u32, depth: u32) -> HeightGrid {
        let mut grid = HeightGrid::new(width, depth);
        for z in 0..=depth {
            for x in 0..=width {
                grid.set(x, z, (x + z * 10) as f32);
            }
        }
        grid
    }

    #[test]
    fn test_vertex_and_index_cardinality() {
        let mesh = triangulate(&ramp_grid(5, 3));
        assert_eq!(mesh.vertex_count(), 6 * 4);
        assert_eq!(mesh.uvs.len(), mesh.vertex_count());
        assert_eq!(mesh.triangles.len(), 5 * 3 * 6);
        assert_eq!(mesh.triangle_count(), 5 * 3 * 2);
    }

    #[test]
    fn test_every_index_references_a_vertex() {
        let mesh = triangulate(&ramp_grid(7, 7));
        let vertex_count = mesh.vertex_count() as u32;
        for &index in &mesh.triangles {
            assert!(index < vertex_count, "index {index} out of bounds");
        }
    }

    #[test]
    fn test_single_cell_winding() {
        let mesh = triangulate(&ramp_grid(1, 1));
        // Bottom-left 0, bottom-right 1, top-left 2, top-right 3.
        assert_eq!(mesh.triangles, vec![0, 2, 1, 1, 2, 3]);
    }

    #[test]
    fn test_vertex_positions_carry_grid_heights() {
        let grid = ramp_grid(2, 2);
        let mesh = triangulate(&grid);
        for z in 0..=2 {
            for x in 0..=2 {
                let v = mesh.vertices[(z * 3 + x) as usize];
                assert_eq!(v.x, x as f32);
                assert_eq!(v.z, z as f32);
                assert_eq!(v.y, grid.get(x, z), "height mismatch at ({x}, {z})");
            }
        }
    }

    #[test]
    fn test_uvs_span_unit_square() {
        let mesh = triangulate(&ramp_grid(4, 2));
        assert_eq!(mesh.uvs[0], Vec2::new(0.0, 0.0));
        // Last vertex: (4, 2).
        assert_eq!(mesh.uvs[mesh.uvs.len() - 1], Vec2::new(1.0, 1.0));
        for uv in &mesh.uvs {
            assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y));
        }
    }

    #[test]
    fn test_adjacent_cells_share_edge_vertices() {
        let mesh = triangulate(&ramp_grid(2, 1));
        // Cell 0 triangles: (0,3,1),(1,3,4); cell 1: (1,4,2),(2,4,5).
        // Vertex 1 and 4 are shared across the cells, not duplicated.
        assert_eq!(
            mesh.triangles,
            vec![0, 3, 1, 1, 3, 4, 1, 4, 2, 2, 4, 5]
        );
        assert_eq!(mesh.vertex_count(), 6);
    }

    #[test]
    fn test_colors_left_for_colorizer_pass() {
        let mesh = triangulate(&ramp_grid(3, 3));
        assert!(mesh.colors.is_empty());
    }
}
