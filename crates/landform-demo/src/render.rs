//! Render a generated terrain into preview images, one pixel per grid node.

use glam::Vec4;

use landform_math::{clamp01, inverse_lerp};
use landform_terrain::HeightField;

use crate::image::PreviewImage;

/// Render the height field as a grayscale image.
///
/// Each node's height is normalized against the field's observed range, with
/// black at the minimum and white at the maximum.
pub fn render_heightmap(field: &HeightField) -> PreviewImage {
    let mut image = PreviewImage::new(field.grid.nodes_x(), field.grid.nodes_z());

    for z in 0..field.grid.nodes_z() {
        for x in 0..field.grid.nodes_x() {
            let height = field.grid.get(x, z);
            let normalized = clamp01(inverse_lerp(field.min_height, field.max_height, height));
            let level = (normalized * 255.0).round() as u8;
            image.set_pixel(x, z, level, level, level, 255);
        }
    }

    image
}

/// Render per-vertex colors as an image.
///
/// `colors` must align with the grid's row-major node order, which is the
/// same order the mesh vertex buffer uses.
pub fn render_colormap(field: &HeightField, colors: &[Vec4]) -> PreviewImage {
    let nodes_x = field.grid.nodes_x();
    let nodes_z = field.grid.nodes_z();
    let mut image = PreviewImage::new(nodes_x, nodes_z);

    for z in 0..nodes_z {
        for x in 0..nodes_x {
            let color = colors[field.grid.index(x, z)];
            image.set_pixel(
                x,
                z,
                channel_to_byte(color.x),
                channel_to_byte(color.y),
                channel_to_byte(color.z),
                channel_to_byte(color.w),
            );
        }
    }

    image
}

fn channel_to_byte(channel: f32) -> u8 {
    (clamp01(channel) * 255.0).round() as u8
}
