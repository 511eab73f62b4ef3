use cgmath::Vector3;

use crate::gfx::geometry::error::{require_positive, require_splits, vertex_capacity};
use crate::gfx::geometry::frame::{push_grid_triangles, unit_steps, Frame};
use crate::gfx::geometry::{GeometryError, MeshData};

const SHAPE: &str = "quad";

/// Generate a flat rectangle in the XY plane
///
/// # Arguments
/// * `width` - Extent along +X, the quad spans `[0, width]`
/// * `height` - Extent along +Y, the quad spans `[0, height]`
/// * `horizontal_split_count` - Extra vertex columns inserted between the two edges
/// * `vertical_split_count` - Extra vertex rows inserted between the two edges
///
/// The result has `(horizontal_split_count + 2) × (vertical_split_count + 2)`
/// vertices at `z = 0`, all with normal +Z, tangent +X and binormal +Y.
/// Texture coordinates run linearly over `[0, 1]²`.
pub fn create_quad(
    width: f32,
    height: f32,
    horizontal_split_count: u32,
    vertical_split_count: u32,
) -> Result<MeshData, GeometryError> {
    require_positive(SHAPE, "width", width)?;
    require_positive(SHAPE, "height", height)?;

    require_splits(SHAPE, "horizontal_split_count", horizontal_split_count, 0)?;
    require_splits(SHAPE, "vertical_split_count", vertical_split_count, 0)?;

    let columns = horizontal_split_count + 1;
    let rows = vertical_split_count + 1;

    let vertex_count = (u64::from(columns) + 1) * (u64::from(rows) + 1);
    let capacity = vertex_capacity(SHAPE, vertex_count)?;
    let mut mesh = MeshData::with_capacity(capacity, 2 * columns as usize * rows as usize);

    let frame = Frame::from_derivatives(Vector3::unit_x(), Vector3::unit_y());

    for v in unit_steps(rows) {
        for u in unit_steps(columns) {
            mesh.push_vertex(Vector3::new(u * width, v * height, 0.0), frame, [u, v]);
        }
    }

    push_grid_triangles(&mut mesh.triangles, 0, columns, rows);

    mesh.finish(SHAPE)
}
