use std::f32::consts::TAU;

use cgmath::Vector3;

use crate::gfx::geometry::error::{require_positive, require_splits, vertex_capacity};
use crate::gfx::geometry::frame::{push_grid_triangles, unit_steps, Frame};
use crate::gfx::geometry::{GeometryError, MeshData};

const SHAPE: &str = "circle ring";

/// Generate a flat annulus in the XY plane centred at the origin
///
/// # Arguments
/// * `radius` - Distance from the centre to the middle of the band
/// * `spread_length` - Width of the band, must be below `2 * radius`
/// * `circle_split_count` - Divisions around the ring, at least 3
/// * `spread_split_count` - Divisions across the band, at least 1
///
/// Vertices span distances `[radius - spread_length / 2, radius + spread_length / 2]`
/// from the centre. The tangent follows the angle, the binormal points away
/// from the centre, which makes the normal the constant `-Z`.
///
/// Texture `u` runs across the band from the inner edge, `v` runs around the
/// ring and reaches exactly 1 on the duplicated seam.
pub fn create_circle_ring(
    radius: f32,
    spread_length: f32,
    circle_split_count: u32,
    spread_split_count: u32,
) -> Result<MeshData, GeometryError> {
    require_positive(SHAPE, "radius", radius)?;
    require_positive(SHAPE, "spread_length", spread_length)?;
    if spread_length >= 2.0 * radius {
        return Err(GeometryError::invalid(
            SHAPE,
            "spread_length",
            format!("must be smaller than twice the radius {radius}, got {spread_length}"),
        ));
    }
    require_splits(SHAPE, "circle_split_count", circle_split_count, 3)?;
    require_splits(SHAPE, "spread_split_count", spread_split_count, 1)?;

    let vertex_count = (u64::from(circle_split_count) + 1) * (u64::from(spread_split_count) + 1);
    let capacity = vertex_capacity(SHAPE, vertex_count)?;
    let mut mesh = MeshData::with_capacity(
        capacity,
        2 * circle_split_count as usize * spread_split_count as usize,
    );

    let inner = radius - 0.5 * spread_length;

    // Rows run outward across the band, columns run around the ring
    for radial in unit_steps(spread_split_count) {
        let distance_to_centre = inner + radial * spread_length;

        for (column, angular) in unit_steps(circle_split_count).enumerate() {
            let theta = if column as u32 == circle_split_count { 0.0 } else { angular * TAU };
            let (sin_theta, cos_theta) = theta.sin_cos();

            let outward = Vector3::new(cos_theta, sin_theta, 0.0);
            let around = Vector3::new(-sin_theta, cos_theta, 0.0);

            mesh.push_vertex(
                outward * distance_to_centre,
                Frame::from_derivatives(around, outward),
                [radial, angular],
            );
        }
    }

    push_grid_triangles(&mut mesh.triangles, 0, circle_split_count, spread_split_count);

    mesh.finish(SHAPE)
}
