use std::f32::consts::TAU;

use cgmath::Vector3;

use crate::gfx::geometry::error::{require_positive, require_splits, vertex_capacity};
use crate::gfx::geometry::frame::{push_grid_triangles, unit_steps, Frame};
use crate::gfx::geometry::{GeometryError, MeshData};

const SHAPE: &str = "torus";

/// Generate a torus lying in the XY plane around the Z axis
///
/// # Arguments
/// * `major_radius` - Distance from the centre to the middle of the tube
/// * `minor_radius` - Radius of the tube, strictly smaller than `major_radius`
/// * `major_split_count` - Divisions around the Z axis (`phi`), at least 3
/// * `minor_split_count` - Divisions around the tube (`theta`), at least 3
///
/// Each vertex is
/// `((R + r·cos θ)·cos φ, (R + r·cos θ)·sin φ, -r·sin θ)` with tangent
/// `∂/∂θ`, binormal `∂/∂φ` and the normal pointing out of the tube.
///
/// Vertices form `major_split_count + 1` rings of `minor_split_count + 1`
/// vertices. The last ring and the last vertex of every ring repeat the
/// first one in position with the matching texture coordinate set to 1.
pub fn create_torus(
    major_radius: f32,
    minor_radius: f32,
    major_split_count: u32,
    minor_split_count: u32,
) -> Result<MeshData, GeometryError> {
    require_positive(SHAPE, "major_radius", major_radius)?;
    require_positive(SHAPE, "minor_radius", minor_radius)?;
    if minor_radius >= major_radius {
        return Err(GeometryError::invalid(
            SHAPE,
            "minor_radius",
            format!("must be smaller than major_radius {major_radius}, got {minor_radius}"),
        ));
    }
    require_splits(SHAPE, "major_split_count", major_split_count, 3)?;
    require_splits(SHAPE, "minor_split_count", minor_split_count, 3)?;

    let vertex_count = (u64::from(major_split_count) + 1) * (u64::from(minor_split_count) + 1);
    let capacity = vertex_capacity(SHAPE, vertex_count)?;
    let mut mesh = MeshData::with_capacity(
        capacity,
        2 * major_split_count as usize * minor_split_count as usize,
    );

    for (ring, v) in unit_steps(major_split_count).enumerate() {
        // Seam ring and seam column reuse angle zero to repeat positions exactly
        let phi = if ring as u32 == major_split_count { 0.0 } else { v * TAU };
        let (sin_phi, cos_phi) = phi.sin_cos();

        for (column, u) in unit_steps(minor_split_count).enumerate() {
            let theta = if column as u32 == minor_split_count { 0.0 } else { u * TAU };
            let (sin_theta, cos_theta) = theta.sin_cos();

            let distance = major_radius + minor_radius * cos_theta;
            let position = Vector3::new(
                distance * cos_phi,
                distance * sin_phi,
                -minor_radius * sin_theta,
            );
            let d_dtheta = Vector3::new(-sin_theta * cos_phi, -sin_theta * sin_phi, -cos_theta);
            let d_dphi = Vector3::new(-sin_phi, cos_phi, 0.0);

            mesh.push_vertex(position, Frame::from_derivatives(d_dtheta, d_dphi), [u, v]);
        }
    }

    push_grid_triangles(&mut mesh.triangles, 0, minor_split_count, major_split_count);

    mesh.finish(SHAPE)
}
