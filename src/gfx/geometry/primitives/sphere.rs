use std::f32::consts::{PI, TAU};

use cgmath::Vector3;

use crate::gfx::geometry::error::{require_positive, require_splits, vertex_capacity};
use crate::gfx::geometry::frame::{push_grid_triangles, unit_steps, Frame};
use crate::gfx::geometry::{GeometryError, MeshData};

const SHAPE: &str = "sphere";

/// Point on the sphere for longitude `theta` and polar angle `phi`.
///
/// `phi = 0` is the bottom pole `(0, -r, 0)`, `phi = π` the top pole.
fn position(radius: f32, theta: f32, phi: f32) -> Vector3<f32> {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vector3::new(
        radius * sin_theta * sin_phi,
        -radius * cos_phi,
        radius * cos_theta * sin_phi,
    )
}

/// Frame from the analytic derivatives with the common `r·sin φ` factor of
/// `∂/∂θ` divided out, so the tangent stays defined as `φ` approaches a pole.
///
/// At the poles `∂/∂φ` degenerates to the horizontal direction `θ` points
/// at, signed so that `tangent × binormal` keeps pointing away from the
/// centre.
fn frame(theta: f32, phi: f32) -> Frame {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let d_dtheta = Vector3::new(cos_theta, 0.0, -sin_theta);
    let d_dphi = Vector3::new(sin_theta * cos_phi, sin_phi, cos_theta * cos_phi);
    Frame::from_derivatives(d_dtheta, d_dphi)
}

/// Generate a UV sphere centred at the origin
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `longitude_split_count` - Wedges around the polar (Y) axis, at least 3
/// * `latitude_split_count` - Vertex rings strictly between the two poles
///
/// # Layout
/// Vertices are stored as:
/// 1. `L` bottom pole vertices (`phi = 0`), one per wedge, each placed at
///    the wedge's centre longitude so its `u` coordinate is unique
/// 2. `L` top pole vertices (`phi = π`), same arrangement
/// 3. `M` latitude rings of `L + 1` vertices each, from bottom to top; the
///    last vertex of a ring duplicates the first with `u = 1`
///
/// where `L = longitude_split_count` and `M = max(latitude_split_count, 1)`.
/// A latitude count of zero yields the bipyramid: both pole fans meet on a
/// single equatorial ring.
///
/// This gives `2L + (L + 1)·M` vertices and `2L + 2L·(M - 1)` triangles.
pub fn create_sphere(
    radius: f32,
    longitude_split_count: u32,
    latitude_split_count: u32,
) -> Result<MeshData, GeometryError> {
    require_positive(SHAPE, "radius", radius)?;
    require_splits(SHAPE, "longitude_split_count", longitude_split_count, 3)?;
    require_splits(SHAPE, "latitude_split_count", latitude_split_count, 0)?;

    let longitude = longitude_split_count;
    let rings = latitude_split_count.max(1);
    if latitude_split_count == 0 {
        log::debug!("sphere with no latitude splits, using a single equatorial ring");
    }

    let ring_len = u64::from(longitude) + 1;
    let vertex_count = 2 * u64::from(longitude) + ring_len * u64::from(rings);
    let capacity = vertex_capacity(SHAPE, vertex_count)?;
    let triangle_count = 2 * longitude as usize * rings as usize;
    let mut mesh = MeshData::with_capacity(capacity, triangle_count);

    let theta_step = TAU / longitude as f32;
    let phi_step = PI / (rings as f32 + 1.0);

    // Pole vertices
    for (phi, v) in [(0.0, 0.0), (PI, 1.0)] {
        for wedge in 0..longitude {
            let centre = wedge as f32 + 0.5;
            let theta = theta_step * centre;
            let u = centre / longitude as f32;
            mesh.push_vertex(position(radius, theta, phi), frame(theta, phi), [u, v]);
        }
    }

    // Latitude rings
    let ring_base = 2 * longitude;
    for ring in 0..rings {
        let phi = phi_step * (ring as f32 + 1.0);
        let v = phi / PI;
        for (column, u) in unit_steps(longitude).enumerate() {
            // The seam column reuses theta = 0 so its position is bit-identical
            let theta = if column as u32 == longitude {
                0.0
            } else {
                theta_step * column as f32
            };
            mesh.push_vertex(position(radius, theta, phi), frame(theta, phi), [u, v]);
        }
    }

    let ring_start = |ring: u32| ring_base + ring * (longitude + 1);

    // Bottom fan: the pole sits below the first ring, so each wedge is the
    // upper triangle of a cell whose lower edge collapsed into the pole.
    let first = ring_start(0);
    for wedge in 0..longitude {
        mesh.triangles.push([wedge, first + wedge + 1, first + wedge]);
    }

    // Top fan: the pole sits above the last ring.
    let last = ring_start(rings - 1);
    for wedge in 0..longitude {
        mesh.triangles.push([longitude + wedge, last + wedge, last + wedge + 1]);
    }

    // Bands between consecutive rings
    push_grid_triangles(&mut mesh.triangles, ring_base, longitude, rings - 1);

    mesh.finish(SHAPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    fn expected_counts(longitude: usize, latitude: usize) -> (usize, usize) {
        let rings = latitude.max(1);
        (
            2 * longitude + (longitude + 1) * rings,
            2 * longitude + 2 * longitude * (rings - 1),
        )
    }

    #[test]
    fn test_sphere_counts() {
        for (longitude, latitude) in [(3, 1), (8, 6), (40, 40), (5, 2)] {
            let sphere = create_sphere(1.0, longitude, latitude).unwrap();
            let (vertices, triangles) = expected_counts(longitude as usize, latitude as usize);
            assert_eq!(sphere.vertex_count(), vertices, "L={longitude} M={latitude}");
            assert_eq!(sphere.triangle_count(), triangles, "L={longitude} M={latitude}");
        }
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let radius = 0.25;
        let sphere = create_sphere(radius, 40, 40).unwrap();
        for p in &sphere.positions {
            let distance = Vector3::from(*p).magnitude();
            assert!((distance - radius).abs() < 1e-5, "{p:?} at distance {distance}");
        }
    }

    #[test]
    fn test_sphere_normals_point_outward() {
        let sphere = create_sphere(2.0, 12, 7).unwrap();
        for (p, n) in sphere.positions.iter().zip(&sphere.normals) {
            let outward = Vector3::from(*p).normalize();
            assert!((outward - Vector3::from(*n)).magnitude() < 1e-4, "{p:?} {n:?}");
        }
    }

    #[test]
    fn test_sphere_pole_frames() {
        let longitude = 6;
        let sphere = create_sphere(1.0, longitude, 3).unwrap();
        for i in 0..longitude as usize {
            assert_eq!(sphere.positions[i][1], -1.0);
            assert!((Vector3::from(sphere.normals[i]) - Vector3::new(0.0, -1.0, 0.0)).magnitude() < 1e-5);
            assert_eq!(sphere.tex_coords[i][1], 0.0);

            let top = longitude as usize + i;
            assert_eq!(sphere.positions[top][1], 1.0);
            assert!((Vector3::from(sphere.normals[top]) - Vector3::unit_y()).magnitude() < 1e-5);
            assert_eq!(sphere.tex_coords[top][1], 1.0);

            // Tangents at the poles only depend on the wedge longitude
            assert_eq!(sphere.tangents[i], sphere.tangents[top]);
            assert_eq!(sphere.tangents[i][1], 0.0);
        }
    }

    #[test]
    fn test_sphere_seam_duplicates() {
        let longitude = 10u32;
        let sphere = create_sphere(1.5, longitude, 4).unwrap();
        let base = 2 * longitude as usize;
        for ring in 0..4 {
            let first = base + ring * (longitude as usize + 1);
            let seam = first + longitude as usize;
            assert_eq!(sphere.positions[first], sphere.positions[seam]);
            assert_eq!(sphere.normals[first], sphere.normals[seam]);
            assert_eq!(sphere.tex_coords[seam][0] - sphere.tex_coords[first][0], 1.0);
            assert_eq!(sphere.tex_coords[seam][1], sphere.tex_coords[first][1]);
        }
    }

    #[test]
    fn test_sphere_tex_coords_follow_parameters() {
        let sphere = create_sphere(1.0, 4, 3).unwrap();
        // Second ring (phi = π/2), column 1 (theta = π/2)
        let index = 2 * 4 + 5 + 1;
        let [u, v] = sphere.tex_coords[index];
        assert!((u - 0.25).abs() < 1e-6);
        assert!((v - 0.5).abs() < 1e-6);
        let p = Vector3::from(sphere.positions[index]);
        assert!((p - Vector3::new(1.0, 0.0, 0.0)).magnitude() < 1e-5);
    }

    #[test]
    fn test_sphere_bipyramid() {
        let sphere = create_sphere(1.0, 4, 0).unwrap();
        assert_eq!(sphere.vertex_count(), 2 * 4 + 5);
        assert_eq!(sphere.triangle_count(), 8);
        for p in &sphere.positions[8..] {
            assert!(p[1].abs() < 1e-6, "equator vertex {p:?} off the XZ plane");
        }
        assert_eq!(sphere.validate(), Ok(()));
    }

    #[test]
    fn test_sphere_indices_in_bounds() {
        let sphere = create_sphere(1.0, 7, 5).unwrap();
        let count = sphere.vertex_count() as u32;
        assert!(sphere.triangles.iter().flatten().all(|&i| i < count));
        assert_eq!(sphere.validate(), Ok(()));
    }

    #[test]
    fn test_sphere_rejects_invalid_parameters() {
        assert!(matches!(
            create_sphere(1.0, 2, 4),
            Err(GeometryError::InvalidParameter { parameter: "longitude_split_count", .. })
        ));
        assert!(matches!(
            create_sphere(-1.0, 8, 4),
            Err(GeometryError::InvalidParameter { parameter: "radius", .. })
        ));
        assert!(create_sphere(0.0, 8, 4).is_err());
    }

    #[test]
    fn test_sphere_is_deterministic() {
        assert_eq!(create_sphere(0.1, 10, 10).unwrap(), create_sphere(0.1, 10, 10).unwrap());
    }
}
