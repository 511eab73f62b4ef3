//! # Parametric Surface Generation
//!
//! This module turns a handful of shape parameters into triangle meshes with a
//! full tangent frame per vertex, ready to be interleaved and uploaded.
//!
//! ## Supported Surfaces
//!
//! - **Quad**: Flat rectangle in the XY plane with optional subdivisions
//! - **Sphere**: UV sphere with per-wedge pole vertices and a duplicated seam
//! - **Torus**: Closed tube with duplicated seams on both parametric axes
//! - **Circle ring**: Flat annulus, periodic around its centre
//!
//! ## Usage
//!
//! ```rust
//! use tessella::gfx::geometry::{create_quad, create_sphere, create_torus, create_circle_ring};
//!
//! let quad = create_quad(10.0, 10.0, 0, 0).unwrap();
//! assert_eq!(quad.vertex_count(), 4);
//!
//! let sphere = create_sphere(1.0, 32, 16).unwrap();
//! let torus = create_torus(2.0, 0.5, 48, 16).unwrap();
//! let ring = create_circle_ring(3.0, 1.0, 64, 4).unwrap();
//! # let _ = (sphere, torus, ring);
//! ```

pub mod error;
pub mod frame;
pub mod params;
pub mod primitives;
pub mod validate;

pub use error::{GeometryError, MAX_EXTENT, MAX_SPLITS, MIN_EXTENT};
pub use frame::Frame;
pub use params::{CircleRingParams, QuadParams, Shape, SphereParams, TorusParams};
pub use primitives::*;

use frame::to_array;

/// Generated surface as parallel per-vertex streams plus a triangle list.
///
/// All five vertex streams have the same length and are indexed by the
/// values stored in `triangles`. Triangles are wound counter-clockwise when
/// seen from the side the `normals` point to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Unit derivative along the first surface parameter
    pub tangents: Vec<[f32; 3]>,
    /// Unit derivative along the second surface parameter
    pub binormals: Vec<[f32; 3]>,
    /// `normalize(tangent × binormal)`
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Index triples into the vertex streams
    pub triangles: Vec<[u32; 3]>,
}

impl MeshData {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates every stream up front for a known vertex and triangle count.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            tangents: Vec::with_capacity(vertices),
            binormals: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            tex_coords: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of entries the flattened index buffer will hold
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends one vertex to all five streams and returns its index.
    pub fn push_vertex(
        &mut self,
        position: cgmath::Vector3<f32>,
        frame: Frame,
        tex_coord: [f32; 2],
    ) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(to_array(position));
        self.tangents.push(to_array(frame.tangent));
        self.binormals.push(to_array(frame.binormal));
        self.normals.push(to_array(frame.normal));
        self.tex_coords.push(tex_coord);
        index
    }

    /// Flattened `u32` index buffer, three entries per triangle.
    pub fn index_data(&self) -> &[u32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Runs the invariant checks and logs the outcome under `shape`.
    ///
    /// Only done in debug builds; release builds trust the index arithmetic.
    pub(crate) fn finish(self, shape: &'static str) -> Result<Self, GeometryError> {
        if cfg!(debug_assertions) {
            self.validate()?;
        }
        log::debug!(
            "generated {shape}: {} vertices, {} triangles",
            self.vertex_count(),
            self.triangle_count()
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_push_vertex_keeps_streams_aligned() {
        let mut mesh = MeshData::with_capacity(2, 0);
        let frame = Frame::from_derivatives(Vector3::unit_x(), Vector3::unit_y());
        assert_eq!(mesh.push_vertex(Vector3::new(1.0, 2.0, 3.0), frame, [0.0, 0.5]), 0);
        assert_eq!(mesh.push_vertex(Vector3::new(4.0, 5.0, 6.0), frame, [1.0, 0.5]), 1);

        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.tangents.len(), 2);
        assert_eq!(mesh.binormals.len(), 2);
        assert_eq!(mesh.normals[1], [0.0, 0.0, 1.0]);
        assert_eq!(mesh.tex_coords[1], [1.0, 0.5]);
    }

    #[test]
    fn test_index_data_is_flat() {
        let mut mesh = MeshData::new();
        mesh.triangles = vec![[0, 1, 2], [2, 1, 3]];
        assert_eq!(mesh.index_data(), &[0, 1, 2, 2, 1, 3]);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
    }
}
