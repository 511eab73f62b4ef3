//! Invariant checks for generated meshes.

use cgmath::{InnerSpace, Vector3};

use super::frame::to_vector;
use super::{GeometryError, MeshData};

/// Tolerance used when comparing stored normals with the recomputed frame.
pub const FRAME_TOLERANCE: f32 = 1e-4;

fn widen(a: [f32; 3]) -> Vector3<f64> {
    Vector3::new(f64::from(a[0]), f64::from(a[1]), f64::from(a[2]))
}

impl MeshData {
    /// Checks every structural invariant of the mesh.
    ///
    /// - all vertex streams have the same length
    /// - every index addresses an existing vertex
    /// - no triangle repeats a vertex or has (near) zero area
    /// - every normal equals `normalize(tangent × binormal)`
    /// - every triangle faces the same way as its vertex normals
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.check_stream_lengths()?;
        self.check_frames()?;
        self.check_triangles()
    }

    fn check_stream_lengths(&self) -> Result<(), GeometryError> {
        let count = self.positions.len();
        let lengths = [
            ("tangents", self.tangents.len()),
            ("binormals", self.binormals.len()),
            ("normals", self.normals.len()),
            ("tex_coords", self.tex_coords.len()),
        ];
        for (name, len) in lengths {
            if len != count {
                return Err(GeometryError::InvariantViolation(format!(
                    "{name} has {len} entries but there are {count} positions"
                )));
            }
        }
        Ok(())
    }

    fn check_frames(&self) -> Result<(), GeometryError> {
        for (i, ((t, b), n)) in self
            .tangents
            .iter()
            .zip(&self.binormals)
            .zip(&self.normals)
            .enumerate()
        {
            let cross = to_vector(*t).cross(to_vector(*b));
            if cross.magnitude2() <= f32::EPSILON {
                return Err(GeometryError::InvariantViolation(format!(
                    "vertex {i} has parallel tangent and binormal"
                )));
            }
            let expected = cross.normalize();
            if (expected - to_vector(*n)).magnitude() > FRAME_TOLERANCE {
                return Err(GeometryError::InvariantViolation(format!(
                    "vertex {i} normal {n:?} is not normalize(tangent x binormal) = {:?}",
                    [expected.x, expected.y, expected.z]
                )));
            }
        }
        Ok(())
    }

    fn check_triangles(&self) -> Result<(), GeometryError> {
        let count = self.positions.len();
        for (i, triangle) in self.triangles.iter().enumerate() {
            if let Some(&index) = triangle.iter().find(|&&index| index as usize >= count) {
                return Err(GeometryError::InvariantViolation(format!(
                    "triangle {i} references vertex {index} but there are only {count} vertices"
                )));
            }

            let [a, b, c] = *triangle;
            if a == b || b == c || a == c {
                return Err(GeometryError::InvariantViolation(format!(
                    "triangle {i} repeats a vertex: {triangle:?}"
                )));
            }

            // f64 keeps the area test meaningful for extents near the ends of
            // the accepted range, where f32 squares under- or overflow
            let face = self.face_normal(triangle);
            let longest_edge = self.longest_edge_squared(triangle);
            if face.magnitude() <= f64::EPSILON * longest_edge {
                return Err(GeometryError::InvariantViolation(format!(
                    "triangle {i} {triangle:?} is degenerate"
                )));
            }

            let vertex_normals = triangle
                .iter()
                .map(|&index| widen(self.normals[index as usize]))
                .fold(Vector3::new(0.0, 0.0, 0.0), |sum, normal| sum + normal);
            if face.dot(vertex_normals) <= 0.0 {
                return Err(GeometryError::InvariantViolation(format!(
                    "triangle {i} {triangle:?} is wound against its vertex normals"
                )));
            }
        }
        Ok(())
    }

    /// Unnormalised `(b - a) × (c - a)`, computed in double precision.
    pub(crate) fn face_normal(&self, triangle: &[u32; 3]) -> Vector3<f64> {
        let [a, b, c] = triangle.map(|index| widen(self.positions[index as usize]));
        (b - a).cross(c - a)
    }

    fn longest_edge_squared(&self, triangle: &[u32; 3]) -> f64 {
        let [a, b, c] = triangle.map(|index| widen(self.positions[index as usize]));
        (b - a)
            .magnitude2()
            .max((c - b).magnitude2())
            .max((a - c).magnitude2())
    }
}
