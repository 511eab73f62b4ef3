//! # Tangent Frames and Grid Indexing
//!
//! Shared math for the parametric generators. Every surface is sampled on a
//! `(u, v)` lattice; the tangent follows increasing `u`, the binormal follows
//! increasing `v`, and the normal is their cross product. As long as a
//! generator lays its vertices out row by row (rows along `v`, columns along
//! `u`), [`push_grid_triangles`] winds every cell so that it faces along that
//! normal.

use cgmath::{InnerSpace, Vector3};

/// Orthogonal-ish basis attached to a single vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub tangent: Vector3<f32>,
    pub binormal: Vector3<f32>,
    pub normal: Vector3<f32>,
}

impl Frame {
    /// Builds a frame from the two partial derivatives of the surface.
    ///
    /// Both derivatives must be non-zero; generators that hit a pole pass the
    /// limiting derivative instead of the vanishing one.
    pub fn from_derivatives(d_du: Vector3<f32>, d_dv: Vector3<f32>) -> Self {
        let tangent = d_du.normalize();
        let binormal = d_dv.normalize();
        let normal = tangent.cross(binormal).normalize();
        Self {
            tangent,
            binormal,
            normal,
        }
    }
}

#[inline]
pub(crate) fn to_array(v: Vector3<f32>) -> [f32; 3] {
    [v.x, v.y, v.z]
}

#[inline]
pub(crate) fn to_vector(a: [f32; 3]) -> Vector3<f32> {
    Vector3::new(a[0], a[1], a[2])
}

/// Emits two triangles for every cell of a `columns × rows` lattice whose
/// vertices start at `base` and are stored row-major with `columns + 1`
/// vertices per row.
///
/// Cell `(c, r)` with corners `a = (c, r)`, `b = (c+1, r)`, `d = (c, r+1)`,
/// `e = (c+1, r+1)` becomes `(a, b, d)` and `(b, e, d)`.
pub(crate) fn push_grid_triangles(
    triangles: &mut Vec<[u32; 3]>,
    base: u32,
    columns: u32,
    rows: u32,
) {
    let stride = columns + 1;
    for row in 0..rows {
        let row_start = base + row * stride;
        let next_row_start = row_start + stride;
        for column in 0..columns {
            let a = row_start + column;
            let b = a + 1;
            let d = next_row_start + column;
            let e = d + 1;

            triangles.push([a, b, d]);
            triangles.push([b, e, d]);
        }
    }
}

/// `count` evenly spaced parameter values covering `[0, 1]` inclusive.
///
/// The last sample is exactly `1.0`, which keeps duplicated seam vertices
/// exactly one texture period away from the first column.
pub(crate) fn unit_steps(divisions: u32) -> impl Iterator<Item = f32> {
    (0..=divisions).map(move |i| {
        if i == divisions {
            1.0
        } else {
            i as f32 / divisions as f32
        }
    })
}
