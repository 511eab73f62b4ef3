//! # Primitive Surface Generators
//!
//! One generator per parametric surface. Every generator validates its
//! parameters first and returns a fresh [`MeshData`](super::MeshData) that
//! the caller owns outright.

mod circle_ring;
mod quad;
mod sphere;
mod torus;

pub use circle_ring::create_circle_ring;
pub use quad::create_quad;
pub use sphere::create_sphere;
pub use torus::create_torus;
