// src/lib.rs
//! Tessella
//!
//! Parametric surface tessellation for real-time rendering, with the small
//! interpolation and orbital-transform helpers that drive the generated
//! meshes around a scene.

pub mod animation;
pub mod gfx;
pub mod prelude;
pub mod simulation;

// Re-export main types for convenience
pub use gfx::geometry::{
    create_circle_ring, create_quad, create_sphere, create_torus, GeometryError, MeshData,
};
