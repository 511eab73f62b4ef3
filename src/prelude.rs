//! # Tessella Prelude
//!
//! Commonly used types and functions in one import.
//!
//! ## Usage
//!
//! ```rust
//! use tessella::prelude::*;
//!
//! fn main() -> Result<(), GeometryError> {
//!     let shapes: Vec<Shape> = vec![
//!         SphereParams { radius: 0.25, ..Default::default() }.into(),
//!         TorusParams::default().into(),
//!     ];
//!     for shape in &shapes {
//!         let mesh = shape.generate()?;
//!         println!("{}: {} triangles", shape.name(), mesh.triangle_count());
//!     }
//!     Ok(())
//! }
//! ```

// Geometry generation
pub use crate::gfx::geometry::{
    create_circle_ring, create_quad, create_sphere, create_torus, CircleRingParams, Frame,
    GeometryError, MeshData, QuadParams, Shape, SphereParams, TorusParams,
};

// GPU-facing types
pub use crate::gfx::scene::{AttributeBindings, GpuMesh, Vertex, VertexLayout};

// Animation and simulation
pub use crate::animation::{catmull_rom, lerp, Interpolation, PathFollower};
pub use crate::simulation::{CelestialBody, OrbitConfiguration, SpinConfiguration};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Matrix4, Rad, SquareMatrix, Vector2, Vector3, Zero};
