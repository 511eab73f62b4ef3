//! # Graphics Module
//!
//! This module contains the geometry side of the Tessella crate: parametric
//! surface generation on the CPU and the upload of the results to the GPU.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Pure generators returning [`MeshData`](geometry::MeshData)
//!   or a typed [`GeometryError`](geometry::GeometryError)
//! - **Scene Resources** ([`scene`]) - Interleaved vertex format, attribute bindings
//!   and `wgpu` buffer upload
//!
//! Generation and upload are separate steps: a mesh can be generated on any
//! thread, inspected, validated or discarded without a device.
//!
//! ## Usage
//!
//! ```rust
//! use tessella::gfx::geometry::create_torus;
//!
//! let torus = create_torus(2.0, 0.5, 32, 12).unwrap();
//! let vertices = torus.to_vertices();
//! assert_eq!(vertices.len(), 33 * 13);
//! ```

pub mod geometry;
pub mod scene;

// Re-export commonly used types
pub use geometry::{GeometryError, MeshData};
pub use scene::{GpuMesh, Vertex};
