//! # Scene Resources Module
//!
//! GPU-facing side of the generated geometry: the interleaved vertex format,
//! the caller-configurable attribute bindings and the buffer upload step.
//!
//! ## Key Components
//!
//! - [`Vertex`] - Interleaved vertex with position, normal, texture coordinates and tangent frame
//! - [`VertexLayout`] - `wgpu` attribute layout built from [`AttributeBindings`]
//! - [`GpuMesh`] - Vertex and index buffers created from a [`MeshData`](crate::gfx::geometry::MeshData)
//!
//! ## Usage
//!
//! ```no_run
//! use tessella::gfx::geometry::create_sphere;
//! use tessella::gfx::scene::{AttributeBindings, GpuMesh, VertexLayout};
//!
//! # fn upload(device: &wgpu::Device) -> anyhow::Result<()> {
//! let sphere = create_sphere(1.0, 32, 16)?;
//! let layout = VertexLayout::new(&AttributeBindings::default())?;
//! let gpu_sphere = GpuMesh::upload(device, &sphere, "Sphere");
//! // layout.buffer_layout() goes into the render pipeline descriptor
//! # let _ = (layout, gpu_sphere);
//! # Ok(())
//! # }
//! ```

pub mod mesh;
pub mod vertex;

// Re-export main types
pub use mesh::GpuMesh;
pub use vertex::{AttributeBindings, BindingError, Vertex, VertexLayout};
