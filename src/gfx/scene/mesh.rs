//! GPU upload of generated meshes.
//!
//! Generation never touches the GPU; this is the separate step that turns a
//! [`MeshData`] into vertex and index buffers on a `wgpu` device.

use wgpu::util::DeviceExt;
use wgpu::Device;

use crate::gfx::geometry::MeshData;

/// Vertex and index buffers for one uploaded mesh.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub index_count: u32,
}

impl GpuMesh {
    /// Interleaves `mesh` and copies it into freshly created buffers.
    ///
    /// The buffers use the [`Vertex`](super::vertex::Vertex) layout and
    /// `u32` indices.
    pub fn upload(device: &Device, mesh: &MeshData, label: &str) -> Self {
        let vertices = mesh.to_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(mesh.index_data()),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded {label}: {} vertices ({} bytes), {} indices",
            vertices.len(),
            vertex_buffer.size(),
            mesh.index_count()
        );

        Self {
            vertex_buffer,
            index_buffer,
            vertex_count: vertices.len() as u32,
            index_count: mesh.index_count() as u32,
        }
    }

    /// Index format to pass to `RenderPass::set_index_buffer`.
    pub fn index_format(&self) -> wgpu::IndexFormat {
        wgpu::IndexFormat::Uint32
    }

    /// Binds both buffers and issues one indexed draw.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), self.index_format());
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
