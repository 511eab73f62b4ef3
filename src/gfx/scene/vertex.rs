//! # Vertex Data Structures
//!
//! Interleaved, GPU-compatible vertex format for the generated surfaces and
//! the attribute layout that tells a pipeline where each stream lives.

use std::mem::{offset_of, size_of};

use thiserror::Error;
use wgpu::VertexFormat::{Float32x2, Float32x3};

use crate::gfx::geometry::MeshData;

/// A vertex carrying the full tangent frame of a parametric surface.
///
/// # Memory Layout
///
/// `#[repr(C)]` with only `f32` fields, so a slice of vertices can be cast to
/// bytes and copied straight into a vertex buffer.
///
/// # Examples
///
/// ```
/// use tessella::gfx::geometry::create_quad;
///
/// let quad = create_quad(1.0, 1.0, 0, 0).unwrap();
/// let vertices = quad.to_vertices();
/// assert_eq!(vertices[3].position, [1.0, 1.0, 0.0]);
/// assert_eq!(vertices[3].normal, [0.0, 0.0, 1.0]);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
    pub tangent: [f32; 3],
    pub binormal: [f32; 3],
}

impl MeshData {
    /// Interleaves the five vertex streams into one [`Vertex`] per index.
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.tex_coords)
            .zip(&self.tangents)
            .zip(&self.binormals)
            .map(|((((&position, &normal), &tex_coord), &tangent), &binormal)| Vertex {
                position,
                normal,
                tex_coord,
                tangent,
                binormal,
            })
            .collect()
    }
}

/// Shader input locations for each vertex stream.
///
/// The defaults match the classic `vertices, normals, texcoords, tangents,
/// binormals` binding order; shaders with a different convention supply
/// their own values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeBindings {
    pub position: u32,
    pub normal: u32,
    pub tex_coord: u32,
    pub tangent: u32,
    pub binormal: u32,
}

impl Default for AttributeBindings {
    fn default() -> Self {
        Self {
            position: 0,
            normal: 1,
            tex_coord: 2,
            tangent: 3,
            binormal: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("shader location {location} is bound to both `{first}` and `{second}`")]
    DuplicateLocation {
        location: u32,
        first: &'static str,
        second: &'static str,
    },
}

/// Owned attribute list for [`Vertex`], built from caller-supplied bindings.
#[derive(Debug, Clone)]
pub struct VertexLayout {
    attributes: [wgpu::VertexAttribute; 5],
}

impl VertexLayout {
    pub fn new(bindings: &AttributeBindings) -> Result<Self, BindingError> {
        let named = [
            ("position", bindings.position),
            ("normal", bindings.normal),
            ("tex_coord", bindings.tex_coord),
            ("tangent", bindings.tangent),
            ("binormal", bindings.binormal),
        ];
        for (i, &(first, location)) in named.iter().enumerate() {
            if let Some(&(second, _)) = named[i + 1..].iter().find(|&&(_, other)| other == location) {
                return Err(BindingError::DuplicateLocation {
                    location,
                    first,
                    second,
                });
            }
        }

        let attribute = |offset: usize, shader_location: u32, format| wgpu::VertexAttribute {
            offset: offset as wgpu::BufferAddress,
            shader_location,
            format,
        };

        Ok(Self {
            attributes: [
                attribute(offset_of!(Vertex, position), bindings.position, Float32x3),
                attribute(offset_of!(Vertex, normal), bindings.normal, Float32x3),
                attribute(offset_of!(Vertex, tex_coord), bindings.tex_coord, Float32x2),
                attribute(offset_of!(Vertex, tangent), bindings.tangent, Float32x3),
                attribute(offset_of!(Vertex, binormal), bindings.binormal, Float32x3),
            ],
        })
    }

    pub fn attributes(&self) -> &[wgpu::VertexAttribute] {
        &self.attributes
    }

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// ```
    /// use tessella::gfx::scene::vertex::{AttributeBindings, VertexLayout};
    ///
    /// let layout = VertexLayout::new(&AttributeBindings::default()).unwrap();
    /// let buffer_layout = layout.buffer_layout();
    /// assert_eq!(buffer_layout.array_stride, 56);
    /// ```
    pub fn buffer_layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }
}
