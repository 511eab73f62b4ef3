//! # Shape Parameters
//!
//! Plain configuration values for each generator. They are what a scene
//! description or a settings panel would hold on to, and each one knows how
//! to turn itself into a mesh.

use super::{create_circle_ring, create_quad, create_sphere, create_torus, GeometryError, MeshData};

/// Parameters for [`create_quad`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadParams {
    pub width: f32,
    pub height: f32,
    pub horizontal_split_count: u32,
    pub vertical_split_count: u32,
}

impl Default for QuadParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            horizontal_split_count: 0,
            vertical_split_count: 0,
        }
    }
}

impl QuadParams {
    pub fn generate(&self) -> Result<MeshData, GeometryError> {
        create_quad(
            self.width,
            self.height,
            self.horizontal_split_count,
            self.vertical_split_count,
        )
    }
}

/// Parameters for [`create_sphere`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParams {
    pub radius: f32,
    pub longitude_split_count: u32,
    pub latitude_split_count: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            longitude_split_count: 40,
            latitude_split_count: 40,
        }
    }
}

impl SphereParams {
    pub fn generate(&self) -> Result<MeshData, GeometryError> {
        create_sphere(
            self.radius,
            self.longitude_split_count,
            self.latitude_split_count,
        )
    }
}

/// Parameters for [`create_torus`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusParams {
    pub major_radius: f32,
    pub minor_radius: f32,
    pub major_split_count: u32,
    pub minor_split_count: u32,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            minor_radius: 0.25,
            major_split_count: 48,
            minor_split_count: 16,
        }
    }
}

impl TorusParams {
    pub fn generate(&self) -> Result<MeshData, GeometryError> {
        create_torus(
            self.major_radius,
            self.minor_radius,
            self.major_split_count,
            self.minor_split_count,
        )
    }
}

/// Parameters for [`create_circle_ring`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleRingParams {
    pub radius: f32,
    pub spread_length: f32,
    pub circle_split_count: u32,
    pub spread_split_count: u32,
}

impl Default for CircleRingParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            spread_length: 0.5,
            circle_split_count: 64,
            spread_split_count: 2,
        }
    }
}

impl CircleRingParams {
    pub fn generate(&self) -> Result<MeshData, GeometryError> {
        create_circle_ring(
            self.radius,
            self.spread_length,
            self.circle_split_count,
            self.spread_split_count,
        )
    }
}

/// Any of the supported surfaces together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Quad(QuadParams),
    Sphere(SphereParams),
    Torus(TorusParams),
    CircleRing(CircleRingParams),
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Quad(_) => "quad",
            Shape::Sphere(_) => "sphere",
            Shape::Torus(_) => "torus",
            Shape::CircleRing(_) => "circle ring",
        }
    }

    pub fn generate(&self) -> Result<MeshData, GeometryError> {
        match self {
            Shape::Quad(params) => params.generate(),
            Shape::Sphere(params) => params.generate(),
            Shape::Torus(params) => params.generate(),
            Shape::CircleRing(params) => params.generate(),
        }
    }
}

impl From<QuadParams> for Shape {
    fn from(params: QuadParams) -> Self {
        Shape::Quad(params)
    }
}

impl From<SphereParams> for Shape {
    fn from(params: SphereParams) -> Self {
        Shape::Sphere(params)
    }
}

impl From<TorusParams> for Shape {
    fn from(params: TorusParams) -> Self {
        Shape::Torus(params)
    }
}

impl From<CircleRingParams> for Shape {
    fn from(params: CircleRingParams) -> Self {
        Shape::CircleRing(params)
    }
}
