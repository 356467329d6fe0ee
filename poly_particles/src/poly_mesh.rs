//! Procedural regular polygon used as the particle sprite mesh.
//!
//! Vertices sit on a circle in the z = 0 plane, starting at the top
//! (0, radius) and going clockwise. The polygon is triangulated as a fan
//! around vertex 0.

use std::f32::consts::PI;

use cgmath::{Vector2, Vector3};
use tracing::debug;

use crate::{
    error::{require_positive, GeometryError},
    vertex_data::{ShaderVertexData, VertexDataLocation},
};

pub const MIN_SIDES: usize = 3;
/// Keeps `3 * (sides - 2)` indices within `u32`
pub const MAX_SIDES: usize = (u32::MAX / 3) as usize + 2;

#[derive(Debug, Clone, PartialEq)]
pub struct PolyMesh {
    pub vertices: Vec<Vector3<f32>>,
    /// Flat list of vertex index triples
    pub triangles: Vec<u32>,
    pub normals: Vec<Vector3<f32>>,
    pub uvs: Vec<Vector2<f32>>,
}

#[derive(Debug, Clone, Copy)]
pub struct PolygonMeshBuilder {
    pub radius: f32,
    pub sides: usize,
}

impl PolygonMeshBuilder {
    pub fn new(radius: f32, sides: usize) -> Self {
        Self { radius, sides }
    }

    pub fn build(&self) -> Result<PolyMesh, GeometryError> {
        let radius = require_positive("radius", self.radius)?;
        let n = self.sides;
        if n < MIN_SIDES {
            return Err(GeometryError::invalid(
                "sides",
                format!("a polygon needs at least {MIN_SIDES} sides, got {n}"),
            ));
        }
        if n > MAX_SIDES {
            return Err(GeometryError::invalid(
                "sides",
                format!("{n} sides exceed the u32 index range, max is {MAX_SIDES}"),
            ));
        }

        let vertices = (0..n)
            .map(|i| {
                let angle = 2.0 * PI * i as f32 / n as f32;
                Vector3::new(radius * angle.sin(), radius * angle.cos(), 0.0)
            })
            .collect::<Vec<_>>();

        let mut triangles = Vec::with_capacity(3 * (n - 2));
        for i in 0..(n - 2) as u32 {
            triangles.extend_from_slice(&[0, i + 1, i + 2]);
        }

        // facing the camera, i.e. -z
        let normals = vec![-Vector3::unit_z(); n];

        let uvs = vertices
            .iter()
            .map(|v| Vector2::new(v.x / (2.0 * radius) + 0.5, v.y / (2.0 * radius) + 0.5))
            .collect::<Vec<_>>();

        debug!(
            "built polygon mesh: radius={}, vertices={}, triangles={}",
            radius,
            vertices.len(),
            triangles.len() / 3
        );

        Ok(PolyMesh {
            vertices,
            triangles,
            normals,
            uvs,
        })
    }
}

/// Shorthand for `PolygonMeshBuilder::new(radius, sides).build()`.
pub fn build_polygon_mesh(radius: f32, sides: usize) -> Result<PolyMesh, GeometryError> {
    PolygonMeshBuilder::new(radius, sides).build()
}

impl PolyMesh {
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn index_count(&self) -> u32 {
        self.triangles.len() as u32
    }

    pub fn to_vertex_data(&self) -> Vec<MeshVertexRaw> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), tex_coords)| {
                MeshVertex {
                    position: *position,
                    normal: *normal,
                    tex_coords: *tex_coords,
                }
                .to_raw()
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MeshVertex {
    pub position: Vector3<f32>,
    pub normal: Vector3<f32>,
    pub tex_coords: Vector2<f32>,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertexRaw {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl ShaderVertexData for MeshVertex {
    type RawType = MeshVertexRaw;
    fn to_raw(&self) -> MeshVertexRaw {
        MeshVertexRaw {
            position: self.position.into(),
            normal: self.normal.into(),
            tex_coords: self.tex_coords.into(),
        }
    }

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<MeshVertexRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: VertexDataLocation::Position as u32,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: VertexDataLocation::Normal as u32,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: VertexDataLocation::TexCoords as u32,
                },
            ],
        }
    }
}
