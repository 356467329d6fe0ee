//! Line list geometry for the debug overlay: container outline and the
//! sparse grid blocks.

use cgmath::Vector2;

use crate::{
    sparse_grid::SparseGrid,
    vertex_data::{LineDataLocation, ShaderVertexData},
};

pub const OUTLINE_GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const GRID_GRAY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub start: Vector2<f32>,
    pub end: Vector2<f32>,
    pub color: [f32; 4],
}

impl DebugLine {
    pub fn new(start: Vector2<f32>, end: Vector2<f32>, color: [f32; 4]) -> Self {
        Self { start, end, color }
    }
}

/// Square outline of side `subgrid_length * cell_size` around each block
/// origin. Four lines per block, blocks in key order.
pub fn grid_outline(grid: &SparseGrid, cell_size: f32) -> Vec<DebugLine> {
    let subgrid_length = grid.subgrid_length();
    let half = subgrid_length as f32 * cell_size * 0.5;

    let mut lines = Vec::with_capacity(grid.len() * 4);
    for key in grid.sorted_keys() {
        let center = key.origin(subgrid_length);
        let top_left = Vector2::new(center.x - half, center.y + half);
        let top_right = Vector2::new(center.x + half, center.y + half);
        let bottom_left = Vector2::new(center.x - half, center.y - half);
        let bottom_right = Vector2::new(center.x + half, center.y - half);

        lines.extend_from_slice(&[
            DebugLine::new(top_left, top_right, GRID_GRAY),
            DebugLine::new(bottom_left, bottom_right, GRID_GRAY),
            DebugLine::new(top_left, bottom_left, GRID_GRAY),
            DebugLine::new(top_right, bottom_right, GRID_GRAY),
        ]);
    }
    lines
}

/// Two vertices per line, ready for a `LineList` topology.
pub fn lines_to_vertex_data(lines: &[DebugLine]) -> Vec<LineVertexRaw> {
    lines
        .iter()
        .flat_map(|line| {
            [
                LineVertex {
                    position: line.start,
                    color: line.color,
                }
                .to_raw(),
                LineVertex {
                    position: line.end,
                    color: line.color,
                }
                .to_raw(),
            ]
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct LineVertex {
    pub position: Vector2<f32>,
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertexRaw {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl ShaderVertexData for LineVertex {
    type RawType = LineVertexRaw;
    fn to_raw(&self) -> LineVertexRaw {
        LineVertexRaw {
            position: self.position.into(),
            color: self.color,
        }
    }

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<LineVertexRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: LineDataLocation::Position as u32,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: LineDataLocation::Color as u32,
                },
            ],
        }
    }
}
