use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, warn};

use crate::{
    container::Container,
    error::GeometryError,
    vertex_data::{ShaderVertexData, VertexDataLocation},
};

pub const PARTICLE_MAX_SIZE: usize = 1048576; // 2^20

pub const DEFAULT_NUM_PARTICLES: usize = 500;
pub const DEFAULT_PARTICLE_RADIUS: f32 = 0.5;
pub const DEFAULT_PARTICLE_SIDES: usize = 12;

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Fixed for the lifetime of a [`ParticleState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub num_particles: usize,
    pub particle_radius: f32,
    /// Number of polygon sides of the particle mesh
    pub particle_sides: usize,
    /// `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            num_particles: DEFAULT_NUM_PARTICLES,
            particle_radius: DEFAULT_PARTICLE_RADIUS,
            particle_sides: DEFAULT_PARTICLE_SIDES,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector2<f32>,
    pub color: Vector4<f32>,
}

impl Particle {
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::new(self.position.x, self.position.y, 0.0))
    }
}

/// Particles are placed once and never move.
#[derive(Debug, Clone)]
pub struct ParticleState {
    particle_list: Vec<Particle>,
    instance_data: Vec<InstanceRaw>,
}

impl ParticleState {
    pub fn spawn(config: &ParticleConfig, container: &Container) -> Result<Self, GeometryError> {
        container.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let size = if config.num_particles > PARTICLE_MAX_SIZE {
            warn!(
                "{} particles requested, clamping to {}",
                config.num_particles, PARTICLE_MAX_SIZE
            );
            PARTICLE_MAX_SIZE
        } else {
            config.num_particles
        };

        let (red, blue) = (Vector4::from(RED), Vector4::from(BLUE));
        let (min, max) = (container.min(), container.max());
        let particle_list = (0..size)
            .map(|_| {
                let position = Vector2::new(
                    rng.gen_range(min.x..=max.x),
                    rng.gen_range(min.y..=max.y),
                );
                let t = rng.gen::<f32>();
                Particle {
                    position,
                    color: red + (blue - red) * t,
                }
            })
            .collect::<Vec<_>>();

        let instance_data = particle_list
            .iter()
            .map(Particle::to_raw)
            .collect::<Vec<_>>();

        debug!(
            "spawned {} particles in [{:?}, {:?}]",
            particle_list.len(),
            min,
            max
        );

        Ok(Self {
            particle_list,
            instance_data,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particle_list
    }

    pub fn instance_data(&self) -> &[InstanceRaw] {
        &self.instance_data
    }

    pub fn len(&self) -> usize {
        self.particle_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particle_list.is_empty()
    }
}

/// Per-instance data of the instanced particle draw
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl ShaderVertexData for Particle {
    type RawType = InstanceRaw;
    fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: self.model_matrix().into(),
            color: self.color.into(),
        }
    }

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // A mat4 takes up 4 vertex slots, one per column
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: VertexDataLocation::ModelMatrix0 as u32,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: VertexDataLocation::ModelMatrix1 as u32,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: VertexDataLocation::ModelMatrix2 as u32,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: VertexDataLocation::ModelMatrix3 as u32,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: VertexDataLocation::Color as u32,
                },
            ],
        }
    }
}
