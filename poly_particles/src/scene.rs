use tracing::info;

use crate::{
    container::Container,
    debug_lines::{grid_outline, DebugLine},
    error::{require_positive, GeometryError},
    particles::{InstanceRaw, ParticleConfig, ParticleState},
    poly_mesh::{MeshVertexRaw, PolyMesh, PolygonMeshBuilder},
    sparse_grid::SparseGrid,
};

pub const DEFAULT_SUBGRID_LENGTH: u32 = 4;
pub const DEFAULT_CELL_SIZE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub particles: ParticleConfig,
    pub container: Container,
    /// Cells per grid block, also the block spacing in world units
    pub subgrid_length: u32,
    /// Only used to size the debug outline of a block
    pub cell_size: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particles: ParticleConfig::default(),
            container: Container::default(),
            subgrid_length: DEFAULT_SUBGRID_LENGTH,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// Everything one instanced draw call needs, borrowed from the scene.
#[derive(Debug, Clone, Copy)]
pub struct DrawBatch<'a> {
    pub vertices: &'a [MeshVertexRaw],
    pub indices: &'a [u32],
    pub instances: &'a [InstanceRaw],
    pub instance_count: u32,
}

/// Built once; every accessor afterwards is read only.
#[derive(Debug, Clone)]
pub struct ParticleScene {
    config: SceneConfig,
    mesh: PolyMesh,
    mesh_vertex_data: Vec<MeshVertexRaw>,
    particle_state: ParticleState,
    grid: SparseGrid,
}

impl ParticleScene {
    pub fn new(config: SceneConfig) -> Result<Self, GeometryError> {
        require_positive("cell_size", config.cell_size)?;

        let mesh = PolygonMeshBuilder::new(
            config.particles.particle_radius,
            config.particles.particle_sides,
        )
        .build()?;
        let mesh_vertex_data = mesh.to_vertex_data();

        let particle_state = ParticleState::spawn(&config.particles, &config.container)?;

        let grid = SparseGrid::new(config.container.bounds_size, config.subgrid_length)?;

        info!(
            "scene ready: {} particles, {}-gon mesh, {} grid blocks",
            particle_state.len(),
            mesh.vertices.len(),
            grid.len()
        );

        Ok(Self {
            config,
            mesh,
            mesh_vertex_data,
            particle_state,
            grid,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn mesh(&self) -> &PolyMesh {
        &self.mesh
    }

    pub fn particles(&self) -> &ParticleState {
        &self.particle_state
    }

    pub fn grid(&self) -> &SparseGrid {
        &self.grid
    }

    pub fn draw_batch(&self) -> DrawBatch<'_> {
        let instances = self.particle_state.instance_data();
        DrawBatch {
            vertices: &self.mesh_vertex_data,
            indices: &self.mesh.triangles,
            instances,
            instance_count: instances.len() as u32,
        }
    }

    /// Container outline followed by the grid block outlines
    pub fn debug_lines(&self) -> Vec<DebugLine> {
        let mut lines = self.config.container.outline().to_vec();
        lines.extend(grid_outline(&self.grid, self.config.cell_size));
        lines
    }
}
