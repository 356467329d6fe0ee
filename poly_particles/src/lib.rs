//! Geometry for a 2D particle scene: the polygon mesh every particle is
//! drawn with, randomly placed particle instances inside a container, and
//! a sparse block grid that the debug overlay outlines.
//!
//! Nothing here talks to a GPU. The raw vertex types are `Pod` and come with
//! `wgpu` buffer layouts so a renderer can upload them as they are.

pub mod container;
pub mod debug_lines;
pub mod error;
pub mod particles;
pub mod poly_mesh;
pub mod scene;
pub mod sparse_grid;
pub mod vertex_data;

pub use container::Container;
pub use debug_lines::{grid_outline, lines_to_vertex_data, DebugLine, LineVertexRaw};
pub use error::GeometryError;
pub use particles::{InstanceRaw, Particle, ParticleConfig, ParticleState};
pub use poly_mesh::{build_polygon_mesh, MeshVertexRaw, PolyMesh, PolygonMeshBuilder};
pub use scene::{DrawBatch, ParticleScene, SceneConfig};
pub use sparse_grid::{build_sparse_grid, Cell, CellBlock, GridKey, SparseGrid};
pub use vertex_data::ShaderVertexData;
