/// Shader locations shared by the particle mesh pipeline.
/// Instance attributes continue after the mesh attributes.
pub enum VertexDataLocation {
    Position = 0,
    Normal = 1,
    TexCoords = 2,
    ModelMatrix0 = 3,
    ModelMatrix1 = 4,
    ModelMatrix2 = 5,
    ModelMatrix3 = 6,
    Color = 7,
}

/// Shader locations of the debug line pipeline
pub enum LineDataLocation {
    Position = 0,
    Color = 1,
}

pub trait ShaderVertexData {
    type RawType;
    fn to_raw(&self) -> Self::RawType;

    fn desc() -> wgpu::VertexBufferLayout<'static>;
}
