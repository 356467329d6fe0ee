use anyhow::Context;
use poly_particles::{lines_to_vertex_data, ParticleScene, SceneConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut config = SceneConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        let seed = arg
            .parse::<u64>()
            .with_context(|| format!("seed must be an unsigned integer, got {arg:?}"))?;
        config.particles.seed = Some(seed);
    }

    let scene = ParticleScene::new(config).context("failed to set up particle scene")?;

    let batch = scene.draw_batch();
    info!(
        "draw batch: {} vertices ({} bytes), {} indices, {} instances ({} bytes)",
        batch.vertices.len(),
        bytemuck::cast_slice::<_, u8>(batch.vertices).len(),
        batch.indices.len(),
        batch.instance_count,
        bytemuck::cast_slice::<_, u8>(batch.instances).len(),
    );

    let lines = lines_to_vertex_data(&scene.debug_lines());
    info!("debug overlay: {} line vertices", lines.len());

    Ok(())
}
