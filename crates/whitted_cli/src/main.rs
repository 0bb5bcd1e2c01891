use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use whitted_core::{load_scene, Scene};
use whitted_renderer::{RenderConfig, Raytracer, MAX_DEPTH};

/// Render a scene of spheres and point lights with recursive ray tracing.
#[derive(Parser, Debug)]
#[command(name = "whitted", version, about)]
struct Cli {
    /// Scene file (line-based text, or JSON with a .json extension)
    scene: PathBuf,

    /// Output image; the format follows the extension. Defaults to the
    /// scene's OUTPUT entry, then to the scene name with a .ppm extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum mirror reflection depth
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: u32,
}

/// Pick where the image goes. Scene-relative names resolve next to the scene file.
fn output_path(requested: Option<PathBuf>, scene_path: &Path, scene: &Scene) -> PathBuf {
    if let Some(path) = requested {
        return path;
    }

    match &scene.output {
        Some(name) => scene_path
            .parent()
            .map(|dir| dir.join(name))
            .unwrap_or_else(|| PathBuf::from(name)),
        None => scene_path.with_extension("ppm"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let start = Instant::now();
    let scene = load_scene(&cli.scene)
        .with_context(|| format!("Failed to load scene {}", cli.scene.display()))?;
    log::info!("Scene loaded in {:.3} seconds", start.elapsed().as_secs_f64());

    let config = RenderConfig {
        max_depth: cli.max_depth,
    };
    let mut raytracer = Raytracer::new(&scene, config).context("Scene cannot be rendered")?;
    let image = raytracer.render();

    let output = output_path(cli.output, &cli.scene, &scene);
    image
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("Wrote {}", output.display());

    Ok(())
}
