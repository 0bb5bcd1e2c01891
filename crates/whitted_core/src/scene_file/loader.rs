//! High-level scene loading from disk.

use std::path::Path;

use thiserror::Error;

use crate::scene::Scene;
use crate::scene_file::parser::{parse_scene, parse_scene_json, ParseError};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene file.
///
/// Files with a `.json` extension are read as JSON; everything else is read
/// as the line-based text format.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::info!("Parsing {}...", path.display());

    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let scene = if is_json {
        parse_scene_json(&content)?
    } else {
        parse_scene(&content)?
    };

    log::info!(
        "Loaded {} spheres, {} lights at {}x{}",
        scene.spheres.len(),
        scene.lights.len(),
        scene.width,
        scene.height
    );

    Ok(scene)
}
