//! hyperslice - sweep a hyperplane through a scene of 4D meshes
//!
//! Loads the configuration and a scene, slices every mesh at each value of
//! the configured sweep and logs the size of each cross-section.

use std::process::ExitCode;

use hyperslice::config::AppConfig;
use hyperslice::scene::{Scene, SceneBuilder, SceneValidator};
use hyperslice_core::{slice_all_with, Vec4};

fn main() -> ExitCode {
    // Logging is configured from the config, so load it first and report later
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting hyperslice");

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // A path on the command line wins over the configured one
    let cli_path = std::env::args().nth(1);
    let scene = match cli_path.as_deref().or(config.scene.path()) {
        Some(path) => {
            log::info!("Loading scene from '{}'", path);
            Scene::load(path)?
        }
        None => default_scene(),
    };

    for error in SceneValidator::validate(&scene) {
        log::warn!("Scene '{}': {}", scene.name, error);
    }

    let meshes = scene.build_meshes();
    log::info!("Loaded scene '{}' with {} meshes", scene.name, meshes.len());
    if let Some((lo, hi)) = scene.w_range() {
        log::info!("Scene spans w in [{}, {}]", lo, hi);
    }

    let options = config.slice.options();
    for value in config.slice.values() {
        let sections = slice_all_with(&meshes, value, &options)?;
        let total: usize = sections.iter().map(|s| s.triangle_count()).sum();
        log::info!("w = {:+.4}: {} triangles", value, total);

        for (index, (template, section)) in scene.meshes.iter().zip(&sections).enumerate() {
            log::debug!(
                "  {}: {} triangles, area {:.4}",
                template.label(index),
                section.triangle_count(),
                section.area()
            );
        }
    }

    Ok(())
}

/// A single tesseract centered at the origin
fn default_scene() -> Scene {
    SceneBuilder::new("Default Tesseract")
        .add_tesseract(Vec4::ZERO, 2.0, "tesseract")
        .build()
}
