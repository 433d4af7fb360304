//! Contact probe
//!
//! Loads a scene of spheres, planes and boxes and logs the narrow-phase
//! result for each pair.
//!
//! ```text
//! contact_probe <scene.ron|scene.toml> [--config narrow_phase.toml]
//! ```

mod scene;

use std::path::PathBuf;

use clap::Parser;
use narrow_phase::config::{Config, ConfigError};
use narrow_phase::core::config::NarrowPhaseConfig;
use narrow_phase::foundation::logging;
use narrow_phase::physics::collision::ShapeError;
use narrow_phase::physics::NarrowPhase;

use scene::ProbeScene;

/// Probe failures
#[derive(thiserror::Error, Debug)]
enum ProbeError {
    /// Scene or config file could not be loaded
    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    /// A shape in the scene breaks its invariants
    #[error("Shape '{name}' is invalid: {source}")]
    InvalidShape {
        name: String,
        #[source]
        source: ShapeError,
    },
}

/// Report narrow-phase intersections and contacts for a scene of shapes
#[derive(Parser, Debug)]
#[command(name = "contact_probe", version)]
struct Arguments {
    /// Scene file (.ron or .toml)
    scene_path: PathBuf,

    /// Narrow-phase configuration file (.ron or .toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(arguments: &Arguments) -> Result<(), ProbeError> {
    let config = match &arguments.config {
        Some(path) => NarrowPhaseConfig::load_from_file(path)
            .map_err(|source| ProbeError::Load { path: path.clone(), source })?,
        None => NarrowPhaseConfig::default(),
    };
    log::debug!("Narrow-phase configuration: {:?}", config);

    let scene = ProbeScene::load_from_file(&arguments.scene_path)
        .map_err(|source| ProbeError::Load { path: arguments.scene_path.clone(), source })?;
    log::info!("Loaded {} shapes from {}", scene.shapes.len(), arguments.scene_path.display());

    let shapes: Vec<_> = scene.shapes.iter().map(|entry| entry.shape.to_shape()).collect();
    let narrow_phase = NarrowPhase::new(config);

    for (a, b) in scene.resolved_pairs() {
        let (name_a, name_b) = (&scene.shapes[a].name, &scene.shapes[b].name);
        let report = narrow_phase.evaluate(&shapes[a], &shapes[b]).map_err(|source| {
            let name = if shapes[a].validate().is_err() { name_a } else { name_b };
            ProbeError::InvalidShape { name: name.clone(), source }
        })?;

        log::info!(
            "{} vs {}: intersects={} touching={} contacts={}",
            name_a,
            name_b,
            report.intersects,
            report.touching,
            report.contacts.len()
        );
        for contact in &report.contacts {
            log::info!(
                "    position=({:.3}, {:.3}, {:.3}) normal=({:.3}, {:.3}, {:.3}) depth={:.4}",
                contact.position.x,
                contact.position.y,
                contact.position.z,
                contact.normal.x,
                contact.normal.y,
                contact.normal.z,
                contact.depth
            );
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default("info");

    let arguments = Arguments::parse();
    run(&arguments)?;

    log::info!("Probe finished");
    Ok(())
}
