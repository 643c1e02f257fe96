/// Hearth diorama runner
/// Simulates the diorama's particle effects headlessly and reports how the
/// populations evolve. Pass a `.toml` or `.json` scene file to override the
/// built-in fire and tree-lights layout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use hearth_particles::particles::{point_multiplier, ParticleAttributes, RenderSink};
use hearth_particles::DioramaConfig;

/// Counts what would have been uploaded to the GPU
#[derive(Default)]
struct UploadCounter {
    particles: usize,
    bytes: usize,
}

impl RenderSink for UploadCounter {
    fn submit(&mut self, _system: &str, attributes: &ParticleAttributes) {
        self.particles += attributes.len();
        self.bytes += attributes.position_bytes().len()
            + attributes.size_bytes().len()
            + attributes.color_bytes().len()
            + attributes.angle_bytes().len();
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => DioramaConfig::load(&path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => DioramaConfig::default(),
    };

    let mut effects = config.build_effects().context("building effects")?;
    log::info!(
        "Simulating {} effects for {} frames at {}s (point multiplier {:.1})",
        effects.len(),
        config.frames,
        config.frame_dt,
        point_multiplier(config.viewport_height),
    );

    let frames_per_report = ((1.0 / config.frame_dt).round() as u32).max(1);
    let mut sink = UploadCounter::default();

    for frame in 1..=config.frames {
        let update = effects.update_and_submit(config.frame_dt, &config.viewpoint, &mut sink);

        if frame % frames_per_report == 0 || frame == config.frames {
            let per_effect: Vec<String> = effects
                .iter()
                .zip(&update.effects)
                .map(|(system, result)| format!("{}={}", system.name(), result.live))
                .collect();
            log::info!(
                "t={:.2}s live={} [{}]",
                frame as f32 * config.frame_dt,
                update.total_live,
                per_effect.join(", "),
            );
        }
    }

    for system in effects.iter() {
        let stats = system.stats();
        log::info!(
            "{}: spawned {} retired {} dropped {} over {} ticks",
            system.name(),
            stats.total_spawned,
            stats.total_retired,
            stats.dropped_by_limit,
            stats.ticks,
        );
    }
    log::info!(
        "Submitted {} particle snapshots, {} bytes",
        sink.particles,
        sink.bytes
    );

    Ok(())
}
