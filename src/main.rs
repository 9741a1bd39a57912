//! Petra - animated Petersen-graph shader art
//!
//! Renders one of the two shader variants (plasma or cosmic) as a PNG
//! frame sequence. Each frame is a pure per-pixel function of elapsed
//! time, evaluated row-parallel on the CPU.

mod config;

use std::time::Instant;

use anyhow::{Context, Result};

use config::{RenderConfig, Variant};
use petra_render::{CosmicGraph, FragmentShader, FrameContext, Framebuffer, PlasmaGraph};

fn main() -> Result<()> {
    env_logger::init();

    let config = RenderConfig::load(std::env::args().skip(1))?;
    log::debug!("config: {config:?}");

    let shader: Box<dyn FragmentShader> = match config.variant {
        Variant::Plasma => Box::new(PlasmaGraph {
            scale: config.scale,
            ..PlasmaGraph::default()
        }),
        Variant::Cosmic => Box::new(CosmicGraph {
            scale: config.scale,
            ..CosmicGraph::default()
        }),
    };

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("failed to create output directory {}", config.output_dir.display())
    })?;

    let mut framebuffer = Framebuffer::new(config.width, config.height)?;
    let frame_count = config.frame_count();
    log::info!(
        "rendering {} frames of '{}' at {}x{}",
        frame_count,
        shader.name(),
        config.width,
        config.height
    );

    let started = Instant::now();
    for frame in 0..frame_count {
        let time = config.start_time + frame as f32 / config.fps;
        let ctx = FrameContext::new(time, config.width, config.height);
        framebuffer.render(shader.as_ref(), &ctx);

        let path = config
            .output_dir
            .join(format!("{}_{frame:04}.png", shader.name()));
        framebuffer
            .save_png(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("frame {}/{frame_count} -> {}", frame + 1, path.display());
    }

    log::info!(
        "done: {frame_count} frames in {:.2}s",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
