//! CPU Rendering Benchmark Tool
//!
//! Run with: cargo run --release --bin benchmark [width height frames]
//!
//! Renders both shader variants headlessly and reports per-frame timing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;
use petra_render::{CosmicGraph, FragmentShader, FrameContext, Framebuffer, PlasmaGraph};

/// Frame timing statistics over a sliding window
#[derive(Debug, Default)]
struct FrameStats {
    frame_times: VecDeque<Duration>,
    max_samples: usize,
}

impl FrameStats {
    fn new(max_samples: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples,
        }
    }

    fn record(&mut self, duration: Duration) {
        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(duration);
    }

    fn avg_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let sum: Duration = self.frame_times.iter().sum();
        sum.as_secs_f64() * 1000.0 / self.frame_times.len() as f64
    }

    fn min_ms(&self) -> f64 {
        self.frame_times
            .iter()
            .min()
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }

    fn max_ms(&self) -> f64 {
        self.frame_times
            .iter()
            .max()
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }

    fn p99_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<_> = self.frame_times.iter().collect();
        sorted.sort();
        let idx = (sorted.len() as f64 * 0.99) as usize;
        sorted
            .get(idx.min(sorted.len() - 1))
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }

    fn fps(&self) -> f64 {
        let avg = self.avg_ms();
        if avg > 0.0 { 1000.0 / avg } else { 0.0 }
    }
}

fn bench_shader(
    shader: &dyn FragmentShader,
    width: u32,
    height: u32,
    frames: u32,
) -> Result<FrameStats> {
    let mut framebuffer = Framebuffer::new(width, height)?;
    let mut stats = FrameStats::new(frames as usize);

    // Warm up once so thread-pool startup doesn't skew the first sample.
    framebuffer.render(shader, &FrameContext::new(0.0, width, height));

    for frame in 0..frames {
        let ctx = FrameContext::new(frame as f32 / 60.0, width, height);
        let start = Instant::now();
        framebuffer.render(shader, &ctx);
        stats.record(start.elapsed());
    }
    Ok(stats)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let width: u32 = args.first().map_or(Ok(640), |s| s.parse())?;
    let height: u32 = args.get(1).map_or(Ok(480), |s| s.parse())?;
    let frames: u32 = args.get(2).map_or(Ok(120), |s| s.parse())?;

    println!("petra CPU render benchmark: {width}x{height}, {frames} frames per variant\n");
    println!(
        "{:<10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "variant", "avg ms", "min ms", "max ms", "p99 ms", "fps"
    );

    let shaders: [Box<dyn FragmentShader>; 2] =
        [Box::new(PlasmaGraph::default()), Box::new(CosmicGraph::default())];
    for shader in &shaders {
        let stats = bench_shader(shader.as_ref(), width, height, frames)?;
        println!(
            "{:<10} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.1}",
            shader.name(),
            stats.avg_ms(),
            stats.min_ms(),
            stats.max_ms(),
            stats.p99_ms(),
            stats.fps()
        );
    }
    Ok(())
}
