//! Render run configuration
//!
//! Supports loading configuration from:
//! - `petra.toml` in the working directory
//! - Command line arguments (override)

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

const USAGE: &str = "\
petra - Petersen-graph shader art renderer

USAGE:
    petra [OPTIONS]

OPTIONS:
    --variant <plasma|cosmic>   Shader variant to render (default: plasma)
    --width <px>                Frame width (default: 800)
    --height <px>               Frame height (default: 600)
    --fps <n>                   Frames per second of the sequence (default: 30)
    --duration <seconds>        Length of the sequence (default: 2.0)
    --start-time <seconds>      Shader time of the first frame (default: 0.0)
    --scale <factor>            Global zoom-out factor (default: 1.0)
    --output <dir>              Output directory for PNG frames (default: frames)
    --help                      Print this help

Defaults can also be set in a petra.toml file in the working directory.";

/// Which shader variant to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Plasma,
    Cosmic,
}

impl Variant {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plasma" => Some(Self::Plasma),
            "cosmic" | "graph" => Some(Self::Cosmic),
            _ => None,
        }
    }
}

/// Frame sequence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Shader variant to render
    pub variant: Variant,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Frames per second of the output sequence
    pub fps: f32,
    /// Sequence length in seconds
    pub duration: f32,
    /// Shader time of the first frame
    pub start_time: f32,
    /// Global zoom-out factor applied to the sampling coordinate
    pub scale: f32,
    /// Directory PNG frames are written to
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Plasma,
            width: 800,
            height: 600,
            fps: 30.0,
            duration: 2.0,
            start_time: 0.0,
            scale: 1.0,
            output_dir: PathBuf::from("frames"),
        }
    }
}

impl RenderConfig {
    /// Load `petra.toml` if present, then apply command-line overrides.
    pub fn load(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = match std::fs::read_to_string("petra.toml") {
            Ok(text) => toml::from_str(&text).context("failed to parse petra.toml")?,
            Err(_) => Self::default(),
        };
        config.apply_args(args)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_args(&mut self, mut args: impl Iterator<Item = String>) -> Result<()> {
        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .with_context(|| format!("{name} requires a value"))
            };
            match arg.as_str() {
                "--variant" => {
                    let v = value("--variant")?;
                    self.variant = Variant::parse(&v)
                        .with_context(|| format!("unknown variant '{v}'"))?;
                }
                "--width" => self.width = value("--width")?.parse()?,
                "--height" => self.height = value("--height")?.parse()?,
                "--fps" => self.fps = value("--fps")?.parse()?,
                "--duration" => self.duration = value("--duration")?.parse()?,
                "--start-time" => self.start_time = value("--start-time")?.parse()?,
                "--scale" => self.scale = value("--scale")?.parse()?,
                "--output" => self.output_dir = PathBuf::from(value("--output")?),
                "--help" | "-h" => {
                    println!("{USAGE}");
                    std::process::exit(0);
                }
                other => bail!("unknown argument '{other}' (try --help)"),
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("frame size must be non-zero, got {}x{}", self.width, self.height);
        }
        if self.fps <= 0.0 {
            bail!("fps must be positive, got {}", self.fps);
        }
        if self.duration < 0.0 {
            bail!("duration must be non-negative, got {}", self.duration);
        }
        if self.scale <= 0.0 {
            bail!("scale must be positive, got {}", self.scale);
        }
        Ok(())
    }

    /// Number of frames in the sequence, at least one.
    pub fn frame_count(&self) -> u32 {
        ((self.duration * self.fps).ceil() as u32).max(1)
    }
}
