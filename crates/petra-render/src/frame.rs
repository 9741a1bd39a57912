//! CPU framebuffer host for per-pixel shaders
//!
//! Mirrors the shader-toy execution model: one independent invocation per
//! pixel, reading only the host-supplied uniforms (time, resolution) and
//! writing one RGBA color. Rows are rendered in parallel; there is no
//! shared mutable state between invocations.

use std::path::Path;

use glam::{Vec2, Vec4};
use rayon::prelude::*;

/// Host-supplied uniforms, read-only per invocation.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Elapsed time in seconds, monotonically increasing across frames.
    pub time: f32,
    /// Viewport resolution in pixels.
    pub resolution: Vec2,
}

impl FrameContext {
    pub fn new(time: f32, width: u32, height: u32) -> Self {
        Self {
            time,
            resolution: Vec2::new(width as f32, height as f32),
        }
    }
}

/// A per-pixel shader: a pure function of fragment coordinate and uniforms.
///
/// Components conventionally land in `[0, 1]`; values may exceed 1 before
/// the framebuffer clamps them, matching the host-side tone-mapping
/// contract.
pub trait FragmentShader: Send + Sync {
    /// Identifier used in log output and frame filenames.
    fn name(&self) -> &'static str;

    /// Compute the RGBA color for one pixel.
    ///
    /// `frag_coord` uses the shader-toy convention: origin at the bottom
    /// left, pixel centers at half-integer coordinates.
    fn main_image(&self, frag_coord: Vec2, ctx: &FrameContext) -> Vec4;
}

/// Errors from framebuffer construction and export.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("framebuffer must be non-empty, got {width}x{height}")]
    EmptyFramebuffer { width: u32, height: u32 },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// An RGBA8 pixel buffer plus the parallel render loop that fills it.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a zeroed framebuffer. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyFramebuffer { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data, row-major from the top-left.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA components of the pixel at `(x, y)` (top-left origin).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Run the shader once per pixel, rows in parallel.
    pub fn render(&mut self, shader: &dyn FragmentShader, ctx: &FrameContext) {
        let width = self.width as usize;
        let height = self.height;

        self.pixels
            .par_chunks_mut(width * 4)
            .enumerate()
            .for_each(|(row, out)| {
                // Buffer rows run top-down; flip to the bottom-left origin.
                let fy = (height - 1 - row as u32) as f32 + 0.5;
                for x in 0..width {
                    let frag_coord = Vec2::new(x as f32 + 0.5, fy);
                    let color = shader.main_image(frag_coord, ctx);
                    let px = &mut out[x * 4..x * 4 + 4];
                    px[0] = quantize(color.x);
                    px[1] = quantize(color.y);
                    px[2] = quantize(color.z);
                    px[3] = quantize(color.w);
                }
            });

        log::debug!(
            "rendered {} at t={:.3}s ({}x{})",
            shader.name(),
            ctx.time,
            self.width,
            self.height
        );
    }

    /// Encode the buffer as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(())
    }
}

/// Clamp a color component to `[0, 1]` and quantize to u8.
#[inline]
fn quantize(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Gradient test shader: red follows x, green follows y, blue overdrives.
    struct Gradient;

    impl FragmentShader for Gradient {
        fn name(&self) -> &'static str {
            "gradient"
        }

        fn main_image(&self, frag_coord: Vec2, ctx: &FrameContext) -> Vec4 {
            let uv = frag_coord / ctx.resolution;
            Vec4::new(uv.x, uv.y, 2.0, 1.0)
        }
    }

    #[test]
    fn test_zero_size_framebuffer_is_rejected() {
        assert!(matches!(
            Framebuffer::new(0, 4),
            Err(RenderError::EmptyFramebuffer { .. })
        ));
        assert!(matches!(
            Framebuffer::new(4, 0),
            Err(RenderError::EmptyFramebuffer { .. })
        ));
    }

    #[test]
    fn test_single_pixel_render() {
        let mut fb = Framebuffer::new(1, 1).unwrap();
        fb.render(&Gradient, &FrameContext::new(0.0, 1, 1));
        let [r, g, b, a] = fb.pixel(0, 0);
        // Pixel center at (0.5, 0.5) of a 1x1 viewport.
        assert_eq!([r, g], [128, 128]);
        assert_eq!(b, 255); // overdriven component clamps
        assert_eq!(a, 255);
    }

    #[test]
    fn test_coordinate_orientation() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.render(&Gradient, &FrameContext::new(0.0, 4, 4));
        // Top row of the buffer is the highest frag y, so green is largest.
        let top = fb.pixel(0, 0);
        let bottom = fb.pixel(0, 3);
        assert!(top[1] > bottom[1]);
        // Red grows to the right.
        assert!(fb.pixel(3, 0)[0] > fb.pixel(0, 0)[0]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let ctx = FrameContext::new(1.25, 8, 8);
        let mut a = Framebuffer::new(8, 8).unwrap();
        let mut b = Framebuffer::new(8, 8).unwrap();
        a.render(&Gradient, &ctx);
        b.render(&Gradient, &ctx);
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_quantize_endpoints() {
        assert_eq!(quantize(-1.0), 0);
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(5.0), 255);
    }
}
