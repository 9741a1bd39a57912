//! Common test utilities
//!
//! Small harness around the framebuffer for rendering frames at test
//! resolutions and inspecting pixels.

use petra_render::{FragmentShader, FrameContext, Framebuffer};

/// A rendered frame plus assertion helpers.
pub struct RenderHarness {
    pub framebuffer: Framebuffer,
    pub width: u32,
    pub height: u32,
}

impl RenderHarness {
    /// Render one frame of `shader` at the given time and size.
    pub fn render(shader: &dyn FragmentShader, time: f32, width: u32, height: u32) -> Self {
        let mut framebuffer =
            Framebuffer::new(width, height).expect("test framebuffer must be non-empty");
        framebuffer.render(shader, &FrameContext::new(time, width, height));
        Self {
            framebuffer,
            width,
            height,
        }
    }

    /// RGBA of the pixel at `(x, y)`, top-left origin.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.framebuffer.pixel(x, y)
    }

    /// Perceptual-ish brightness of a pixel, 0-255 scale.
    pub fn brightness(&self, x: u32, y: u32) -> u32 {
        let [r, g, b, _] = self.pixel(x, y);
        (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000
    }

    /// Assert every pixel's alpha equals `expected`.
    pub fn assert_uniform_alpha(&self, expected: u8) {
        for y in 0..self.height {
            for x in 0..self.width {
                let [_, _, _, a] = self.pixel(x, y);
                assert_eq!(a, expected, "alpha mismatch at ({x}, {y})");
            }
        }
    }
}
