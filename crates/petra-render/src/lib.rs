//! Petra Render - shader variants and the CPU framebuffer host
//!
//! Two per-pixel shader variants of the Petersen-graph visualization:
//!
//! - [`PlasmaGraph`]: noise-driven energy arcs, flow-modulated node glows,
//!   sparks, opaque lerp compositing.
//! - [`CosmicGraph`]: halo rings, traveling rainbow arcs, additive
//!   compositing.
//!
//! Both implement [`FragmentShader`] and are driven by [`Framebuffer`],
//! a row-parallel CPU rasterizer. Every invocation is a pure function of
//! `(frag_coord, time, resolution)`, so output is fully deterministic.

pub mod cosmic;
pub mod frame;
pub mod plasma;

pub use cosmic::CosmicGraph;
pub use frame::{FragmentShader, FrameContext, Framebuffer, RenderError};
pub use plasma::PlasmaGraph;
