//! Petra Core - Petersen-graph layout and shader math primitives
//!
//! This crate provides:
//! - The fixed graph topology (node angles, ring radii, typed edge list)
//! - The node locator mapping indices to world-space positions
//! - Scalar shader math (smoothstep, mix, GLSL-style fract)
//! - The noise stack: hash, value noise, and the domain-warped flow field
//!
//! Everything here is a pure function over compile-time constant tables,
//! so rendering stays deterministic for a fixed time and resolution.

pub mod math;
pub mod noise;
pub mod topology;

pub use math::{fract, mix, mm2, smoothstep};
pub use noise::{flow, hash, noise};
pub use topology::{
    ConnectionKind, Edge, Ring, EDGES, EDGE_COUNT, INNER_RADIUS, MIDDLE_RADIUS, NODE_ANGLES,
    NODE_COUNT, OUTER_RADIUS_COSMIC, OUTER_RADIUS_PLASMA, node_position, ring_of,
};
