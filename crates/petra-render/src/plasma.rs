//! Plasma variant of the Petersen-graph visualization
//!
//! Energy arcs between nodes, perturbed by two-frequency value noise, with
//! connection-kind-dependent color, distortion, flicker, and sparks. Node
//! glows breathe with the domain-warped flow field. Composited by lerping
//! each pass toward the accumulated color; output is fully opaque.
//!
//! The kind-keyed parameters encode topological distance from the center:
//! the inner pentagram gets the calmest arcs, the outer decagon the most
//! visual energy.

use glam::{Vec2, Vec3, Vec4};

use petra_core::noise::{flow, hash, noise};
use petra_core::math::{mm2, smoothstep};
use petra_core::topology::{
    ConnectionKind, Ring, EDGES, INNER_RADIUS, MIDDLE_RADIUS, NODE_COUNT, OUTER_RADIUS_PLASMA,
    node_position, ring_of,
};

use crate::frame::{FragmentShader, FrameContext};

/// Fixed dark background.
const BACKGROUND: Vec3 = Vec3::new(0.02, 0.01, 0.04);

/// Per-kind arc base colors, indexed by `ConnectionKind as usize`.
pub(crate) const EDGE_COLORS: [Vec3; 5] = [
    Vec3::new(1.0, 0.45, 0.35),  // middle -> inner
    Vec3::new(1.0, 0.75, 0.35),  // middle -> outer (+10)
    Vec3::new(0.95, 0.55, 0.75), // middle -> outer (+15)
    Vec3::new(0.35, 0.55, 1.0),  // inner pentagram
    Vec3::new(1.0, 0.9, 0.45),   // outer decagon
];

/// Perpendicular distortion magnitude per kind. Inner-ring arcs are the
/// steadiest (0.008), outer-ring the waviest (0.025).
pub(crate) const EDGE_DISTORTION: [f32; 5] = [0.015, 0.02, 0.02, 0.008, 0.025];

/// Flicker amplitude per kind, increasing from inner to outer connections.
pub(crate) const EDGE_FLICKER: [f32; 5] = [0.25, 0.3, 0.3, 0.2, 0.35];

/// Base flicker speed per kind.
const EDGE_FLICKER_SPEED: [f32; 5] = [3.0, 4.0, 4.0, 2.5, 5.0];

/// Noise gate above which a spark fires on an edge.
const SPARK_THRESHOLD: f32 = 0.9;

/// Tolerance band beyond the literal segment, avoids hard end-of-line seams.
const ALONG_TOLERANCE: f32 = 0.01;

/// Ring-keyed node base color: middle red, inner blue, outer yellow.
fn node_color(ring: Ring) -> Vec3 {
    match ring {
        Ring::Middle => Vec3::new(1.0, 0.3, 0.25),
        Ring::Inner => Vec3::new(0.3, 0.5, 1.0),
        Ring::Outer => Vec3::new(1.0, 0.85, 0.3),
    }
}

/// Colored glow/core blob for one node, modulated by the flow field.
pub(crate) fn draw_node(p: Vec2, pos: Vec2, index: usize, time: f32) -> Vec4 {
    let d = p.distance(pos);
    let fi = index as f32;

    // Local plasma energy, desynchronized per node.
    let energy = flow(p * 15.0, time * 0.5 + fi * 0.37);

    // Glow radius oscillates with a node-keyed sine and swells with energy.
    let pulse = (time * 1.7 + fi * 0.9).sin() * 0.5 + 0.5;
    let glow_radius = 0.035 + 0.025 * pulse * (0.4 + 0.6 * energy);

    let core = 1.0 - smoothstep(0.0, 0.012, d);
    let glow = (1.0 - smoothstep(0.0, glow_radius, d)) * (0.45 + 0.55 * energy);

    // High energy washes the base color toward white.
    let color = node_color(ring_of(index)).lerp(Vec3::ONE, energy * 0.35);

    let alpha = core.max(0.8 * glow);
    color.extend(alpha)
}

/// Wavy energy arc between two node positions.
///
/// Returns zero contribution when the pixel's projection falls outside the
/// tolerance band along the edge line, and for degenerate (zero-length)
/// edges.
pub(crate) fn draw_edge(
    p: Vec2,
    a: Vec2,
    b: Vec2,
    kind: ConnectionKind,
    seed: f32,
    time: f32,
) -> Vec4 {
    let span = b - a;
    let len = span.length();
    if len < 1e-5 {
        return Vec4::ZERO;
    }
    let dir = span / len;

    let rel = p - a;
    let along = rel.dot(dir);
    if !(-ALONG_TOLERANCE..=len + ALONG_TOLERANCE).contains(&along) {
        return Vec4::ZERO;
    }
    let perp = rel.dot(dir.perp());
    let s = (along / len).clamp(0.0, 1.0);

    let k = kind as usize;

    // Two-frequency perturbation: slow drift plus fine shimmer.
    let n_low = noise(Vec2::new(s * 6.0 + seed * 13.0, time * 0.9 + seed * 7.0));
    let n_high = noise(Vec2::new(s * 18.0 - time * 1.4, seed * 29.0 + time * 0.6));
    let wobble = (n_low - 0.5) * 0.7 + (n_high - 0.5) * 0.3;
    let dist = (perp - wobble * 2.0 * EDGE_DISTORTION[k]).abs();

    let core = 1.0 - smoothstep(0.0, 0.004, dist);
    let glow = 0.0016 / (dist * dist + 0.0016);

    let amount = EDGE_FLICKER[k];
    let flicker =
        (1.0 - amount) + amount * (time * (EDGE_FLICKER_SPEED[k] + seed * 3.0) + s * 4.0).sin();

    let mut intensity = (core + glow * 0.5) * flicker;
    let mut color = EDGE_COLORS[k];

    // Stochastic spark: a bright highlight near a noise-jittered position.
    let gate = noise(Vec2::new(seed * 47.0, time * 1.3));
    if gate > SPARK_THRESHOLD {
        let spark_pos = noise(Vec2::new(seed * 31.0 + 17.0, time * 2.1));
        let (radius_factor, gain) = match kind {
            ConnectionKind::OuterRing => (25.0, 1.2),
            _ => (20.0, 0.7),
        };
        let reach = (1.0 - ((s - spark_pos).abs() * radius_factor).min(1.0)).powi(2);
        let spark = reach * (1.0 - smoothstep(0.0, 0.01, dist));
        intensity += spark * gain;
        color = color.lerp(Vec3::ONE, (spark * gain).min(1.0) * 0.6);
    }

    color.extend((intensity * 0.8).min(1.0))
}

/// Thin outline band at one ring radius.
fn ring_outline(d: f32, radius: f32) -> f32 {
    smoothstep(radius - 0.004, radius - 0.0015, d) - smoothstep(radius + 0.0015, radius + 0.004, d)
}

/// The plasma frame composer.
#[derive(Debug, Clone, Copy)]
pub struct PlasmaGraph {
    /// Global coordinate scale; larger values zoom out.
    pub scale: f32,
    /// Rigid rotation speed in radians per second.
    pub rotation_speed: f32,
}

impl Default for PlasmaGraph {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_speed: 0.1,
        }
    }
}

impl FragmentShader for PlasmaGraph {
    fn name(&self) -> &'static str {
        "plasma"
    }

    fn main_image(&self, frag_coord: Vec2, ctx: &FrameContext) -> Vec4 {
        let res = ctx.resolution;
        let time = ctx.time;

        // Centered, aspect-preserving screen coordinate (vignette space).
        let screen = (frag_coord - 0.5 * res) / res.x.min(res.y);

        // Rotating the sampling coordinate spins the composition rigidly;
        // node and edge distance tests all happen in this rotated space.
        let p = mm2(time * self.rotation_speed) * (screen / self.scale);

        let mut color = BACKGROUND;

        // Background ring outlines.
        let d = p.length();
        for radius in [INNER_RADIUS, MIDDLE_RADIUS, OUTER_RADIUS_PLASMA] {
            let band = ring_outline(d, radius);
            color = color.lerp(Vec3::new(0.25, 0.25, 0.4), band * 0.3);
        }

        // Edges in table order, then nodes on top.
        for (i, edge) in EDGES.iter().enumerate() {
            let a = node_position(edge.from, OUTER_RADIUS_PLASMA);
            let b = node_position(edge.to, OUTER_RADIUS_PLASMA);
            let seed = hash(i as f32 + 1.0);
            let c = draw_edge(p, a, b, edge.kind, seed, time);
            color = color.lerp(c.truncate(), c.w);
        }
        for i in 0..NODE_COUNT {
            let c = draw_node(p, node_position(i, OUTER_RADIUS_PLASMA), i, time);
            color = color.lerp(c.truncate(), c.w);
        }

        // Radial vignette in screen space, then a fixed brightening lift.
        let vignette = 1.0 - smoothstep(0.55, 0.95, screen.length());
        color *= 0.35 + 0.65 * vignette;
        color *= 1.1;

        // Fully opaque composite.
        color.extend(1.0)
    }
}
