//! Cosmic variant of the Petersen-graph visualization
//!
//! The quieter sibling of the plasma variant: static connection lines with
//! traveling rainbow arcs, shimmering halo rings around the three circle
//! radii, and plain smoothstep node blobs. Every renderer returns a
//! premultiplied-style contribution (RGB already weighted by intensity),
//! and the composer accumulates them additively; the output alpha is
//! whatever the accumulation produced.

use glam::{Vec2, Vec3, Vec4};

use petra_core::math::{fract, mm2, smoothstep};
use petra_core::topology::{
    ConnectionKind, Ring, EDGES, INNER_RADIUS, MIDDLE_RADIUS, NODE_COUNT, OUTER_RADIUS_COSMIC,
    node_position, ring_of,
};

use crate::frame::{FragmentShader, FrameContext};

/// Fixed dark background.
const BACKGROUND: Vec4 = Vec4::new(0.01, 0.01, 0.03, 1.0);

/// Traveling-arc count per connection kind.
pub(crate) const ARC_DENSITY: [u32; 5] = [6, 7, 8, 5, 9];

/// Traveling-arc speed per connection kind.
const ARC_SPEED: [f32; 5] = [1.2, 1.5, 1.5, 1.0, 1.8];

/// Static line base colors per connection kind.
const LINE_COLORS: [Vec3; 5] = [
    Vec3::new(0.6, 0.4, 0.8),
    Vec3::new(0.7, 0.55, 0.4),
    Vec3::new(0.65, 0.45, 0.6),
    Vec3::new(0.35, 0.45, 0.8),
    Vec3::new(0.75, 0.65, 0.4),
];

/// Arc segments summed per halo ring.
const HALO_SEGMENTS: u32 = 15;

/// Halo rendering is skipped entirely inside this radius.
const HALO_CENTER_CUTOFF: f32 = 0.1;

/// Tolerance band beyond the literal segment ends.
const ALONG_TOLERANCE: f32 = 0.01;

/// Ring-specific node RGBA constants (plain variant, no flow modulation).
fn node_rgba(ring: Ring) -> Vec4 {
    match ring {
        Ring::Middle => Vec4::new(1.0, 0.35, 0.4, 1.0),
        Ring::Inner => Vec4::new(0.4, 0.6, 1.0, 1.0),
        Ring::Outer => Vec4::new(1.0, 0.85, 0.45, 1.0),
    }
}

/// Cosine-based hue rotation: a smooth rainbow over `t` in [0, 1).
pub(crate) fn rainbow(t: f32) -> Vec3 {
    let a = std::f32::consts::TAU * t;
    Vec3::new(a.cos(), (a + 2.094).cos(), (a + 4.188).cos()) * 0.5 + Vec3::splat(0.5)
}

/// Fixed-thickness circle outline from two nested smoothstep bands.
pub(crate) fn draw_circle(d: f32, radius: f32) -> f32 {
    smoothstep(radius - 0.005, radius - 0.002, d) - smoothstep(radius + 0.002, radius + 0.005, d)
}

/// Shimmering halo around one ring radius.
///
/// Sums angularly-modulated, time-rotating arc segments whose intensity
/// falls off exponentially with distance from the target radius. Skipped
/// near the origin to avoid clutter where the three halos would overlap.
pub(crate) fn halo_ring(p: Vec2, radius: f32, time: f32) -> Vec4 {
    let d = p.length();
    if d < HALO_CENTER_CUTOFF {
        return Vec4::ZERO;
    }
    let angle = p.y.atan2(p.x);
    let falloff = (-(d - radius).abs() * 60.0).exp();

    let mut color = Vec3::ZERO;
    let mut glow = 0.0;
    for i in 0..HALO_SEGMENTS {
        let fi = i as f32;
        let phase = fi * std::f32::consts::TAU / HALO_SEGMENTS as f32;
        let swept = angle + time * (0.2 + 0.03 * fi) + phase;
        let arc = (swept * 3.0).sin() * 0.5 + 0.5;
        let w = arc * falloff / HALO_SEGMENTS as f32;
        glow += w;
        color += rainbow(fi / HALO_SEGMENTS as f32 + time * 0.05) * w;
    }
    color.extend(glow)
}

/// Plain node blob: core plus outline glow, both simple smoothstep rings.
pub(crate) fn draw_node(p: Vec2, pos: Vec2, index: usize) -> Vec4 {
    let d = p.distance(pos);
    let base = node_rgba(ring_of(index));

    let core = 1.0 - smoothstep(0.0, 0.01, d);
    let outline = smoothstep(0.012, 0.015, d) * (1.0 - smoothstep(0.015, 0.022, d));

    let alpha = (core + outline * 0.6) * base.w;
    (base.truncate() * (core + outline * 0.6)).extend(alpha)
}

/// Connection line with traveling cosmic light arcs.
///
/// The static line gives the graph its structure; the arcs cycle along it
/// at a kind-keyed density (5-9) and speed, each one a Gaussian-intensity
/// blob with rainbow coloring. Degenerate edges are skipped.
pub(crate) fn draw_connection(
    p: Vec2,
    a: Vec2,
    b: Vec2,
    kind: ConnectionKind,
    time_offset: f32,
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
    let dist = rel.dot(dir.perp()).abs();
    let s = (along / len).clamp(0.0, 1.0);

    let k = kind as usize;

    // Static-thickness line.
    let line = (1.0 - smoothstep(0.0, 0.0025, dist)) * 0.45;
    let mut color = LINE_COLORS[k] * line;
    let mut alpha = line;

    // Traveling light arcs.
    let density = ARC_DENSITY[k];
    let speed = ARC_SPEED[k];
    for i in 0..density {
        let cycle = fract((i as f32 + time * speed * 0.2) / density as f32 + time_offset);
        let blob = (-((s - cycle) * 18.0).powi(2)).exp() * (1.0 - smoothstep(0.0, 0.007, dist));
        color += rainbow(cycle + k as f32 * 0.2) * blob;
        alpha += blob * 0.8;
    }

    color.extend(alpha)
}

/// The cosmic frame composer.
#[derive(Debug, Clone, Copy)]
pub struct CosmicGraph {
    /// Global coordinate scale; larger values zoom out.
    pub scale: f32,
    /// Rigid rotation speed in radians per second.
    pub rotation_speed: f32,
    /// Draw the shimmering halo rings in addition to the circle outlines.
    pub halos: bool,
}

impl Default for CosmicGraph {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_speed: 0.05,
            halos: true,
        }
    }
}

impl FragmentShader for CosmicGraph {
    fn name(&self) -> &'static str {
        "cosmic"
    }

    fn main_image(&self, frag_coord: Vec2, ctx: &FrameContext) -> Vec4 {
        let res = ctx.resolution;
        let time = ctx.time;

        let screen = (frag_coord - 0.5 * res) / res.x.min(res.y);
        let p = mm2(time * self.rotation_speed) * (screen / self.scale);

        let mut acc = BACKGROUND;

        // Circle outlines, with halos layered over them.
        let d = p.length();
        for radius in [INNER_RADIUS, MIDDLE_RADIUS, OUTER_RADIUS_COSMIC] {
            let band = draw_circle(d, radius);
            acc += (Vec3::new(0.3, 0.3, 0.45) * band).extend(band * 0.5);
            if self.halos {
                acc += halo_ring(p, radius, time);
            }
        }

        // Edges in table order, then nodes, all accumulated additively.
        for (i, edge) in EDGES.iter().enumerate() {
            let a = node_position(edge.from, OUTER_RADIUS_COSMIC);
            let b = node_position(edge.to, OUTER_RADIUS_COSMIC);
            let time_offset = i as f32 * 0.033;
            acc += draw_connection(p, a, b, edge.kind, time_offset, time);
        }
        for i in 0..NODE_COUNT {
            acc += draw_node(p, node_position(i, OUTER_RADIUS_COSMIC), i);
        }

        // Vignette and brightening act on color only; alpha stays whatever
        // the accumulation produced.
        let vignette = 1.0 - smoothstep(0.6, 1.0, screen.length());
        let rgb = acc.truncate() * (0.4 + 0.6 * vignette) * 1.15;
        rgb.extend(acc.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_band_peaks_on_the_radius() {
        let on = draw_circle(MIDDLE_RADIUS, MIDDLE_RADIUS);
        let off = draw_circle(MIDDLE_RADIUS + 0.05, MIDDLE_RADIUS);
        assert_eq!(on, 1.0);
        assert_eq!(off, 0.0);
    }

    #[test]
    fn test_halo_skipped_near_origin() {
        let c = halo_ring(Vec2::new(0.05, 0.05), INNER_RADIUS, 3.0);
        assert_eq!(c, Vec4::ZERO);
    }

    #[test]
    fn test_halo_fades_away_from_radius() {
        let near = halo_ring(Vec2::new(MIDDLE_RADIUS, 0.0), MIDDLE_RADIUS, 1.0);
        let far = halo_ring(Vec2::new(MIDDLE_RADIUS + 0.2, 0.0), MIDDLE_RADIUS, 1.0);
        assert!(near.w > far.w);
    }

    #[test]
    fn test_rainbow_stays_in_unit_cube() {
        for i in 0..100 {
            let c = rainbow(i as f32 / 100.0);
            for v in [c.x, c.y, c.z] {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_arc_density_within_spec_range() {
        for (k, &density) in ARC_DENSITY.iter().enumerate() {
            assert!((5..=9).contains(&density), "kind {k}: density {density}");
        }
        assert_eq!(ARC_DENSITY[ConnectionKind::InnerRing as usize], 5);
        assert_eq!(ARC_DENSITY[ConnectionKind::OuterRing as usize], 9);
    }

    #[test]
    fn test_connection_rejects_outside_band_and_degenerate_edges() {
        let a = Vec2::new(0.0, -0.2);
        let b = Vec2::new(0.0, 0.2);
        let beyond = Vec2::new(0.001, 0.25);
        assert_eq!(
            draw_connection(beyond, a, b, ConnectionKind::InnerRing, 0.0, 1.0),
            Vec4::ZERO
        );
        assert_eq!(
            draw_connection(a, a, a, ConnectionKind::InnerRing, 0.0, 1.0),
            Vec4::ZERO
        );
    }

    #[test]
    fn test_composer_accumulates_over_background_alpha() {
        let shader = CosmicGraph::default();
        let ctx = FrameContext::new(0.75, 64, 64);
        let center = shader.main_image(Vec2::new(32.5, 32.5), &ctx);
        assert!(center.w >= BACKGROUND.w);
    }

    #[test]
    fn test_halos_flag_changes_output() {
        let with = CosmicGraph::default();
        let without = CosmicGraph {
            halos: false,
            ..CosmicGraph::default()
        };
        let ctx = FrameContext::new(2.0, 64, 64);
        // Sample on the middle ring where halos contribute.
        let frag = Vec2::new(32.5 + MIDDLE_RADIUS * 64.0, 32.5);
        assert_ne!(
            with.main_image(frag, &ctx),
            without.main_image(frag, &ctx)
        );
    }
}
