//! Petersen-graph layout tables
//!
//! 20 nodes in three concentric rings (5 middle, 5 inner, 10 outer) and 30
//! typed edges. All tables are compile-time constants; the literal values
//! encode the exact layout the shaders are tuned for, so they are written
//! out rather than derived.

use glam::Vec2;

/// Total node count across the three rings.
pub const NODE_COUNT: usize = 20;
/// Total edge count.
pub const EDGE_COUNT: usize = 30;

/// Inner pentagon radius (both variants).
pub const INNER_RADIUS: f32 = 0.15;
/// Middle pentagon radius (both variants).
pub const MIDDLE_RADIUS: f32 = 0.3;
/// Outer decagon radius used by the cosmic/plain variant.
pub const OUTER_RADIUS_COSMIC: f32 = 0.43;
/// Outer decagon radius used by the plasma variant.
pub const OUTER_RADIUS_PLASMA: f32 = 0.48;

/// Fixed node angles in radians, indexed by node.
///
/// The middle and inner rings share one pentagon angle set (2pi/5 steps
/// from 5.0265); the outer ring is a decagon (2pi/10 steps from the same
/// start angle).
pub const NODE_ANGLES: [f32; NODE_COUNT] = [
    // middle ring, nodes 0-4
    5.0265, 0.0000, 1.2566, 2.5133, 3.7699,
    // inner ring, nodes 5-9 (same pentagon angles)
    5.0265, 0.0000, 1.2566, 2.5133, 3.7699,
    // outer ring, nodes 10-19
    5.0265, 5.6549, 0.0000, 0.6283, 1.2566, 1.8850, 2.5133, 3.1416, 3.7699, 4.3982,
];

/// Which concentric ring a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    Middle,
    Inner,
    Outer,
}

impl Ring {
    /// Ring radius. The outer radius differs between the two shader
    /// variants, so it is supplied by the caller.
    #[inline]
    pub fn radius(self, outer_radius: f32) -> f32 {
        match self {
            Ring::Middle => MIDDLE_RADIUS,
            Ring::Inner => INNER_RADIUS,
            Ring::Outer => outer_radius,
        }
    }
}

/// Ring assignment by node index: 0-4 middle, 5-9 inner, 10-19 outer.
///
/// Indices outside `[0, 19]` are a caller bug, not a runtime condition.
#[inline]
pub fn ring_of(index: usize) -> Ring {
    match index {
        0..=4 => Ring::Middle,
        5..=9 => Ring::Inner,
        _ => Ring::Outer,
    }
}

/// World-space position of a node: `radius(ring) * (cos a, sin a)`.
#[inline]
pub fn node_position(index: usize, outer_radius: f32) -> Vec2 {
    let angle = NODE_ANGLES[index];
    let radius = ring_of(index).radius(outer_radius);
    radius * Vec2::new(angle.cos(), angle.sin())
}

/// Edge classification by which rings it connects. The tag drives the
/// per-edge color, distortion, flicker, and spark parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Middle pentagon to inner pentagon spoke.
    MiddleInner = 0,
    /// Middle pentagon to outer decagon, "+10" pattern.
    MiddleOuterNear = 1,
    /// Middle pentagon to outer decagon, "+15" pattern.
    MiddleOuterFar = 2,
    /// Inner pentagram chord.
    InnerRing = 3,
    /// Outer decagon segment.
    OuterRing = 4,
}

/// A graph edge: two node indices plus the connection tag.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub kind: ConnectionKind,
}

const fn edge(from: usize, to: usize, kind: ConnectionKind) -> Edge {
    Edge { from, to, kind }
}

/// The 30 edges in draw order: 5 spokes per middle-ring pattern, the inner
/// pentagram, then the outer decagon.
pub const EDGES: [Edge; EDGE_COUNT] = [
    // middle -> inner spokes
    edge(0, 5, ConnectionKind::MiddleInner),
    edge(1, 6, ConnectionKind::MiddleInner),
    edge(2, 7, ConnectionKind::MiddleInner),
    edge(3, 8, ConnectionKind::MiddleInner),
    edge(4, 9, ConnectionKind::MiddleInner),
    // middle -> outer, "+10" pattern
    edge(0, 10, ConnectionKind::MiddleOuterNear),
    edge(1, 11, ConnectionKind::MiddleOuterNear),
    edge(2, 12, ConnectionKind::MiddleOuterNear),
    edge(3, 13, ConnectionKind::MiddleOuterNear),
    edge(4, 14, ConnectionKind::MiddleOuterNear),
    // middle -> outer, "+15" pattern
    edge(0, 15, ConnectionKind::MiddleOuterFar),
    edge(1, 16, ConnectionKind::MiddleOuterFar),
    edge(2, 17, ConnectionKind::MiddleOuterFar),
    edge(3, 18, ConnectionKind::MiddleOuterFar),
    edge(4, 19, ConnectionKind::MiddleOuterFar),
    // inner pentagram
    edge(5, 7, ConnectionKind::InnerRing),
    edge(6, 8, ConnectionKind::InnerRing),
    edge(7, 9, ConnectionKind::InnerRing),
    edge(8, 5, ConnectionKind::InnerRing),
    edge(9, 6, ConnectionKind::InnerRing),
    // outer decagon
    edge(10, 11, ConnectionKind::OuterRing),
    edge(11, 12, ConnectionKind::OuterRing),
    edge(12, 13, ConnectionKind::OuterRing),
    edge(13, 14, ConnectionKind::OuterRing),
    edge(14, 15, ConnectionKind::OuterRing),
    edge(15, 16, ConnectionKind::OuterRing),
    edge(16, 17, ConnectionKind::OuterRing),
    edge(17, 18, ConnectionKind::OuterRing),
    edge(18, 19, ConnectionKind::OuterRing),
    edge(19, 10, ConnectionKind::OuterRing),
];
