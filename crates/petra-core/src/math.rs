//! Scalar shader math helpers
//!
//! GLSL-flavored building blocks used by both shader variants. These match
//! the GPU definitions exactly (notably `fract`, which differs from Rust's
//! `f32::fract` for negative inputs) so the noise stack built on top of them
//! reproduces the reference visuals.

use glam::Mat2;

/// GLSL `fract`: `x - floor(x)`, always in `[0, 1)`.
///
/// Rust's `f32::fract` truncates toward zero instead, which would break
/// value noise for negative lattice coordinates.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Linear interpolation between `a` and `b` by `t`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep: clamps to `[e0, e1]` then applies `3t^2 - 2t^3`.
///
/// Saturates at both ends, so callers never need to special-case distances
/// of exactly zero or beyond the falloff radius.
#[inline]
pub fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// 2x2 rotation matrix for `angle` radians (counter-clockwise).
#[inline]
pub fn mm2(angle: f32) -> Mat2 {
    Mat2::from_angle(angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_fract_matches_glsl_for_negatives() {
        assert!((fract(-0.25) - 0.75).abs() < 1e-6);
        assert!((fract(1.75) - 0.75).abs() < 1e-6);
        assert_eq!(fract(0.0), 0.0);
    }

    #[test]
    fn test_smoothstep_saturates() {
        assert_eq!(smoothstep(0.0, 1.0, -5.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 5.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_smoothstep_is_monotonic() {
        let mut prev = smoothstep(0.0, 1.0, 0.0);
        for i in 1..=100 {
            let v = smoothstep(0.0, 1.0, i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(2.0, 6.0, 0.0), 2.0);
        assert_eq!(mix(2.0, 6.0, 1.0), 6.0);
        assert_eq!(mix(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_mm2_rotates_unit_x_to_unit_y() {
        let r = mm2(std::f32::consts::FRAC_PI_2);
        let v = r * Vec2::X;
        assert!(v.abs_diff_eq(Vec2::Y, 1e-6));
    }
}
