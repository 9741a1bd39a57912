//! Hash, value noise, and the plasma flow field
//!
//! The downstream visuals are tuned to the statistical artifacts of the
//! classic `fract(sin(n) * 43758.5453)` hash, so these functions reproduce
//! the reference formulas literally rather than substituting a better PRNG.

use glam::Vec2;

use crate::math::{fract, mix, mm2};

/// Deterministic pseudo-random scalar in `[0, 1)` from a scalar seed.
#[inline]
pub fn hash(n: f32) -> f32 {
    fract(n.sin() * 43758.5453)
}

/// Bilinear value noise over the unit lattice.
///
/// Samples `hash` at the four surrounding lattice points (row stride 57)
/// and interpolates with the `3t^2 - 2t^3` smoothstep polynomial on the
/// fractional part, so the result is continuous everywhere.
pub fn noise(p: Vec2) -> f32 {
    let ip = p.floor();
    let fp = p - ip;
    let u = fp * fp * (Vec2::splat(3.0) - 2.0 * fp);

    let n = ip.x + ip.y * 57.0;
    let a = hash(n);
    let b = hash(n + 1.0);
    let c = hash(n + 57.0);
    let d = hash(n + 58.0);

    mix(mix(a, b, u.x), mix(c, d, u.x), u.y)
}

/// Domain-warped flow accumulation, the plasma "energy" signal.
///
/// Two iterations: offset `p` and a shadow coordinate `bp` by time, sample
/// noise through a sine fold, re-mix the coordinates, then scale (`*2.0` /
/// `*2.01`) and rotate by `t * 0.04 * i`. The iteration count, scale
/// factors, and rotation formula are load-bearing; changing any of them
/// visibly alters the animation.
pub fn flow(p: Vec2, t: f32) -> f32 {
    let mut z = 2.0;
    let mut rz = 0.0;
    let mut p = p;
    let mut bp = p;
    for i in 1..=2 {
        let fi = i as f32;
        p += Vec2::splat(t * 0.6);
        bp += Vec2::splat(t * 1.9);

        rz += ((noise(p) * 6.0).sin() * 0.5 + 0.5) / z;

        p = bp.lerp(p, 0.77);
        z *= 2.0;
        p *= 2.0;
        bp *= 2.01;
        p = mm2(t * 0.04 * fi) * p;
    }
    rz
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        for n in [0.0f32, 1.0, -3.5, 57.0, 1234.567] {
            assert_eq!(hash(n).to_bits(), hash(n).to_bits());
        }
    }

    #[test]
    fn test_hash_stays_in_unit_interval() {
        for i in -1000..1000 {
            let v = hash(i as f32 * 0.173);
            assert!((0.0..1.0).contains(&v), "hash out of range: {v}");
        }
    }

    #[test]
    fn test_noise_stays_in_unit_interval() {
        for ix in -20..20 {
            for iy in -20..20 {
                let p = Vec2::new(ix as f32 * 0.37, iy as f32 * 0.53);
                let v = noise(p);
                assert!((0.0..=1.0).contains(&v), "noise({p}) = {v}");
            }
        }
    }

    #[test]
    fn test_noise_is_continuous() {
        // Small steps must produce proportionally small output deltas.
        let eps = 1e-4;
        for i in 0..200 {
            let p = Vec2::new(i as f32 * 0.61 - 30.0, i as f32 * 0.29 - 20.0);
            let dv = (noise(p + Vec2::new(eps, 0.0)) - noise(p)).abs();
            assert!(dv < eps * 100.0, "noise jump of {dv} at {p}");
        }
    }

    #[test]
    fn test_noise_matches_hash_at_lattice_points() {
        // At integer coordinates the interpolation weights collapse to the
        // corner sample.
        let p = Vec2::new(3.0, 7.0);
        let expected = hash(3.0 + 7.0 * 57.0);
        assert!((noise(p) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_flow_range_and_determinism() {
        for i in 0..100 {
            let p = Vec2::new(i as f32 * 0.11 - 5.0, i as f32 * 0.07 - 3.0);
            let t = i as f32 * 0.1;
            let v = flow(p, t);
            assert!((0.0..=1.0).contains(&v), "flow({p}, {t}) = {v}");
            assert_eq!(v.to_bits(), flow(p, t).to_bits());
        }
    }
}
