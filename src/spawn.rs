//! Spawn context for particle initialization.
//!
//! Provides seeded helpers for the common spawn patterns so fields don't
//! hand-roll RNG plumbing. Every context derives its stream from an explicit
//! seed and the particle index, which makes an initial population a pure
//! function of `(seed, count, bounds)` - two fields built with the same seed
//! produce identical particles.
//!
//! ```ignore
//! let mut ctx = SpawnContext::new(seed, i, count, width, height);
//! let p = Particle {
//!     position: ctx.random_in_bounds(),
//!     velocity: ctx.random_velocity(1.0),
//!     ..
//! };
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// SplitMix64 step, used to decorrelate per-index streams from one seed.
fn split_mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Context handed to spawn sites, with helpers for common spawn patterns.
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles being spawned.
    pub count: u32,
    /// Simulation width in pixels.
    pub width: f32,
    /// Simulation height in pixels.
    pub height: f32,
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context for one particle.
    ///
    /// The stream depends only on `(seed, index)`, so spawning is
    /// order-independent and reproducible.
    pub fn new(seed: u64, index: u32, count: u32, width: f32, height: f32) -> Self {
        Self {
            index,
            count,
            width,
            height,
            rng: SmallRng::seed_from_u64(split_mix(seed ^ u64::from(index))),
        }
    }

    /// Normalized progress through the spawn (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.count <= 1 {
            0.0
        } else {
            self.index as f32 / self.count as f32
        }
    }

    // ========== Random primitives ==========

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            min
        } else {
            self.rng.gen_range(min..max)
        }
    }

    /// Random usize below `bound` (0 when `bound` is 0).
    #[inline]
    pub fn random_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.rng.gen_range(0..bound)
        }
    }

    // ========== Position helpers ==========

    /// Uniform random point inside the simulation bounds.
    pub fn random_in_bounds(&mut self) -> Vec2 {
        Vec2::new(
            self.random_range(0.0, self.width),
            self.random_range(0.0, self.height),
        )
    }

    /// Point jittered uniformly within `±spread` of `center` on each axis.
    pub fn jitter_around(&mut self, center: Vec2, spread: f32) -> Vec2 {
        center
            + Vec2::new(
                (self.random() - 0.5) * 2.0 * spread,
                (self.random() - 0.5) * 2.0 * spread,
            )
    }

    /// Position on a ring around `center`, spaced evenly by spawn index.
    pub fn ring_position(&mut self, center: Vec2, radius: f32) -> Vec2 {
        let angle = self.progress() * TAU;
        center + Vec2::new(angle.cos(), angle.sin()) * radius
    }

    // ========== Velocity helpers ==========

    /// Random velocity with each component in `±speed/2`.
    ///
    /// This is the drift distribution of the ambient backgrounds: slow,
    /// directionless, centered on zero.
    pub fn random_velocity(&mut self, speed: f32) -> Vec2 {
        Vec2::new(
            (self.random() - 0.5) * speed,
            (self.random() - 0.5) * speed,
        )
    }

    /// Random phase in `0..TAU`.
    #[inline]
    pub fn random_phase(&mut self) -> f32 {
        self.random_range(0.0, TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SpawnContext::new(7, 3, 10, 800.0, 600.0);
        let mut b = SpawnContext::new(7, 3, 10, 800.0, 600.0);
        for _ in 0..32 {
            assert_eq!(a.random().to_bits(), b.random().to_bits());
        }
    }

    #[test]
    fn test_different_indices_decorrelate() {
        let mut a = SpawnContext::new(7, 0, 10, 800.0, 600.0);
        let mut b = SpawnContext::new(7, 1, 10, 800.0, 600.0);
        let same = (0..16).filter(|_| a.random() == b.random()).count();
        assert!(same < 16);
    }

    #[test]
    fn test_random_in_bounds_stays_inside() {
        let mut ctx = SpawnContext::new(1, 0, 1, 320.0, 240.0);
        for _ in 0..200 {
            let p = ctx.random_in_bounds();
            assert!(p.x >= 0.0 && p.x <= 320.0);
            assert!(p.y >= 0.0 && p.y <= 240.0);
        }
    }

    #[test]
    fn test_jitter_radius() {
        let mut ctx = SpawnContext::new(9, 0, 1, 100.0, 100.0);
        let center = Vec2::new(50.0, 50.0);
        for _ in 0..100 {
            let p = ctx.jitter_around(center, 10.0);
            assert!((p.x - center.x).abs() <= 10.0);
            assert!((p.y - center.y).abs() <= 10.0);
        }
    }

    #[test]
    fn test_ring_position_spacing() {
        let center = Vec2::new(0.0, 0.0);
        let mut first = SpawnContext::new(0, 0, 4, 100.0, 100.0);
        let mut third = SpawnContext::new(0, 2, 4, 100.0, 100.0);
        let a = first.ring_position(center, 10.0);
        let b = third.ring_position(center, 10.0);
        // Opposite points on the ring.
        assert!((a + b).length() < 1e-4);
    }
}
