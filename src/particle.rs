//! The particle entity.
//!
//! A [`Particle`] is a point body in canvas space: position and velocity in
//! pixels, a radius, a resolved color, and a handful of render-only
//! attributes (pulse phase, rotation). Burst-spawned particles additionally
//! carry a decaying `life` and are removed once it drops below
//! [`LIFE_REMOVAL_THRESHOLD`].

use glam::Vec2;

/// Initial energy assigned to burst-spawned particles.
pub const LIFE_FULL: f32 = 100.0;

/// Particles whose life decays below this value are removed from the field.
pub const LIFE_REMOVAL_THRESHOLD: f32 = 1.0;

/// A simulated point entity with position, velocity and rendering attributes.
///
/// Positions are canvas-space pixels, velocities are pixels per frame
/// (one frame = 1/60 s). Fields are public: the particle is plain data and
/// the owning [`ParticleField`](crate::field::ParticleField) enforces the
/// invariants (positive radius, clamped velocity, in-bounds position) on
/// every step.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position in canvas space.
    pub position: Vec2,
    /// Velocity in pixels per frame.
    pub velocity: Vec2,
    /// Body radius in pixels. Always > 0.
    pub radius: f32,
    /// Resolved RGB color, each channel in 0.0-1.0.
    pub color: glam::Vec3,
    /// Remaining energy for burst particles. `None` for the base population.
    pub life: Option<f32>,
    /// Per-frame multiplicative life decay, only meaningful with `life`.
    pub decay: f32,
    /// Oscillation phase for render-only size/opacity modulation.
    pub pulse: f32,
    /// Phase advance per frame.
    pub pulse_speed: f32,
    /// Render-only rotation in radians (placed-element sinks use it).
    pub rotation: f32,
    /// Rotation advance per frame in radians.
    pub rotation_speed: f32,
    /// Pinned to the pointer this frame. Mutually exclusive with `hovered`.
    pub dragging: bool,
    /// Pointer currently inside the body. Mutually exclusive with `dragging`.
    pub hovered: bool,
}

impl Particle {
    /// A stationary particle at `position` with the given radius and color.
    ///
    /// Everything else starts at rest: no velocity, no life decay, zeroed
    /// phases, no pointer state.
    pub fn at(position: Vec2, radius: f32, color: glam::Vec3) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            color,
            life: None,
            decay: 1.0,
            pulse: 0.0,
            pulse_speed: 0.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            dragging: false,
            hovered: false,
        }
    }

    /// Whether this particle's life has decayed below the removal threshold.
    #[inline]
    pub fn is_expired(&self) -> bool {
        matches!(self.life, Some(life) if life < LIFE_REMOVAL_THRESHOLD)
    }

    /// Opacity factor contributed by remaining life.
    ///
    /// `1.0` for the base population, `life / 100` for burst particles, so a
    /// decaying particle fades out instead of popping.
    #[inline]
    pub fn fade(&self) -> f32 {
        match self.life {
            Some(life) => (life / LIFE_FULL).clamp(0.0, 1.0),
            None => 1.0,
        }
    }

    /// Advance the life decay by `dt` frames.
    #[inline]
    pub(crate) fn decay_life(&mut self, dt: f32) {
        if let Some(life) = self.life.as_mut() {
            *life *= self.decay.powf(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_base_particle_never_expires() {
        let p = Particle::at(Vec2::new(10.0, 10.0), 2.0, Vec3::ONE);
        assert!(!p.is_expired());
        assert_eq!(p.fade(), 1.0);
    }

    #[test]
    fn test_life_decay_and_expiry() {
        let mut p = Particle::at(Vec2::ZERO, 2.0, Vec3::ONE);
        p.life = Some(LIFE_FULL);
        p.decay = 0.9;

        p.decay_life(1.0);
        assert!((p.life.unwrap() - 90.0).abs() < 1e-4);
        assert!(!p.is_expired());

        // Removal is bounded: life crosses the threshold within
        // ceil(ln(1/100) / ln(decay)) frames of full life.
        let bound = ((1.0f32 / LIFE_FULL).ln() / 0.9f32.ln()).ceil() as u32;
        let mut frames = 1;
        while !p.is_expired() {
            p.decay_life(1.0);
            frames += 1;
            assert!(frames <= bound, "expiry not reached within {} frames", bound);
        }
    }

    #[test]
    fn test_fade_tracks_life() {
        let mut p = Particle::at(Vec2::ZERO, 2.0, Vec3::ONE);
        p.life = Some(50.0);
        assert!((p.fade() - 0.5).abs() < 1e-6);
        p.life = Some(0.5);
        assert!(p.is_expired());
    }
}
