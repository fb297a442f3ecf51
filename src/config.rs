//! Field configuration.
//!
//! [`FieldConfig`] collects every recognized simulation option with the
//! defaults used by the classic "network" background (80 drifting dots,
//! 150 px links, pointer repulsion). Options are validated once, up front:
//! [`FieldConfig::validate`] returns a [`ConfigError`] for anything out of
//! range instead of letting a bad value warp the simulation at runtime.
//!
//! # Example
//!
//! ```ignore
//! let field = ParticleField::builder()
//!     .with_count(120)
//!     .with_speed(1.5)
//!     .with_size_range(1.0, 4.0)
//!     .with_pointer(PointerMode::Attract)
//!     .build(800.0, 600.0)?;
//! ```

use crate::error::ConfigError;

/// Whether and how pointer proximity perturbs particle velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerMode {
    /// Pointer is ignored.
    None,
    /// Particles within [`FieldConfig::pointer_radius`] are pushed away.
    #[default]
    Repulse,
    /// Particles within [`FieldConfig::pointer_radius`] are pulled in.
    Attract,
}

/// Behavior when a particle reaches a canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Clamp position back inside and reflect the velocity component on the
    /// collision axis (scaled by [`FieldConfig::restitution`]).
    #[default]
    Reflect,
    /// Clamp position only; velocity is left untouched and friction
    /// eventually stills edge-pinned particles.
    Clamp,
}

/// Per-particle radius sampling range, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRange {
    /// Smallest radius. Must be > 0.
    pub min: f32,
    /// Largest radius. Must be >= `min`.
    pub max: f32,
}

impl Default for SizeRange {
    fn default() -> Self {
        Self { min: 1.0, max: 4.0 }
    }
}

/// Click-triggered burst injection settings.
///
/// Bursts add short-lived particles on top of the base population. The total
/// is capped at `count + headroom`; the cap and the decay rate are the
/// source material's constants, kept configurable rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstConfig {
    /// Particles injected per burst.
    pub count: u32,
    /// Multiplicative life decay per frame, in (0, 1).
    pub decay: f32,
    /// How many burst particles may exist beyond the base population.
    pub headroom: usize,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: 4,
            decay: 0.98,
            headroom: 20,
        }
    }
}

/// Recognized simulation options for a [`ParticleField`](crate::field::ParticleField).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Initial particle count.
    pub count: usize,
    /// Drift speed scale in pixels per frame; initial velocity components
    /// are sampled in `±speed/2`.
    pub speed: f32,
    /// Per-particle radius sampling range.
    pub size_range: SizeRange,
    /// Maximum pairwise distance at which a link is drawn. 0 disables links.
    pub link_distance: f32,
    /// Pointer interaction mode.
    pub pointer: PointerMode,
    /// Distance threshold for pointer interaction, in pixels.
    pub pointer_radius: f32,
    /// Velocity change per frame at zero pointer distance.
    pub pointer_strength: f32,
    /// Per-frame multiplicative velocity damping, in (0, 1].
    pub friction: f32,
    /// Edge behavior.
    pub boundary: BoundaryPolicy,
    /// Velocity fraction retained by a reflection, in (0, 1].
    pub restitution: f32,
    /// Click burst settings. `None` disables click bursts.
    pub burst: Option<BurstConfig>,
    /// Velocity component clamp. Defaults to `2 * speed` when `None`.
    pub max_velocity: Option<f32>,
    /// Seed for the field's random streams. Same seed, same trajectories.
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 80,
            speed: 1.0,
            size_range: SizeRange::default(),
            link_distance: 150.0,
            pointer: PointerMode::Repulse,
            pointer_radius: 100.0,
            pointer_strength: 0.5,
            friction: 0.99,
            boundary: BoundaryPolicy::Reflect,
            restitution: 1.0,
            burst: None,
            max_velocity: None,
            seed: 42,
        }
    }
}

impl FieldConfig {
    /// The effective velocity component clamp.
    #[inline]
    pub fn velocity_limit(&self) -> f32 {
        self.max_velocity.unwrap_or(self.speed * 2.0)
    }

    /// Check every option, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed > 0.0 && self.speed.is_finite()) {
            return Err(ConfigError::NonPositiveSpeed(self.speed));
        }
        let SizeRange { min, max } = self.size_range;
        if !(min > 0.0 && min <= max && min.is_finite() && max.is_finite()) {
            return Err(ConfigError::InvalidSizeRange { min, max });
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !(self.restitution > 0.0 && self.restitution <= 1.0) {
            return Err(ConfigError::InvalidRestitution(self.restitution));
        }
        for (option, value) in [
            ("link_distance", self.link_distance),
            ("pointer_radius", self.pointer_radius),
            ("max_velocity", self.max_velocity.unwrap_or(0.0)),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::NegativeDistance { option, value });
            }
        }
        if let Some(burst) = &self.burst {
            if !(burst.decay > 0.0 && burst.decay < 1.0) {
                return Err(ConfigError::InvalidBurstDecay(burst.decay));
            }
        }
        Ok(())
    }
}

/// Validate simulation bounds.
pub(crate) fn validate_bounds(width: f32, height: f32) -> Result<(), ConfigError> {
    if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_size_range_rejected() {
        let config = FieldConfig {
            size_range: SizeRange { min: 5.0, max: 2.0 },
            ..FieldConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSizeRange { min: 5.0, max: 2.0 })
        );
    }

    #[test]
    fn test_friction_bounds() {
        for bad in [0.0, -0.5, 1.5, f32::NAN] {
            let config = FieldConfig {
                friction: bad,
                ..FieldConfig::default()
            };
            assert!(config.validate().is_err(), "friction {} accepted", bad);
        }
        let config = FieldConfig {
            friction: 1.0,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_link_distance_rejected() {
        let config = FieldConfig {
            link_distance: -1.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeDistance { option: "link_distance", .. })
        ));
    }

    #[test]
    fn test_burst_decay_bounds() {
        let config = FieldConfig {
            burst: Some(BurstConfig {
                decay: 1.0,
                ..BurstConfig::default()
            }),
            ..FieldConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidBurstDecay(1.0)));
    }

    #[test]
    fn test_velocity_limit_defaults_to_twice_speed() {
        let config = FieldConfig {
            speed: 1.5,
            ..FieldConfig::default()
        };
        assert_eq!(config.velocity_limit(), 3.0);

        let config = FieldConfig {
            max_velocity: Some(5.0),
            ..config
        };
        assert_eq!(config.velocity_limit(), 5.0);
    }

    #[test]
    fn test_bounds_validation() {
        assert!(validate_bounds(800.0, 600.0).is_ok());
        assert!(validate_bounds(0.0, 600.0).is_err());
        assert!(validate_bounds(800.0, f32::INFINITY).is_err());
    }
}
