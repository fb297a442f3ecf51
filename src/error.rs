//! Error types for driftfield.
//!
//! This module provides error types for field construction and for render
//! sinks that become unavailable mid-loop.

use std::fmt;

/// Errors produced by field construction.
///
/// Construction fails fast: an out-of-range option is reported here instead
/// of silently producing a misbehaving field.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `speed` must be strictly positive.
    NonPositiveSpeed(f32),
    /// `size_range` needs `0 < min <= max`.
    InvalidSizeRange {
        /// Smallest radius requested.
        min: f32,
        /// Largest radius requested.
        max: f32,
    },
    /// `friction` must lie in `(0, 1]`.
    InvalidFriction(f32),
    /// `restitution` must lie in `(0, 1]`.
    InvalidRestitution(f32),
    /// Burst decay must lie in `(0, 1)`.
    InvalidBurstDecay(f32),
    /// A distance option (`link_distance`, `pointer_radius`) must be finite
    /// and non-negative.
    NegativeDistance {
        /// Which option was rejected.
        option: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// Simulation bounds must be strictly positive in both dimensions.
    InvalidBounds {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
    /// A wave field needs at least one wave.
    NoWaves,
    /// Wave sampling resolution must be strictly positive.
    NonPositiveResolution(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveSpeed(v) => {
                write!(f, "speed must be > 0, got {}", v)
            }
            ConfigError::InvalidSizeRange { min, max } => {
                write!(f, "size range needs 0 < min <= max, got {}..{}", min, max)
            }
            ConfigError::InvalidFriction(v) => {
                write!(f, "friction must be in (0, 1], got {}", v)
            }
            ConfigError::InvalidRestitution(v) => {
                write!(f, "restitution must be in (0, 1], got {}", v)
            }
            ConfigError::InvalidBurstDecay(v) => {
                write!(f, "burst decay must be in (0, 1), got {}", v)
            }
            ConfigError::NegativeDistance { option, value } => {
                write!(f, "{} must be finite and >= 0, got {}", option, value)
            }
            ConfigError::InvalidBounds { width, height } => {
                write!(f, "bounds must be positive, got {}x{}", width, height)
            }
            ConfigError::NoWaves => write!(f, "wave field needs at least one wave"),
            ConfigError::NonPositiveResolution(v) => {
                write!(f, "sample resolution must be > 0, got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors reported by a render sink during a frame.
///
/// A render error never propagates out of the frame loop: the runner skips
/// the frame, logs a warning, and tries again on the next tick.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The drawing surface is gone (detached canvas, dropped context).
    SurfaceLost,
    /// The sink rejected a primitive for its own reasons.
    Sink(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "render surface is no longer available"),
            RenderError::Sink(msg) => write!(f, "render sink error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<String> for RenderError {
    fn from(msg: String) -> Self {
        RenderError::Sink(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSizeRange { min: 4.0, max: 1.0 };
        assert!(err.to_string().contains("4..1"));

        let err = ConfigError::NegativeDistance {
            option: "link_distance",
            value: -1.0,
        };
        assert!(err.to_string().contains("link_distance"));
    }

    #[test]
    fn test_render_error_from_string() {
        let err: RenderError = "canvas detached".to_string().into();
        assert_eq!(err, RenderError::Sink("canvas detached".to_string()));
    }
}
