//! Parametric wave field.
//!
//! [`WaveField`] is not a particle system: its "particles" are sample points
//! along stacked sine curves, so it gets its own small component instead of
//! being forced through [`ParticleField`](crate::field::ParticleField).
//! Each wave is a two-term sine stack - a base oscillation plus a faster,
//! smaller harmonic - drifting horizontally over time, with a local bump
//! where the pointer is near the curve.
//!
//! # Example
//!
//! ```ignore
//! let mut waves = WaveField::new(WaveConfig::default(), 800.0, 400.0)?;
//! waves.pointer_moved(Vec2::new(400.0, 200.0));
//! waves.step(1.0);
//! waves.render(&mut sink)?;
//! ```

use crate::config::validate_bounds;
use crate::error::{ConfigError, RenderError};
use crate::render::{CurveDraw, RenderSink};
use crate::runner::Effect;
use crate::spawn::SpawnContext;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Time advance per frame; waves drift at `speed` phase units per tick of
/// this clock.
const TIME_STEP: f32 = 0.016;

/// Maximum pointer bump in pixels at full influence.
const POINTER_BUMP: f32 = 30.0;

/// One sine curve in the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    /// Peak height of the base oscillation, in pixels.
    pub amplitude: f32,
    /// Spatial frequency in radians per pixel.
    pub frequency: f32,
    /// Phase offset in radians.
    pub phase: f32,
    /// Temporal drift speed.
    pub speed: f32,
    /// Vertical offset from the field's center line, in pixels.
    pub offset: f32,
    /// Stroke opacity.
    pub opacity: f32,
    /// How strongly the pointer deforms this wave.
    pub pointer_influence: f32,
}

/// Options for a [`WaveField`].
#[derive(Debug, Clone, PartialEq)]
pub struct WaveConfig {
    /// Number of stacked waves.
    pub count: usize,
    /// Horizontal sampling step in pixels.
    pub resolution: f32,
    /// Vertical spacing between consecutive waves, in pixels.
    pub spacing: f32,
    /// Pointer influence radius in pixels.
    pub pointer_radius: f32,
    /// Stroke color.
    pub color: Vec3,
    /// Stroke width in pixels.
    pub line_width: f32,
    /// Glow blur for every other wave, in pixels. 0 disables.
    pub glow: f32,
    /// Seed for wave parameter sampling.
    pub seed: u64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            count: 8,
            resolution: 3.0,
            spacing: 80.0,
            pointer_radius: 200.0,
            color: Vec3::ONE,
            line_width: 1.5,
            glow: 10.0,
            seed: 42,
        }
    }
}

/// A stack of drifting sine curves with pointer deformation.
pub struct WaveField {
    config: WaveConfig,
    waves: Vec<Wave>,
    time: f32,
    width: f32,
    height: f32,
    pointer: Vec2,
}

impl WaveField {
    /// Sample the wave parameters and start at time zero.
    ///
    /// The pointer starts at the center of the field, which is also where
    /// it returns on [`pointer_left`](Self::pointer_left).
    pub fn new(config: WaveConfig, width: f32, height: f32) -> Result<Self, ConfigError> {
        if config.count == 0 {
            return Err(ConfigError::NoWaves);
        }
        if !(config.resolution > 0.0 && config.resolution.is_finite()) {
            return Err(ConfigError::NonPositiveResolution(config.resolution));
        }
        validate_bounds(width, height)?;

        let waves = (0..config.count)
            .map(|index| {
                let mut ctx = SpawnContext::new(
                    config.seed,
                    index as u32,
                    config.count as u32,
                    width,
                    height,
                );
                Wave {
                    amplitude: 30.0 + ctx.random() * 50.0,
                    frequency: 0.01 + ctx.random() * 0.02,
                    phase: ctx.random_phase(),
                    speed: 0.02 + ctx.random() * 0.03,
                    offset: index as f32 * config.spacing,
                    opacity: 0.1 + ctx.random() * 0.3,
                    pointer_influence: 0.5 + ctx.random() * 1.5,
                }
            })
            .collect();

        Ok(Self {
            waves,
            time: 0.0,
            width,
            height,
            pointer: Vec2::new(width / 2.0, height / 2.0),
            config,
        })
    }

    /// Advance the drift clock by `dt` frames.
    pub fn step(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 1.0 };
        self.time += TIME_STEP * dt;
    }

    /// Height of `wave` at horizontal position `x`, in canvas space.
    pub fn sample(&self, wave: &Wave, x: f32) -> f32 {
        let t = self.time;
        let mut y = (x * wave.frequency + wave.phase + t * wave.speed).sin() * wave.amplitude;
        y += (x * wave.frequency * 1.5 + wave.phase * 0.7 + t * wave.speed * 1.3).sin()
            * wave.amplitude
            * 0.3;

        let center = wave.offset + self.height / 2.0;
        let dist = Vec2::new(x, y + center).distance(self.pointer);
        if dist < self.config.pointer_radius {
            let influence = (self.config.pointer_radius - dist) / self.config.pointer_radius;
            y += (influence * PI).sin() * wave.pointer_influence * POINTER_BUMP;
        }

        y + center
    }

    /// Sample one wave across the full width.
    pub fn polyline(&self, wave: &Wave) -> Vec<Vec2> {
        let mut points = Vec::with_capacity((self.width / self.config.resolution) as usize + 2);
        let mut x = 0.0;
        while x <= self.width {
            points.push(Vec2::new(x, self.sample(wave, x)));
            x += self.config.resolution;
        }
        points
    }

    /// Emit every wave as a polyline; alternating waves carry glow.
    pub fn render(&self, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
        sink.frame_begin(self.width, self.height, None)?;
        for (index, wave) in self.waves.iter().enumerate() {
            sink.curve(&CurveDraw {
                points: self.polyline(wave),
                color: self.config.color,
                opacity: wave.opacity,
                width: self.config.line_width,
                glow: if index % 2 == 0 { self.config.glow } else { 0.0 },
            })?;
        }
        sink.frame_end()
    }

    /// Record a new pointer position.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// The pointer left the host view; deformation recenters.
    pub fn pointer_left(&mut self) {
        self.pointer = Vec2::new(self.width / 2.0, self.height / 2.0);
    }

    /// Update the field bounds; the pointer recenters.
    pub fn resize(&mut self, width: f32, height: f32) {
        if validate_bounds(width, height).is_err() {
            log::warn!("ignoring resize to {}x{}", width, height);
            return;
        }
        self.width = width;
        self.height = height;
        self.pointer_left();
    }

    /// The sampled waves.
    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }
}

impl Effect for WaveField {
    fn step(&mut self, dt: f32) {
        WaveField::step(self, dt);
    }

    fn render(&self, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
        WaveField::render(self, sink)
    }

    fn resize(&mut self, width: f32, height: f32) {
        WaveField::resize(self, width, height);
    }
}
