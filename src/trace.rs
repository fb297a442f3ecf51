//! Static circuit-trace decoration.
//!
//! [`TraceOverlay`] is the non-dynamic corner of the crate: a fixed set of
//! line and elbow segments whose glow slowly cycles, plus a sparse layer of
//! drifting pulse nodes. There is no pairwise interaction and no pointer
//! force; the only motion is the node drift and the phase advances.
//!
//! Segments are described in normalized `0..1` coordinates so one pattern
//! scales to any bounds.

use crate::config::validate_bounds;
use crate::error::{ConfigError, RenderError};
use crate::render::{CurveDraw, ParticleDraw, RenderSink};
use crate::runner::Effect;
use crate::spawn::SpawnContext;
use glam::{Vec2, Vec3};

/// One glowing trace: 2 points for a straight run, 3 for an elbow.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSegment {
    /// Polyline corners in normalized `0..1` coordinates.
    pub points: Vec<Vec2>,
    glow: f32,
    glow_direction: f32,
    glow_speed: f32,
}

/// A slow-drifting node that pulses in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseNode {
    /// Position in canvas space.
    pub position: Vec2,
    velocity: Vec2,
    pulse: f32,
    pulse_speed: f32,
    size: f32,
    opacity: f32,
}

/// Options for a [`TraceOverlay`].
#[derive(Debug, Clone, PartialEq)]
pub struct TraceConfig {
    /// Number of drifting pulse nodes.
    pub node_count: usize,
    /// Node drift speed in pixels per frame.
    pub node_speed: f32,
    /// Base node radius in pixels.
    pub node_size: f32,
    /// Trace stroke color.
    pub trace_color: Vec3,
    /// Node fill color.
    pub node_color: Vec3,
    /// Trace stroke width in pixels.
    pub line_width: f32,
    /// Glow blur at full glow, in pixels.
    pub glow: f32,
    /// Seed for pattern jitter and node placement.
    pub seed: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            node_count: 15,
            node_speed: 0.5,
            node_size: 4.0,
            trace_color: Vec3::new(0.0, 1.0, 0.533),
            node_color: Vec3::new(0.0, 1.0, 1.0),
            line_width: 2.0,
            glow: 10.0,
            seed: 42,
        }
    }
}

/// Fixed glowing traces plus drifting pulse nodes.
pub struct TraceOverlay {
    config: TraceConfig,
    segments: Vec<TraceSegment>,
    nodes: Vec<PulseNode>,
    width: f32,
    height: f32,
}

impl TraceOverlay {
    /// The classic board layout: horizontal and vertical runs plus two
    /// elbows, in normalized coordinates.
    pub fn classic_pattern() -> Vec<Vec<Vec2>> {
        vec![
            // Horizontal runs
            vec![Vec2::new(0.1, 0.2), Vec2::new(0.3, 0.2)],
            vec![Vec2::new(0.7, 0.3), Vec2::new(0.9, 0.3)],
            vec![Vec2::new(0.1, 0.8), Vec2::new(0.4, 0.8)],
            // Vertical runs
            vec![Vec2::new(0.2, 0.1), Vec2::new(0.2, 0.4)],
            vec![Vec2::new(0.8, 0.6), Vec2::new(0.8, 0.9)],
            // Elbows
            vec![Vec2::new(0.5, 0.1), Vec2::new(0.5, 0.3), Vec2::new(0.7, 0.3)],
            vec![Vec2::new(0.3, 0.7), Vec2::new(0.3, 0.9), Vec2::new(0.6, 0.9)],
        ]
    }

    /// Build an overlay from a segment pattern.
    ///
    /// Glow phases and node placement derive from the config seed, so two
    /// overlays built alike animate alike.
    pub fn new(
        config: TraceConfig,
        pattern: Vec<Vec<Vec2>>,
        width: f32,
        height: f32,
    ) -> Result<Self, ConfigError> {
        validate_bounds(width, height)?;

        let segments = pattern
            .into_iter()
            .enumerate()
            .map(|(index, points)| {
                let mut ctx = SpawnContext::new(
                    config.seed ^ 0x7ace,
                    index as u32,
                    1,
                    width,
                    height,
                );
                TraceSegment {
                    points,
                    glow: ctx.random(),
                    glow_direction: if ctx.random() > 0.5 { 1.0 } else { -1.0 },
                    glow_speed: 0.01 + ctx.random() * 0.02,
                }
            })
            .collect();

        let nodes = (0..config.node_count)
            .map(|index| {
                let mut ctx = SpawnContext::new(
                    config.seed,
                    index as u32,
                    config.node_count as u32,
                    width,
                    height,
                );
                PulseNode {
                    position: ctx.random_in_bounds(),
                    velocity: ctx.random_velocity(config.node_speed),
                    pulse: ctx.random_phase(),
                    pulse_speed: 0.02 + ctx.random() * 0.02,
                    size: config.node_size + ctx.random() * 3.0,
                    opacity: 0.4 + ctx.random() * 0.6,
                }
            })
            .collect();

        Ok(Self {
            config,
            segments,
            nodes,
            width,
            height,
        })
    }

    /// Build with [`classic_pattern`](Self::classic_pattern).
    pub fn classic(config: TraceConfig, width: f32, height: f32) -> Result<Self, ConfigError> {
        Self::new(config, Self::classic_pattern(), width, height)
    }

    /// Advance glow cycles, node drift and pulse phases by `dt` frames.
    pub fn step(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 1.0 };

        for segment in &mut self.segments {
            segment.glow += segment.glow_direction * segment.glow_speed * dt;
            if segment.glow >= 1.0 || segment.glow <= 0.0 {
                segment.glow = segment.glow.clamp(0.0, 1.0);
                segment.glow_direction = -segment.glow_direction;
            }
        }

        let (w, h) = (self.width, self.height);
        for node in &mut self.nodes {
            node.position += node.velocity * dt;
            if (node.position.x <= 0.0 && node.velocity.x < 0.0)
                || (node.position.x >= w && node.velocity.x > 0.0)
            {
                node.velocity.x = -node.velocity.x;
            }
            if (node.position.y <= 0.0 && node.velocity.y < 0.0)
                || (node.position.y >= h && node.velocity.y > 0.0)
            {
                node.velocity.y = -node.velocity.y;
            }
            node.position.x = node.position.x.clamp(0.0, w);
            node.position.y = node.position.y.clamp(0.0, h);
            node.pulse += node.pulse_speed * dt;
        }
    }

    /// Emit traces (glow-weighted) and nodes (pulse-modulated).
    pub fn render(&self, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
        sink.frame_begin(self.width, self.height, None)?;

        let scale = Vec2::new(self.width, self.height);
        for segment in &self.segments {
            sink.curve(&CurveDraw {
                points: segment.points.iter().map(|p| *p * scale).collect(),
                color: self.config.trace_color,
                opacity: 0.2 + segment.glow * 0.6,
                width: self.config.line_width,
                glow: self.config.glow * segment.glow,
            })?;
        }

        for node in &self.nodes {
            sink.particle(&ParticleDraw {
                position: node.position,
                radius: (node.size + node.pulse.sin() * 2.0).max(0.5),
                rotation: 0.0,
                color: self.config.node_color,
                opacity: node.opacity,
                glow: node.size,
            })?;
        }

        sink.frame_end()
    }

    /// Update bounds; nodes are clamped inside.
    pub fn resize(&mut self, width: f32, height: f32) {
        if validate_bounds(width, height).is_err() {
            log::warn!("ignoring resize to {}x{}", width, height);
            return;
        }
        self.width = width;
        self.height = height;
        for node in &mut self.nodes {
            node.position.x = node.position.x.clamp(0.0, width);
            node.position.y = node.position.y.clamp(0.0, height);
        }
    }

    /// The trace segments.
    pub fn segments(&self) -> &[TraceSegment] {
        &self.segments
    }

    /// The drifting nodes.
    pub fn nodes(&self) -> &[PulseNode] {
        &self.nodes
    }
}

impl Effect for TraceOverlay {
    fn step(&mut self, dt: f32) {
        TraceOverlay::step(self, dt);
    }

    fn render(&self, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
        TraceOverlay::render(self, sink)
    }

    fn resize(&mut self, width: f32, height: f32) {
        TraceOverlay::resize(self, width, height);
    }
}
