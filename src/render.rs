//! Pluggable render sinks.
//!
//! A field never touches a surface directly. Each frame it emits draw
//! primitives - filled circles, links, polyline curves - into a
//! [`RenderSink`], and the sink decides what they become: canvas arcs and
//! strokes, CSS transforms on externally-owned elements, or nothing at all.
//! The sink borrows the surface; it is created and torn down by whoever owns
//! the host view.
//!
//! Sinks are fallible. A sink that loses its surface mid-loop returns
//! [`RenderError`]; the frame is dropped and the loop carries on.
//!
//! # Writing a sink
//!
//! ```ignore
//! struct CanvasSink<'a> { ctx: &'a mut Context2d }
//!
//! impl RenderSink for CanvasSink<'_> {
//!     fn particle(&mut self, p: &ParticleDraw) -> Result<(), RenderError> {
//!         self.ctx.fill_circle(p.position, p.radius, p.color, p.opacity);
//!         Ok(())
//!     }
//!     fn link(&mut self, l: &LinkDraw) -> Result<(), RenderError> {
//!         self.ctx.stroke_line(l.from, l.to, l.color, l.opacity, l.width);
//!         Ok(())
//!     }
//!     fn curve(&mut self, _: &CurveDraw) -> Result<(), RenderError> { Ok(()) }
//! }
//! ```

use crate::error::RenderError;
use glam::{Vec2, Vec3};

/// One particle, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleDraw {
    /// Center in canvas space.
    pub position: Vec2,
    /// Radius after pulse modulation, in pixels.
    pub radius: f32,
    /// Render-only rotation in radians, for placed-element sinks.
    pub rotation: f32,
    /// RGB color, 0.0-1.0 per channel.
    pub color: Vec3,
    /// Final opacity (base opacity times life fade).
    pub opacity: f32,
    /// Glow blur radius in pixels. 0 means no glow.
    pub glow: f32,
}

/// A line between two nearby particles, or from a particle to the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkDraw {
    /// One endpoint.
    pub from: Vec2,
    /// The other endpoint.
    pub to: Vec2,
    /// RGB color, 0.0-1.0 per channel.
    pub color: Vec3,
    /// Opacity with linear distance falloff already applied.
    pub opacity: f32,
    /// Stroke width in pixels.
    pub width: f32,
}

/// A sampled polyline (wave crests, circuit traces).
#[derive(Debug, Clone, PartialEq)]
pub struct CurveDraw {
    /// Sampled points, in drawing order.
    pub points: Vec<Vec2>,
    /// RGB color, 0.0-1.0 per channel.
    pub color: Vec3,
    /// Stroke opacity.
    pub opacity: f32,
    /// Stroke width in pixels.
    pub width: f32,
    /// Glow blur radius in pixels. 0 means no glow.
    pub glow: f32,
}

/// Receives one frame's worth of draw primitives.
///
/// `frame_begin` and `frame_end` have no-op defaults; sinks that buffer or
/// clear per frame override them.
pub trait RenderSink {
    /// Start a frame. `background` is the requested clear color, if any.
    fn frame_begin(
        &mut self,
        width: f32,
        height: f32,
        background: Option<Vec3>,
    ) -> Result<(), RenderError> {
        let _ = (width, height, background);
        Ok(())
    }

    /// Draw one particle.
    fn particle(&mut self, particle: &ParticleDraw) -> Result<(), RenderError>;

    /// Draw one link.
    fn link(&mut self, link: &LinkDraw) -> Result<(), RenderError>;

    /// Draw one polyline.
    fn curve(&mut self, curve: &CurveDraw) -> Result<(), RenderError>;

    /// Finish a frame.
    fn frame_end(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Discards everything. Useful for headless stepping and benches.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn particle(&mut self, _: &ParticleDraw) -> Result<(), RenderError> {
        Ok(())
    }

    fn link(&mut self, _: &LinkDraw) -> Result<(), RenderError> {
        Ok(())
    }

    fn curve(&mut self, _: &CurveDraw) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Buffers the current frame's primitives for inspection.
///
/// Each `frame_begin` clears the previous frame, so after a render the sink
/// holds exactly one frame.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    /// Particles drawn this frame, in draw order.
    pub particles: Vec<ParticleDraw>,
    /// Links drawn this frame, in draw order.
    pub links: Vec<LinkDraw>,
    /// Curves drawn this frame, in draw order.
    pub curves: Vec<CurveDraw>,
    /// Completed frames since creation.
    pub frames: u64,
}

impl RecordingSink {
    /// An empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for RecordingSink {
    fn frame_begin(
        &mut self,
        _width: f32,
        _height: f32,
        _background: Option<Vec3>,
    ) -> Result<(), RenderError> {
        self.particles.clear();
        self.links.clear();
        self.curves.clear();
        Ok(())
    }

    fn particle(&mut self, particle: &ParticleDraw) -> Result<(), RenderError> {
        self.particles.push(particle.clone());
        Ok(())
    }

    fn link(&mut self, link: &LinkDraw) -> Result<(), RenderError> {
        self.links.push(link.clone());
        Ok(())
    }

    fn curve(&mut self, curve: &CurveDraw) -> Result<(), RenderError> {
        self.curves.push(curve.clone());
        Ok(())
    }

    fn frame_end(&mut self) -> Result<(), RenderError> {
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_clears_per_frame() {
        let mut sink = RecordingSink::new();
        let dot = ParticleDraw {
            position: Vec2::ZERO,
            radius: 2.0,
            rotation: 0.0,
            color: Vec3::ONE,
            opacity: 1.0,
            glow: 0.0,
        };

        sink.frame_begin(100.0, 100.0, None).unwrap();
        sink.particle(&dot).unwrap();
        sink.particle(&dot).unwrap();
        sink.frame_end().unwrap();
        assert_eq!(sink.particles.len(), 2);
        assert_eq!(sink.frames, 1);

        sink.frame_begin(100.0, 100.0, None).unwrap();
        sink.frame_end().unwrap();
        assert!(sink.particles.is_empty());
        assert_eq!(sink.frames, 2);
    }
}
