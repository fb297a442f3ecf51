//! # Driftfield - ambient 2D particle fields
//!
//! CPU-side decorative particle simulation with a simple, declarative API.
//!
//! Driftfield owns the simulation - integration, pointer forces, pairwise
//! separation, boundary handling, link computation - and emits plain draw
//! primitives into a sink you provide, so the same field can back a canvas,
//! a set of positioned DOM elements, or a headless test.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::prelude::*;
//!
//! let field = ParticleField::builder()
//!     .with_count(80)
//!     .with_speed(1.0)
//!     .with_link_distance(150.0)
//!     .with_pointer(PointerMode::Repulse)
//!     .with_burst(BurstConfig::default())
//!     .build(800.0, 600.0)?;
//!
//! let mut runner = FieldRunner::new(field, my_sink);
//!
//! // From the host's per-frame callback:
//! runner.tick();
//!
//! // From event handlers:
//! runner.effect_mut().pointer_moved(pointer);
//! runner.set_visible(document_visible);
//!
//! // On teardown:
//! runner.dispose();
//! ```
//!
//! ## Core Concepts
//!
//! ### Fields
//!
//! A [`ParticleField`] is a bounded swarm of point particles. Every frame it
//! integrates positions, applies the pointer force and pairwise overlap
//! separation, damps and clamps velocities, handles the boundary, and
//! retires decayed burst particles. Construction is validated up front - an
//! out-of-range option is a [`ConfigError`], never a quietly broken field.
//!
//! ### Sinks
//!
//! Rendering goes through the [`RenderSink`] trait: filled circles, links
//! with distance-faded opacity, and polyline curves. Sinks decide what the
//! primitives become. [`RecordingSink`] buffers a frame for inspection;
//! [`NullSink`] discards everything.
//!
//! ### Runner
//!
//! A [`FieldRunner`] drives any [`Effect`] from the host's frame callback:
//! one step+render per tick, pause/resume on visibility changes without
//! catch-up jumps, and an idempotent [`dispose`](FieldRunner::dispose) that
//! stops the loop for good. A failing sink skips the frame and the loop
//! carries on.
//!
//! ### Variants
//!
//! | Component | Use |
//! |-----------|-----|
//! | [`ParticleField`] | Drifting dots, linked networks, draggable bubbles, click bursts |
//! | [`WaveField`] | Stacked sine curves with pointer deformation |
//! | [`TraceOverlay`] | Static circuit traces with cycling glow and pulse nodes |
//!
//! ## Determinism
//!
//! Every random stream derives from the configured seed. Two fields built
//! with the same seed and fed the same pointer and delta inputs produce
//! identical trajectories, which is what makes the simulation testable.
//!
//! ## Scale
//!
//! The link and separation passes are O(n²) per frame; the intended
//! population is tens to low hundreds of particles. Larger counts call for
//! a uniform spatial grid in front of both passes.

pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod render;
pub mod runner;
pub mod spawn;
pub mod time;
pub mod trace;
pub mod visuals;
pub mod wave;

pub use config::{BoundaryPolicy, BurstConfig, FieldConfig, PointerMode, SizeRange};
pub use error::{ConfigError, RenderError};
pub use field::{FieldBuilder, ParticleField};
pub use glam::{Vec2, Vec3};
pub use particle::Particle;
pub use render::{CurveDraw, LinkDraw, NullSink, ParticleDraw, RecordingSink, RenderSink};
pub use runner::{Effect, FieldRunner};
pub use spawn::SpawnContext;
pub use time::FrameClock;
pub use trace::{TraceConfig, TraceOverlay};
pub use visuals::{Palette, VisualConfig};
pub use wave::{Wave, WaveConfig, WaveField};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{BoundaryPolicy, BurstConfig, FieldConfig, PointerMode, SizeRange};
    pub use crate::error::{ConfigError, RenderError};
    pub use crate::field::{FieldBuilder, ParticleField};
    pub use crate::particle::Particle;
    pub use crate::render::{
        CurveDraw, LinkDraw, NullSink, ParticleDraw, RecordingSink, RenderSink,
    };
    pub use crate::runner::{Effect, FieldRunner};
    pub use crate::spawn::SpawnContext;
    pub use crate::time::FrameClock;
    pub use crate::trace::{TraceConfig, TraceOverlay};
    pub use crate::visuals::{Palette, VisualConfig};
    pub use crate::wave::{Wave, WaveConfig, WaveField};
    pub use crate::{Vec2, Vec3};
}
