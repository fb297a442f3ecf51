//! Frame scheduling and lifecycle.
//!
//! A [`FieldRunner`] binds an [`Effect`] (particle field, wave field,
//! overlay) to a render sink and a [`FrameClock`], and exposes one
//! [`tick`](FieldRunner::tick) the host calls from its per-frame callback.
//! Exactly one step+render pair runs per tick; nothing blocks.
//!
//! Pointer and resize events mutate state that the next tick reads. Both
//! sides run on the same thread, so a tick may observe a pointer position
//! delivered mid-frame; for a visual effect that is harmless and left as-is.
//!
//! Lifecycle:
//!
//! - [`pause`](FieldRunner::pause) / [`resume`](FieldRunner::resume) follow
//!   host visibility. Resuming continues from where the simulation stopped;
//!   the hidden interval is never replayed as a catch-up step.
//! - [`dispose`](FieldRunner::dispose) drops the sink and stops the loop for
//!   good. It is idempotent, and after it returns no further step or render
//!   executes.
//! - A render error skips the frame, logs a warning and keeps the loop
//!   alive; the effect silently stops producing output rather than
//!   surfacing an error to the viewer.

use crate::error::RenderError;
use crate::render::RenderSink;
use crate::time::FrameClock;

/// Anything the runner can drive: one `step` and one `render` per frame.
pub trait Effect {
    /// Advance the simulation by `dt` frames.
    fn step(&mut self, dt: f32);

    /// Emit the current frame's draw primitives.
    fn render(&self, sink: &mut dyn RenderSink) -> Result<(), RenderError>;

    /// Propagate new host-view bounds.
    fn resize(&mut self, width: f32, height: f32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunnerState {
    Running,
    Paused,
    Disposed,
}

/// Drives an effect from the host's per-frame callback.
pub struct FieldRunner<E: Effect, S: RenderSink> {
    effect: E,
    sink: Option<S>,
    clock: FrameClock,
    state: RunnerState,
    skipped_frames: u64,
}

impl<E: Effect, S: RenderSink> FieldRunner<E, S> {
    /// Bind an effect to a sink with a fresh clock.
    pub fn new(effect: E, sink: S) -> Self {
        Self {
            effect,
            sink: Some(sink),
            clock: FrameClock::new(),
            state: RunnerState::Running,
            skipped_frames: 0,
        }
    }

    /// Run one frame: measure the delta, step, render.
    ///
    /// Returns `true` if a frame ran. No-op while paused or after
    /// [`dispose`](Self::dispose).
    pub fn tick(&mut self) -> bool {
        if self.state != RunnerState::Running {
            return false;
        }

        let dt = self.clock.tick();
        self.effect.step(dt);

        if let Some(sink) = self.sink.as_mut() {
            if let Err(err) = self.effect.render(sink) {
                self.skipped_frames += 1;
                log::warn!("frame skipped: {}", err);
            }
        }
        true
    }

    /// Suspend stepping, typically because the host view went hidden.
    pub fn pause(&mut self) {
        if self.state == RunnerState::Running {
            self.state = RunnerState::Paused;
            self.clock.pause();
        }
    }

    /// Resume after [`pause`](Self::pause). The paused gap is swallowed, so
    /// the first frame back is a normal-sized step.
    pub fn resume(&mut self) {
        if self.state == RunnerState::Paused {
            self.state = RunnerState::Running;
            self.clock.resume();
        }
    }

    /// Follow a host visibility signal.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Stop the loop and release the sink. Idempotent: calling it again
    /// does nothing, and ticks after it never step or render.
    pub fn dispose(&mut self) {
        if self.state != RunnerState::Disposed {
            self.state = RunnerState::Disposed;
            self.sink = None;
            log::debug!("runner disposed after {} frames", self.clock.frame());
        }
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.state == RunnerState::Disposed
    }

    /// Whether ticks currently run frames.
    pub fn is_running(&self) -> bool {
        self.state == RunnerState::Running
    }

    /// Frames dropped because the sink reported an error.
    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }

    /// Forward new host-view bounds to the effect.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.state != RunnerState::Disposed {
            self.effect.resize(width, height);
        }
    }

    /// The driven effect, for event wiring.
    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// Mutable access to the driven effect, for event wiring.
    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    /// The runner's clock, e.g. to pin a fixed delta.
    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CurveDraw, LinkDraw, NullSink, ParticleDraw};

    /// Counts steps and renders; optionally fails every render.
    struct Probe {
        steps: u32,
        fail_render: bool,
    }

    impl Probe {
        fn new(fail_render: bool) -> Self {
            Self {
                steps: 0,
                fail_render,
            }
        }
    }

    impl Effect for Probe {
        fn step(&mut self, _dt: f32) {
            self.steps += 1;
        }

        fn render(&self, _sink: &mut dyn RenderSink) -> Result<(), RenderError> {
            if self.fail_render {
                Err(RenderError::SurfaceLost)
            } else {
                Ok(())
            }
        }

        fn resize(&mut self, _width: f32, _height: f32) {}
    }

    struct FailingSink;

    impl RenderSink for FailingSink {
        fn particle(&mut self, _: &ParticleDraw) -> Result<(), RenderError> {
            Err(RenderError::SurfaceLost)
        }
        fn link(&mut self, _: &LinkDraw) -> Result<(), RenderError> {
            Err(RenderError::SurfaceLost)
        }
        fn curve(&mut self, _: &CurveDraw) -> Result<(), RenderError> {
            Err(RenderError::SurfaceLost)
        }
    }

    #[test]
    fn test_tick_steps_once() {
        let mut runner = FieldRunner::new(Probe::new(false), NullSink);
        assert!(runner.tick());
        assert!(runner.tick());
        assert_eq!(runner.effect().steps, 2);
    }

    #[test]
    fn test_pause_stops_stepping() {
        let mut runner = FieldRunner::new(Probe::new(false), NullSink);
        runner.tick();
        runner.pause();
        assert!(!runner.tick());
        assert_eq!(runner.effect().steps, 1);

        runner.resume();
        assert!(runner.tick());
        assert_eq!(runner.effect().steps, 2);
    }

    #[test]
    fn test_render_error_skips_frame_but_loop_survives() {
        let mut runner = FieldRunner::new(Probe::new(true), NullSink);
        for _ in 0..5 {
            assert!(runner.tick());
        }
        // Every frame stepped, every render was dropped.
        assert_eq!(runner.effect().steps, 5);
        assert_eq!(runner.skipped_frames(), 5);
    }

    #[test]
    fn test_dispose_is_idempotent_and_final() {
        let mut runner = FieldRunner::new(Probe::new(false), NullSink);
        runner.tick();
        runner.dispose();
        runner.dispose();
        assert!(runner.is_disposed());

        assert!(!runner.tick());
        // resume() must not revive a disposed runner.
        runner.resume();
        runner.set_visible(true);
        assert!(!runner.tick());
        assert_eq!(runner.effect().steps, 1);
    }

    #[test]
    fn test_visibility_toggle() {
        let mut runner = FieldRunner::new(Probe::new(false), NullSink);
        runner.set_visible(false);
        assert!(!runner.is_running());
        runner.set_visible(true);
        assert!(runner.is_running());
    }

    #[test]
    fn test_failing_sink_counts_skips() {
        let field = crate::field::ParticleField::builder()
            .with_count(3)
            .build(100.0, 100.0)
            .unwrap();
        let mut runner = FieldRunner::new(field, FailingSink);
        runner.clock_mut().set_fixed_delta(Some(1.0));
        runner.tick();
        runner.tick();
        assert_eq!(runner.skipped_frames(), 2);
    }
}
