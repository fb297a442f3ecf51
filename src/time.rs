//! Frame timing.
//!
//! [`FrameClock`] converts wall-clock gaps between ticks into frame units
//! (one frame = 1/60 s) for [`step`](crate::field::ParticleField::step).
//! Two properties matter for ambient animation:
//!
//! - the delta is clamped to `max_delta`, so a tab that was throttled or
//!   hidden for a while resumes with a small step instead of a catch-up
//!   jump;
//! - pausing swallows the gap entirely: the first tick after
//!   [`resume`](FrameClock::resume) measures from the resume, not from the
//!   last pre-pause frame.
//!
//! A fixed delta is available for deterministic stepping in tests.

use std::time::Instant;

/// Seconds per simulation frame.
pub const FRAME_SECS: f32 = 1.0 / 60.0;

/// Per-tick frame-delta source with pause bookkeeping.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frame_count: u64,
    /// Fixed delta in frames, overriding wall-clock measurement.
    fixed_delta: Option<f32>,
    /// Upper bound on a single tick's delta, in frames.
    max_delta: f32,
    paused: bool,
}

impl FrameClock {
    /// A running clock with a 3-frame delta cap.
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frame_count: 0,
            fixed_delta: None,
            max_delta: 3.0,
            paused: false,
        }
    }

    /// Measure the delta since the previous tick, in frames.
    ///
    /// Returns 0 while paused. The result never exceeds `max_delta`.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        if self.paused {
            self.last_tick = now;
            return 0.0;
        }
        let raw = now.duration_since(self.last_tick).as_secs_f32() / FRAME_SECS;
        self.last_tick = now;
        self.frame_count += 1;
        self.fixed_delta.unwrap_or(raw).min(self.max_delta)
    }

    /// Ticks measured so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Whether the clock is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop measuring. Subsequent ticks return 0.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume measuring from now; the paused gap is not replayed.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.last_tick = Instant::now();
        }
    }

    /// Use a fixed delta (in frames) instead of wall-clock measurement.
    ///
    /// Pass `None` to return to measured deltas.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Change the single-tick delta cap, in frames.
    pub fn set_max_delta(&mut self, max_delta: f32) {
        self.max_delta = max_delta.max(0.0);
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_fixed_delta() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(1.0));
        thread::sleep(Duration::from_millis(40));
        assert_eq!(clock.tick(), 1.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_paused_ticks_are_zero() {
        let mut clock = FrameClock::new();
        clock.pause();
        thread::sleep(Duration::from_millis(10));
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.frame(), 0);
    }

    #[test]
    fn test_resume_swallows_the_gap() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.pause();
        thread::sleep(Duration::from_millis(50));
        clock.resume();
        // 50 ms gap would be ~3 frames; after resume the measured delta
        // restarts near zero.
        let dt = clock.tick();
        assert!(dt < 1.0, "got catch-up delta of {} frames", dt);
    }

    #[test]
    fn test_delta_clamped() {
        let mut clock = FrameClock::new();
        clock.set_max_delta(1.5);
        thread::sleep(Duration::from_millis(60));
        assert!(clock.tick() <= 1.5);
    }
}
