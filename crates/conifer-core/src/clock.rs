//! Frame timing for the render loop.
//!
//! Produces the `(delta, elapsed)` pair the animator consumes each frame.
//! Deltas are clamped to `max_delta` so a stalled frame (window drag, debugger
//! pause) does not make the ensemble jump, and elapsed time is the sum of the
//! clamped deltas so the two always agree.

use crate::constants::MAX_FRAME_DELTA_SEC;
use instant::Instant;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    /// Accumulated in f64 so long sessions keep sub-millisecond precision.
    elapsed_secs: f64,
    frame_count: u64,
    max_delta: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_delta(MAX_FRAME_DELTA_SEC)
    }

    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            elapsed_secs: 0.0,
            frame_count: 0,
            max_delta: max_delta.max(0.0),
        }
    }

    /// Sample the wall clock. Call once per frame.
    ///
    /// Returns `(delta, elapsed)` in seconds.
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let raw = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.step(raw)
    }

    /// Advance by an explicit duration instead of the wall clock.
    pub fn step(&mut self, raw_delta: Duration) -> (f32, f32) {
        let delta = raw_delta.as_secs_f32().min(self.max_delta);
        self.elapsed_secs += delta as f64;
        self.frame_count += 1;
        (delta, self.elapsed())
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs as f32
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }
}
