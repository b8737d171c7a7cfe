//! Animated transition of the selection offset.
//!
//! When the selection changes the strip slides from where it was drawn to
//! the new selection. The target is supplied on every query because offsets
//! can still move while widths are being measured.

use std::time::{Duration, Instant};

pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    started: Instant,
    duration: Duration,
}

impl Transition {
    pub fn new(from: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            started,
            duration,
        }
    }

    /// Fraction of the transition elapsed at `now`, in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value between the start value and `to`.
    pub fn value_at(&self, to: f32, now: Instant) -> f32 {
        self.from + (to - self.from) * self.progress(now)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
