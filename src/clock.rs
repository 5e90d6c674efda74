// SPDX: CC0-1.0

use std::time::{Duration, Instant};

/// Time between the two most recent frames, read from the monotonic clock.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_tick: Instant,
    now_tick: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self::start_at(Instant::now())
    }

    pub const fn start_at(now: Instant) -> Self {
        Self {
            last_tick: now,
            now_tick: now,
        }
    }

    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Duration {
        self.last_tick = self.now_tick;
        self.now_tick = now;
        self.delta()
    }

    #[inline]
    pub fn delta(&self) -> Duration {
        // never negative, even if handed an earlier instant
        self.now_tick.saturating_duration_since(self.last_tick)
    }

    #[inline]
    pub fn delta_seconds(&self) -> f64 {
        self.delta().as_secs_f64()
    }
}
