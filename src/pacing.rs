//! Frame pacing
//!
//! Ties wall-clock time to the fixed tick the way the original vsync timer
//! did: at most one tick per check, and time lost to a slow host is dropped
//! rather than caught up. Under load the game runs slower, never faster.

use std::time::{Duration, Instant};

use crate::consts::TICK_PERIOD;

/// Decides when the next simulation tick is due
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    last_tick: Instant,
    /// Ticks granted since creation
    pub ticks_elapsed: u64,
}

impl FramePacer {
    /// Pacer at the native 60 Hz, with the baseline at `start`
    pub fn new(start: Instant) -> Self {
        Self::with_period(TICK_PERIOD, start)
    }

    pub fn with_period(period: Duration, start: Instant) -> Self {
        Self {
            period,
            last_tick: start,
            ticks_elapsed: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true if exactly one tick should run now. Resets the baseline
    /// to `now` when it does.
    pub fn poll(&mut self, now: Instant) -> bool {
        // A clock that steps backwards never grants a tick
        let Some(elapsed) = now.checked_duration_since(self.last_tick) else {
            return false;
        };

        if elapsed < self.period {
            return false;
        }

        if elapsed >= self.period * 2 {
            log::trace!("Dropped {:?} of frame time", elapsed - self.period);
        }

        self.last_tick = now;
        self.ticks_elapsed += 1;
        true
    }

    /// Time left until the next tick is due (zero if already due)
    pub fn until_next(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.period.saturating_sub(elapsed)
    }
}
