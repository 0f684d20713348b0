//! Elapsed-time clock for the crossword.
//!
//! The clock does not run by itself. A host feeds it time, either one
//! second per `tick` or arbitrary durations through a `TickSource`, and
//! the clock turns that into whole seconds. Stopping is explicit and
//! permanent until the clock is restarted by a reset.

use std::time::{Duration, Instant};

/// Something that reports how much time passed since it was last asked.
pub trait TickSource {
    /// Time elapsed since the previous call.
    fn elapsed(&mut self) -> Duration;
}

/// Wall-clock tick source.
#[derive(Clone, Debug)]
pub struct InstantTicker {
    last: Instant,
}

impl InstantTicker {
    #[must_use]
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }
}

impl Default for InstantTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for InstantTicker {
    fn elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}

/// Accumulates fed time into whole seconds while running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clock {
    running: bool,
    carry: Duration,
}

impl Clock {
    /// A running clock.
    #[must_use]
    pub fn running() -> Self {
        Self {
            running: true,
            carry: Duration::ZERO,
        }
    }

    /// A stopped clock.
    #[must_use]
    pub fn stopped() -> Self {
        Self {
            running: false,
            carry: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the clock and drop any partial second.
    pub fn stop(&mut self) {
        self.running = false;
        self.carry = Duration::ZERO;
    }

    /// Feed `dt` and return how many whole seconds elapsed.
    ///
    /// Sub-second remainders carry over to the next call. A stopped clock
    /// always returns 0.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        if !self.running {
            return 0;
        }
        self.carry += dt;
        let seconds = self.carry.as_secs();
        self.carry -= Duration::from_secs(seconds);
        seconds
    }
}

/// Format seconds as `MM:SS`. Minutes are not capped at 59.
#[must_use]
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
