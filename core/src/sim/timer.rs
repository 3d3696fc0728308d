//! Frame-driven timers
//!
//! The dashboard has no event loop of its own: every frame the UI reports how
//! much time has passed and each timer works out how often it fired.

use std::time::Duration;

/// Repeating timer
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    /// Create a timer that fires every `period`
    ///
    /// A zero period is clamped to one millisecond so `advance` stays bounded.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the timer by `dt` and return how many periods completed
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    /// Forget any partially elapsed period
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Configured period
    pub fn period(&self) -> Duration {
        self.period
    }
}

/// One-shot timer carrying a payload
#[derive(Debug, Clone)]
pub struct Delay<T> {
    remaining: Duration,
    payload: T,
}

impl<T> Delay<T> {
    /// Arm a delay that expires after `after`
    pub fn new(after: Duration, payload: T) -> Self {
        Self {
            remaining: after,
            payload,
        }
    }

    /// Advance by `dt`; true once the delay has expired
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(dt);
        self.remaining.is_zero()
    }

    /// Take the payload out of an expired delay
    pub fn into_payload(self) -> T {
        self.payload
    }
}
