//! Auto-advance timer
//!
//! A single recurring deadline owned by one carousel. The carousel arms it
//! when auto-advance becomes possible and disarms it the moment that stops
//! being true, so there is never a second schedule running alongside it.
//! Time is always passed in by the caller; tests drive it with a fake clock.

use std::time::{Duration, Instant};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoAdvanceTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoAdvanceTimer {
    /// Create a disarmed timer
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Next time the timer fires, if armed
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Start a fresh interval from `now`, replacing any pending deadline
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Cancel the pending deadline (no-op when already disarmed)
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Report whether the deadline has passed, rescheduling if so
    ///
    /// Fires at most once per call. If several intervals were missed (the
    /// process was suspended), the next deadline is one interval after `now`
    /// rather than a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                let next = deadline + self.interval;
                self.deadline = Some(if next > now { next } else { now + self.interval });
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, zero if already due, None if disarmed
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
