//! Trailing-edge debouncing for recomputation triggers.
//!
//! Slider drags emit many intermediate values. The caller reports each change
//! with [`Debouncer::trigger`] and polls on its own clock; the debouncer fires
//! once the input has been quiet for `delay`. Time is always passed in, so the
//! debouncer has no clock of its own and is trivially testable.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Quiet periods used by the curve fitting playground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Delay before regenerating sample points after count/noise/split changes.
    pub points_ms: u64,
    /// Delay before refitting after a degree change.
    pub degree_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            points_ms: 150,
            degree_ms: 120,
        }
    }
}

impl DebounceConfig {
    pub fn points_delay(&self) -> Duration {
        Duration::from_millis(self.points_ms)
    }

    pub fn degree_delay(&self) -> Duration {
        Duration::from_millis(self.degree_ms)
    }
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_trigger: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_trigger: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an input change at `now`, restarting the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        self.last_trigger = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// Returns `true` exactly once per burst of triggers, when `now` is at least
    /// `delay` past the most recent trigger.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_trigger {
            Some(t) if now.saturating_duration_since(t) >= self.delay => {
                self.last_trigger = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending trigger without firing.
    pub fn cancel(&mut self) {
        self.last_trigger = None;
    }
}
