//! Wall-clock sources for traversal timing

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source
///
/// Readings are durations since an arbitrary origin fixed per clock.
pub trait Clock {
    /// Current reading
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the current instant
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-advanced clock for deterministic timing
///
/// Clones share one reading, so a test can keep a handle while the session
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    reading: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock reading zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the reading forward
    pub fn advance(&self, by: Duration) {
        self.reading.set(self.reading.get() + by);
    }

    /// Replace the reading
    pub fn set(&self, reading: Duration) {
        self.reading.set(reading);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.reading.get()
    }
}
