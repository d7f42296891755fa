use std::fmt;
use std::time::{Duration, Instant};

/// Event timestamp in microseconds since an [`EventClock`]'s epoch.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Timestamp carried by events built without a clock.
    pub const ZERO: Timestamp = Timestamp(0);

    #[inline]
    pub const fn from_micros(us: u64) -> Self {
        Self(us)
    }

    #[inline]
    pub const fn as_micros(self) -> u64 {
        self.0
    }

    /// Time elapsed from `earlier` to `self`; zero if `earlier` is later.
    #[inline]
    pub fn saturating_since(self, earlier: Timestamp) -> Duration {
        Duration::from_micros(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.0)
    }
}

/// Monotonic timestamp source for input producers.
///
/// Each clock has its own epoch (the moment it was created). Timestamps from the same
/// clock never decrease, even if two calls land in the same microsecond.
#[derive(Debug, Clone)]
pub struct EventClock {
    epoch: Instant,
    last: u64,
}

impl EventClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now(), last: 0 }
    }

    /// Returns the current timestamp.
    pub fn now(&mut self) -> Timestamp {
        let elapsed = self.epoch.elapsed().as_micros();
        let us = u64::try_from(elapsed).unwrap_or(u64::MAX).max(self.last);
        self.last = us;
        Timestamp(us)
    }

    /// Moves the epoch to now; later timestamps restart near zero.
    pub fn reset(&mut self) {
        self.epoch = Instant::now();
        self.last = 0;
    }
}

impl Default for EventClock {
    fn default() -> Self {
        Self::new()
    }
}
