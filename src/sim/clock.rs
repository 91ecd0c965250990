//! Time sources for timed gameplay state
//!
//! The rules engine never reads the wall clock directly. It asks a [`Clock`]
//! for a monotonic millisecond timestamp, so tests and replays can drive time
//! by hand.

use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond time source
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never decreases.
    fn now(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> u64 {
        (**self).now()
    }
}

/// Real time, measured from construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and deterministic replays
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Jump to an absolute time. Going backwards is ignored.
    pub fn set(&self, ms: u64) {
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_monotonic() {
        let clock = ManualClock::new(500);
        clock.advance(10);
        assert_eq!(clock.now(), 510);
        clock.set(100);
        assert_eq!(clock.now(), 510);
        clock.set(1001);
        assert_eq!(clock.now(), 1001);
    }

    #[test]
    fn test_monotonic_clock_advances() {
        let clock = MonotonicClock::new();
        let start = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let later = clock.now();
        assert!(later >= start + 5);
        assert!(clock.now() >= later);
    }

    #[test]
    fn test_clock_through_reference() {
        let clock = ManualClock::new(7);
        let borrowed: &ManualClock = &clock;
        assert_eq!(Clock::now(&borrowed), 7);
    }
}
