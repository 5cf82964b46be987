//! Seed resolution
//!
//! A configured seed of 0 means "derive from the clock". The clock is the
//! only environment read in generation, so it sits behind [`Clock`] and can
//! be pinned in tests.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time in nanoseconds
pub trait Clock: Send + Sync {
    fn now_nanos(&self) -> u64;
}

/// Wall clock (nanoseconds since the Unix epoch)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_nanos(&self) -> u64 {
        self.0
    }
}

/// Effective seed for a single generation call
pub fn resolve_seed(seed: u64, clock: &dyn Clock) -> u64 {
    if seed != 0 {
        return seed;
    }
    let derived = clock.now_nanos();
    tracing::debug!(seed = derived, "Derived seed from clock");
    derived
}
