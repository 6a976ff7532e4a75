//! Epoch sources for random generation
//!
//! Every draw starts by pulling one 64-bit epoch. Two interchangeable
//! strategies exist:
//!
//! - [`TimestampCounter`]: reads the x86_64 time-stamp counter. No shared
//!   state, so it scales with no contention.
//! - [`AtomicCounter`]: a process-wide fetch-and-add counter. Portable, strictly
//!   increasing and unique, at the cost of one shared cache line.
//!
//! The strategy is resolved once, on first use, and never re-evaluated.

mod atomic_counter;
#[cfg(all(target_arch = "x86_64", feature = "hardware-epoch"))]
mod timestamp;

use std::fmt;
use std::sync::OnceLock;

pub use atomic_counter::AtomicCounter;
#[cfg(all(target_arch = "x86_64", feature = "hardware-epoch"))]
pub use timestamp::TimestampCounter;

use atomic_counter::GLOBAL_COUNTER;

/// A source of advancing 64-bit epochs.
///
/// Implementations must be callable from any number of threads at once with
/// no external synchronization, and must never fail.
pub trait EpochSource {
    /// Produce the next epoch
    fn next(&self) -> u64;
}

/// Epoch strategy selected for the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// CPU time-stamp counter
    #[cfg(all(target_arch = "x86_64", feature = "hardware-epoch"))]
    TimestampCounter,
    /// Process-wide atomic counter
    AtomicCounter,
}

impl Strategy {
    /// Pick the best strategy the running target supports
    pub fn detect() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "hardware-epoch"))]
        {
            if TimestampCounter::is_available() {
                return Strategy::TimestampCounter;
            }
        }
        Strategy::AtomicCounter
    }

    /// Get the strategy name
    pub const fn as_str(&self) -> &'static str {
        match self {
            #[cfg(all(target_arch = "x86_64", feature = "hardware-epoch"))]
            Strategy::TimestampCounter => "timestamp-counter",
            Strategy::AtomicCounter => "atomic-counter",
        }
    }

    /// Check if this strategy guarantees unique, strictly increasing epochs
    pub const fn is_monotonic(&self) -> bool {
        matches!(self, Strategy::AtomicCounter)
    }
}

impl EpochSource for Strategy {
    #[inline]
    fn next(&self) -> u64 {
        match self {
            #[cfg(all(target_arch = "x86_64", feature = "hardware-epoch"))]
            Strategy::TimestampCounter => TimestampCounter.next(),
            Strategy::AtomicCounter => GLOBAL_COUNTER.next(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static STRATEGY: OnceLock<Strategy> = OnceLock::new();

/// Get the process-wide epoch strategy, detecting it on first call
#[inline]
pub fn strategy() -> Strategy {
    *STRATEGY.get_or_init(|| {
        let selected = Strategy::detect();
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!(strategy = %selected, "epoch source selected");
        }
        selected
    })
}

/// Draw the next epoch from the process-wide strategy
#[inline]
pub fn next() -> u64 {
    strategy().next()
}
