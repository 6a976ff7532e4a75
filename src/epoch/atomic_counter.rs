//! Portable epoch source backed by a shared atomic counter

use std::sync::atomic::{AtomicU64, Ordering};

use super::EpochSource;

/// Process-wide counter used when no hardware counter is selected
pub(crate) static GLOBAL_COUNTER: AtomicCounter = AtomicCounter::new();

/// Monotonic epoch source built on a single `AtomicU64`.
///
/// Every call to [`EpochSource::next`] performs one fetch-and-add and returns
/// the post-increment value, so no two calls ever observe the same epoch and
/// the values follow the happens-before order of the calls. The cost is one
/// contended cache line under heavy parallel load.
///
/// The counter wraps on overflow. Only distribution is guaranteed across the
/// full 64-bit space, not uniqueness over arbitrarily long runs.
#[repr(C, align(64))]
#[derive(Debug)]
pub struct AtomicCounter {
    value: AtomicU64,
}

impl AtomicCounter {
    /// Create a counter starting at zero
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a counter whose first returned epoch is `start + 1`
    pub const fn starting_at(start: u64) -> Self {
        Self {
            value: AtomicU64::new(start),
        }
    }

    /// Read the last issued epoch without advancing the counter
    #[inline]
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }
}

impl Default for AtomicCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl EpochSource for AtomicCounter {
    #[inline]
    fn next(&self) -> u64 {
        // fetch_add returns the prior value and wraps on overflow.
        self.value.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
    }
}
