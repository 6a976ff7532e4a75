//! Hardware epoch source reading the x86_64 time-stamp counter

use std::arch::x86_64::_rdtsc;

use super::EpochSource;

/// Epoch source that reads the CPU time-stamp counter.
///
/// Each read is a single `rdtsc` instruction against a per-core register, so
/// parallel callers never contend. Values from different cores carry no
/// cross-thread ordering guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampCounter;

impl TimestampCounter {
    /// Check whether the running CPU exposes a time-stamp counter
    pub fn is_available() -> bool {
        std::is_x86_feature_detected!("tsc")
    }
}

impl EpochSource for TimestampCounter {
    #[inline]
    fn next(&self) -> u64 {
        // Safety: callers only reach this after `is_available` succeeded, and
        // `rdtsc` has no memory side effects.
        unsafe { _rdtsc() }
    }
}
