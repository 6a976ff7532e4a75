//! Loom-based model-checked tests for the atomic epoch counter.
//!
//! These tests replicate the fetch-and-add counter from
//! `src/epoch/atomic_counter.rs` in a test-local struct that uses loom
//! atomics, so Loom's model checker can explore every thread interleaving
//! without touching production code.
//!
//! Run with:
//! ```bash
//! cargo test --test loom_epoch
//! ```

use loom::sync::atomic::{AtomicU64, Ordering};
use loom::sync::Arc;
use loom::thread;

// ---------------------------------------------------------------------------
// Test-local harness: mirrors `AtomicCounter`.
// ---------------------------------------------------------------------------

struct TestCounter {
    value: AtomicU64,
}

impl TestCounter {
    fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Same operation as `AtomicCounter::next`.
    fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
    }

    fn current(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Two threads draw concurrently.
/// Invariant: the two epochs are exactly {1, 2}, never a duplicate.
#[test]
fn test_loom_unique_epochs() {
    loom::model(|| {
        let counter = Arc::new(TestCounter::new());

        let c1 = Arc::clone(&counter);
        let c2 = Arc::clone(&counter);

        let h1 = thread::spawn(move || c1.next());
        let h2 = thread::spawn(move || c2.next());

        let a = h1.join().unwrap();
        let b = h2.join().unwrap();

        assert_ne!(a, b);
        assert_eq!(a.min(b), 1);
        assert_eq!(a.max(b), 2);
        assert_eq!(counter.current(), 2);
    });
}

/// Each thread draws twice while another thread draws once.
/// Invariant: a thread's own draws are strictly increasing.
#[test]
fn test_loom_per_thread_monotonic() {
    loom::model(|| {
        let counter = Arc::new(TestCounter::new());

        let c1 = Arc::clone(&counter);
        let c2 = Arc::clone(&counter);

        let h1 = thread::spawn(move || {
            let first = c1.next();
            let second = c1.next();
            assert!(second > first);
            (first, second)
        });
        let h2 = thread::spawn(move || c2.next());

        let (a1, a2) = h1.join().unwrap();
        let b = h2.join().unwrap();

        let mut all = [a1, a2, b];
        all.sort_unstable();
        assert_eq!(all, [1, 2, 3]);
    });
}

/// A draw that completes before another starts is ordered before it.
/// Thread B only draws after observing A's publication, so B's epoch is larger.
#[test]
fn test_loom_happens_before_order() {
    loom::model(|| {
        let counter = Arc::new(TestCounter::new());
        let published = Arc::new(AtomicU64::new(0));

        let c1 = Arc::clone(&counter);
        let p1 = Arc::clone(&published);
        let c2 = Arc::clone(&counter);
        let p2 = Arc::clone(&published);

        let h1 = thread::spawn(move || {
            let e = c1.next();
            p1.store(e, Ordering::Release);
        });

        let h2 = thread::spawn(move || {
            let seen = p2.load(Ordering::Acquire);
            let e = c2.next();
            if seen != 0 {
                assert!(e > seen);
            }
        });

        h1.join().unwrap();
        h2.join().unwrap();
    });
}

/// Wraparound is plain modular arithmetic, not a failure.
#[test]
fn test_loom_wraparound() {
    loom::model(|| {
        let counter = Arc::new(TestCounter {
            value: AtomicU64::new(u64::MAX),
        });

        let c1 = Arc::clone(&counter);
        let h1 = thread::spawn(move || c1.next());
        let b = counter.next();
        let a = h1.join().unwrap();

        let mut all = [a, b];
        all.sort_unstable();
        assert_eq!(all, [0, 1]);
    });
}
