//! xxrand - Thread-safe, allocation-free pseudorandom numbers
//!
//! A non-cryptographic random number generator for latency-sensitive paths
//! such as sampling, jitter, and load-shedding decisions. It keeps no
//! per-thread or locked state:
//!
//! - **Epoch source**: every draw pulls one 64-bit epoch, either from the CPU
//!   time-stamp counter or from a process-wide atomic counter
//! - **Mixer**: the XXH3 avalanche turns that epoch into a well-distributed
//!   32-bit or 64-bit integer
//! - **Generation API**: integers, bounded integers, booleans, and floats in
//!   `[0, 1)` derived from the mixed bits
//!
//! Output is neither reproducible nor unpredictable; do not use it for
//! cryptography or for seeded simulations.
//!
//! # Quick Start
//!
//! ```rust
//! let roll = xxrand::int32_bounded(6) + 1;
//! assert!((1..=6).contains(&roll));
//!
//! let jitter = xxrand::float64();
//! assert!((0.0..1.0).contains(&jitter));
//!
//! if xxrand::bool() {
//!     // shed this request
//! }
//! ```
//!
//! # Features
//!
//! - `hardware-epoch` (default): use the x86_64 time-stamp counter when the
//!   CPU exposes one. Disable it to always use the atomic counter.

#![warn(missing_docs)]

pub mod epoch;
pub mod error;
pub mod mix;
pub mod random;
pub mod rng;

// Re-exports for convenience
pub use error::RandError;
pub use random::{
    bool, float32, float64, int32, int32_bounded, int64, int64_bounded, int_bounded,
    try_int32_bounded, try_int64_bounded, try_int_bounded, try_uint32_bounded,
    try_uint64_bounded, uint32, uint32_bounded, uint64, uint64_bounded,
};
pub use rng::Xxrand;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::epoch::{EpochSource, Strategy};
    pub use crate::error::RandError;
    pub use crate::rng::Xxrand;
}
