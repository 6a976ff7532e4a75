//! Public generation API
//!
//! Every function draws exactly one epoch and mixes it exactly once (the float
//! draws may repeat that pair in the rare case the result rounds up to 1.0).
//! None of them allocate, lock, or block, so they are safe to call from any
//! number of threads at once.
//!
//! The bounded draws reduce with a plain modulo, with no rejection sampling.
//! When the bound does not divide 2^32 or 2^64 the low values are very
//! slightly favored.

use crate::epoch;
use crate::error::RandError;
use crate::mix::{mix32, mix64};

/// Largest bound served by the 32-bit path of [`int_bounded`]
const MAX_INT31: isize = i32::MAX as isize;

/// 2^63 as a float, the divisor that maps a 63-bit integer into [0, 1)
const TWO_POW_63: f64 = (1u64 << 63) as f64;

#[inline]
fn draw32() -> u32 {
    mix32(epoch::next() as u32, 0)
}

#[inline]
fn draw64() -> u64 {
    mix64(epoch::next(), 0)
}

#[inline]
fn expect_bound<T>(result: Result<T, RandError>) -> T {
    match result {
        Ok(v) => v,
        Err(err) => panic!("{err}"),
    }
}

// ============ 32-bit integers ============

/// Return a non-negative pseudorandom `i32`
#[inline]
pub fn int32() -> i32 {
    (draw32() >> 1) as i32
}

/// Return a pseudorandom `i32` in `[0, n)`.
///
/// # Panics
///
/// Panics if `n <= 0`.
#[inline]
pub fn int32_bounded(n: i32) -> i32 {
    expect_bound(try_int32_bounded(n))
}

/// Return a pseudorandom `i32` in `[0, n)`, or an error if `n <= 0`
#[inline]
pub fn try_int32_bounded(n: i32) -> Result<i32, RandError> {
    if n <= 0 {
        return Err(RandError::invalid_bound("int32_bounded", n));
    }
    Ok((draw32() % n as u32) as i32)
}

/// Return a pseudorandom `u32`
#[inline]
pub fn uint32() -> u32 {
    draw32()
}

/// Return a pseudorandom `u32` in `[0, n)`.
///
/// # Panics
///
/// Panics if `n == 0`.
#[inline]
pub fn uint32_bounded(n: u32) -> u32 {
    expect_bound(try_uint32_bounded(n))
}

/// Return a pseudorandom `u32` in `[0, n)`, or an error if `n == 0`
#[inline]
pub fn try_uint32_bounded(n: u32) -> Result<u32, RandError> {
    if n == 0 {
        return Err(RandError::invalid_bound("uint32_bounded", n));
    }
    Ok(draw32() % n)
}

// ============ 64-bit integers ============

/// Return a non-negative pseudorandom 63-bit integer as an `i64`
#[inline]
pub fn int64() -> i64 {
    (draw64() >> 1) as i64
}

/// Return a pseudorandom `i64` in `[0, n)`.
///
/// # Panics
///
/// Panics if `n <= 0`.
#[inline]
pub fn int64_bounded(n: i64) -> i64 {
    expect_bound(try_int64_bounded(n))
}

/// Return a pseudorandom `i64` in `[0, n)`, or an error if `n <= 0`
#[inline]
pub fn try_int64_bounded(n: i64) -> Result<i64, RandError> {
    if n <= 0 {
        return Err(RandError::invalid_bound("int64_bounded", n));
    }
    Ok((draw64() % n as u64) as i64)
}

/// Return a pseudorandom `u64`
#[inline]
pub fn uint64() -> u64 {
    draw64()
}

/// Return a pseudorandom `u64` in `[0, n)`.
///
/// # Panics
///
/// Panics if `n == 0`.
#[inline]
pub fn uint64_bounded(n: u64) -> u64 {
    expect_bound(try_uint64_bounded(n))
}

/// Return a pseudorandom `u64` in `[0, n)`, or an error if `n == 0`
#[inline]
pub fn try_uint64_bounded(n: u64) -> Result<u64, RandError> {
    if n == 0 {
        return Err(RandError::invalid_bound("uint64_bounded", n));
    }
    Ok(draw64() % n)
}

// ============ Misc types ============

/// Return a pseudorandom `isize` in `[0, n)`.
///
/// Bounds that fit in 31 bits take the 32-bit path; larger ones take the
/// 64-bit path.
///
/// # Panics
///
/// Panics if `n <= 0`.
#[inline]
pub fn int_bounded(n: isize) -> isize {
    expect_bound(try_int_bounded(n))
}

/// Return a pseudorandom `isize` in `[0, n)`, or an error if `n <= 0`
#[inline]
pub fn try_int_bounded(n: isize) -> Result<isize, RandError> {
    if n <= 0 {
        return Err(RandError::invalid_bound("int_bounded", n as i64));
    }
    if n <= MAX_INT31 {
        Ok((draw32() % n as u32) as isize)
    } else {
        Ok((draw64() % n as u64) as isize)
    }
}

/// Return a pseudorandom `bool`
#[inline]
pub fn bool() -> bool {
    draw32() % 2 == 0
}

/// Return a pseudorandom `f32` in `[0.0, 1.0)`
#[inline]
pub fn float32() -> f32 {
    loop {
        // Narrowing can round values just below 1.0 up to exactly 1.0.
        let f = float64() as f32;
        if f < 1.0 {
            return f;
        }
    }
}

/// Return a pseudorandom `f64` in `[0.0, 1.0)`
#[inline]
pub fn float64() -> f64 {
    loop {
        let f = int64() as f64 / TWO_POW_63;
        if f < 1.0 {
            return f;
        }
    }
}
