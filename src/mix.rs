//! Integer mixing for epoch values
//!
//! This module provides the avalanche step that turns a raw epoch into a
//! well-distributed pseudorandom integer. The transform is the XXH3 short-input
//! path unrolled for a single integer, so `mix32(v, 0)` matches
//! `xxh3_64(&v.to_le_bytes())` truncated to 32 bits.
//!
//! The constants and rotation amounts are what give the output its chi-squared
//! uniformity. Changing any of them silently degrades the distribution.

/// First folded secret word (XXH3 default secret, bytes 8..16)
pub const SECRET_LO: u64 = 0x1cad21f72c81017c;

/// Second folded secret word (XXH3 default secret, bytes 16..24)
pub const SECRET_HI: u64 = 0xdb979083e96dd4de;

/// Odd multiplier applied twice during the avalanche
pub const PRIME_MX2: u64 = 0x9fb21c651e98df25;

/// Length term of the XXH3 4-byte path, folded in after the first multiply
const INPUT_LEN: u64 = 4;

/// Mix a 32-bit value into a 32-bit pseudorandom output.
///
/// The value is duplicated into both halves of a 64-bit word and run through
/// [`mix64`]; the low 32 bits of the result are returned.
#[inline]
pub const fn mix32(value: u32, seed: u32) -> u32 {
    let v = value as u64;
    mix64(v.wrapping_add(v << 32), seed as u64) as u32
}

/// Mix a 64-bit value into a 64-bit pseudorandom output.
///
/// Pure and deterministic: identical `(value, seed)` pairs always produce
/// identical output. All arithmetic wraps modulo 2^64.
#[inline]
pub const fn mix64(value: u64, seed: u64) -> u64 {
    let mut x = value ^ (SECRET_LO ^ SECRET_HI).wrapping_add(seed);
    x ^= x.rotate_left(49) ^ x.rotate_left(24);
    x = x.wrapping_mul(PRIME_MX2);
    x ^= (x >> 35).wrapping_add(INPUT_LEN);
    x = x.wrapping_mul(PRIME_MX2);
    x ^= x >> 28;
    x
}
