//! `rand_core` adapter
//!
//! [`Xxrand`] lets the stateless generator plug into APIs that expect a
//! [`RngCore`], such as `rand::Rng` extension methods or slice shuffling.

use rand_core::{impls, Error, RngCore};

use crate::random;

/// Zero-sized handle to the process-wide generator.
///
/// Holds no state and cannot be seeded: every handle draws from the same
/// epoch source, and copies are free.
///
/// # Example
///
/// ```
/// use rand_core::RngCore;
/// use xxrand::Xxrand;
///
/// let mut rng = Xxrand;
/// let mut buf = [0u8; 13];
/// rng.fill_bytes(&mut buf);
/// let _ = rng.next_u64();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxrand;

impl RngCore for Xxrand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        random::uint32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        random::uint64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
