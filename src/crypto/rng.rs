//! Per-session randomness.

use rand_core::{CryptoRng, OsRng, RngCore};

/// Randomness source owned by a single prover, verifier or simulator.
///
/// Wraps the operating system's CSPRNG. Every computation holds its own
/// instance, so concurrent proof sessions never share randomness state, and
/// the protocol-level sampling helpers live here instead of being repeated
/// across the computations.
pub struct SessionRng {
    inner: OsRng,
}

impl SessionRng {
    /// Creates a randomness source for one proof session.
    pub fn new() -> Self {
        Self { inner: OsRng }
    }

    /// Draws a verifier challenge of exactly `len` bytes.
    ///
    /// Challenges are uniform bit strings; any reduction modulo the group
    /// order happens where the challenge is consumed, not here.
    pub fn challenge_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut challenge = vec![0u8; len];
        self.inner.fill_bytes(&mut challenge);
        challenge
    }
}

impl Default for SessionRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SessionRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for SessionRng {}
