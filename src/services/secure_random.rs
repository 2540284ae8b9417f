//! Cryptographically secure random draws.
//!
//! Every generator in the crate takes its randomness from a
//! [`SecureRandomTrait`] object. The production implementation wraps the
//! operating system source exposed by `ring`; there is no
//! non-cryptographic implementation outside of tests.

use std::sync::Arc;

use ring::rand::{SecureRandom as _, SystemRandom};

use crate::types::errors::RandomError;

/// Shared handle to a secure random source.
pub type SharedRandom = Arc<dyn SecureRandomTrait + Send + Sync>;

/// Trait defining the random capability consumed by the generators.
pub trait SecureRandomTrait {
    /// Returns one uniformly distributed 32-bit word from the secure source.
    fn next_u32(&self) -> Result<u32, RandomError>;

    /// Returns an unbiased integer in `[0, exclusive_max)`.
    ///
    /// Uses rejection sampling: draws are redrawn while they fall in the
    /// incomplete final block of `2^32`, so every residue is equally likely.
    /// An `exclusive_max` of zero returns zero.
    fn uniform_int(&self, exclusive_max: u32) -> Result<u32, RandomError> {
        if exclusive_max == 0 {
            return Ok(0);
        }
        let span = 1u64 << 32;
        let limit = span - (span % exclusive_max as u64);
        loop {
            let value = self.next_u32()? as u64;
            if value < limit {
                return Ok((value % exclusive_max as u64) as u32);
            }
        }
    }

    /// Returns an unbiased index into a collection of `len` items.
    fn index(&self, len: usize) -> Result<usize, RandomError> {
        let bound = u32::try_from(len).map_err(|_| RandomError::RangeTooLarge(len))?;
        Ok(self.uniform_int(bound)? as usize)
    }
}

/// Shuffles `items` in place with a Fisher-Yates pass driven by `rng`.
pub fn shuffle<T>(rng: &dyn SecureRandomTrait, items: &mut [T]) -> Result<(), RandomError> {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

/// Picks one element of `items` uniformly. Returns `None` for an empty slice.
pub fn choose<'a, T>(rng: &dyn SecureRandomTrait, items: &'a [T]) -> Result<Option<&'a T>, RandomError> {
    if items.is_empty() {
        return Ok(None);
    }
    Ok(items.get(rng.index(items.len())?))
}

/// Secure random source backed by the operating system via `ring`.
pub struct SecureRandom {
    rng: SystemRandom,
}

impl SecureRandom {
    /// Creates a new SecureRandom instance.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Creates a shared handle suitable for injecting into generators.
    pub fn shared() -> SharedRandom {
        Arc::new(Self::new())
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureRandomTrait for SecureRandom {
    fn next_u32(&self) -> Result<u32, RandomError> {
        let mut bytes = [0u8; 4];
        self.rng.fill(&mut bytes).map_err(|_| {
            tracing::error!("system random source failed, refusing to generate");
            RandomError::Unavailable("Failed to read from the system random source".to_string())
        })?;
        Ok(u32::from_le_bytes(bytes))
    }
}
