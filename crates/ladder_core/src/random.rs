//! Injectable randomness for opponent selection.
//!
//! The sweep only ever needs "pick one of these N candidates", so that is the
//! whole interface. Production code wraps a `rand` generator; tests can pass
//! [`Nearest`] or a seeded source to get exact, repeatable pairings.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of opponent choices.
pub trait RandomSource {
    /// Return an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform choice backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local generator. Every run differs.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator: the same seed always yields the same choices.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the first candidate, i.e. the nearest eligible opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nearest;

impl RandomSource for Nearest {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod random_tests;
