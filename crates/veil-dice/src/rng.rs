//! Random draw seam.
//!
//! Resolution draws dice through the [`RandomSource`] trait so tests
//! can substitute scripted sequences and the probability estimator can
//! run on a private stream that never touches a caller's generator.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Supplies uniformly distributed die faces.
pub trait RandomSource {
    /// Draw one face, uniform in `[1, sides]`.
    fn draw(&mut self, sides: u32) -> u32;
}

/// The production random source, backed by [`StdRng`].
#[derive(Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Create a source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a source with a fixed seed, for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn draw(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides)
    }
}

/// A scripted random source for deterministic tests.
///
/// Yields the given values in order and cycles back to the start when
/// exhausted. An empty script always yields 1.
#[derive(Debug, Clone)]
pub struct FixedRolls {
    values: Vec<u32>,
    next: usize,
}

impl FixedRolls {
    /// Create a source that replays `values` in order.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for FixedRolls {
    fn draw(&mut self, _sides: u32) -> u32 {
        let Some(&value) = self.values.get(self.next) else {
            return 1;
        };
        self.next = (self.next + 1) % self.values.len();
        value
    }
}
