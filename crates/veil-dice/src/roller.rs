//! Caller-facing roll entry point.

use crate::config::{DiceConfig, DieSize};
use crate::history::{NullSink, RollHistorySink, RollTags};
use crate::outcome::RollOutcome;
use crate::rng::{RandomSource, StdRandom};

/// Resolves rolls on behalf of callers and reports each one to a
/// history sink.
///
/// Only d10 rolls are recorded; they are the only rolls the statistics
/// tables track. The sink is invoked at most once per [`Roller::resolve`]
/// call, never for internal simulation rolls.
#[derive(Debug)]
pub struct Roller<R: RandomSource, S: RollHistorySink> {
    rng: R,
    sink: S,
}

impl Roller<StdRandom, NullSink> {
    /// Create a roller with an OS-seeded generator and no history sink.
    pub fn new() -> Self {
        Self::with_parts(StdRandom::new(), NullSink)
    }
}

impl Default for Roller<StdRandom, NullSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource, S: RollHistorySink> Roller<R, S> {
    /// Create a roller from an explicit random source and sink.
    pub fn with_parts(rng: R, sink: S) -> Self {
        Self { rng, sink }
    }

    /// Resolve one roll and record it.
    pub fn resolve(&mut self, config: DiceConfig, tags: &RollTags) -> RollOutcome {
        let outcome = RollOutcome::resolve(config, &mut self.rng);
        if config.die == DieSize::D10 {
            self.sink.record(&outcome, tags);
        }
        outcome
    }
}
