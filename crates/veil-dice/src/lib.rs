//! Storyteller-style dice resolution engine for Veil.
//!
//! Given a validated pool/difficulty/die-size configuration, draws a
//! pool of dice and classifies the outcome: successes below the max
//! face count singly, tens and ones cancel pairwise on d10 with the
//! survivors scoring double, and the net score maps to botch, failure,
//! success, or critical. Non-d10 rolls use a plain linear score.
//!
//! Randomness flows through the [`RandomSource`] seam so tests can
//! script sequences; caller-initiated rolls can be reported to a
//! [`RollHistorySink`] for statistics.

pub mod config;
pub mod error;
pub mod history;
pub mod outcome;
pub mod rng;
pub mod roller;

pub use config::{DiceConfig, DieSize, MAX_POOL};
pub use error::{DiceError, DiceResult};
pub use history::{NullSink, RollHistorySink, RollTags, TracingSink};
pub use outcome::{OutcomeKind, RollOutcome};
pub use rng::{FixedRolls, RandomSource, StdRandom};
pub use roller::Roller;
