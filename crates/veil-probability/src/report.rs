//! Probability report values.

use serde::{Deserialize, Serialize};

use veil_dice::DiceConfig;

/// The estimated outcome distribution for one roll configuration.
///
/// All percentages are in `0.0..=100.0`. Every outcome category is
/// always present, even at an observed frequency of zero. A report is
/// computed once per distinct configuration and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityReport {
    /// The configuration this report was computed for.
    pub config: DiceConfig,
    /// Number of simulated rolls behind the percentages.
    pub trials: u32,

    /// Share of trials that botched.
    pub botch: f64,
    /// Share of trials with zero net successes.
    pub failure: f64,
    /// Share of trials with a plain success.
    pub success: f64,
    /// Share of trials with a critical success.
    pub critical: f64,
    /// Share of trials outside the d10 classification.
    pub other: f64,

    /// Share of trials counting as an overall success
    /// (success + critical).
    pub total_successes: f64,
    /// Share of trials counting as an overall failure
    /// (failure + botch).
    pub total_failures: f64,

    /// Chance that any single die shows a 1.
    pub botch_dice: f64,
    /// Chance that any single die lands in the success band.
    pub success_dice: f64,
    /// Chance that any single die lands below the difficulty.
    pub failure_dice: f64,
    /// Chance that any single die shows the max face.
    pub critical_dice: f64,

    /// Mean net score across all trials.
    pub mean_result: f64,
}

impl std::fmt::Display for ProbabilityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.2}% overall success ({} trials)",
            self.config, self.total_successes, self.trials
        )
    }
}
