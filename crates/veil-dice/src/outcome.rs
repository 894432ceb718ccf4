//! Roll resolution and outcome classification.
//!
//! The resolution rules are loosely based on the Storyteller system and
//! apply in full only to d10 pools:
//!
//! * Tens count as two successes, ones negate two successes.
//! * Ones and tens cancel each other pairwise before either is scored.
//! * A botch is a net-negative result; a critical is a result that
//!   exceeds the raw pool size (possible because surviving tens count
//!   double).
//!
//! Other die sizes use a plain linear score with no cancellation and
//! always classify as [`OutcomeKind::Other`].

use serde::{Deserialize, Serialize};

use crate::config::{DiceConfig, DieSize};
use crate::rng::RandomSource;

/// The category of a resolved roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// A net-negative result dominated by rolled ones.
    Botch,
    /// Zero net successes.
    Failure,
    /// At least one net success.
    Success,
    /// More net successes than dice rolled.
    Critical,
    /// Any roll on a die size without botch/critical rules.
    Other,
}

impl OutcomeKind {
    /// Classify a score. Only d10 rolls receive the full
    /// botch/failure/success/critical treatment.
    pub fn classify(die: DieSize, result: i32, pool: u32) -> Self {
        if die != DieSize::D10 {
            return Self::Other;
        }
        if result < 0 {
            return Self::Botch;
        }
        if result == 0 {
            return Self::Failure;
        }
        if result > pool as i32 {
            return Self::Critical;
        }
        Self::Success
    }

    /// Stable tag used as a statistics key, matching the values the
    /// roll-history records carry.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Botch => "botch",
            Self::Failure => "failure",
            Self::Success => "success",
            Self::Critical => "critical",
            Self::Other => "n/a",
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Botch => write!(f, "Botch"),
            Self::Failure => write!(f, "Failure"),
            Self::Success => write!(f, "Success"),
            Self::Critical => write!(f, "Critical Success"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// The fully resolved result of one roll.
///
/// All derived quantities are computed eagerly at construction and the
/// value is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The configuration that produced this roll.
    pub config: DiceConfig,
    /// The drawn faces, in draw order, each in `[1, sides]`.
    pub rolled: Vec<u32>,
    /// Count of dice showing 1.
    pub ones: u32,
    /// Count of dice showing the max face.
    pub criticals: u32,
    /// Count of dice in `[difficulty, sides - 1]`.
    pub successes: u32,
    /// Count of dice in `[2, difficulty - 1]`.
    pub failures: u32,
    /// The net score.
    pub result: i32,
    /// The outcome category.
    pub kind: OutcomeKind,
}

impl RollOutcome {
    /// Draw `pool` dice from `rng` and classify them.
    ///
    /// The draw is the only side effect; everything after it is a pure
    /// function of the drawn sequence.
    pub fn resolve(config: DiceConfig, rng: &mut dyn RandomSource) -> Self {
        let rolled = (0..config.pool)
            .map(|_| rng.draw(config.die.sides()))
            .collect();
        Self::from_rolled(config, rolled)
    }

    /// Classify an already-drawn sequence.
    ///
    /// Pure and deterministic: the same sequence and config always
    /// produce the same outcome.
    pub fn from_rolled(config: DiceConfig, rolled: Vec<u32>) -> Self {
        let sides = config.die.sides();
        let ones = count_matching(&rolled, |d| d == 1);
        let criticals = count_matching(&rolled, |d| d == sides);
        let successes = count_matching(&rolled, |d| (config.difficulty..sides).contains(&d));
        let failures = count_matching(&rolled, |d| (2..config.difficulty).contains(&d));

        let result = score(config.die, ones, criticals, successes, failures);
        let kind = OutcomeKind::classify(config.die, result, config.pool);

        Self {
            config,
            rolled,
            ones,
            criticals,
            successes,
            failures,
            result,
            kind,
        }
    }

    /// True when the roll counts as an overall success (plain or
    /// critical).
    pub fn is_success(&self) -> bool {
        matches!(self.kind, OutcomeKind::Success | OutcomeKind::Critical)
    }

    /// True when the roll counts as an overall failure (plain or
    /// botch).
    pub fn is_failure(&self) -> bool {
        matches!(self.kind, OutcomeKind::Failure | OutcomeKind::Botch)
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolled.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}] = {} ({})", values.join(", "), self.result, self.kind)
    }
}

fn count_matching(rolled: &[u32], pred: impl Fn(u32) -> bool) -> u32 {
    rolled.iter().filter(|&&d| pred(d)).count() as u32
}

/// Net score for a tallied roll.
///
/// On d10, ones and tens cancel pairwise and the survivors count
/// double; below-difficulty dice do not subtract. On every other die
/// size the score is linear and nothing cancels.
fn score(die: DieSize, ones: u32, criticals: u32, successes: u32, failures: u32) -> i32 {
    if die != DieSize::D10 {
        return successes as i32 + criticals as i32 - failures as i32 - ones as i32;
    }
    let net_ones = ones.saturating_sub(criticals);
    let net_criticals = criticals.saturating_sub(ones);
    successes as i32 + 2 * net_criticals as i32 - 2 * net_ones as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FixedRolls, StdRandom};
    use proptest::prelude::*;

    fn d10(pool: u32, difficulty: u32) -> DiceConfig {
        DiceConfig::new(pool, difficulty, 10).unwrap()
    }

    #[test]
    fn resolve_draws_pool_dice_in_range() {
        let mut rng = StdRandom::seeded(42);
        for (pool, sides) in [(10, 10), (3, 6), (7, 4), (5, 100)] {
            let config = DiceConfig::new(pool, 1, sides).unwrap();
            for _ in 0..100 {
                let outcome = RollOutcome::resolve(config, &mut rng);
                assert_eq!(outcome.rolled.len(), pool as usize);
                assert!(outcome.rolled.iter().all(|&d| (1..=sides).contains(&d)));
            }
        }
    }

    #[test]
    fn d10_score_table() {
        // (rolled, ones, criticals, failures, successes, result, kind)
        // at difficulty 6.
        let cases: &[(&[u32], u32, u32, u32, u32, i32, OutcomeKind)] = &[
            (&[1, 2, 3], 1, 0, 2, 0, -2, OutcomeKind::Botch),
            (&[10, 10, 10], 0, 3, 0, 0, 6, OutcomeKind::Critical),
            (&[2, 3, 2], 0, 0, 3, 0, 0, OutcomeKind::Failure),
            (&[6, 7, 8], 0, 0, 0, 3, 3, OutcomeKind::Success),
            (&[2, 2, 7, 7], 0, 0, 2, 2, 2, OutcomeKind::Success),
            (&[1, 2, 7, 7], 1, 0, 1, 2, 0, OutcomeKind::Failure),
            (&[1, 1, 7, 7], 2, 0, 0, 2, -2, OutcomeKind::Botch),
            (&[2, 7, 10], 0, 1, 1, 1, 3, OutcomeKind::Success),
            (&[2, 10, 10], 0, 2, 1, 0, 4, OutcomeKind::Critical),
            (&[1, 2, 3, 10], 1, 1, 2, 0, 0, OutcomeKind::Failure),
            (&[1, 1, 3, 10], 2, 1, 1, 0, -2, OutcomeKind::Botch),
            (&[1, 1, 3, 7, 8, 10], 2, 1, 1, 2, 0, OutcomeKind::Failure),
            (&[1, 1, 3, 7, 7, 8, 10], 2, 1, 1, 3, 1, OutcomeKind::Success),
        ];

        for &(rolled, ones, criticals, failures, successes, result, kind) in cases {
            let config = d10(rolled.len() as u32, 6);
            let outcome = RollOutcome::from_rolled(config, rolled.to_vec());
            assert_eq!(outcome.ones, ones, "ones for {rolled:?}");
            assert_eq!(outcome.criticals, criticals, "criticals for {rolled:?}");
            assert_eq!(outcome.failures, failures, "failures for {rolled:?}");
            assert_eq!(outcome.successes, successes, "successes for {rolled:?}");
            assert_eq!(outcome.result, result, "result for {rolled:?}");
            assert_eq!(outcome.kind, kind, "kind for {rolled:?}");
        }
    }

    #[test]
    fn non_d10_uses_linear_score() {
        // d6 at difficulty 4: one of each band.
        let config = DiceConfig::new(4, 4, 6).unwrap();
        let outcome = RollOutcome::from_rolled(config, vec![1, 2, 4, 6]);
        assert_eq!(outcome.ones, 1);
        assert_eq!(outcome.failures, 1);
        assert_eq!(outcome.successes, 1);
        assert_eq!(outcome.criticals, 1);
        assert_eq!(outcome.result, 0);
        assert_eq!(outcome.kind, OutcomeKind::Other);
    }

    #[test]
    fn non_d10_is_always_other() {
        let mut rng = StdRandom::seeded(7);
        for sides in [4, 6, 8, 100] {
            let config = DiceConfig::new(5, 2, sides).unwrap();
            for _ in 0..50 {
                let outcome = RollOutcome::resolve(config, &mut rng);
                assert_eq!(outcome.kind, OutcomeKind::Other);
            }
        }
    }

    #[test]
    fn empty_pool_is_a_failure_on_d10() {
        let mut rng = StdRandom::seeded(1);
        let outcome = RollOutcome::resolve(d10(0, 6), &mut rng);
        assert!(outcome.rolled.is_empty());
        assert_eq!(outcome.result, 0);
        assert_eq!(outcome.kind, OutcomeKind::Failure);
    }

    #[test]
    fn empty_pool_is_other_off_d10() {
        let mut rng = StdRandom::seeded(1);
        let config = DiceConfig::new(0, 3, 6).unwrap();
        let outcome = RollOutcome::resolve(config, &mut rng);
        assert_eq!(outcome.result, 0);
        assert_eq!(outcome.kind, OutcomeKind::Other);
    }

    #[test]
    fn low_difficulty_empties_the_failure_band() {
        for difficulty in [0, 1, 2] {
            let outcome = RollOutcome::from_rolled(d10(3, difficulty), vec![2, 3, 4]);
            assert_eq!(outcome.failures, 0, "difficulty {difficulty}");
        }
    }

    #[test]
    fn same_sequence_same_outcome() {
        let config = d10(3, 6);
        let a = RollOutcome::from_rolled(config, vec![1, 6, 10]);
        let b = RollOutcome::from_rolled(config, vec![1, 6, 10]);
        assert_eq!(a, b);
    }

    #[test]
    fn resolve_with_scripted_source() {
        let mut rng = FixedRolls::new(vec![1, 2, 3]);
        let outcome = RollOutcome::resolve(d10(3, 6), &mut rng);
        assert_eq!(outcome.rolled, vec![1, 2, 3]);
        assert_eq!(outcome.result, -2);
        assert_eq!(outcome.kind, OutcomeKind::Botch);
    }

    #[test]
    fn overall_success_and_failure_flags() {
        let success = RollOutcome::from_rolled(d10(3, 6), vec![6, 7, 8]);
        assert!(success.is_success());
        assert!(!success.is_failure());

        let critical = RollOutcome::from_rolled(d10(3, 6), vec![10, 10, 10]);
        assert!(critical.is_success());

        let botch = RollOutcome::from_rolled(d10(3, 6), vec![1, 2, 3]);
        assert!(botch.is_failure());
        assert!(!botch.is_success());
    }

    #[test]
    fn outcome_display() {
        let outcome = RollOutcome::from_rolled(d10(3, 6), vec![6, 7, 8]);
        assert_eq!(outcome.to_string(), "[6, 7, 8] = 3 (Success)");
        assert_eq!(OutcomeKind::Critical.to_string(), "Critical Success");
    }

    #[test]
    fn outcome_tags_are_stable() {
        assert_eq!(OutcomeKind::Botch.as_str(), "botch");
        assert_eq!(OutcomeKind::Failure.as_str(), "failure");
        assert_eq!(OutcomeKind::Success.as_str(), "success");
        assert_eq!(OutcomeKind::Critical.as_str(), "critical");
        assert_eq!(OutcomeKind::Other.as_str(), "n/a");
    }

    #[test]
    fn outcome_serde_round_trip() {
        let outcome = RollOutcome::from_rolled(d10(3, 6), vec![1, 6, 10]);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: RollOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }

    proptest! {
        #[test]
        fn d10_classification_is_total_and_consistent(
            rolled in proptest::collection::vec(1u32..=10, 0..=30),
            difficulty in 0u32..=10,
        ) {
            let config = d10(rolled.len() as u32, difficulty);
            let outcome = RollOutcome::from_rolled(config, rolled);

            // Exactly one of the four d10 categories applies.
            let expected = if outcome.result < 0 {
                OutcomeKind::Botch
            } else if outcome.result == 0 {
                OutcomeKind::Failure
            } else if outcome.result > config.pool as i32 {
                OutcomeKind::Critical
            } else {
                OutcomeKind::Success
            };
            prop_assert_eq!(outcome.kind, expected);
            prop_assert_ne!(outcome.kind, OutcomeKind::Other);
        }

        #[test]
        fn counts_never_exceed_pool(
            rolled in proptest::collection::vec(1u32..=10, 0..=30),
            difficulty in 0u32..=10,
        ) {
            let pool = rolled.len() as u32;
            let outcome = RollOutcome::from_rolled(d10(pool, difficulty), rolled);
            prop_assert!(outcome.ones <= pool);
            prop_assert!(outcome.criticals <= pool);
            prop_assert!(outcome.successes <= pool);
            prop_assert!(outcome.failures <= pool);
            // Ones, failure band, success band, and tens partition at
            // most the whole pool (bands only overlap when difficulty
            // lets successes start at 1).
            if difficulty >= 2 {
                prop_assert_eq!(
                    outcome.ones + outcome.criticals + outcome.successes + outcome.failures,
                    pool
                );
            }
        }
    }
}
