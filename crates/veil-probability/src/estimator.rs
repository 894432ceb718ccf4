//! Monte-Carlo probability estimation.
//!
//! A configuration is simulated at most once per store: `report` first
//! consults the [`ReportStore`] and only simulates on a miss, caching
//! the result before returning it. Two racing first requests may both
//! simulate; the last write wins and either result is valid, since a
//! report is fully built before it is stored.

use veil_dice::{DiceConfig, OutcomeKind, RollOutcome, StdRandom};

use crate::report::ProbabilityReport;
use crate::store::ReportStore;

/// Default number of simulated rolls per configuration.
pub const DEFAULT_TRIALS: u32 = 10_000;

/// Estimates and caches roll outcome distributions.
#[derive(Debug)]
pub struct Estimator<S: ReportStore> {
    store: S,
    trials: u32,
}

impl<S: ReportStore> Estimator<S> {
    /// Create an estimator over the given report store, running
    /// [`DEFAULT_TRIALS`] simulated rolls per uncached configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            trials: DEFAULT_TRIALS,
        }
    }

    /// Override the trial count (floored at 1).
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials.max(1);
        self
    }

    /// The trial count used for fresh simulations.
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Return the probability report for `config`, simulating it if no
    /// cached report exists.
    ///
    /// A cached report is returned unchanged, whatever trial count it
    /// was computed with.
    pub fn report(&self, config: DiceConfig) -> ProbabilityReport {
        if let Some(report) = self.store.get(&config) {
            tracing::debug!(%config, "returning cached probability report");
            return report;
        }

        tracing::debug!(%config, trials = self.trials, "simulating roll probabilities");
        let report = self.simulate(config);
        self.store.put(config, report.clone());
        report
    }

    fn simulate(&self, config: DiceConfig) -> ProbabilityReport {
        // Private stream: internal trials never touch a caller's
        // generator and are never reported to a history sink.
        let mut rng = StdRandom::new();
        let trials = self.trials;

        let mut botch = 0u32;
        let mut failure = 0u32;
        let mut success = 0u32;
        let mut critical = 0u32;
        let mut other = 0u32;

        let mut ones_total = 0u64;
        let mut criticals_total = 0u64;
        let mut successes_total = 0u64;
        let mut failures_total = 0u64;
        let mut result_total = 0i64;

        for _ in 0..trials {
            let outcome = RollOutcome::resolve(config, &mut rng);
            match outcome.kind {
                OutcomeKind::Botch => botch += 1,
                OutcomeKind::Failure => failure += 1,
                OutcomeKind::Success => success += 1,
                OutcomeKind::Critical => critical += 1,
                OutcomeKind::Other => other += 1,
            }
            ones_total += u64::from(outcome.ones);
            criticals_total += u64::from(outcome.criticals);
            successes_total += u64::from(outcome.successes);
            failures_total += u64::from(outcome.failures);
            result_total += i64::from(outcome.result);
        }

        let percent = |count: u32| f64::from(count) / f64::from(trials) * 100.0;
        let die_rate = |total: u64| {
            if config.pool == 0 {
                return 0.0;
            }
            total as f64 / (f64::from(trials) * f64::from(config.pool)) * 100.0
        };

        ProbabilityReport {
            config,
            trials,
            botch: percent(botch),
            failure: percent(failure),
            success: percent(success),
            critical: percent(critical),
            other: percent(other),
            total_successes: percent(success + critical),
            total_failures: percent(failure + botch),
            botch_dice: die_rate(ones_total),
            success_dice: die_rate(successes_total),
            failure_dice: die_rate(failures_total),
            critical_dice: die_rate(criticals_total),
            mean_result: result_total as f64 / f64::from(trials),
        }
    }
}
