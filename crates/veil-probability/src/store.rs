//! Report cache abstraction.
//!
//! The estimator only ever asks a store two questions: is a report
//! cached for this exact configuration, and please remember this one.
//! A production host can back the trait with any key-value storage; a
//! failing backend should answer `None` / drop the write rather than
//! error, which degrades the estimator to always-simulate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use veil_dice::DiceConfig;

use crate::report::ProbabilityReport;

/// Key-value persistence for probability reports, keyed by the exact
/// configuration tuple.
pub trait ReportStore: Send + Sync {
    /// Fetch the report cached for `config`, if any.
    fn get(&self, config: &DiceConfig) -> Option<ProbabilityReport>;

    /// Cache `report` under `config`, replacing any previous value.
    fn put(&self, config: DiceConfig, report: ProbabilityReport);
}

impl<T: ReportStore + ?Sized> ReportStore for &T {
    fn get(&self, config: &DiceConfig) -> Option<ProbabilityReport> {
        (**self).get(config)
    }

    fn put(&self, config: DiceConfig, report: ProbabilityReport) {
        (**self).put(config, report);
    }
}

impl<T: ReportStore + ?Sized> ReportStore for Arc<T> {
    fn get(&self, config: &DiceConfig) -> Option<ProbabilityReport> {
        (**self).get(config)
    }

    fn put(&self, config: DiceConfig, report: ProbabilityReport) {
        (**self).put(config, report);
    }
}

/// An in-process report cache.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<DiceConfig, ProbabilityReport>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached reports.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<DiceConfig, ProbabilityReport>> {
        // A panicked writer can only have left a fully written entry
        // or none at all, so the map is safe to reuse.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReportStore for MemoryStore {
    fn get(&self, config: &DiceConfig) -> Option<ProbabilityReport> {
        self.lock().get(config).cloned()
    }

    fn put(&self, config: DiceConfig, report: ProbabilityReport) {
        self.lock().insert(config, report);
    }
}
