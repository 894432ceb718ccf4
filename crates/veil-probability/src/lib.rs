//! Monte-Carlo roll probability estimation and caching for Veil.
//!
//! Runs the `veil-dice` resolution engine repeatedly for a fixed
//! configuration, aggregates the outcome frequencies into a
//! [`ProbabilityReport`], and caches the report in a [`ReportStore`]
//! so each configuration is simulated at most once.

pub mod estimator;
pub mod report;
pub mod store;

pub use estimator::{DEFAULT_TRIALS, Estimator};
pub use report::ProbabilityReport;
pub use store::{MemoryStore, ReportStore};
