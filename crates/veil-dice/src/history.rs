//! Roll history recording.
//!
//! Each caller-initiated d10 resolution is reported to a
//! [`RollHistorySink`] exactly once, fire-and-forget, so a host can
//! build roll statistics. The engine attaches no meaning to the
//! context tags; they are opaque key/value pairs supplied by the
//! caller (guild, user, character, trait names, and so on).

use serde::{Deserialize, Serialize};

use crate::outcome::RollOutcome;

/// Opaque context attached to a history record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollTags {
    entries: Vec<(String, String)>,
}

impl RollTags {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key/value tag.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Iterate over the tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True if no tags were attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Receives fire-and-forget roll records for statistics.
pub trait RollHistorySink {
    /// Record one resolved roll. Must not fail the resolution path.
    fn record(&self, outcome: &RollOutcome, tags: &RollTags);
}

/// A sink that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RollHistorySink for NullSink {
    fn record(&self, _outcome: &RollOutcome, _tags: &RollTags) {}
}

/// A sink that emits each record as a debug-level trace event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RollHistorySink for TracingSink {
    fn record(&self, outcome: &RollOutcome, tags: &RollTags) {
        let tags: Vec<String> = tags.iter().map(|(k, v)| format!("{k}={v}")).collect();
        tracing::debug!(
            config = %outcome.config,
            result = outcome.result,
            kind = outcome.kind.as_str(),
            tags = %tags.join(","),
            "roll recorded"
        );
    }
}
