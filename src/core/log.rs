//! Toggle log: immutable record of evaluated toggle events.
//!
//! The log lives for one configurator session and is discarded with it; it is
//! not a persistence mechanism. Like the rest of the core it is a pure value:
//! recording returns a new log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single evaluated toggle-intent event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleRecord {
    /// The feature the user clicked
    pub feature: String,
    /// The selection value the user requested
    pub requested: bool,
    /// Whether the engine applied the toggle (`false` = vetoed)
    pub accepted: bool,
    /// When the event was evaluated
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of toggle records.
///
/// The log is immutable - [`record`](Self::record) returns a new log with
/// the entry added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use togglekit::core::{ToggleLog, ToggleRecord};
/// use chrono::Utc;
///
/// let log = ToggleLog::new();
/// let log = log.record(ToggleRecord {
///     feature: "React".to_string(),
///     requested: true,
///     accepted: true,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleLog {
    records: Vec<ToggleRecord>,
}

impl ToggleLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record an evaluated event, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log but
    /// returns a new one with the record appended.
    #[must_use]
    pub fn record(&self, record: ToggleRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records in evaluation order.
    pub fn records(&self) -> &[ToggleRecord] {
        &self.records
    }

    /// Records the engine vetoed.
    pub fn rejected(&self) -> impl Iterator<Item = &ToggleRecord> {
        self.records.iter().filter(|r| !r.accepted)
    }

    /// Elapsed time from the first to the last recorded event.
    ///
    /// Returns `None` if the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }
}
