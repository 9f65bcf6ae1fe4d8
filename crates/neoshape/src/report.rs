// Neoshape - Graph Query Result Shaping
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Diagnostics emitted while normalizing a result.
//!
//! Normalization reports how long the server took and, when verbose, which
//! database and query produced the result. Reports go to a [`Reporter`]
//! supplied by the caller. [`TracingReporter`] forwards them as `tracing`
//! events; [`MemoryReporter`] keeps them for inspection.

use neoshape_core::ResultSummary;
use std::fmt;
use std::sync::Mutex;
use tracing::info;

/// A single diagnostic produced during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// Record count and server timings.
    Timing {
        /// Number of records in the result.
        records: usize,
        /// Milliseconds until the first record was available.
        available_after_ms: u64,
        /// Milliseconds until the result was fully consumed.
        completed_after_ms: u64,
    },
    /// Database and query text.
    Query {
        /// Target database, if the server reported one.
        database: Option<String>,
        /// Query text.
        query: String,
    },
}

impl ReportEvent {
    /// Build the timing event for a result.
    ///
    /// Completion time is the availability offset plus the consumption
    /// offset. Offsets the server did not report count as zero.
    pub fn timing(records: usize, summary: &ResultSummary) -> Self {
        let available = summary.result_available_after.unwrap_or(0);
        let consumed = summary.result_consumed_after.unwrap_or(0);
        ReportEvent::Timing {
            records,
            available_after_ms: available,
            completed_after_ms: available.saturating_add(consumed),
        }
    }

    /// Build the query event for a result.
    pub fn query(summary: &ResultSummary) -> Self {
        ReportEvent::Query {
            database: summary.database.clone(),
            query: summary.query.clone(),
        }
    }
}

impl fmt::Display for ReportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEvent::Timing {
                records,
                available_after_ms,
                completed_after_ms,
            } => write!(
                f,
                "Started streaming {} records after {} ms and completed after {} ms.",
                records, available_after_ms, completed_after_ms
            ),
            ReportEvent::Query { database, query } => write!(
                f,
                "Query executed against database: '{}': {}",
                database.as_deref().unwrap_or(""),
                query
            ),
        }
    }
}

/// Sink for normalization diagnostics.
pub trait Reporter {
    /// Receive one event.
    fn report(&self, event: &ReportEvent);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: &ReportEvent) {
        (**self).report(event)
    }
}

/// Forwards events to `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &ReportEvent) {
        match event {
            ReportEvent::Timing {
                records,
                available_after_ms,
                completed_after_ms,
            } => info!(
                records = *records,
                available_after_ms = *available_after_ms,
                completed_after_ms = *completed_after_ms,
                "{}",
                event
            ),
            ReportEvent::Query { database, .. } => info!(
                database = database.as_deref().unwrap_or(""),
                "{}",
                event
            ),
        }
    }
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl MemoryReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Rendered messages of the events received so far.
    pub fn messages(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }

    /// Drop all collected events.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, event: &ReportEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_sums_offsets() {
        let summary = ResultSummary::new("RETURN 1").with_timings(12, 30);
        assert_eq!(
            ReportEvent::timing(3, &summary),
            ReportEvent::Timing {
                records: 3,
                available_after_ms: 12,
                completed_after_ms: 42
            }
        );
    }

    #[test]
    fn test_timing_missing_offsets_are_zero() {
        let summary = ResultSummary::new("RETURN 1");
        let event = ReportEvent::timing(0, &summary);
        assert_eq!(
            event.to_string(),
            "Started streaming 0 records after 0 ms and completed after 0 ms."
        );
    }

    #[test]
    fn test_query_message() {
        let summary = ResultSummary::new("MATCH (n) RETURN n").with_database("movies");
        assert_eq!(
            ReportEvent::query(&summary).to_string(),
            "Query executed against database: 'movies': MATCH (n) RETURN n"
        );
    }

    #[test]
    fn test_memory_reporter_collects() {
        let reporter = MemoryReporter::new();
        let summary = ResultSummary::new("RETURN 1");
        reporter.report(&ReportEvent::timing(1, &summary));
        reporter.report(&ReportEvent::query(&summary));
        assert_eq!(reporter.events().len(), 2);
        assert!(reporter.messages()[1].contains("RETURN 1"));

        reporter.clear();
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_reporter_by_reference() {
        fn emit(reporter: impl Reporter) {
            reporter.report(&ReportEvent::timing(0, &ResultSummary::default()));
        }
        let reporter = MemoryReporter::new();
        emit(&reporter);
        assert_eq!(reporter.events().len(), 1);
    }

    #[test]
    fn test_tracing_reporter_does_not_panic_without_subscriber() {
        TracingReporter.report(&ReportEvent::timing(1, &ResultSummary::default()));
    }
}
