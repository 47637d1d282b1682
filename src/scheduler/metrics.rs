//! Run metrics.
//!
//! Accumulates completion records as processes finish and derives the
//! run-level summary.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Wait | completion - arrival - burst |
//! | Turnaround | completion - arrival |
//! | Average wait | mean wait over all records |
//! | Average turnaround | mean turnaround over all records |
//! | Throughput | record count / latest completion |
//!
//! An empty run has no defined averages; it reports zeros.

use crate::models::{CompletionRecord, Process, RunSummary, Ticks};

/// Collects completion records in completion order.
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
    records: Vec<CompletionRecord>,
    // Widened so sums over many near-limit records cannot overflow.
    total_wait: i128,
    total_turnaround: i128,
    latest_completion: Ticks,
}

impl MetricsAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty accumulator sized for `n` processes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            records: Vec::with_capacity(n),
            ..Self::default()
        }
    }

    /// Records `process` finishing at tick `completion`.
    pub fn record(&mut self, process: &Process, completion: Ticks) -> CompletionRecord {
        let record = CompletionRecord::new(process, completion);
        self.total_wait += i128::from(record.wait);
        self.total_turnaround += i128::from(record.turnaround);
        self.latest_completion = self.latest_completion.max(completion);
        self.records.push(record);
        record
    }

    /// Number of completed processes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has completed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records so far, in completion order.
    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    /// Averages and throughput over the records so far.
    pub fn summary(&self) -> RunSummary {
        if self.records.is_empty() || self.latest_completion <= 0 {
            return RunSummary::default();
        }
        let count = self.records.len() as f64;
        RunSummary {
            average_wait: self.total_wait as f64 / count,
            average_turnaround: self.total_turnaround as f64 / count,
            throughput: count / self.latest_completion as f64,
        }
    }

    /// Consumes the accumulator, returning records and summary.
    pub fn finish(self) -> (Vec<CompletionRecord>, RunSummary) {
        let summary = self.summary();
        (self.records, summary)
    }
}
