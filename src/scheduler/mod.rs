//! Simulation engine and run results.
//!
//! Provides the tick-driven `Simulator`, the `Algorithm` selector and the
//! per-run result bundle.
//!
//! # Algorithm
//!
//! All four disciplines share one engine and differ only in their
//! `DispatchPolicy`: which waiting process to pick and when to preempt.
//!
//! # Metrics
//!
//! `MetricsAccumulator` turns completion events into `CompletionRecord`s
//! and a `RunSummary` (average wait, average turnaround, throughput).

mod metrics;
mod simulator;

pub use metrics::MetricsAccumulator;
pub use simulator::Simulator;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CompletionRecord, ExecutionSlice, RunSummary, Ticks, Timeline};

/// The scheduling disciplines, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come, First-Served (non-preemptive, input order).
    Fcfs,
    /// Shortest Job First (non-preemptive).
    ShortestJobFirst,
    /// Preemptive priority, lower value first.
    Priority,
    /// Preemptive Round-Robin with a fixed quantum.
    RoundRobin,
}

impl Algorithm {
    /// Every algorithm, in the order reports are produced.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::ShortestJobFirst,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Report banner title.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-come, first-serve",
            Algorithm::ShortestJobFirst => "Shortest-job-first",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round-robin",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Everything one algorithm run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerRun {
    /// Algorithm that produced this run.
    pub algorithm: Algorithm,
    /// Gantt timeline, in chronological order.
    pub timeline: Vec<ExecutionSlice>,
    /// One record per process, in completion order.
    pub completions: Vec<CompletionRecord>,
    /// Averages and throughput.
    pub summary: RunSummary,
}

impl SchedulerRun {
    pub(crate) fn new(algorithm: Algorithm, timeline: Timeline, metrics: MetricsAccumulator) -> Self {
        let (completions, summary) = metrics.finish();
        Self {
            algorithm,
            timeline: timeline.into_slices(),
            completions,
            summary,
        }
    }

    /// Latest completion tick (0 for an empty run).
    pub fn makespan(&self) -> Ticks {
        self.completions
            .iter()
            .map(|r| r.completion)
            .max()
            .unwrap_or(0)
    }

    /// Completion record for a process ID.
    pub fn record_for(&self, process_id: i64) -> Option<&CompletionRecord> {
        self.completions.iter().find(|r| r.id == process_id)
    }

    /// Slices owned by a process ID.
    pub fn slices_for(&self, process_id: i64) -> Vec<&ExecutionSlice> {
        self.timeline
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }
}
