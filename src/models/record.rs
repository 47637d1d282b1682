//! Per-process results and run-level aggregates.

use serde::{Deserialize, Serialize};

use super::{Process, Ticks};

/// Timing result for one process, created when its last unit of work
/// finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub id: i64,
    pub priority: i64,
    pub burst: Ticks,
    pub arrival: Ticks,
    /// `completion - arrival - burst`.
    pub wait: Ticks,
    /// `completion - arrival`.
    pub turnaround: Ticks,
    pub completion: Ticks,
}

impl CompletionRecord {
    /// Derives the record for `process` finishing at tick `completion`.
    pub fn new(process: &Process, completion: Ticks) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            id: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            wait: turnaround - process.burst,
            turnaround,
            completion,
        }
    }
}

/// Aggregate metrics over all completion records of one run.
///
/// An empty run reports zeros across the board.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Completed processes per tick: `count / latest completion`.
    pub throughput: f64,
}
