//! Process (job) model.
//!
//! A process is a single CPU burst with an arrival time and an optional
//! priority. Process records are immutable once loaded; every algorithm
//! run works on its own copy of the remaining-burst counters.

use serde::{Deserialize, Serialize};

/// Simulated time, in ticks.
pub type Ticks = i64;

/// A CPU-bound process to be scheduled.
///
/// # Priority Convention
/// **Lower value = more urgent.** Only the preemptive priority policy
/// looks at this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (labels Gantt slices and table rows).
    pub id: i64,
    /// Tick at which the process becomes eligible for scheduling.
    pub arrival: Ticks,
    /// Total CPU time required.
    pub burst: Ticks,
    /// Scheduling priority (lower = more urgent). Defaults to 0.
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: i64, burst: Ticks, arrival: Ticks) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by tick `now`.
    #[inline]
    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival <= now
    }
}

/// Runtime state of a process within one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessState {
    /// Arrival tick not reached yet.
    NotArrived,
    /// Arrived, has work left, not on the CPU.
    Waiting,
    /// Currently owns the CPU.
    Running,
    /// All work done.
    Finished,
}
