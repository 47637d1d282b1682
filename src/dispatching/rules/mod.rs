//! Built-in dispatch policies.
//!
//! # Categories
//!
//! - **Non-preemptive**: FCFS, SJF
//! - **Preemptive**: PRIORITY, RR
//!
//! # Tie-breaking
//! Every policy resolves equal keys to the lowest input index. This equals
//! "lowest process ID" only when the input is sorted by ID.
//!
//! # References
//! - Silberschatz, Galvin, Gagne, "Operating System Concepts", Ch. 5.3

use super::{DispatchPolicy, SchedulingContext};
use crate::models::{ProcessState, Ticks};

/// Default Round-Robin quantum, in ticks.
pub const DEFAULT_TIME_QUANTUM: Ticks = 2;

// ======================== Non-preemptive policies ========================

/// First-Come, First-Served.
///
/// Runs processes strictly in input order. Arrival times are not used to
/// reorder: if the next process in line has not arrived, the CPU idles
/// until it does, even when later rows are already waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl DispatchPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn select(&mut self, context: &SchedulingContext<'_>) -> Option<usize> {
        let head = context
            .states
            .iter()
            .position(|&s| s != ProcessState::Finished)?;
        context.is_waiting(head).then_some(head)
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

/// Shortest Job First (non-preemptive).
///
/// On every free CPU, dispatches the waiting process with the least
/// remaining burst. Once dispatched a process runs to completion, even if
/// a shorter one arrives meanwhile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl DispatchPolicy for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn select(&mut self, context: &SchedulingContext<'_>) -> Option<usize> {
        context.min_waiting_by(|i| context.remaining(i))
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

// ======================== Preemptive policies ========================

/// Preemptive priority scheduling.
///
/// Lower priority value = more urgent. A waiting process preempts the
/// running one only when its priority is strictly lower; equal priority
/// never preempts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptivePriority;

impl DispatchPolicy for PreemptivePriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn select(&mut self, context: &SchedulingContext<'_>) -> Option<usize> {
        context.min_waiting_by(|i| context.process(i).priority)
    }

    fn preempt(&mut self, context: &SchedulingContext<'_>, running: usize) -> Option<usize> {
        let best = self.select(context)?;
        (context.process(best).priority < context.process(running).priority).then_some(best)
    }

    fn description(&self) -> &'static str {
        "Preemptive Priority"
    }
}

/// Round-Robin with a fixed time quantum.
///
/// A process keeps the CPU for at most `quantum` consecutive ticks while
/// another process is waiting. Candidates are scanned circularly in input
/// order, starting after the last dispatched process. When the quantum
/// expires and nobody else is waiting, the running process keeps the CPU
/// and its quantum restarts.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: Ticks,
    used: Ticks,
    cursor: Option<usize>,
}

impl RoundRobin {
    /// Creates a Round-Robin policy with the given quantum.
    pub fn new(quantum: Ticks) -> Self {
        debug_assert!(quantum > 0, "time quantum must be positive");
        Self {
            quantum,
            used: 0,
            cursor: None,
        }
    }

    /// The configured quantum.
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }

    /// First waiting process scanning forward from `from`, wrapping to 0.
    fn scan(context: &SchedulingContext<'_>, from: usize) -> Option<usize> {
        let n = context.len();
        (0..n)
            .map(|k| (from + k) % n)
            .find(|&i| context.is_waiting(i))
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_QUANTUM)
    }
}

impl DispatchPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn select(&mut self, context: &SchedulingContext<'_>) -> Option<usize> {
        if context.is_empty() {
            return None;
        }
        let from = self.cursor.map_or(0, |c| c + 1);
        Self::scan(context, from)
    }

    fn preempt(&mut self, context: &SchedulingContext<'_>, running: usize) -> Option<usize> {
        if self.used < self.quantum {
            return None;
        }
        // Quantum spent: restart it whether or not anyone takes over.
        self.used = 0;
        Self::scan(context, running + 1).filter(|&i| i != running)
    }

    fn dispatched(&mut self, idx: usize) {
        self.used = 0;
        self.cursor = Some(idx);
    }

    fn advanced(&mut self, _idx: usize) {
        self.used += 1;
    }

    fn description(&self) -> &'static str {
        "Round-Robin"
    }
}
