//! Scheduling context for dispatch policy evaluation.

use crate::models::{Process, ProcessState, Ticks};

/// Read-only view of one simulation run, passed to dispatch policies.
///
/// Process indices refer to positions in the input slice. Input order is
/// the tie-break order for every policy.
#[derive(Debug, Clone, Copy)]
pub struct SchedulingContext<'a> {
    /// Input process set, in declaration order.
    pub processes: &'a [Process],
    /// Lifecycle state per process.
    pub states: &'a [ProcessState],
    /// Remaining burst per process.
    pub remaining: &'a [Ticks],
}

impl<'a> SchedulingContext<'a> {
    /// Number of processes in the run.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the run has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// The process at `idx`.
    pub fn process(&self, idx: usize) -> &'a Process {
        &self.processes[idx]
    }

    /// Remaining burst of the process at `idx`.
    pub fn remaining(&self, idx: usize) -> Ticks {
        self.remaining[idx]
    }

    /// Whether the process at `idx` has arrived, has work left, and is
    /// not on the CPU.
    pub fn is_waiting(&self, idx: usize) -> bool {
        self.states[idx] == ProcessState::Waiting
    }

    /// Indices of waiting processes in input order.
    pub fn waiting(&self) -> impl Iterator<Item = usize> + 'a {
        let states = self.states;
        (0..states.len()).filter(move |&i| states[i] == ProcessState::Waiting)
    }

    /// The waiting process with the smallest key, ties to the lowest index.
    pub fn min_waiting_by<K, F>(&self, key: F) -> Option<usize>
    where
        K: Ord,
        F: Fn(usize) -> K,
    {
        self.waiting().min_by_key(|&i| (key(i), i))
    }
}
