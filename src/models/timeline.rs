//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered sequence of CPU-ownership intervals produced
//! by one algorithm run. Under preemptive policies a process may own
//! several non-contiguous slices.

use serde::{Deserialize, Serialize};

use super::Ticks;

/// One uninterrupted interval `[start, stop)` of CPU ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Owning process ID.
    pub process_id: i64,
    /// First tick of the interval.
    pub start: Ticks,
    /// First tick after the interval.
    pub stop: Ticks,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: i64, start: Ticks, stop: Ticks) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.stop - self.start
    }

    /// Whether two slices share at least one tick.
    #[inline]
    pub fn overlaps(&self, other: &ExecutionSlice) -> bool {
        self.start < other.stop && other.start < self.stop
    }
}

/// Builds a timeline incrementally as the simulation proceeds.
///
/// At most one slice is open at a time. Opening a slice while another is
/// open is a caller bug; `close` on an idle CPU is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    slices: Vec<ExecutionSlice>,
    open: Option<(i64, Ticks)>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a slice for `process_id` at tick `at`.
    pub fn open(&mut self, process_id: i64, at: Ticks) {
        debug_assert!(
            self.open.is_none(),
            "slice for process {process_id} opened while another is open"
        );
        self.open = Some((process_id, at));
    }

    /// Closes the open slice at tick `at`.
    ///
    /// Zero-length slices are dropped.
    pub fn close(&mut self, at: Ticks) {
        if let Some((process_id, start)) = self.open.take() {
            if at > start {
                self.slices.push(ExecutionSlice::new(process_id, start, at));
            }
        }
    }

    /// Whether a slice is currently open.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Closed slices in chronological order.
    pub fn slices(&self) -> &[ExecutionSlice] {
        &self.slices
    }

    /// Consumes the builder, returning the closed slices.
    pub fn into_slices(self) -> Vec<ExecutionSlice> {
        debug_assert!(self.open.is_none(), "timeline finished with an open slice");
        self.slices
    }
}
