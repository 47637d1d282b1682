//! Simulation domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | one input row: id, arrival, burst, priority |
//! | `ProcessState` | per-run lifecycle of a process |
//! | `ExecutionSlice` | one contiguous interval of CPU ownership |
//! | `Timeline` | ordered slices of one run (Gantt chart) |
//! | `CompletionRecord` | per-process timing result |
//! | `RunSummary` | averages and throughput of one run |

mod process;
mod record;
mod timeline;

pub use process::{Process, ProcessState, Ticks};
pub use record::{CompletionRecord, RunSummary};
pub use timeline::{ExecutionSlice, Timeline};
