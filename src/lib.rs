//! Deterministic CPU scheduling simulator.
//!
//! Computes how a fixed batch of CPU-bound processes would run under four
//! classical disciplines and reports per-process timing metrics plus a
//! Gantt timeline. Nothing is executed for real; the simulation works in
//! discrete ticks over declared arrivals, bursts, and priorities.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionSlice`, `Timeline`,
//!   `CompletionRecord`, `RunSummary`
//! - **`dispatching`**: The `DispatchPolicy` trait and the FCFS, SJF,
//!   preemptive priority and Round-Robin policies
//! - **`scheduler`**: The tick-driven `Simulator` and run metrics
//! - **`validation`**: Load-time checks (duplicate IDs, bursts, arrivals)
//! - **`loader`**: CSV input parsing
//! - **`report`**: Text and JSON rendering
//!
//! # Example
//!
//! ```
//! use sched_sim::models::Process;
//! use sched_sim::scheduler::{Algorithm, Simulator};
//!
//! let processes = vec![
//!     Process::new(1, 5, 0),
//!     Process::new(2, 3, 0),
//!     Process::new(3, 1, 0),
//! ];
//! let run = Simulator::default().run(Algorithm::Fcfs, &processes);
//! let waits: Vec<i64> = run.completions.iter().map(|r| r.wait).collect();
//! assert_eq!(waits, vec![0, 5, 8]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum, Bos, "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use config::SimulationConfig;
pub use error::Error;
pub use scheduler::{Algorithm, SchedulerRun, Simulator};
