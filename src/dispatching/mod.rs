//! Dispatch policies for the simulation engine.
//!
//! A policy decides which process gets the CPU. The engine asks it two
//! questions every tick:
//!
//! - `select`: the CPU is free, who runs next?
//! - `preempt`: a process is running, should another replace it now?
//!
//! # Built-in policies
//!
//! | Policy | Selection | Preemption |
//! |--------|-----------|-----------|
//! | `Fcfs` | first unfinished process in input order | never |
//! | `ShortestJobFirst` | least remaining burst | never |
//! | `PreemptivePriority` | lowest priority value | strictly more urgent arrival |
//! | `RoundRobin` | next waiting process, circular scan | quantum expiry |
//!
//! # Usage
//!
//! ```
//! use sched_sim::dispatching::rules::RoundRobin;
//! use sched_sim::dispatching::DispatchPolicy;
//!
//! let policy = RoundRobin::new(2);
//! assert_eq!(policy.name(), "RR");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne, "Operating System Concepts", Ch. 5

mod context;
pub mod rules;

pub use context::SchedulingContext;

use std::fmt::Debug;

/// A CPU dispatch policy.
///
/// Ties are resolved by input order (lowest index), never by process ID.
///
/// Policies may keep private state across a run (Round-Robin keeps its
/// quantum counter and scan cursor); a fresh policy is used for every run.
pub trait DispatchPolicy: Send + Debug {
    /// Short policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Picks the process to dispatch onto a free CPU.
    ///
    /// Returns `None` to leave the CPU idle until the next arrival.
    /// The returned index must be a waiting process.
    fn select(&mut self, context: &SchedulingContext<'_>) -> Option<usize>;

    /// Decides whether `running` should give up the CPU this tick.
    ///
    /// Returns the waiting process that replaces it, or `None` to keep it.
    fn preempt(&mut self, _context: &SchedulingContext<'_>, _running: usize) -> Option<usize> {
        None
    }

    /// Called after the process at `idx` was put on the CPU.
    fn dispatched(&mut self, _idx: usize) {}

    /// Called after the running process at `idx` consumed one tick.
    fn advanced(&mut self, _idx: usize) {}

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
