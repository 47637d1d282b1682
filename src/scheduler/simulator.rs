//! Tick-driven single-CPU simulator.
//!
//! # Algorithm
//!
//! Each tick, in order:
//! 1. Admit processes whose arrival tick has been reached.
//! 2. Retire the running process if its remaining burst is zero
//!    (completion wins over a coinciding quantum expiry).
//! 3. Ask the policy to `select` (CPU free) or `preempt` (CPU busy).
//! 4. Run the chosen process for one tick.
//!
//! When the CPU is idle and the policy has nothing to dispatch, the clock
//! jumps straight to the next arrival; idle time produces no slices.
//!
//! # Complexity
//! O(B * n) where B = sum of bursts, n = process count.

use log::{debug, info, warn};

use super::{Algorithm, MetricsAccumulator, SchedulerRun};
use crate::config::SimulationConfig;
use crate::dispatching::rules::{Fcfs, PreemptivePriority, RoundRobin, ShortestJobFirst};
use crate::dispatching::{DispatchPolicy, SchedulingContext};
use crate::error::Error;
use crate::models::{Process, ProcessState, Ticks, Timeline};

/// Runs scheduling algorithms over a fixed process set.
///
/// The simulator never mutates its input; every run builds its own
/// per-process state, so runs are independent of each other.
///
/// # Example
///
/// ```
/// use sched_sim::models::Process;
/// use sched_sim::scheduler::{Algorithm, Simulator};
///
/// let processes = vec![Process::new(1, 4, 0), Process::new(2, 3, 1)];
/// let run = Simulator::default().run(Algorithm::RoundRobin, &processes);
///
/// let owners: Vec<i64> = run.timeline.iter().map(|s| s.process_id).collect();
/// assert_eq!(owners, vec![1, 2, 1, 2]);
/// assert_eq!(run.makespan(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator, rejecting out-of-range settings.
    pub fn new(config: SimulationConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one algorithm over `processes`.
    pub fn run(&self, algorithm: Algorithm, processes: &[Process]) -> SchedulerRun {
        match algorithm {
            Algorithm::Fcfs => self.run_with_policy(algorithm, &mut Fcfs, processes),
            Algorithm::ShortestJobFirst => {
                self.run_with_policy(algorithm, &mut ShortestJobFirst, processes)
            }
            Algorithm::Priority => {
                self.run_with_policy(algorithm, &mut PreemptivePriority, processes)
            }
            Algorithm::RoundRobin => {
                let mut policy = RoundRobin::new(self.config.time_quantum);
                self.run_with_policy(algorithm, &mut policy, processes)
            }
        }
    }

    /// Runs every algorithm in report order: FCFS, SJF, Priority, RR.
    pub fn run_all(&self, processes: &[Process]) -> Vec<SchedulerRun> {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| self.run(algorithm, processes))
            .collect()
    }

    /// Runs the engine with an explicit policy.
    ///
    /// `algorithm` only labels the result.
    pub fn run_with_policy<P>(
        &self,
        algorithm: Algorithm,
        policy: &mut P,
        processes: &[Process],
    ) -> SchedulerRun
    where
        P: DispatchPolicy + ?Sized,
    {
        let n = processes.len();
        let mut states = vec![ProcessState::NotArrived; n];
        let mut remaining: Vec<Ticks> = processes.iter().map(|p| p.burst).collect();
        let mut timeline = Timeline::new();
        let mut metrics = MetricsAccumulator::with_capacity(n);
        let mut running: Option<usize> = None;
        let mut now: Ticks = 0;

        if n == 0 {
            warn!("{algorithm}: empty process set, nothing to schedule");
            return SchedulerRun::new(algorithm, timeline, metrics);
        }
        info!(
            "{algorithm}: scheduling {n} processes with policy {}",
            policy.name()
        );

        loop {
            admit(processes, &mut states, now);

            if let Some(idx) = running {
                if remaining[idx] == 0 {
                    timeline.close(now);
                    states[idx] = ProcessState::Finished;
                    let record = metrics.record(&processes[idx], now);
                    debug!(
                        "t={now}: process {} finished (wait {}, turnaround {})",
                        record.id, record.wait, record.turnaround
                    );
                    running = None;
                }
            }
            if metrics.len() == n {
                break;
            }
            debug_assert_eq!(timeline.is_open(), running.is_some());

            let decision = {
                let context = SchedulingContext {
                    processes,
                    states: &states,
                    remaining: &remaining,
                };
                match running {
                    None => policy.select(&context),
                    Some(idx) => policy.preempt(&context, idx),
                }
            };

            if let Some(next) = decision.filter(|&next| Some(next) != running) {
                debug_assert_eq!(
                    states[next],
                    ProcessState::Waiting,
                    "policy {} chose a process that is not waiting",
                    policy.name()
                );
                if let Some(prev) = running.take() {
                    timeline.close(now);
                    states[prev] = ProcessState::Waiting;
                    debug!(
                        "t={now}: process {} preempted by {}",
                        processes[prev].id, processes[next].id
                    );
                }
                states[next] = ProcessState::Running;
                timeline.open(processes[next].id, now);
                policy.dispatched(next);
                running = Some(next);
                debug!("t={now}: dispatch process {}", processes[next].id);
            }

            match running {
                Some(idx) => {
                    remaining[idx] -= 1;
                    policy.advanced(idx);
                    now += 1;
                }
                None => match next_arrival(processes, &states) {
                    Some(at) => {
                        debug!("t={now}: cpu idle until {at}");
                        now = at;
                    }
                    None => {
                        // Only reachable with a policy that refuses every waiting process.
                        warn!(
                            "{algorithm}: policy {} stalled with {} unfinished processes",
                            policy.name(),
                            n - metrics.len()
                        );
                        break;
                    }
                },
            }
        }

        let run = SchedulerRun::new(algorithm, timeline, metrics);
        info!(
            "{algorithm}: makespan {}, avg wait {:.2}, avg turnaround {:.2}, throughput {:.2}",
            run.makespan(),
            run.summary.average_wait,
            run.summary.average_turnaround,
            run.summary.throughput
        );
        run
    }
}

/// Moves every process whose arrival tick has been reached to `Waiting`.
fn admit(processes: &[Process], states: &mut [ProcessState], now: Ticks) {
    for (state, process) in states.iter_mut().zip(processes) {
        if *state == ProcessState::NotArrived && process.has_arrived(now) {
            *state = ProcessState::Waiting;
        }
    }
}

/// Earliest arrival among processes not yet admitted.
fn next_arrival(processes: &[Process], states: &[ProcessState]) -> Option<Ticks> {
    processes
        .iter()
        .zip(states)
        .filter(|(_, &s)| s == ProcessState::NotArrived)
        .map(|(p, _)| p.arrival)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionSlice, RunSummary};

    fn p(id: i64, burst: Ticks, arrival: Ticks) -> Process {
        Process::new(id, burst, arrival)
    }

    fn slices(run: &SchedulerRun) -> Vec<(i64, Ticks, Ticks)> {
        run.timeline
            .iter()
            .map(|s| (s.process_id, s.start, s.stop))
            .collect()
    }

    fn waits(run: &SchedulerRun) -> Vec<(i64, Ticks)> {
        run.completions.iter().map(|r| (r.id, r.wait)).collect()
    }

    #[test]
    fn test_single_process_all_algorithms() {
        let processes = vec![p(1, 5, 0)];
        for run in Simulator::default().run_all(&processes) {
            assert_eq!(slices(&run), vec![(1, 0, 5)], "{}", run.algorithm);
            let r = run.completions[0];
            assert_eq!(r.wait, 0);
            assert_eq!(r.turnaround, 5);
            assert!((run.summary.throughput - 0.2).abs() < 1e-10);
        }
    }

    #[test]
    fn test_fcfs_same_arrival() {
        let processes = vec![p(1, 5, 0), p(2, 3, 0), p(3, 1, 0)];
        let run = Simulator::default().run(Algorithm::Fcfs, &processes);
        assert_eq!(slices(&run), vec![(1, 0, 5), (2, 5, 8), (3, 8, 9)]);
        assert_eq!(waits(&run), vec![(1, 0), (2, 5), (3, 8)]);
        let turnarounds: Vec<Ticks> = run.completions.iter().map(|r| r.turnaround).collect();
        assert_eq!(turnarounds, vec![5, 8, 9]);
    }

    #[test]
    fn test_fcfs_honors_input_order_over_arrival() {
        // Row 1 arrives later than row 2 but is declared first.
        let processes = vec![p(1, 2, 3), p(2, 2, 0)];
        let run = Simulator::default().run(Algorithm::Fcfs, &processes);
        assert_eq!(slices(&run), vec![(1, 3, 5), (2, 5, 7)]);
        assert_eq!(waits(&run), vec![(1, 0), (2, 5)]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![p(1, 2, 0), p(2, 3, 6)];
        let run = Simulator::default().run(Algorithm::Fcfs, &processes);
        assert_eq!(slices(&run), vec![(1, 0, 2), (2, 6, 9)]);
        assert_eq!(waits(&run), vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn test_sjf_canonical() {
        let processes = vec![p(1, 6, 2), p(2, 8, 0), p(3, 7, 4), p(4, 3, 5)];
        let run = Simulator::default().run(Algorithm::ShortestJobFirst, &processes);
        assert_eq!(
            slices(&run),
            vec![(2, 0, 8), (4, 8, 11), (1, 11, 17), (3, 17, 24)]
        );
        assert_eq!(waits(&run), vec![(2, 0), (4, 3), (1, 9), (3, 13)]);
        assert!((run.summary.average_wait - 6.25).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_is_non_preemptive() {
        let processes = vec![p(1, 10, 0), p(2, 1, 1)];
        let run = Simulator::default().run(Algorithm::ShortestJobFirst, &processes);
        assert_eq!(slices(&run), vec![(1, 0, 10), (2, 10, 11)]);
    }

    #[test]
    fn test_sjf_tie_breaks_by_input_order() {
        let processes = vec![p(5, 3, 0), p(1, 3, 0)];
        let run = Simulator::default().run(Algorithm::ShortestJobFirst, &processes);
        assert_eq!(run.timeline[0].process_id, 5);
    }

    #[test]
    fn test_sjf_idle_start() {
        let processes = vec![p(1, 2, 3)];
        let run = Simulator::default().run(Algorithm::ShortestJobFirst, &processes);
        assert_eq!(slices(&run), vec![(1, 3, 5)]);
        assert_eq!(run.completions[0].wait, 0);
    }

    #[test]
    fn test_priority_preempts_at_arrival() {
        let processes = vec![
            p(1, 5, 0).with_priority(3),
            p(2, 2, 2).with_priority(1),
            p(3, 1, 3).with_priority(2),
        ];
        let run = Simulator::default().run(Algorithm::Priority, &processes);
        assert_eq!(
            slices(&run),
            vec![(1, 0, 2), (2, 2, 4), (3, 4, 5), (1, 5, 8)]
        );
        let order: Vec<i64> = run.completions.iter().map(|r| r.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_priority_equal_does_not_preempt() {
        let processes = vec![p(1, 4, 0).with_priority(1), p(2, 1, 1).with_priority(1)];
        let run = Simulator::default().run(Algorithm::Priority, &processes);
        assert_eq!(slices(&run), vec![(1, 0, 4), (2, 4, 5)]);
    }

    #[test]
    fn test_rr_two_processes() {
        let processes = vec![p(1, 4, 0), p(2, 3, 1)];
        let run = Simulator::default().run(Algorithm::RoundRobin, &processes);
        assert_eq!(
            slices(&run),
            vec![(1, 0, 2), (2, 2, 4), (1, 4, 6), (2, 6, 7)]
        );
    }

    #[test]
    fn test_rr_completion_beats_quantum_expiry() {
        // Process 1 finishes exactly at its quantum boundary.
        let processes = vec![p(1, 2, 0), p(2, 3, 0), p(3, 1, 0)];
        let run = Simulator::default().run(Algorithm::RoundRobin, &processes);
        assert_eq!(
            slices(&run),
            vec![(1, 0, 2), (2, 2, 4), (3, 4, 5), (2, 5, 6)]
        );
    }

    #[test]
    fn test_rr_sole_process_not_split() {
        let processes = vec![p(1, 7, 0)];
        let run = Simulator::default().run(Algorithm::RoundRobin, &processes);
        assert_eq!(slices(&run), vec![(1, 0, 7)]);
    }

    #[test]
    fn test_rr_custom_quantum() {
        let config = SimulationConfig::new().with_time_quantum(3);
        let sim = Simulator::new(config).unwrap();
        let processes = vec![p(1, 4, 0), p(2, 4, 0)];
        let run = sim.run(Algorithm::RoundRobin, &processes);
        assert_eq!(
            slices(&run),
            vec![(1, 0, 3), (2, 3, 6), (1, 6, 7), (2, 7, 8)]
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::new().with_time_quantum(0);
        assert!(Simulator::new(config).is_err());
    }

    #[test]
    fn test_empty_input() {
        for run in Simulator::default().run_all(&[]) {
            assert!(run.timeline.is_empty());
            assert!(run.completions.is_empty());
            assert_eq!(run.summary, RunSummary::default());
        }
    }

    #[test]
    fn test_input_untouched() {
        let processes = vec![p(1, 4, 0), p(2, 3, 1)];
        let snapshot = processes.clone();
        Simulator::default().run_all(&processes);
        assert_eq!(processes, snapshot);
    }

    #[test]
    fn test_run_all_order() {
        let runs = Simulator::default().run_all(&[p(1, 1, 0)]);
        let algorithms: Vec<Algorithm> = runs.iter().map(|r| r.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());
    }

    #[test]
    fn test_custom_policy() {
        // Longest job first, to exercise run_with_policy with a caller-supplied policy.
        #[derive(Debug)]
        struct Longest;
        impl DispatchPolicy for Longest {
            fn name(&self) -> &'static str {
                "LJF"
            }
            fn select(&mut self, context: &SchedulingContext<'_>) -> Option<usize> {
                context.min_waiting_by(|i| -context.remaining(i))
            }
        }

        let processes = vec![p(1, 1, 0), p(2, 3, 0)];
        let run = Simulator::default().run_with_policy(
            Algorithm::ShortestJobFirst,
            &mut Longest,
            &processes,
        );
        assert_eq!(
            run.timeline,
            vec![ExecutionSlice::new(2, 0, 3), ExecutionSlice::new(1, 3, 4)]
        );
    }
}
