//! End-to-end: CSV text in, reports out.

use sched_sim::models::ExecutionSlice;
use sched_sim::validation::{validate_processes, ValidationErrorKind};
use sched_sim::{loader, report, Algorithm, Error, Simulator};

const CANONICAL: &str = "\
1,6,2
2,8,0
3,7,4
4,3,5
";

fn spans(run: &sched_sim::SchedulerRun) -> Vec<(i64, i64, i64)> {
    run.timeline
        .iter()
        .map(|s| (s.process_id, s.start, s.stop))
        .collect()
}

#[test]
fn test_canonical_dataset_all_algorithms() {
    let processes = loader::load_processes(CANONICAL.as_bytes()).unwrap();
    validate_processes(&processes).unwrap();

    let runs = Simulator::default().run_all(&processes);
    assert_eq!(runs.len(), 4);

    // FCFS keeps declaration order: row 1 waits for its arrival at 2.
    assert_eq!(
        spans(&runs[0]),
        vec![(1, 2, 8), (2, 8, 16), (3, 16, 23), (4, 23, 26)]
    );
    assert_eq!(
        spans(&runs[1]),
        vec![(2, 0, 8), (4, 8, 11), (1, 11, 17), (3, 17, 24)]
    );
    // All priorities are 0, so nothing preempts and ties go to input order.
    assert_eq!(
        spans(&runs[2]),
        vec![(2, 0, 8), (1, 8, 14), (3, 14, 21), (4, 21, 24)]
    );
    assert_eq!(runs[3].algorithm, Algorithm::RoundRobin);
    assert_eq!(runs[3].makespan(), 24);
}

#[test]
fn test_round_robin_canonical_rotation() {
    let processes = loader::load_processes(CANONICAL.as_bytes()).unwrap();
    let run = Simulator::default().run(Algorithm::RoundRobin, &processes);
    assert_eq!(
        &run.timeline[..4],
        &[
            ExecutionSlice::new(2, 0, 2),
            ExecutionSlice::new(1, 2, 4),
            ExecutionSlice::new(2, 4, 6),
            ExecutionSlice::new(3, 6, 8),
        ]
    );
}

#[test]
fn test_text_report_sections() {
    let processes = loader::load_processes("1,5,0\n".as_bytes()).unwrap();
    let runs = Simulator::default().run_all(&processes);
    let mut out = Vec::new();
    report::render_all(&mut out, &runs).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("Gantt schedule").count(), 4);
    assert_eq!(text.matches("Schedule table").count(), 4);
    assert_eq!(text.matches("0.20/t").count(), 4);
}

#[test]
fn test_empty_file_reports_zeros() {
    let processes = loader::load_processes("".as_bytes()).unwrap();
    assert!(validate_processes(&processes).is_ok());

    let runs = Simulator::default().run_all(&processes);
    let mut out = Vec::new();
    report::render_all(&mut out, &runs).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("0.00/t").count(), 4);
    assert!(!text.contains("NaN"));
}

#[test]
fn test_duplicate_ids_rejected() {
    let processes = loader::load_processes("1,5,0\n1,2,1\n".as_bytes()).unwrap();
    let err = validate_processes(&processes)
        .map_err(Error::Validation)
        .unwrap_err();
    match err {
        Error::Validation(errors) => {
            assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId)
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_row_aborts_load() {
    let err = loader::load_processes("1,5,0\n2,x,1\n3,1,0\n".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::InputFormat { line: 2, .. }));
}

#[test]
fn test_arrival_at_tick_limit_rejected() {
    let processes = loader::load_processes("1,5,9223372036854775806\n".as_bytes()).unwrap();
    let errors = validate_processes(&processes).unwrap_err();
    assert_eq!(errors[0].kind, ValidationErrorKind::TickOverflow);
}

#[test]
fn test_largest_valid_horizon_runs() {
    let processes = loader::load_processes("1,2,9223372036854775805\n".as_bytes()).unwrap();
    validate_processes(&processes).unwrap();
    for run in Simulator::default().run_all(&processes) {
        assert_eq!(run.makespan(), i64::MAX);
        assert_eq!(run.completions[0].wait, 0);
    }
}
