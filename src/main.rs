use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use log::{error, log_enabled, warn, Level, LevelFilter};

use sched_sim::dispatching::rules::DEFAULT_TIME_QUANTUM;
use sched_sim::models::Ticks;
use sched_sim::{loader, report, validation, Error, SimulationConfig, Simulator};

/// Output format.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum Format {
    /// Title banner, Gantt chart and schedule table per algorithm
    Text,
    /// One JSON array holding every run
    Json,
}

/// Simulate FCFS, SJF, priority and round-robin scheduling over a process file
#[derive(Parser, Debug)]
#[command(name = "sched-sim", version)]
#[command(about = "Simulate CPU scheduling algorithms over a CSV process list", long_about = None)]
struct Args {
    /// CSV file with rows `id,burst,arrival[,priority]`
    input: PathBuf,

    /// Round-robin time quantum in ticks
    #[arg(short, long, default_value_t = DEFAULT_TIME_QUANTUM)]
    quantum: Ticks,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

/// Fatal errors always reach the user, even with logging switched off.
fn report_error<W: Write>(err: &Error, fallback: &mut W) {
    if log_enabled!(Level::Error) {
        error!("{err}");
    } else {
        let _ = writeln!(fallback, "sched-sim: {err}");
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn run(args: &Args) -> Result<(), Error> {
    let simulator = Simulator::new(SimulationConfig::new().with_time_quantum(args.quantum))?;

    let processes = loader::load_file(&args.input)?;
    validation::validate_processes(&processes).map_err(Error::Validation)?;
    if processes.is_empty() {
        warn!("{} holds no processes", args.input.display());
    }

    let runs = simulator.run_all(&processes);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.format {
        Format::Text => report::render_all(&mut out, &runs)?,
        Format::Json => report::render_json(&mut out, &runs)?,
    }
    out.flush()?;
    Ok(())
}
