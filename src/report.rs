//! Report rendering.
//!
//! Turns a `SchedulerRun` into the text report: a title banner, a Gantt
//! chart and a schedule table with averages. `render_json` emits the same
//! runs as one JSON document.

use std::io::{self, Write};

use crate::error::Error;
use crate::models::{CompletionRecord, ExecutionSlice, RunSummary};
use crate::scheduler::SchedulerRun;

const GANTT_CELL_WIDTH: usize = 8;
const TABLE_HEADERS: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Writes the full text report for one run.
pub fn render<W: Write>(w: &mut W, run: &SchedulerRun) -> io::Result<()> {
    render_title(w, run.algorithm.title())?;
    render_gantt(w, &run.timeline)?;
    render_table(w, &run.completions, &run.summary)
}

/// Writes text reports for several runs back to back.
pub fn render_all<W: Write>(w: &mut W, runs: &[SchedulerRun]) -> io::Result<()> {
    for run in runs {
        render(w, run)?;
    }
    Ok(())
}

/// Writes all runs as a single pretty-printed JSON array.
pub fn render_json<W: Write>(w: &mut W, runs: &[SchedulerRun]) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *w, runs)?;
    writeln!(w)?;
    Ok(())
}

/// Title banner: a rule twice the title's width, the indented title, the rule again.
pub fn render_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Gantt chart: one cell per slice, then the slice boundaries.
pub fn render_gantt<W: Write>(w: &mut W, timeline: &[ExecutionSlice]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for slice in timeline {
        let pid = slice.process_id.to_string();
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    let mut marks: Vec<String> = timeline.iter().map(|s| s.start.to_string()).collect();
    if let Some(last) = timeline.last() {
        marks.push(last.stop.to_string());
    }
    writeln!(w, "{}", marks.join("\t"))?;
    writeln!(w)
}

/// Schedule table with per-process rows and an averages footer.
pub fn render_table<W: Write>(
    w: &mut W,
    records: &[CompletionRecord],
    summary: &RunSummary,
) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            [
                r.id,
                r.priority,
                r.burst,
                r.arrival,
                r.wait,
                r.turnaround,
                r.completion,
            ]
            .iter()
            .map(|v| v.to_string())
            .collect()
        })
        .collect();
    let footer = footer_rows(summary);

    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows.iter().chain(footer.iter()) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let border = border_line(&widths);
    writeln!(w, "{border}")?;
    write_row(w, &header, &widths)?;
    writeln!(w, "{border}")?;
    for row in &rows {
        write_row(w, row, &widths)?;
    }
    writeln!(w, "{border}")?;
    for row in &footer {
        write_row(w, row, &widths)?;
    }
    writeln!(w, "{border}")
}

fn footer_rows(summary: &RunSummary) -> [Vec<String>; 2] {
    let labels = ["", "", "", "", "Average", "Average", "Throughput"];
    let values = [
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", summary.average_wait),
        format!("{:.2}", summary.average_turnaround),
        format!("{:.2}/t", summary.throughput),
    ];
    [labels.iter().map(|l| l.to_string()).collect(), values.to_vec()]
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn write_row<W: Write>(w: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    write!(w, "|")?;
    for (cell, width) in cells.iter().zip(widths) {
        write!(w, " {cell:<width$} |")?;
    }
    writeln!(w)
}
