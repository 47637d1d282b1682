//! Process set loading.
//!
//! Reads headerless CSV rows, one process per row:
//!
//! | Fields | Meaning |
//! |--------|---------|
//! | 3 | `id, burst, arrival` (priority 0) |
//! | 4 | `id, burst, arrival, priority` |
//!
//! All fields are base-10 integers. Row order is preserved and becomes
//! the tie-break order of every algorithm. Loading is all-or-nothing: the
//! first malformed row aborts it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::Error;
use crate::models::Process;

/// Opens an input file for [`load_processes`].
pub fn open(path: impl AsRef<Path>) -> Result<File, Error> {
    let path = path.as_ref();
    File::open(path).map_err(|source| Error::InputAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses every row of `reader` into a process.
pub fn load_processes<R: Read>(reader: R) -> Result<Vec<Process>, Error> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut processes = Vec::new();
    for (row, result) in csv.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(row as u64 + 1);
        processes.push(parse_record(&record, line)?);
    }
    Ok(processes)
}

/// Opens `path` and loads its processes.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Process>, Error> {
    load_processes(open(path)?)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Process, Error> {
    if !(3..=4).contains(&record.len()) {
        return Err(Error::InputFormat {
            line,
            message: format!("expected 3 or 4 fields, found {}", record.len()),
        });
    }

    let field = |i: usize, name: &str| -> Result<i64, Error> {
        let raw = &record[i];
        raw.parse::<i64>().map_err(|e| Error::InputFormat {
            line,
            message: format!("{name} {raw:?} is not an integer: {e}"),
        })
    };

    let process = Process::new(field(0, "id")?, field(1, "burst")?, field(2, "arrival")?);
    Ok(match record.len() {
        4 => process.with_priority(field(3, "priority")?),
        _ => process,
    })
}
