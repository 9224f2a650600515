//! Line-oriented trace file format.
//!
//! One operation per line:
//!
//! ```text
//! read <field>
//! write <field> <value>
//! string
//! ```
//!
//! Any line not matching one of the three forms is silently skipped when
//! reading - trace robustness is not the object of study here.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::BenchError;
use crate::core::Op;

/// File name for the trace of one (variant, threads, worker) triple.
pub fn trace_file_name(variant: &str, threads: usize, worker: usize) -> String {
    format!("trace_{variant}_{threads}_{worker}.txt")
}

/// Write a trace to `path`, one operation per line.
pub fn write_trace(path: &Path, ops: &[Op]) -> Result<(), BenchError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| BenchError::Message(format!("failed to create directory: {e}")))?;
    }
    let file = File::create(path)
        .map_err(|e| BenchError::Message(format!("failed to create {}: {e}", path.display())))?;
    let mut w = BufWriter::new(file);
    for op in ops {
        let line = match *op {
            Op::Read { field } => format!("read {field}"),
            Op::Write { field, value } => format!("write {field} {value}"),
            Op::Snapshot => "string".to_string(),
        };
        writeln!(w, "{line}")
            .map_err(|e| BenchError::Message(format!("failed to write trace: {e}")))?;
    }
    w.flush()
        .map_err(|e| BenchError::Message(format!("failed to write trace: {e}")))?;
    Ok(())
}

/// Read a trace from `path`, skipping lines that don't parse.
///
/// Failing to open the file is an error; the caller decides whether that
/// means an empty workload (the engine tolerates one) or aborting the run.
pub fn read_trace(path: &Path) -> Result<Vec<Op>, BenchError> {
    let file = File::open(path)
        .map_err(|e| BenchError::Message(format!("failed to open {}: {e}", path.display())))?;
    let reader = BufReader::new(file);

    let mut ops = Vec::new();
    for line in reader.lines() {
        let line =
            line.map_err(|e| BenchError::Message(format!("failed to read trace line: {e}")))?;
        if let Some(op) = parse_line(&line) {
            ops.push(op);
        }
    }
    Ok(ops)
}

fn parse_line(line: &str) -> Option<Op> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["read", field] => {
            let field = field.parse().ok()?;
            Some(Op::Read { field })
        }
        ["write", field, value] => {
            let field = field.parse().ok()?;
            let value = value.parse().ok()?;
            Some(Op::Write { field, value })
        }
        ["string"] => Some(Op::Snapshot),
        _ => None,
    }
}
