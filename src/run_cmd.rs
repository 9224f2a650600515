//! Full benchmark sweep: measure every (variant, thread-count) cell and
//! report the table.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::BenchResult;
use crate::core::EnvironmentInfo;
use crate::engine::sweep;
use crate::logging::CsvLogger;
use crate::storage::JsonlWriter;
use crate::workload::codec::{read_trace, trace_file_name};
use crate::workload::config::resolve_config;
use crate::workload::{generate_ops, partition_ops, seeded_rng};

#[cfg(feature = "mem")]
fn capture_peak_mem() -> Option<u64> {
    use sysinfo::{MemoryRefreshKind, RefreshKind, System};
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_memory(MemoryRefreshKind::new().with_ram()),
    );
    sys.refresh_memory();
    Some(sys.total_memory() - sys.free_memory())
}

#[cfg(not(feature = "mem"))]
fn capture_peak_mem() -> Option<u64> {
    None
}

pub fn run(
    config: Option<PathBuf>,
    trace_dir: Option<PathBuf>,
    jsonl_out: Option<PathBuf>,
    csv_out: Option<PathBuf>,
    seed: Option<u64>,
) -> BenchResult<()> {
    let mut config = resolve_config(config.as_deref())?;
    if seed.is_some() {
        config.seed = seed;
    }

    let env = EnvironmentInfo::detect();
    info!(
        variants = config.variants.len(),
        max_threads = config.max_threads,
        repeats = config.repeats,
        total_ops = config.total_ops,
        "starting sweep"
    );

    let outcome = match &trace_dir {
        Some(dir) => sweep(&config, &env, |variant, threads, worker| {
            let path = dir.join(trace_file_name(&variant.name, threads, worker));
            match read_trace(&path) {
                Ok(ops) => Ok(ops),
                Err(e) => {
                    // A worker with no trace still runs - it just does nothing.
                    warn!(path = %path.display(), "{e}; substituting empty workload");
                    Ok(Vec::new())
                }
            }
        })?,
        None => {
            let mut rng = seeded_rng(config.seed);
            let total_ops = config.total_ops;
            sweep(&config, &env, move |variant, threads, worker| {
                let sizes = partition_ops(total_ops, threads);
                generate_ops(sizes[worker], &variant.weights, &mut rng)
            })?
        }
    };

    let mut records = outcome.records;
    let peak_mem = capture_peak_mem();
    let cli_args: Vec<String> = std::env::args().collect();
    for record in &mut records {
        record.peak_rss_mb = peak_mem.map(|b| b as f64 / (1024.0 * 1024.0));
        record.cli_args = cli_args.clone();
    }

    if let Some(path) = jsonl_out {
        let writer = JsonlWriter::new(&path);
        for record in &records {
            writer.append(record)?;
        }
        info!(path = %writer.path().display(), records = records.len(), "appended JSONL records");
    }

    if let Some(path) = csv_out {
        let mut logger = CsvLogger::new(&path);
        for record in &records {
            logger.append_record(record)?;
        }
    }

    print!("{}", outcome.table.render());
    Ok(())
}
