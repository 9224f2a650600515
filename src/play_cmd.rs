//! Replay one trace file on a single worker with timing.

use std::path::PathBuf;

use tracing::info;

use crate::BenchResult;
use crate::core::TimingStat;
use crate::engine::measure;
use crate::workload::codec::read_trace;

pub fn run(trace: PathBuf, repeats: usize) -> BenchResult<()> {
    let ops = read_trace(&trace)?;
    info!(path = %trace.display(), ops = ops.len(), repeats, "replaying trace");

    let workloads = vec![ops];
    let samples = measure(&workloads, repeats)?;
    let stats = TimingStat::from_samples(&samples);

    println!(
        "play: {} ops={} repeats={} mean={:.4}ms min={:.4}ms max={:.4}ms",
        trace.display(),
        workloads[0].len(),
        stats.iterations,
        stats.mean_ms,
        stats.min_ms,
        stats.max_ms
    );
    Ok(())
}
