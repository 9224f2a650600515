//! Timed runs and the variant x thread-count sweep.

use std::time::Instant;

use tracing::info;

use crate::core::{BenchRecord, EnvironmentInfo, Op, RunConfig, SharedRecord, TimingStat};
use crate::report::ResultsTable;
use crate::workload::config::{BenchConfig, VariantSpec};
use crate::{BenchError, BenchResult};

use super::orchestrator;

/// Time one concurrent run of the given per-worker workloads.
///
/// A fresh `SharedRecord` is constructed for the run and discarded afterward;
/// the clock covers just-before-spawn to just-after-join. There is no timeout
/// path - a run always waits for full completion.
pub fn time_run(workloads: &[Vec<Op>]) -> std::time::Duration {
    let record = SharedRecord::new();
    let start = Instant::now();
    orchestrator::run_once(&record, workloads);
    start.elapsed()
}

/// Measure the same workloads `repeats` times, returning per-repeat samples
/// in milliseconds.
///
/// Each repeat gets a freshly constructed record, eliminating warm-state bias
/// (e.g. lock fairness drift) across repeats; averaging the samples reduces
/// scheduler-jitter noise. Aggregation is left to
/// [`TimingStat::from_samples`] so the reported mean is the exact arithmetic
/// mean of what was measured.
pub fn measure(workloads: &[Vec<Op>], repeats: usize) -> BenchResult<Vec<f64>> {
    if repeats == 0 {
        return Err(BenchError::Message("repeats must be at least 1".into()));
    }

    let mut samples: Vec<f64> = Vec::with_capacity(repeats);
    for _ in 0..repeats {
        let elapsed = time_run(workloads);
        samples.push(elapsed.as_secs_f64() * 1_000.0);
    }
    Ok(samples)
}

/// Result of a full sweep: one record and one table cell per
/// (variant, thread-count) pair.
#[derive(Debug)]
pub struct SweepOutcome {
    pub records: Vec<BenchRecord>,
    pub table: ResultsTable,
}

/// Walk every (variant, thread-count) cell of the configuration.
///
/// `load` supplies the trace for a given (variant, threads, worker) triple -
/// the caller decides whether traces come from files or are generated in
/// memory. Workers of one cell run concurrently against one fresh record per
/// repeat; cells themselves run back to back.
pub fn sweep<F>(
    config: &BenchConfig,
    env: &EnvironmentInfo,
    mut load: F,
) -> BenchResult<SweepOutcome>
where
    F: FnMut(&VariantSpec, usize, usize) -> BenchResult<Vec<Op>>,
{
    let mut records = Vec::new();
    let mut table = ResultsTable::new(config.max_threads);

    for variant in &config.variants {
        let mut row = Vec::with_capacity(config.max_threads);
        for threads in 1..=config.max_threads {
            let mut workloads = Vec::with_capacity(threads);
            for worker in 0..threads {
                workloads.push(load(variant, threads, worker)?);
            }

            let samples = measure(&workloads, config.repeats)?;
            let stats = TimingStat::from_samples(&samples);
            info!(
                variant = variant.name.as_str(),
                threads,
                mean_ms = stats.mean_ms,
                "measured cell"
            );
            row.push(stats.mean_ms / 1_000.0);

            let run_config = RunConfig {
                repeats: config.repeats as u32,
                total_ops: config.total_ops as u64,
                seed: config.seed,
            };
            let mut record =
                BenchRecord::new(variant.name.clone(), threads as u32, env.clone(), run_config);
            record.run_stats = Some(stats);
            records.push(record);
        }
        table.push_row(variant.name.clone(), row);
    }

    Ok(SweepOutcome { records, table })
}
