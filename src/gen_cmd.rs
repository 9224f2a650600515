//! Generate trace files for every (variant, threads, worker) triple.

use std::path::PathBuf;

use tracing::info;

use crate::BenchResult;
use crate::workload::codec::{trace_file_name, write_trace};
use crate::workload::config::resolve_config;
use crate::workload::{generate_ops, partition_ops, seeded_rng};

pub fn run(config: Option<PathBuf>, out_dir: PathBuf, seed: Option<u64>) -> BenchResult<()> {
    let mut config = resolve_config(config.as_deref())?;
    if seed.is_some() {
        config.seed = seed;
    }

    let mut rng = seeded_rng(config.seed);
    let mut files = 0usize;

    for variant in &config.variants {
        for threads in 1..=config.max_threads {
            let sizes = partition_ops(config.total_ops, threads);
            for (worker, nops) in sizes.iter().enumerate() {
                let ops = generate_ops(*nops, &variant.weights, &mut rng)?;
                let path = out_dir.join(trace_file_name(&variant.name, threads, worker));
                write_trace(&path, &ops)?;
                info!(path = %path.display(), ops = *nops, "wrote trace");
                files += 1;
            }
        }
    }

    println!(
        "gen: {} trace files in {} ({} variants, up to {} threads, {} ops each split)",
        files,
        out_dir.display(),
        config.variants.len(),
        config.max_threads,
        config.total_ops
    );
    Ok(())
}
