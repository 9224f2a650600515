//! List workload variants from the sweep configuration.

use std::path::PathBuf;

use crate::BenchResult;
use crate::workload::config::resolve_config;

pub fn run(config: Option<PathBuf>) -> BenchResult<()> {
    let config = resolve_config(config.as_deref())?;
    for variant in &config.variants {
        println!("{} => weights={:?}", variant.name, variant.weights);
    }
    Ok(())
}
