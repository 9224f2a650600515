//! BenchRecord schema v1 - canonical schema for all benchmark outputs.

use serde::{Deserialize, Serialize};

use super::env::EnvironmentInfo;

/// Schema version for forward compatibility
pub const SCHEMA_VERSION: u32 = 1;

/// Timing statistics for one measured configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingStat {
    pub iterations: u32,
    pub mean_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stddev_ms: Option<f64>,
    pub min_ms: f64,
    pub max_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p95_ms: Option<f64>,
}

impl TimingStat {
    /// Create TimingStat from a slice of sample times in milliseconds
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return TimingStat {
                iterations: 0,
                mean_ms: 0.0,
                median_ms: None,
                stddev_ms: None,
                min_ms: 0.0,
                max_ms: 0.0,
                p95_ms: None,
            };
        }

        let iterations = n as u32;
        let sum: f64 = samples.iter().sum();
        let mean_ms = sum / n as f64;

        let min_ms = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_ms = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        // Compute stddev
        let variance: f64 = samples.iter().map(|x| (x - mean_ms).powi(2)).sum::<f64>() / n as f64;
        let stddev_ms = Some(variance.sqrt());

        // Sort for median and percentiles
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let median_ms = if n % 2 == 0 {
            Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
        } else {
            Some(sorted[n / 2])
        };

        // p95: index = ceil(0.95 * n) - 1, clamped
        let p95_idx = ((0.95 * n as f64).ceil() as usize)
            .saturating_sub(1)
            .min(n - 1);
        let p95_ms = Some(sorted[p95_idx]);

        TimingStat {
            iterations,
            mean_ms,
            median_ms,
            stddev_ms,
            min_ms,
            max_ms,
            p95_ms,
        }
    }
}

/// Run configuration for one measured (variant, threads) cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of independently timed repeats averaged per cell
    pub repeats: u32,
    /// Total operation count split across the cell's workers
    pub total_ops: u64,
    /// Seed the trace generator was started from, if fixed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            repeats: 5,
            total_ops: 400_000,
            seed: None,
        }
    }
}

/// Canonical benchmark record - the unified output schema for all benchmarks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchRecord {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// Unique identifier for this record (UUID or hash)
    pub record_id: String,

    /// ISO 8601 timestamp
    pub timestamp: String,

    /// Workload variant name (short identifier)
    pub variant: String,

    /// Number of concurrent workers for this cell
    pub threads: u32,

    /// Environment information (CPU, OS, versions, etc.)
    pub env: EnvironmentInfo,

    /// Run configuration
    pub config: RunConfig,

    /// Wall-clock timing across the cell's repeats
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_stats: Option<TimingStat>,

    /// Peak resident set size in MB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_rss_mb: Option<f64>,

    /// Command line arguments used
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cli_args: Vec<String>,
}

impl BenchRecord {
    /// Create a new BenchRecord with required fields
    pub fn new(variant: String, threads: u32, env: EnvironmentInfo, config: RunConfig) -> Self {
        // Generate a unique record ID from timestamp + random bytes
        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let record_id = format!(
            "{:x}-{}",
            nanos,
            &timestamp[..19].replace([':', '-', 'T'], "")
        );

        BenchRecord {
            schema_version: SCHEMA_VERSION,
            record_id,
            timestamp,
            variant,
            threads,
            env,
            config,
            run_stats: None,
            peak_rss_mb: None,
            cli_args: Vec::new(),
        }
    }
}
