use std::path::Path;

use serde::Deserialize;

use crate::{BenchError, BenchResult};

use super::CATEGORY_COUNT;

/// A named weight vector over the five operation categories.
#[derive(Debug, Clone)]
pub struct VariantSpec {
    pub name: String,
    /// Weights for read-0, write-0, read-1, write-1, snapshot. Not required
    /// to sum to 1; the sampler normalizes internally.
    pub weights: [f64; CATEGORY_COUNT],
}

/// Full sweep configuration.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub total_ops: usize,
    pub max_threads: usize,
    pub repeats: usize,
    pub seed: Option<u64>,
    pub variants: Vec<VariantSpec>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            total_ops: 400_000,
            max_threads: 3,
            repeats: 5,
            seed: None,
            variants: default_variants(),
        }
    }
}

/// The three stock operation mixes benchmarked when no config is supplied.
pub fn default_variants() -> Vec<VariantSpec> {
    vec![
        VariantSpec {
            name: "A_variant".to_string(),
            weights: [0.10, 0.05, 0.50, 0.10, 0.25],
        },
        VariantSpec {
            name: "B_variant".to_string(),
            weights: [0.20, 0.20, 0.20, 0.20, 0.20],
        },
        VariantSpec {
            name: "C_variant".to_string(),
            weights: [0.20, 0.10, 0.05, 0.20, 0.45],
        },
    ]
}

#[derive(Debug, Deserialize)]
struct RawVariant {
    pub name: String,
    pub weights: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    pub total_ops: Option<usize>,
    #[serde(default)]
    pub max_threads: Option<usize>,
    #[serde(default)]
    pub repeats: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(rename = "variant", default)]
    pub variants: Vec<RawVariant>,
}

/// Config file consulted when no `--config` is given.
pub const DEFAULT_CONFIG: &str = "bench-config.toml";

/// Resolve the sweep configuration for a command invocation.
///
/// An explicit path must load; otherwise `bench-config.toml` is used when
/// present and the built-in defaults when not.
pub fn resolve_config(path: Option<&Path>) -> BenchResult<BenchConfig> {
    match path {
        Some(p) => load_bench_config(p),
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if default.exists() {
                load_bench_config(default)
            } else {
                Ok(BenchConfig::default())
            }
        }
    }
}

/// Load a sweep configuration from a TOML file.
///
/// Missing keys fall back to the defaults; a file with no `[[variant]]`
/// tables gets the stock variants.
pub fn load_bench_config(path: &Path) -> BenchResult<BenchConfig> {
    let s = std::fs::read_to_string(path).map_err(|e| BenchError::Message(e.to_string()))?;
    let raw: RawConfig = toml::from_str(&s).map_err(|e| BenchError::Message(e.to_string()))?;

    let defaults = BenchConfig::default();
    let variants = if raw.variants.is_empty() {
        default_variants()
    } else {
        raw.variants
            .into_iter()
            .map(|v| {
                let weights: [f64; CATEGORY_COUNT] = v.weights.as_slice().try_into().map_err(|_| {
                    BenchError::Message(format!(
                        "variant '{}' must have exactly {CATEGORY_COUNT} weights",
                        v.name
                    ))
                })?;
                Ok(VariantSpec {
                    name: v.name,
                    weights,
                })
            })
            .collect::<BenchResult<Vec<_>>>()?
    };

    let config = BenchConfig {
        total_ops: raw.total_ops.unwrap_or(defaults.total_ops),
        max_threads: raw.max_threads.unwrap_or(defaults.max_threads),
        repeats: raw.repeats.unwrap_or(defaults.repeats),
        seed: raw.seed,
        variants,
    };
    config.validate()?;
    Ok(config)
}

impl BenchConfig {
    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> BenchResult<()> {
        if self.max_threads == 0 {
            return Err(BenchError::Message("max_threads must be at least 1".into()));
        }
        if self.repeats == 0 {
            return Err(BenchError::Message("repeats must be at least 1".into()));
        }
        if self.variants.is_empty() {
            return Err(BenchError::Message("at least one variant is required".into()));
        }
        for v in &self.variants {
            let total: f64 = v.weights.iter().sum();
            if !(total > 0.0) || v.weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(BenchError::Message(format!(
                    "variant '{}' needs non-negative weights with a positive total",
                    v.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_benchmark() {
        let config = BenchConfig::default();
        assert_eq!(config.total_ops, 400_000);
        assert_eq!(config.max_threads, 3);
        assert_eq!(config.repeats, 5);
        assert_eq!(config.variants.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        std::fs::write(
            &path,
            r#"
total_ops = 1000
max_threads = 2
repeats = 3
seed = 9

[[variant]]
name = "snapshot-heavy"
weights = [0.1, 0.1, 0.1, 0.1, 0.6]
"#,
        )
        .unwrap();

        let config = load_bench_config(&path).unwrap();
        assert_eq!(config.total_ops, 1000);
        assert_eq!(config.max_threads, 2);
        assert_eq!(config.repeats, 3);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.variants.len(), 1);
        assert_eq!(config.variants[0].name, "snapshot-heavy");
        assert_eq!(config.variants[0].weights[4], 0.6);
    }

    #[test]
    fn test_load_empty_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        std::fs::write(&path, "").unwrap();

        let config = load_bench_config(&path).unwrap();
        assert_eq!(config.total_ops, 400_000);
        assert_eq!(config.variants.len(), 3);
    }

    #[test]
    fn test_wrong_weight_arity_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        std::fs::write(
            &path,
            r#"
[[variant]]
name = "short"
weights = [0.5, 0.5]
"#,
        )
        .unwrap();
        assert!(load_bench_config(&path).is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_configs() {
        let mut config = BenchConfig::default();
        config.repeats = 0;
        assert!(config.validate().is_err());

        let mut config = BenchConfig::default();
        config.max_threads = 0;
        assert!(config.validate().is_err());

        let mut config = BenchConfig::default();
        config.variants.clear();
        assert!(config.validate().is_err());

        let mut config = BenchConfig::default();
        config.variants[0].weights = [0.0; 5];
        assert!(config.validate().is_err());
    }
}
