use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::BenchResult;
use crate::core::{BenchRecord, TimingStat};

pub struct CsvLogger {
    path: PathBuf,
    has_header: bool,
}

impl CsvLogger {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref().to_path_buf();
        let has_header =
            p.exists() && std::fs::metadata(&p).ok().map(|m| m.len() > 0).unwrap_or(false);
        CsvLogger { path: p, has_header }
    }

    fn ensure_parent(&self) {
        if let Some(dir) = self.path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
    }

    pub fn append_record(&mut self, record: &BenchRecord) -> BenchResult<()> {
        let stats = record.run_stats.as_ref();
        self.append_row(
            &record.timestamp,
            &record.variant,
            record.threads,
            record.config.repeats,
            record.config.total_ops,
            stats.map(|s| s.mean_ms),
            stats.map(|s| s.min_ms),
            stats.map(|s| s.max_ms),
            stats.and_then(|s: &TimingStat| s.stddev_ms),
        )
    }

    pub fn append_row(
        &mut self,
        timestamp: &str,
        variant: &str,
        threads: u32,
        repeats: u32,
        total_ops: u64,
        mean_ms: Option<f64>,
        min_ms: Option<f64>,
        max_ms: Option<f64>,
        stddev_ms: Option<f64>,
    ) -> BenchResult<()> {
        self.ensure_parent();
        let mut file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| crate::BenchError::Message(e.to_string()))?;
        let mut w = BufWriter::new(&mut file);
        if !self.has_header {
            let header = "timestamp,variant,threads,repeats,total_ops,mean_ms,min_ms,max_ms,stddev_ms\n";
            w.write_all(header.as_bytes()).ok();
            self.has_header = true;
        }
        let fmt_f64 = |v: Option<f64>| v.map(|x| format!("{x:.4}")).unwrap_or_default();
        let line = format!(
            "{},{},{},{},{},{},{},{},{}\n",
            timestamp,
            variant,
            threads,
            repeats,
            total_ops,
            fmt_f64(mean_ms),
            fmt_f64(min_ms),
            fmt_f64(max_ms),
            fmt_f64(stddev_ms),
        );
        w.write_all(line.as_bytes())
            .map_err(|e| crate::BenchError::Message(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EnvironmentInfo, RunConfig};

    #[test]
    fn test_header_written_once_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/bench.csv");

        let mut logger = CsvLogger::new(&path);
        logger
            .append_row("t0", "A_variant", 1, 5, 100, Some(1.0), None, None, None)
            .unwrap();

        // A new logger on the same file must not repeat the header.
        let mut logger2 = CsvLogger::new(&path);
        logger2
            .append_row("t1", "A_variant", 2, 5, 100, Some(2.0), None, None, None)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("timestamp,variant,threads"));
        assert!(lines[1].starts_with("t0,A_variant,1,"));
        assert!(lines[2].starts_with("t1,A_variant,2,"));
    }

    #[test]
    fn test_append_record_flattens_stats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.csv");

        let mut record = BenchRecord::new(
            "B_variant".to_string(),
            3,
            EnvironmentInfo::default(),
            RunConfig {
                repeats: 2,
                total_ops: 50,
                seed: None,
            },
        );
        record.run_stats = Some(TimingStat::from_samples(&[10.0, 20.0]));

        let mut logger = CsvLogger::new(&path);
        logger.append_record(&record).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let row = contents.lines().nth(1).unwrap();
        assert!(row.contains(",B_variant,3,2,50,15.0000,10.0000,20.0000,"));
    }
}
