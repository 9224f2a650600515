//! Human-readable results table.
//!
//! One row per workload variant, one column per thread count, each cell the
//! mean elapsed seconds for that (variant, thread-count) pair.

/// Average elapsed time per (variant, thread-count) cell, in seconds.
#[derive(Debug, Clone)]
pub struct ResultsTable {
    max_threads: usize,
    rows: Vec<(String, Vec<f64>)>,
}

impl ResultsTable {
    /// Create an empty table with columns for 1..=`max_threads` workers.
    pub fn new(max_threads: usize) -> Self {
        ResultsTable {
            max_threads,
            rows: Vec::new(),
        }
    }

    /// Append one variant's row; `cells[t - 1]` is the mean seconds at
    /// thread count `t`.
    pub fn push_row(&mut self, variant: String, cells: Vec<f64>) {
        self.rows.push((variant, cells));
    }

    pub fn max_threads(&self) -> usize {
        self.max_threads
    }

    pub fn rows(&self) -> &[(String, Vec<f64>)] {
        &self.rows
    }

    /// Look up one cell by variant name and thread count.
    pub fn get(&self, variant: &str, threads: usize) -> Option<f64> {
        self.rows
            .iter()
            .find(|(name, _)| name == variant)
            .and_then(|(_, cells)| cells.get(threads.checked_sub(1)?))
            .copied()
    }

    /// Render the grid for terminal display, seconds at 4 decimal places.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("Variant\\Threads");
        for t in 1..=self.max_threads {
            let label = if t == 1 {
                "1 thread".to_string()
            } else {
                format!("{t} threads")
            };
            out.push_str(&format!(" | {label:>10}"));
        }
        out.push('\n');
        out.push_str(&"-".repeat(15 + 13 * self.max_threads));
        out.push('\n');

        for (variant, cells) in &self.rows {
            out.push_str(&format!("{variant:<15}"));
            for secs in cells {
                out.push_str(&format!(" | {secs:>10.4}"));
            }
            out.push('\n');
        }
        out
    }
}
