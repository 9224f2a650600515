//! Concurrent run orchestration: one worker per workload, join-all.

use crate::core::{Op, SharedRecord};

use super::player;

/// Run one worker per workload concurrently against a single record.
///
/// Every worker observes the same `record` instance and replays its own
/// trace strictly in order; no ordering is imposed between workers beyond
/// the record's field locks - that arbitration is precisely the behavior
/// under measurement.
///
/// `std::thread::scope` joins every worker before returning, so there is no
/// partial-completion return and no leaked thread; a panicking worker is
/// propagated at the end of the scope.
pub fn run_once(record: &SharedRecord, workloads: &[Vec<Op>]) {
    std::thread::scope(|s| {
        for ops in workloads {
            s.spawn(move || player::replay(ops, record));
        }
    });
}
