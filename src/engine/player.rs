//! Sequential trace replay against a live shared record.

use std::hint::black_box;

use crate::core::{Op, SharedRecord};

/// Execute every operation of one worker's trace strictly in order.
///
/// Read results are observed but discarded - only their side effect of
/// contending for the lock matters for timing purposes. `black_box` keeps the
/// discarded values from being optimized out. Snapshots are formatted to a
/// string before being dropped, so the measured per-op work includes the
/// serialization of the pair.
///
/// An empty trace returns immediately. There are no error conditions:
/// out-of-range fields are absorbed by the record itself.
pub fn replay(ops: &[Op], record: &SharedRecord) {
    for op in ops {
        match *op {
            Op::Read { field } => {
                black_box(record.get(field));
            }
            Op::Write { field, value } => record.set(field, value),
            Op::Snapshot => {
                let (f0, f1) = record.snapshot();
                black_box(format!("{f0} {f1}"));
            }
        }
    }
}
