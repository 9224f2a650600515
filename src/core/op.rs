//! Operation vocabulary replayed against the shared record.

/// Number of independently lockable fields in a [`crate::core::SharedRecord`].
pub const FIELD_COUNT: usize = 2;

/// One trace operation.
///
/// Field indices outside `0..FIELD_COUNT` are legal to construct; the record
/// absorbs them as no-ops at execution time rather than erroring, so a trace
/// never has to be validated before it can be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Read a single field, discarding the value.
    Read { field: usize },
    /// Write a value to a single field.
    Write { field: usize, value: i64 },
    /// Read both fields as a consistent pair.
    Snapshot,
}
