//! Core types for lock-bench.
//!
//! This module contains the operation vocabulary, the lock-granular shared
//! record under measurement, and the canonical `BenchRecord` schema (v1) used
//! for all benchmark outputs.

pub mod env;
pub mod op;
pub mod record;
pub mod schema;

// Re-export key types for convenience
pub use env::EnvironmentInfo;
pub use op::{FIELD_COUNT, Op};
pub use record::SharedRecord;
pub use schema::{BenchRecord, RunConfig, SCHEMA_VERSION, TimingStat};
