//! Storage layer for benchmark records.
//!
//! This module provides persistence for `BenchRecord` data.

pub mod jsonl;

// Re-export key types
pub use jsonl::JsonlWriter;
