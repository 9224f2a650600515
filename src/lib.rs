pub mod core;
pub mod engine;
pub mod gen_cmd;
pub mod list_cmd;
pub mod logging;
pub mod play_cmd;
pub mod report;
pub mod run_cmd;
pub mod storage;
pub mod workload;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;
