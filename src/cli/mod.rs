//! CLI module
//!
//! Provides:
//! - Argument parsing (clap derive)
//! - data_root resolution (flag → env → cwd)
//! - Logging initialization
//! - Command dispatch and report rendering

pub mod args;
pub mod data_root;
pub mod dispatch;
pub mod logging;
pub mod report;

// Re-exports
pub use args::{Args, Command};
pub use data_root::{resolve_data_root, verify_data_root, DATA_ROOT_ENV};
pub use dispatch::{execute, prepare, run_command, ExitCode, Session};
pub use logging::init_logging;
pub use report::Report;

use crate::analysis::ChunkError;
use crate::config::ConfigError;
use crate::llm::adapters::AdapterError;
use crate::retrieval::{IngestError, StoreError};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Data root error: {0}")]
    DataRoot(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Chunk(#[from] ChunkError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("IO error on {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::DataRoot(_) | Error::Config(_) => EXIT_CONFIG_ERROR,
            Error::Adapter(AdapterError::Configuration(_)) => EXIT_CONFIG_ERROR,
            _ => EXIT_FAILURE,
        }
    }
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
