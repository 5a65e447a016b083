//! Runtime errors

use std::path::PathBuf;

use thiserror::Error;

use safe_core::AmrError;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Driver already running")]
    AlreadyRunning,

    #[error("No tokio runtime available to host the driver")]
    NoRuntime,

    #[error("Invalid simulator configuration: {0}")]
    Config(#[from] AmrError),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
