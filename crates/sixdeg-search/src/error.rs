//! Error types for the sixdeg-search crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Graph error: {0}")]
    Core(#[from] sixdeg_core::SixdegError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
