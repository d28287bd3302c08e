use thiserror::Error;

/// Top-level error type for graph construction and decoding.
#[derive(Error, Debug)]
pub enum SixdegError {
    #[error("Invalid node id: {0:?}")]
    InvalidNodeId(String),

    #[error("Duplicate node in graph document: {0}")]
    DuplicateNode(String),

    #[error("Duplicate adjacency entry in graph document: {0}")]
    DuplicateAdjacency(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SixdegError>;
