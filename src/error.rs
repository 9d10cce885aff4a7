//! Error types for the replica store.

use thiserror::Error;

/// Result type alias using the store error type.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by store operations.
///
/// All of them are local and recoverable; nothing inside the store retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Empty file name or non-positive size
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Node id outside the configured range
    #[error("Invalid node ID: {node_id} (expected 1..={node_count})")]
    InvalidNodeId { node_id: u32, node_count: u32 },

    /// Unknown or already deleted file
    #[error("File not found: {0}")]
    NotFound(u64),

    /// Path id that is not a number at all, e.g. `what = "file"`, `raw = "abc"`
    #[error("Malformed {what} ID: {raw:?}")]
    MalformedId { what: &'static str, raw: String },
}

/// Coarse error class used by transports to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadInput,
    NotFound,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidInput(_)
            | StoreError::InvalidNodeId { .. }
            | StoreError::MalformedId { .. } => ErrorKind::BadInput,
            StoreError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
