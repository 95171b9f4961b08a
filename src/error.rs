//! Error types for objstore

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for objstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in objstore operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("No store found in {} or any parent directory", .0.display())]
    StoreNotFound(PathBuf),

    #[error("Store already exists at {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Corrupt object {hash}: {reason}")]
    CorruptObject { hash: String, reason: String },

    #[error("Malformed object: {0}")]
    MalformedObject(String),

    #[error("Unsupported object type: {0}")]
    UnsupportedType(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an IO error with the operation that produced it
    pub(crate) fn io_context(action: impl Into<String>, err: std::io::Error) -> Self {
        Error::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {}", action.into(), err),
        ))
    }
}
