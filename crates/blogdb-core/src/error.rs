//! Caller-facing error types
//!
//! Every failure is reported as one of four kinds: the database could not be
//! opened, or a read, write or delete against a collection failed.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Failed to open the database: {0}")]
    Open(String),

    #[error("Failed to read {collection}: {message}")]
    Read {
        collection: &'static str,
        message: String,
    },

    #[error("Failed to save to {collection}: {message}")]
    Write {
        collection: &'static str,
        message: String,
    },

    #[error("Failed to delete from {collection}: {message}")]
    Delete {
        collection: &'static str,
        message: String,
    },

    #[error("Database task failed: {0}")]
    Task(String),
}

impl From<blogdb_storage::StorageError> for BlogError {
    fn from(err: blogdb_storage::StorageError) -> Self {
        BlogError::Open(err.to_string())
    }
}

impl From<std::io::Error> for BlogError {
    fn from(err: std::io::Error) -> Self {
        BlogError::Open(err.to_string())
    }
}
