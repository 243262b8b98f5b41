//! Category error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CategoryError {
    #[error("Storage error: {0}")]
    Storage(#[from] blogdb_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
