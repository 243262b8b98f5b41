//! Article error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("Storage error: {0}")]
    Storage(#[from] blogdb_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
