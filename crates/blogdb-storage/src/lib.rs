//! blogdb Storage Layer
//!
//! SQLite-based persistence for the blog's articles and categories.
//! One long-lived connection is shared by every caller; writes are
//! transactional per record.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;

pub type Result<T> = std::result::Result<T, StorageError>;
