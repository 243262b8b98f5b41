//! blogdb Core
//!
//! Asynchronous data access for a blog's articles and categories.
//! The database is opened and migrated once; every operation after that
//! shares the same handle and resolves to `Result<T, BlogError>`.

mod blog;
mod config;
mod error;

pub use blog::Blog;
pub use config::Config;
pub use error::BlogError;

// Re-export record types
pub use blogdb_articles::{generate_identifier, Article, ArticleStatus};
pub use blogdb_categories::Category;
pub use blogdb_storage::SCHEMA_VERSION;

pub type Result<T> = std::result::Result<T, BlogError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
