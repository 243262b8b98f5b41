//! blogdb Articles
//!
//! - An article is keyed by a generated string identifier
//! - Its creation date is filled in once, on first save
//! - Saving is an upsert: the same call inserts and updates
//! - Lookups by date, status and category go through secondary indexes

mod article;
mod error;
mod id;
mod status;
mod store;

pub use article::Article;
pub use error::ArticleError;
pub use id::generate_identifier;
pub use status::ArticleStatus;
pub use store::ArticleStore;

pub type Result<T> = std::result::Result<T, ArticleError>;
