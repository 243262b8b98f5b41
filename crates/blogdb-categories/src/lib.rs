//! blogdb Categories
//!
//! Categories are keyed by an auto-incrementing integer. Articles refer to
//! them by id without any integrity check.

mod category;
mod error;
mod store;

pub use category::Category;
pub use error::CategoryError;
pub use store::CategoryStore;

pub type Result<T> = std::result::Result<T, CategoryError>;
