//! Blog data access handle
//!
//! Wraps the article and category stores behind async operations. SQLite
//! work runs on tokio's blocking pool; the connection itself is shared and
//! locked per operation.

use std::fmt::Display;

use blogdb_articles::{Article, ArticleStatus, ArticleStore};
use blogdb_categories::{Category, CategoryStore};
use blogdb_storage::Database;

use crate::config::Config;
use crate::error::BlogError;
use crate::Result;

const ARTICLES: &str = "articles";
const CATEGORIES: &str = "categories";

#[derive(Debug, Clone, Copy)]
enum Op {
    Read,
    Write,
    Delete,
}

pub struct Blog {
    /// Configuration
    config: Config,
    /// Shared database handle
    db: Database,
    articles: ArticleStore,
    categories: CategoryStore,
}

impl Blog {
    /// Open (creating if absent) the database described by `config` and run
    /// pending migrations.
    pub async fn initialize(config: Config) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::open(config))
            .await
            .map_err(|e| BlogError::Task(e.to_string()))?
    }

    /// Blocking counterpart of [`Blog::initialize`]
    pub fn open(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;

        tracing::info!(
            database = %config.database_name,
            path = %config.database_path.display(),
            schema_version = blogdb_storage::SCHEMA_VERSION,
            "Blog database ready"
        );

        Ok(Self::from_database(config, db))
    }

    pub fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self::from_database(
            Config::with_database_path(":memory:"),
            db,
        ))
    }

    fn from_database(config: Config, db: Database) -> Self {
        Self {
            config,
            articles: ArticleStore::new(db.clone()),
            categories: CategoryStore::new(db.clone()),
            db,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn schema_version(&self) -> Result<i32> {
        let db = self.db.clone();
        run(Op::Read, "schema_version", move || db.schema_version()).await
    }

    // === Articles ===

    pub async fn get_all_articles(&self) -> Result<Vec<Article>> {
        let store = self.articles.clone();
        run(Op::Read, ARTICLES, move || store.all()).await
    }

    /// Missing articles resolve to `Ok(None)`
    pub async fn get_article_by_id(&self, id: &str) -> Result<Option<Article>> {
        let store = self.articles.clone();
        let id = id.to_string();
        run(Op::Read, ARTICLES, move || store.get(&id)).await
    }

    pub async fn get_articles_by_status(&self, status: ArticleStatus) -> Result<Vec<Article>> {
        let store = self.articles.clone();
        run(Op::Read, ARTICLES, move || store.by_status(status)).await
    }

    pub async fn get_articles_by_category(&self, category: i64) -> Result<Vec<Article>> {
        let store = self.articles.clone();
        run(Op::Read, ARTICLES, move || store.by_category(category)).await
    }

    pub async fn get_recent_articles(&self, limit: usize) -> Result<Vec<Article>> {
        let store = self.articles.clone();
        run(Op::Read, ARTICLES, move || store.recent(limit)).await
    }

    /// Upsert an article, filling in a missing id and creation date.
    /// Returns the article as stored.
    pub async fn save_article(&self, article: Article) -> Result<Article> {
        let store = self.articles.clone();
        run(Op::Write, ARTICLES, move || store.save(article)).await
    }

    /// Always resolves to `true` on success, whether or not the article
    /// existed.
    pub async fn delete_article(&self, id: &str) -> Result<bool> {
        let store = self.articles.clone();
        let id = id.to_string();
        run(Op::Delete, ARTICLES, move || store.delete(&id)).await?;
        Ok(true)
    }

    // === Categories ===

    pub async fn get_all_categories(&self) -> Result<Vec<Category>> {
        let store = self.categories.clone();
        run(Op::Read, CATEGORIES, move || store.all()).await
    }

    pub async fn get_category_by_id(&self, id: i64) -> Result<Option<Category>> {
        let store = self.categories.clone();
        run(Op::Read, CATEGORIES, move || store.get(id)).await
    }

    /// Upsert a category. Without an id the next auto-increment value is
    /// assigned; the returned category carries it.
    pub async fn save_category(&self, category: Category) -> Result<Category> {
        let store = self.categories.clone();
        run(Op::Write, CATEGORIES, move || store.save(category)).await
    }

    /// Articles filed under the category keep their reference.
    pub async fn delete_category(&self, id: i64) -> Result<bool> {
        let store = self.categories.clone();
        run(Op::Delete, CATEGORIES, move || store.delete(id)).await?;
        Ok(true)
    }
}

impl Clone for Blog {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            articles: self.articles.clone(),
            categories: self.categories.clone(),
        }
    }
}

/// Run a blocking store call on the blocking pool and classify its failure.
async fn run<T, E, F>(op: Op, collection: &'static str, f: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Display + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            let message = e.to_string();
            tracing::warn!(?op, collection, error = %message, "Blog operation failed");

            Err(match op {
                Op::Read => BlogError::Read {
                    collection,
                    message,
                },
                Op::Write => BlogError::Write {
                    collection,
                    message,
                },
                Op::Delete => BlogError::Delete {
                    collection,
                    message,
                },
            })
        }
        Err(e) => Err(BlogError::Task(e.to_string())),
    }
}
