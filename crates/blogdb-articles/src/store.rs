//! Article persistence
//!
//! Each article is stored as a JSON document with its key and indexed
//! fields (date, status, category) copied into columns.

use rusqlite::{Connection, OptionalExtension, Params};

use blogdb_storage::Database;

use crate::article::Article;
use crate::status::ArticleStatus;
use crate::Result;

pub struct ArticleStore {
    db: Database,
}

impl ArticleStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All articles, in key order
    pub fn all(&self) -> Result<Vec<Article>> {
        let docs = self.db.with_connection(|conn| {
            query_documents(conn, "SELECT data FROM articles ORDER BY id", [])
        })?;
        decode(docs)
    }

    /// Look up a single article. A missing id is `Ok(None)`.
    pub fn get(&self, id: &str) -> Result<Option<Article>> {
        let doc: Option<String> = self.db.with_connection(|conn| {
            let doc = conn
                .query_row("SELECT data FROM articles WHERE id = ?1", [id], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(doc)
        })?;

        Ok(doc.map(|d| serde_json::from_str(&d)).transpose()?)
    }

    pub fn by_status(&self, status: ArticleStatus) -> Result<Vec<Article>> {
        let docs = self.db.with_connection(|conn| {
            query_documents(
                conn,
                "SELECT data FROM articles WHERE status = ?1 ORDER BY date DESC",
                [status.as_str()],
            )
        })?;
        decode(docs)
    }

    pub fn by_category(&self, category: i64) -> Result<Vec<Article>> {
        let docs = self.db.with_connection(|conn| {
            query_documents(
                conn,
                "SELECT data FROM articles WHERE category = ?1 ORDER BY date DESC",
                [category],
            )
        })?;
        decode(docs)
    }

    /// Newest articles first, by creation date
    pub fn recent(&self, limit: usize) -> Result<Vec<Article>> {
        let docs = self.db.with_connection(|conn| {
            query_documents(
                conn,
                "SELECT data FROM articles ORDER BY date DESC LIMIT ?1",
                [limit as i64],
            )
        })?;
        decode(docs)
    }

    /// Insert or update an article.
    ///
    /// A missing id is generated and a missing date is set to now before the
    /// write; the returned article carries both.
    pub fn save(&self, mut article: Article) -> Result<Article> {
        let shadowed = article.drop_shadowed_fields();
        let id = article.ensure_id();
        if !shadowed.is_empty() {
            tracing::warn!(
                article_id = %id,
                fields = ?shadowed,
                "Dropped fields shadowing article fields"
            );
        }

        let date = article.ensure_date();
        let data = serde_json::to_string(&article)?;

        self.db.transaction(|conn| {
            conn.execute(
                "INSERT INTO articles (id, date, status, category, data)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                     date = excluded.date,
                     status = excluded.status,
                     category = excluded.category,
                     data = excluded.data",
                rusqlite::params![id, date, article.status.as_str(), article.category, data],
            )?;
            Ok(())
        })?;

        tracing::info!(
            article_id = %id,
            status = %article.status,
            "Saved article"
        );

        Ok(article)
    }

    /// Delete an article. Returns whether a row was removed; deleting an
    /// unknown id is not an error.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let removed = self.db.transaction(|conn| {
            Ok(conn.execute("DELETE FROM articles WHERE id = ?1", [id])?)
        })?;

        tracing::info!(article_id = %id, existed = removed > 0, "Deleted article");

        Ok(removed > 0)
    }
}

impl Clone for ArticleStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

fn query_documents<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> blogdb_storage::Result<Vec<String>> {
    let mut stmt = conn.prepare(sql)?;
    let docs = stmt
        .query_map(params, |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(docs)
}

fn decode(docs: Vec<String>) -> Result<Vec<Article>> {
    let mut articles = Vec::with_capacity(docs.len());
    for doc in &docs {
        articles.push(serde_json::from_str(doc)?);
    }
    Ok(articles)
}
