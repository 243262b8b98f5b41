//! Category persistence

use rusqlite::OptionalExtension;

use blogdb_storage::Database;

use crate::category::Category;
use crate::Result;

pub struct CategoryStore {
    db: Database,
}

impl CategoryStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn all(&self) -> Result<Vec<Category>> {
        let rows: Vec<(i64, String)> = self.db.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT id, data FROM categories ORDER BY id")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })?;

        let mut categories = Vec::with_capacity(rows.len());
        for (id, data) in rows {
            categories.push(decode(id, &data)?);
        }
        Ok(categories)
    }

    pub fn get(&self, id: i64) -> Result<Option<Category>> {
        let data: Option<String> = self.db.with_connection(|conn| {
            let data = conn
                .query_row("SELECT data FROM categories WHERE id = ?1", [id], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(data)
        })?;

        data.map(|d| decode(id, &d)).transpose()
    }

    /// Insert or update a category. Without an id the database assigns the
    /// next one; the returned category always carries its id.
    pub fn save(&self, mut category: Category) -> Result<Category> {
        let shadowed = category.drop_shadowed_fields();
        if !shadowed.is_empty() {
            tracing::warn!(
                name = %category.name,
                fields = ?shadowed,
                "Dropped fields shadowing category fields"
            );
        }

        // The id column is the source of truth; the document never holds one
        let id = category.id.take();
        let data = serde_json::to_string(&category)?;

        let id = self.db.transaction(|conn| match id {
            Some(id) => {
                conn.execute(
                    "INSERT INTO categories (id, name, data) VALUES (?1, ?2, ?3)
                     ON CONFLICT(id) DO UPDATE SET
                         name = excluded.name,
                         data = excluded.data",
                    rusqlite::params![id, category.name, data],
                )?;
                Ok(id)
            }
            None => {
                conn.execute(
                    "INSERT INTO categories (name, data) VALUES (?1, ?2)",
                    rusqlite::params![category.name, data],
                )?;
                Ok(conn.last_insert_rowid())
            }
        })?;

        category.id = Some(id);

        tracing::info!(category_id = id, name = %category.name, "Saved category");

        Ok(category)
    }

    /// Delete a category. Articles filed under it are left as they are.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self.db.transaction(|conn| {
            Ok(conn.execute("DELETE FROM categories WHERE id = ?1", [id])?)
        })?;

        tracing::info!(category_id = id, existed = removed > 0, "Deleted category");

        Ok(removed > 0)
    }
}

impl Clone for CategoryStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

fn decode(id: i64, data: &str) -> Result<Category> {
    let mut category: Category = serde_json::from_str(data)?;
    category.id = Some(id);
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CategoryStore {
        CategoryStore::new(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_auto_increment_ids() {
        let store = store();
        let rust = store.save(Category::new("Rust")).unwrap();
        let travel = store.save(Category::new("Travel")).unwrap();

        assert_eq!(rust.id, Some(1));
        assert_eq!(travel.id, Some(2));

        let names: Vec<String> = store.all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Rust", "Travel"]);
    }

    #[test]
    fn test_save_with_id_updates() {
        let store = store();
        let mut category = store.save(Category::new("Rust")).unwrap();

        category.name = "Rust & Systems".to_string();
        category.description = Some("Low-level things".to_string());
        let updated = store.save(category).unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], updated);
    }

    #[test]
    fn test_save_with_unknown_id_inserts() {
        let store = store();
        let mut category = Category::new("Imported");
        category.id = Some(42);

        let saved = store.save(category).unwrap();
        assert_eq!(saved.id, Some(42));

        // Auto-increment continues past explicit ids
        let next = store.save(Category::new("Next")).unwrap();
        assert_eq!(next.id, Some(43));
    }

    #[test]
    fn test_shadowing_fields_do_not_break_reads() {
        let store = store();
        store.save(Category::new("Rust")).unwrap();

        let mut category = Category::new("Food");
        category.extra.insert("id".to_string(), "x".into());
        category.extra.insert("name".to_string(), 3.into());
        category.extra.insert("label".to_string(), "Recipes".into());
        let saved = store.save(category).unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1], saved);
        assert_eq!(all[1].name, "Food");
        assert_eq!(all[1].extra.len(), 1);
    }

    #[test]
    fn test_get_and_delete() {
        let store = store();
        let saved = store
            .save(Category::new("Food").with_description("Recipes"))
            .unwrap();
        let id = saved.id.unwrap();

        assert_eq!(store.get(id).unwrap(), Some(saved));
        assert!(store.delete(id).unwrap());
        assert!(store.get(id).unwrap().is_none());
        assert!(!store.delete(id).unwrap());
    }
}
