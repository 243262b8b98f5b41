//! Article data structure

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::generate_identifier;
use crate::status::ArticleStatus;

/// Keys serialized for the named fields; `extra` must not repeat them
const FIELD_NAMES: &[&str] = &["id", "date", "status", "category", "title", "content"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier, generated on first save when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Creation time as an RFC 3339 string, set once on first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    /// Id of the category this article is filed under. Not checked against
    /// the categories collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Any other fields the caller attached (excerpt, tags, cover image...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: i64) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Remove free-form entries whose key collides with a named field and
    /// return their keys. A stored document holding both could not be read
    /// back.
    pub fn drop_shadowed_fields(&mut self) -> Vec<String> {
        let shadowed: Vec<String> = self
            .extra
            .keys()
            .filter(|key| FIELD_NAMES.contains(&key.as_str()))
            .cloned()
            .collect();
        for key in &shadowed {
            self.extra.remove(key);
        }
        shadowed
    }

    /// Return the identifier, generating one if it is missing or empty.
    pub fn ensure_id(&mut self) -> String {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                let id = generate_identifier();
                self.id = Some(id.clone());
                id
            }
        }
    }

    /// Return the creation date, stamping the current time if it is missing
    /// or empty. An existing date is never replaced.
    pub fn ensure_date(&mut self) -> String {
        match self.date.as_deref() {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => {
                let date = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                self.date = Some(date.clone());
                date
            }
        }
    }
}
