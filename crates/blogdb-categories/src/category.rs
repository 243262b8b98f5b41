//! Category data structure

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys serialized for the named fields; `extra` must not repeat them
const FIELD_NAMES: &[&str] = &["id", "name", "description"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Assigned by the database on first save when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Remove free-form entries whose key collides with a named field and
    /// return their keys.
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
}
