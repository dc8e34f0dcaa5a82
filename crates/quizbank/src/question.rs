//! A single quiz question record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One JSON object from the question bank.
///
/// The record is kept opaque: every key is stored in file order and written
/// back unchanged. Only `category` and `id` are ever read, and both fall back
/// to the empty string when absent or not a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    fields: IndexMap<String, Value>,
}

impl Question {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, keeping the position of an existing key.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The question's category, or `""` when missing.
    pub fn category(&self) -> &str {
        self.str_field("category")
    }

    /// The question's id, or `""` when missing.
    pub fn id(&self) -> &str {
        self.str_field("id")
    }

    /// Look up any field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field names in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn str_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

impl From<serde_json::Map<String, Value>> for Question {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().collect(),
        }
    }
}
