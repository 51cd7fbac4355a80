//! Builder for stored note records with sensible defaults.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use serde_json::{Map, Value, json};

/// Builder for a note record as it sits in storage.
///
/// Only the id is always written; other fields are written when set, so
/// tests can describe partially malformed records too.
#[derive(Debug, Clone)]
pub struct TestNote {
    fields: Map<String, Value>,
}

impl TestNote {
    /// Creates a record with the given id and text.
    pub fn new(id: &str, text: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("id".into(), json!(id));
        fields.insert("text".into(), json!(text));
        Self { fields }
    }

    /// Adds a tag to the record.
    pub fn tag(mut self, tag: &str) -> Self {
        let tags = self
            .fields
            .entry("tags")
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = tags {
            items.push(json!(tag));
        }
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.fields.insert("position".into(), json!({"x": x, "y": y}));
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.fields.insert("color".into(), json!(color));
        self
    }

    /// Sets an arbitrary field, for writing malformed values.
    pub fn raw(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Returns the record as JSON.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}
