//! Persisted note records, kept verbatim and normalized on read.

use crate::domain::note::{DEFAULT_COLOR, PLACEHOLDER_TEXT};
use crate::domain::{Note, NoteId, Position, Size, Tags};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A note exactly as it sits in storage.
///
/// Records are not validated when loaded. A record may be missing fields,
/// carry fields of the wrong type, or not be an object at all; such damage
/// stays local to the record and is resolved field by field in
/// [`normalize`](Self::normalize). Defaults are never written back, so a
/// record round-trips through the store unchanged until it is updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteRecord(Value);

impl NoteRecord {
    /// Wraps a raw JSON value.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Returns the record's id if it carries a usable one.
    ///
    /// Non-empty strings are taken as-is; numeric ids render to their
    /// decimal form. Anything else means the record has no identity.
    pub fn id(&self) -> Option<NoteId> {
        match self.0.get("id")? {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.to_string().parse().ok(),
            _ => None,
        }
    }

    /// Returns true if this record is identified by `id`.
    pub fn has_id(&self, id: &str) -> bool {
        self.id().is_some_and(|own| own.as_str() == id)
    }

    /// Returns the stored text when it is a string.
    pub fn text(&self) -> Option<&str> {
        self.0.get("text")?.as_str()
    }

    /// Returns the stored tags when they form an array.
    ///
    /// Non-string elements are skipped.
    pub fn tags(&self) -> Option<impl Iterator<Item = &str>> {
        let tags = self.0.get("tags")?.as_array()?;
        Some(tags.iter().filter_map(Value::as_str))
    }

    /// Returns true if the record's tag array contains exactly `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().is_some_and(|mut tags| tags.any(|t| t == tag))
    }

    /// Resolves this record into a complete [`Note`].
    ///
    /// Returns `None` when the record is not an object or has no usable id.
    /// Every other field falls back to its default independently.
    pub fn normalize(&self) -> Option<Note> {
        let object = self.0.as_object()?;
        let id = self.id()?;

        let text = object
            .get("text")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(PLACEHOLDER_TEXT);

        let color = object
            .get("color")
            .and_then(Value::as_str)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COLOR);

        let position = match object.get("position").and_then(Value::as_object) {
            Some(p) => Position::new(number(p, "x", 0.0), number(p, "y", 0.0)),
            None => Position::default(),
        };

        let size = match object.get("size").and_then(Value::as_object) {
            Some(s) => Size::new(
                number(s, "width", Size::DEFAULT.width),
                number(s, "height", Size::DEFAULT.height),
            ),
            None => Size::DEFAULT,
        };

        let tags: Tags = self.tags().map(|tags| tags.collect()).unwrap_or_default();

        Some(
            Note::builder(id)
                .text(text)
                .position(position)
                .color(color)
                .size(size)
                .tags(tags)
                .build(),
        )
    }

    /// Overwrites every mutable field, keeping the id and any extra keys.
    ///
    /// A record that is not an object is replaced by a fresh object holding
    /// only the new fields.
    pub fn replace_fields(
        &mut self,
        text: &str,
        position: Position,
        color: &str,
        size: Size,
        tags: &Tags,
    ) {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
        if let Value::Object(object) = &mut self.0 {
            object.insert("text".into(), json!(text));
            object.insert("position".into(), json!(position));
            object.insert("color".into(), json!(color));
            object.insert("size".into(), json!(size));
            object.insert("tags".into(), json!(tags));
        }
    }
}

impl From<&Note> for NoteRecord {
    fn from(note: &Note) -> Self {
        Self(json!(note))
    }
}

fn number(object: &Map<String, Value>, key: &str, default: f64) -> f64 {
    object.get(key).and_then(Value::as_f64).unwrap_or(default)
}
