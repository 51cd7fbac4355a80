//! Ordered, de-duplicated tag list attached to a note.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The tags on a note.
///
/// Tags are free-form, case-sensitive strings kept in the order they were
/// added. Uniqueness is enforced when a tag is written: inserting a tag that
/// is already present leaves the list unchanged.
///
/// # Examples
///
/// ```
/// use keep_writing::domain::Tags;
///
/// let mut tags = Tags::new();
/// assert!(tags.insert(" ideas "));
/// assert!(!tags.insert("ideas"));
/// assert_eq!(tags.as_slice(), ["ideas"]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", from = "Vec<String>")]
pub struct Tags(Vec<String>);

impl Tags {
    /// Creates an empty tag list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a tag, trimming surrounding whitespace.
    ///
    /// Returns `false` without modifying the list when the trimmed tag is
    /// empty or already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Removes a tag. Returns `false` if it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    /// Returns true if the list holds exactly this tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Tags::new();
        for tag in iter {
            tags.insert(tag.as_ref());
        }
        tags
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<Tags> for Vec<String> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}

impl fmt::Debug for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}
