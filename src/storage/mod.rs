//! Key-value persistence for the board.
//!
//! The board keeps its state under two keys: [`NOTES_KEY`] holds the JSON
//! array of note records and [`THEME_KEY`] holds the dark-mode flag. Every
//! adapter reports failures as a [`StorageError`] and never panics, so
//! callers can carry on with in-memory state when storage is unusable.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::io;
use thiserror::Error;

/// Key holding the serialized note collection.
pub const NOTES_KEY: &str = "stickyNotes";

/// Key holding the dark-mode flag as `"true"` or `"false"`.
pub const THEME_KEY: &str = "darkMode";

/// Errors reported by a storage adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is absent or access to it was denied.
    #[error("storage unavailable for '{key}': {reason}")]
    Unavailable { key: String, reason: String },

    /// A write was rejected (quota exceeded or transient failure).
    #[error("failed to write '{key}': {source}")]
    WriteFailure {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid storage key '{key}'")]
    InvalidKey { key: String },
}

/// A persistent key-value store of strings.
pub trait Storage {
    /// Reads the value stored under `key`, or `None` if there is none.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Removing a key that is not present succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
