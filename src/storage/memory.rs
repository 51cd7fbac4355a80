//! In-memory storage adapter.

use super::{Storage, StorageError};
use std::collections::HashMap;
use std::io;

/// Storage held in a `HashMap`.
///
/// Besides backing tests and throwaway sessions, it can imitate a hostile
/// host: [`denied`](Self::denied) refuses every access and
/// [`with_quota`](Self::with_quota) rejects writes past a byte budget.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    denied: bool,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose every operation fails with `Unavailable`.
    pub fn denied() -> Self {
        Self {
            denied: true,
            ..Self::default()
        }
    }

    /// Storage that rejects a save once keys plus values would exceed
    /// `bytes` in total.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// Pre-populates `key` with `value`, bypassing quota and denial.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Returns the raw stored value, bypassing denial.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn check_access(&self, key: &str) -> Result<(), StorageError> {
        if self.denied {
            return Err(StorageError::Unavailable {
                key: key.to_string(),
                reason: "access denied".to_string(),
            });
        }
        Ok(())
    }

    fn used_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_access(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_access(key)?;
        if let Some(quota) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::WriteFailure {
                    key: key.to_string(),
                    source: io::Error::other(format!(
                        "quota exceeded ({needed} of {quota} bytes)"
                    )),
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_access(key)?;
        self.entries.remove(key);
        Ok(())
    }
}
