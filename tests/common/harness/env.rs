//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use super::{KwCommand, TestNote};
use keep_writing::storage::{NOTES_KEY, THEME_KEY};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary storage directory.
///
/// The temp directory is cleaned up on drop. Board storage lives in a
/// `board/` subdirectory; the root doubles as working directory and
/// config home for commands.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    /// Path to the storage directory
    storage_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let storage_dir = temp_dir.path().join("board");
        Self {
            temp_dir,
            storage_dir,
        }
    }

    /// Returns the root of the environment (working directory for commands).
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Returns the path to the storage directory.
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Returns the file backing the note collection.
    pub fn notes_path(&self) -> PathBuf {
        self.storage_dir.join(NOTES_KEY)
    }

    /// Writes the given records as the saved collection.
    pub fn seed(&self, notes: &[TestNote]) {
        let values: Vec<Value> = notes.iter().map(TestNote::to_value).collect();
        let raw = serde_json::to_string(&values).expect("Failed to encode notes");
        self.write_raw(&raw);
    }

    /// Writes arbitrary text as the saved collection.
    pub fn write_raw(&self, raw: &str) {
        std::fs::create_dir_all(&self.storage_dir).expect("Failed to create storage dir");
        std::fs::write(self.notes_path(), raw).expect("Failed to write notes");
    }

    /// Returns the saved collection text, if any.
    pub fn read_raw(&self) -> Option<String> {
        std::fs::read_to_string(self.notes_path()).ok()
    }

    /// Returns the saved collection parsed as JSON.
    pub fn saved(&self) -> Value {
        let raw = self.read_raw().expect("No notes saved");
        serde_json::from_str(&raw).expect("Saved notes are not JSON")
    }

    /// Returns the saved theme flag, if any.
    pub fn saved_theme(&self) -> Option<String> {
        std::fs::read_to_string(self.storage_dir.join(THEME_KEY)).ok()
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> KwCommand {
        KwCommand::new().home(self.root()).dir(&self.storage_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir());
        assert!(env.storage_dir().starts_with(env.root()));
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_seed_writes_records() {
        let env = TestEnv::new();
        env.seed(&[TestNote::new("1", "abc").tag("x")]);
        assert_eq!(
            env.saved(),
            serde_json::json!([{"id": "1", "text": "abc", "tags": ["x"]}])
        );
    }
}
