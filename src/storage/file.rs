//! Directory-backed storage adapter with atomic writes.

use super::{Storage, StorageError};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Storage keeping one file per key inside a directory.
///
/// Writes go to a temporary file in the same directory which is then
/// renamed over the target, so a crash never leaves a half-written value.
/// The directory is created on the first save.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` if the key is empty, starts with a
    /// dot, or contains a path separator.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(['/', '\\']);
        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(key))
    }
}

fn unavailable(key: &str, path: &Path, error: &io::Error) -> StorageError {
    StorageError::Unavailable {
        key: key.to_string(),
        reason: format!("{}: {}", path.display(), error),
    }
}

/// Maps a write-side I/O error: denial means the store is unusable, anything
/// else (disk full, interrupted rename) is a failed write.
fn write_error(key: &str, path: &Path, error: io::Error) -> StorageError {
    match error.kind() {
        io::ErrorKind::PermissionDenied => unavailable(key, path, &error),
        _ => StorageError::WriteFailure {
            key: key.to_string(),
            source: error,
        },
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable(key, &path, &e)),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| write_error(key, &self.dir, e))?;

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| write_error(key, &path, e))?;
        temp.write_all(value.as_bytes())
            .map_err(|e| write_error(key, &path, e))?;
        temp.persist(&path)
            .map_err(|e| write_error(key, &path, e.error))?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(write_error(key, &path, e)),
        }
    }
}
