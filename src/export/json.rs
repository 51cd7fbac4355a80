//! Pretty-printed JSON snapshot of the collection.

use chrono::NaiveDate;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::domain::NoteRecord;

/// Errors while writing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write export to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Serializes the records, exactly as stored, with two-space indentation.
pub fn export_json(records: &[NoteRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Returns the export file name for `date`: `keep-writing-notes-YYYY-MM-DD.json`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("keep-writing-notes-{}.json", date.format("%Y-%m-%d"))
}

/// Writes an export of `records` and returns the path written.
///
/// When `target` is an existing directory the file is placed inside it under
/// [`export_filename`]; otherwise `target` is the file path. The write is
/// atomic.
pub fn write_export(
    target: &Path,
    records: &[NoteRecord],
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let path = if target.is_dir() {
        target.join(export_filename(date))
    } else {
        target.to_path_buf()
    };

    let content = export_json(records)?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let write_err = |source: io::Error| ExportError::Write {
        path: path.clone(),
        source,
    };

    let mut temp = NamedTempFile::new_in(&parent).map_err(write_err)?;
    temp.write_all(content.as_bytes()).map_err(write_err)?;
    temp.persist(&path).map_err(|e| write_err(e.error))?;

    Ok(path)
}
