//! Command handlers for the CLI.

mod add;
mod edit;
mod export;
mod list;
mod metadata;

#[cfg(test)]
pub(crate) mod tests;

use anyhow::{Result, bail};
use regex::Regex;
use std::sync::LazyLock;

use crate::board::Board;
use crate::domain::Note;
use crate::storage::Storage;

// Re-export public items
pub use add::handle_add;
pub use edit::{EditedNote, apply_edit, handle_edit, handle_rm, handle_tag, handle_untag};
pub use export::{handle_completions, handle_export};
pub use list::{handle_list, handle_show};
pub use metadata::{handle_tags, handle_theme};

// ===========================================
// Shared Utilities
// ===========================================

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Looks up a note by id, failing with a readable error when absent.
pub(crate) fn require_note<S: Storage>(board: &Board<S>, id: &str) -> Result<Note> {
    match board.note(id) {
        Some(note) => Ok(note),
        None => bail!("note not found: '{}'", id),
    }
}

/// Warns on stderr when the last change could not be saved.
pub(crate) fn report_save<S: Storage>(board: &Board<S>) {
    if let Some(err) = board.last_save_error() {
        eprintln!("warning: changes were not saved: {err}");
    }
}

/// Reduces rich-text HTML to a single line of plain text for terminal display.
pub(crate) fn plain_text(html: &str) -> String {
    let without_tags = HTML_TAG.replace_all(html, " ");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    WHITESPACE.replace_all(decoded.trim(), " ").into_owned()
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
