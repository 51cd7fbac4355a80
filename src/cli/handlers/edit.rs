//! Note mutation command handlers (edit, tag, untag, rm).

use anyhow::{Result, bail};

use super::{report_save, require_note};
use crate::board::Board;
use crate::cli::{EditArgs, RmArgs, TagArgs, UntagArgs};
use crate::domain::{Note, Position, Size};
use crate::storage::Storage;

/// The mutable fields of a note after applying an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditedNote {
    pub text: String,
    pub position: Position,
    pub color: String,
    pub size: Size,
}

/// Overlays the fields given in `args` on `note`.
///
/// Fields not given keep the note's current values, since updates replace
/// every field. A new size is clamped to the board limits. Returns `None`
/// if `args` changes nothing.
pub fn apply_edit(note: &Note, args: &EditArgs) -> Option<EditedNote> {
    let touched = args.text.is_some()
        || args.x.is_some()
        || args.y.is_some()
        || args.color.is_some()
        || args.width.is_some()
        || args.height.is_some();
    if !touched {
        return None;
    }

    let position = note.position();
    let size = if args.width.is_some() || args.height.is_some() {
        Size::new(
            args.width.unwrap_or(note.size().width),
            args.height.unwrap_or(note.size().height),
        )
        .clamped()
    } else {
        note.size()
    };

    Some(EditedNote {
        text: args.text.clone().unwrap_or_else(|| note.text().to_string()),
        position: Position::new(args.x.unwrap_or(position.x), args.y.unwrap_or(position.y)),
        color: args.color.clone().unwrap_or_else(|| note.color().to_string()),
        size,
    })
}

pub fn handle_edit<S: Storage>(args: &EditArgs, board: &mut Board<S>) -> Result<()> {
    check_finite(args)?;
    let note = require_note(board, &args.id)?;

    let Some(edited) = apply_edit(&note, args) else {
        bail!("nothing to edit: pass --text, --x, --y, --color, --width, or --height");
    };

    board.update_note(
        note.id().as_str(),
        &edited.text,
        edited.position,
        &edited.color,
        edited.size,
        note.tags(),
    );
    report_save(board);

    println!("Updated note {}", note.id());
    Ok(())
}

/// Rejects NaN and infinite coordinates or dimensions, which JSON cannot hold.
fn check_finite(args: &EditArgs) -> Result<()> {
    let fields = [
        ("--x", args.x),
        ("--y", args.y),
        ("--width", args.width),
        ("--height", args.height),
    ];
    for (flag, value) in fields {
        if let Some(v) = value.filter(|v| !v.is_finite()) {
            bail!("{flag} must be a finite number, got {v}");
        }
    }
    Ok(())
}

pub fn handle_tag<S: Storage>(args: &TagArgs, board: &mut Board<S>) -> Result<()> {
    let tag = args.tag.trim();
    if tag.is_empty() {
        bail!("tag cannot be empty");
    }

    let note = require_note(board, &args.id)?;

    // Idempotency check: if tag already exists, no-op
    let mut tags = note.tags().clone();
    if !tags.insert(tag) {
        println!("Tag '{}' already present on note {}", tag, note.id());
        return Ok(());
    }

    board.update_note(
        note.id().as_str(),
        note.text(),
        note.position(),
        note.color(),
        note.size(),
        &tags,
    );
    report_save(board);

    println!("Added tag '{}' to note {}", tag, note.id());
    Ok(())
}

pub fn handle_untag<S: Storage>(args: &UntagArgs, board: &mut Board<S>) -> Result<()> {
    let note = require_note(board, &args.id)?;

    // Idempotency check: if tag doesn't exist, no-op
    let mut tags = note.tags().clone();
    if !tags.remove(&args.tag) {
        println!("Tag '{}' not present on note {}", args.tag, note.id());
        return Ok(());
    }

    board.update_note(
        note.id().as_str(),
        note.text(),
        note.position(),
        note.color(),
        note.size(),
        &tags,
    );
    report_save(board);

    println!("Removed tag '{}' from note {}", args.tag, note.id());
    Ok(())
}

pub fn handle_rm<S: Storage>(args: &RmArgs, board: &mut Board<S>) -> Result<()> {
    if !board.delete_note(&args.id) {
        bail!("note not found: '{}'", args.id);
    }
    report_save(board);

    println!("Deleted note {}", args.id);
    Ok(())
}
