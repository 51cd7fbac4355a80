//! Tests for command handlers and their shared helpers.

use super::list::format_listing_line;
use super::*;
use crate::cli::{EditArgs, RmArgs, TagArgs, UntagArgs};
use crate::domain::{Position, Size, Tags};
use crate::storage::{MemoryStorage, NOTES_KEY};
use pretty_assertions::assert_eq;

fn board() -> Board<MemoryStorage> {
    let raw = r#"[{"id":"n1","text":"<h3>Groceries</h3><p>milk &amp; eggs</p>","tags":["home"]}]"#;
    Board::open(MemoryStorage::new().with_entry(NOTES_KEY, raw), None)
}

fn edit_args(id: &str) -> EditArgs {
    EditArgs {
        id: id.to_string(),
        text: None,
        x: None,
        y: None,
        color: None,
        width: None,
        height: None,
    }
}

// ===========================================
// plain_text / truncate_str
// ===========================================

#[test]
fn plain_text_strips_markup_and_decodes_entities() {
    assert_eq!(
        plain_text("<h3>Groceries</h3><p>milk &amp; eggs</p>"),
        "Groceries milk & eggs"
    );
}

#[test]
fn plain_text_collapses_whitespace() {
    assert_eq!(plain_text("<ul>\n<li>a</li>\n<li>b</li></ul>"), "a b");
}

#[test]
fn plain_text_of_empty_markup_is_empty() {
    assert_eq!(plain_text("<p><br></p>"), "");
}

#[test]
fn truncate_str_adds_ellipsis() {
    assert_eq!(truncate_str("abcdef", 4), "abc…");
    assert_eq!(truncate_str("abc", 4), "abc");
}

// ===========================================
// Listing format
// ===========================================

#[test]
fn listing_line_shows_id_preview_and_tags() {
    let note = board().note("n1").unwrap();
    assert_eq!(format_listing_line(&note), "n1  Groceries milk & eggs  #home");
}

#[test]
fn listing_line_without_tags() {
    let note = crate::domain::Note::builder("n2".parse().unwrap())
        .text("<p>x</p>")
        .build();
    assert_eq!(format_listing_line(&note), "n2  x");
}

// ===========================================
// apply_edit
// ===========================================

#[test]
fn apply_edit_without_fields_is_none() {
    let note = board().note("n1").unwrap();
    assert!(apply_edit(&note, &edit_args("n1")).is_none());
}

#[test]
fn apply_edit_keeps_untouched_fields() {
    let note = board().note("n1").unwrap();
    let args = EditArgs {
        x: Some(40.0),
        color: Some("#b4f0a7".to_string()),
        ..edit_args("n1")
    };
    let edited = apply_edit(&note, &args).unwrap();
    assert_eq!(
        edited,
        EditedNote {
            text: note.text().to_string(),
            position: Position::new(40.0, 0.0),
            color: "#b4f0a7".to_string(),
            size: Size::DEFAULT,
        }
    );
}

#[test]
fn apply_edit_clamps_size() {
    let note = board().note("n1").unwrap();
    let args = EditArgs {
        width: Some(900.0),
        ..edit_args("n1")
    };
    let edited = apply_edit(&note, &args).unwrap();
    assert_eq!(edited.size, Size::new(500.0, 250.0));
}

// ===========================================
// Handlers
// ===========================================

#[test]
fn edit_updates_note_and_keeps_tags() {
    let mut board = board();
    let args = EditArgs {
        text: Some("<p>new</p>".to_string()),
        ..edit_args("n1")
    };
    handle_edit(&args, &mut board).unwrap();
    let note = board.note("n1").unwrap();
    assert_eq!(note.text(), "<p>new</p>");
    assert_eq!(note.tags().as_slice(), ["home"]);
}

#[test]
fn edit_unknown_note_fails() {
    let mut board = board();
    let args = EditArgs {
        text: Some("x".to_string()),
        ..edit_args("missing")
    };
    let err = handle_edit(&args, &mut board).unwrap_err();
    assert!(err.to_string().contains("note not found"));
}

#[test]
fn edit_without_fields_fails() {
    let mut board = board();
    assert!(handle_edit(&edit_args("n1"), &mut board).is_err());
}

#[test]
fn edit_rejects_non_finite_numbers() {
    for (x, width) in [(Some(f64::NAN), None), (None, Some(f64::INFINITY))] {
        let mut board = board();
        let args = EditArgs {
            x,
            width,
            ..edit_args("n1")
        };
        let err = handle_edit(&args, &mut board).unwrap_err();
        assert!(err.to_string().contains("finite number"), "got: {err}");
        assert_eq!(board.note("n1").unwrap().position(), Position::new(0.0, 0.0));
        assert_eq!(board.note("n1").unwrap().size(), Size::DEFAULT);
    }
}

#[test]
fn tag_adds_once() {
    let mut board = board();
    let args = TagArgs {
        id: "n1".to_string(),
        tag: " work ".to_string(),
    };
    handle_tag(&args, &mut board).unwrap();
    handle_tag(&args, &mut board).unwrap();
    let expected: Tags = ["home", "work"].into_iter().collect();
    assert_eq!(board.note("n1").unwrap().tags(), &expected);
}

#[test]
fn tag_rejects_blank() {
    let mut board = board();
    let args = TagArgs {
        id: "n1".to_string(),
        tag: "  ".to_string(),
    };
    assert!(handle_tag(&args, &mut board).is_err());
}

#[test]
fn untag_removes_and_is_idempotent() {
    let mut board = board();
    let args = UntagArgs {
        id: "n1".to_string(),
        tag: "home".to_string(),
    };
    handle_untag(&args, &mut board).unwrap();
    handle_untag(&args, &mut board).unwrap();
    assert!(board.note("n1").unwrap().tags().is_empty());
    assert!(board.unique_tags().is_empty());
}

#[test]
fn rm_deletes_then_reports_missing() {
    let mut board = board();
    let args = RmArgs {
        id: "n1".to_string(),
    };
    handle_rm(&args, &mut board).unwrap();
    assert!(board.note("n1").is_none());
    assert!(handle_rm(&args, &mut board).is_err());
}

#[test]
fn require_note_skips_malformed_records() {
    let raw = r#"[{"id":"ok"},{"text":"no id"}]"#;
    let board = Board::open(MemoryStorage::new().with_entry(NOTES_KEY, raw), None);
    assert!(require_note(&board, "ok").is_ok());
    assert!(require_note(&board, "").is_err());
}
