//! List and show command handlers.

use anyhow::Result;

use super::{plain_text, require_note, truncate_str};
use crate::board::Board;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{ListArgs, ShowArgs};
use crate::domain::Note;
use crate::storage::Storage;

/// Width of the text preview in human listings.
const PREVIEW_WIDTH: usize = 60;

pub fn handle_list<S: Storage>(args: &ListArgs, board: &mut Board<S>) -> Result<()> {
    if let Some(term) = &args.search {
        board.set_search_term(term.as_str());
    }
    if let Some(tag) = &args.tag {
        board.set_selected_tag(tag);
    }

    let notes = board.filtered_notes();

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found. Run `keep-writing add` to create one.");
            } else {
                for note in &notes {
                    println!("{}", format_listing_line(note));
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

pub fn handle_show<S: Storage>(args: &ShowArgs, board: &Board<S>) -> Result<()> {
    let note = require_note(board, &args.id)?;

    match args.format {
        OutputFormat::Human => {
            let p = note.position();
            let s = note.size();
            println!("id:       {}", note.id());
            println!("position: ({}, {})", p.x, p.y);
            println!("size:     {} x {}", s.width, s.height);
            println!("color:    {}", note.color());
            if !note.tags().is_empty() {
                println!("tags:     {}", note.tags().as_slice().join(", "));
            }
            println!();
            println!("{}", note.text());
        }
        OutputFormat::Json => {
            let out = Output::new(NoteListing::from(&note));
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

/// One line per note: id, plain-text preview, and tags.
pub(crate) fn format_listing_line(note: &Note) -> String {
    let preview = truncate_str(&plain_text(note.text()), PREVIEW_WIDTH);
    if note.tags().is_empty() {
        format!("{}  {}", note.id(), preview)
    } else {
        let tags: Vec<String> = note.tags().iter().map(|t| format!("#{t}")).collect();
        format!("{}  {}  {}", note.id(), preview, tags.join(" "))
    }
}
