//! Core types: Note, NoteId, Tags, Position, Size, NoteRecord

pub mod note;
mod note_id;
mod record;
mod tag;

pub use note::{Note, NoteBuilder, Position, Size};
pub use note_id::{NoteId, ParseNoteIdError};
pub use record::NoteRecord;
pub use tag::Tags;
