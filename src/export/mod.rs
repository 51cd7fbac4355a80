//! Export of the note collection to a downloadable JSON file.
//!
//! Exports are read-only snapshots: they never touch stored state.

mod json;

pub use json::{ExportError, export_filename, export_json, write_export};
