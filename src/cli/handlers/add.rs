//! Add note command handler.

use anyhow::Result;

use super::report_save;
use crate::board::Board;
use crate::cli::AddArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::storage::Storage;

pub fn handle_add<S: Storage>(args: &AddArgs, board: &mut Board<S>) -> Result<()> {
    let note = board.add_note();
    report_save(board);

    match args.format {
        OutputFormat::Human => {
            let p = note.position();
            println!("Added note {}", note.id());
            println!("  at ({}, {}) in {}", p.x, p.y, note.color());
        }
        OutputFormat::Json => {
            let out = Output::new(NoteListing::from(&note));
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
