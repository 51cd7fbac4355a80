//! Metadata command handlers (tags, theme).

use anyhow::Result;

use super::report_save;
use crate::board::Board;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{TagsArgs, ThemeArgs};
use crate::storage::Storage;

pub fn handle_tags<S: Storage>(args: &TagsArgs, board: &Board<S>) -> Result<()> {
    let tags = board.unique_tags();

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                for tag in &tags {
                    println!("{}", tag);
                }
            }
        }
        OutputFormat::Json => {
            let out = Output::new(tags);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

pub fn handle_theme<S: Storage>(args: &ThemeArgs, board: &mut Board<S>) -> Result<()> {
    if args.toggle {
        board.toggle_theme();
        report_save(board);
    }

    let name = if board.dark_mode() { "dark" } else { "light" };
    println!("{}", name);
    Ok(())
}
