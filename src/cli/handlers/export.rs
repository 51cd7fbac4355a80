//! Export and completions command handlers.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io;
use std::path::PathBuf;

use crate::board::Board;
use crate::cli::{Cli, CompletionsArgs, ExportArgs};
use crate::export::write_export;
use crate::storage::Storage;

pub fn handle_export<S: Storage>(args: &ExportArgs, board: &Board<S>) -> Result<()> {
    let target = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let records = board.store().records();

    let path = write_export(&target, records, board.today())
        .with_context(|| format!("failed to export notes to {}", target.display()))?;

    println!("Exported {} notes to {}", records.len(), path.display());
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
