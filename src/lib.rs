//! keep-writing - a sticky-notes board with local persistence

pub mod board;
pub mod cli;
pub mod domain;
pub mod export;
pub mod storage;
pub mod store;
pub mod theme;
pub mod view;

use anyhow::Result;
use clap::Parser;

use board::Board;
use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_edit, handle_export, handle_list, handle_rm,
        handle_show, handle_tag, handle_tags, handle_theme, handle_untag,
    },
};
use storage::FileStorage;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let storage = FileStorage::new(config.storage_dir(cli.dir.as_ref()));
    log::debug!("using storage at {}", storage.dir().display());
    let mut board = Board::open(storage, Some(config.canvas()));

    match &cli.command {
        Command::Add(args) => handle_add(args, &mut board),
        Command::List(args) => handle_list(args, &mut board),
        Command::Show(args) => handle_show(args, &board),
        Command::Edit(args) => handle_edit(args, &mut board),
        Command::Tag(args) => handle_tag(args, &mut board),
        Command::Untag(args) => handle_untag(args, &mut board),
        Command::Rm(args) => handle_rm(args, &mut board),
        Command::Tags(args) => handle_tags(args, &board),
        Command::Theme(args) => handle_theme(args, &mut board),
        Command::Export(args) => handle_export(args, &board),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Sends log output to stderr. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
