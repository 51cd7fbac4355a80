//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// keep-writing - a sticky-notes board
#[derive(Parser, Debug)]
#[command(name = "keep-writing", version, about, long_about = None)]
pub struct Cli {
    /// Storage directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new note at a random spot on the board
    Add(AddArgs),

    /// List notes, optionally filtered by search text and tag
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a single note
    Show(ShowArgs),

    /// Change a note's text, position, color, or size
    Edit(EditArgs),

    /// Add a tag to a note
    Tag(TagArgs),

    /// Remove a tag from a note
    Untag(UntagArgs),

    /// Delete a note
    Rm(RmArgs),

    /// List all tags in use
    Tags(TagsArgs),

    /// Show or toggle the dark theme
    Theme(ThemeArgs),

    /// Export all notes to a JSON file
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only notes whose text contains this (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only notes carrying this exact tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub id: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID
    pub id: String,

    /// New rich-text (HTML) content
    #[arg(long)]
    pub text: Option<String>,

    /// New horizontal position
    #[arg(long)]
    pub x: Option<f64>,

    /// New vertical position
    #[arg(long)]
    pub y: Option<f64>,

    /// New color (any CSS color string)
    #[arg(long)]
    pub color: Option<String>,

    /// New width (kept within 150..=500)
    #[arg(long)]
    pub width: Option<f64>,

    /// New height (kept within 150..=500)
    #[arg(long)]
    pub height: Option<f64>,
}

/// Arguments for the `tag` command (add tag to note)
#[derive(Parser, Debug)]
pub struct TagArgs {
    /// Note ID
    pub id: String,

    /// Tag to add
    pub tag: String,
}

/// Arguments for the `untag` command (remove tag from note)
#[derive(Parser, Debug)]
pub struct UntagArgs {
    /// Note ID
    pub id: String,

    /// Tag to remove
    pub tag: String,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note ID
    pub id: String,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `theme` command
#[derive(Parser, Debug)]
pub struct ThemeArgs {
    /// Switch between light and dark
    #[arg(long)]
    pub toggle: bool,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output file or directory (default: current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
