//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// vocab - personal vocabulary tracker with review history
#[derive(Parser, Debug)]
#[command(name = "vocab", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a word was studied before
    Lookup(LookupArgs),

    /// Record a word: create it, count a review, append notes and meanings
    Save(SaveArgs),

    /// Show a word's text and meanings by id
    Show(ShowArgs),

    /// Change a word's spelling
    Rename(RenameArgs),

    /// Overwrite a word's notes
    #[command(name = "set-notes")]
    SetNotes(SetNotesArgs),

    /// Update a meaning's part of speech or definition
    #[command(name = "edit-meaning")]
    EditMeaning(EditMeaningArgs),

    /// Delete a single meaning
    #[command(name = "delete-meaning")]
    DeleteMeaning(DeleteMeaningArgs),

    /// Export the collection to a CSV spreadsheet
    Export(ExportArgs),

    /// Show review statistics and recent words
    Home(HomeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `lookup` command
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Word text to look up (matched case-insensitively)
    pub word: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `save` command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Word text to save (normalized to lowercase)
    pub word: String,

    /// Part-of-speech tag for the new meaning
    #[arg(short, long)]
    pub pos: Option<String>,

    /// Definition to record as a new meaning
    #[arg(short, long)]
    pub definition: Option<String>,

    /// Note fragment to append (deduplicated by containment)
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Count the review even inside the cooldown window
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Word id
    pub id: i64,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rename` command
#[derive(Parser, Debug)]
pub struct RenameArgs {
    /// Word id
    pub id: i64,

    /// New spelling (normalized to lowercase)
    pub text: String,
}

/// Arguments for the `set-notes` command
#[derive(Parser, Debug)]
pub struct SetNotesArgs {
    /// Word id
    pub id: i64,

    /// Replacement notes text
    pub notes: String,
}

/// Arguments for the `edit-meaning` command
#[derive(Parser, Debug)]
pub struct EditMeaningArgs {
    /// Meaning id
    pub id: i64,

    /// New part-of-speech tag
    #[arg(short, long)]
    pub pos: Option<String>,

    /// New definition
    #[arg(short, long)]
    pub definition: Option<String>,
}

/// Arguments for the `delete-meaning` command
#[derive(Parser, Debug)]
pub struct DeleteMeaningArgs {
    /// Meaning id
    pub id: i64,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `home` command
#[derive(Parser, Debug)]
pub struct HomeArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
