//! vocab - personal vocabulary tracker with review history

pub mod cli;
pub mod domain;
pub mod export;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_delete_meaning, handle_edit_meaning, handle_export, handle_home, handle_lookup,
        handle_rename, handle_save, handle_set_notes, handle_show,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Lookup(args) => handle_lookup(args, &db_path),
        Command::Save(args) => handle_save(args, &db_path, verbose),
        Command::Show(args) => handle_show(args, &db_path),
        Command::Rename(args) => handle_rename(args, &db_path),
        Command::SetNotes(args) => handle_set_notes(args, &db_path),
        Command::EditMeaning(args) => handle_edit_meaning(args, &db_path),
        Command::DeleteMeaning(args) => handle_delete_meaning(args, &db_path),
        Command::Export(args) => handle_export(args, &db_path),
        Command::Home(args) => handle_home(args, &db_path),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "vocab", &mut std::io::stdout());
            Ok(())
        }
    }
}
