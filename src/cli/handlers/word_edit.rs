//! Rename and set-notes command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::open_store;
use crate::cli::{RenameArgs, SetNotesArgs};
use crate::domain::WordText;
use crate::store::{StoreError, VocabStore};

pub fn handle_rename(args: &RenameArgs, db_path: &Path) -> Result<()> {
    let new_text = WordText::new(&args.text)
        .with_context(|| format!("invalid word: {:?}", args.text))?;

    let mut store = open_store(db_path)?;
    match store.rename_word(args.id, &new_text) {
        Ok(()) => {
            println!("Renamed word {} to '{}'", args.id, new_text);
            Ok(())
        }
        // The one failure the user is expected to run into: surface it as a
        // plain message rather than an error chain.
        Err(StoreError::DuplicateWord { text }) => {
            bail!("a word named '{}' already exists; rename aborted", text)
        }
        Err(e) => Err(e).with_context(|| format!("failed to rename word {}", args.id)),
    }
}

pub fn handle_set_notes(args: &SetNotesArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;
    store
        .overwrite_notes(args.id, &args.notes)
        .with_context(|| format!("failed to update notes for word {}", args.id))?;

    println!("Updated notes for word {}", args.id);
    Ok(())
}
