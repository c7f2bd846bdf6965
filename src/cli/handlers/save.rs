//! Save command handler.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;

use super::open_store;
use crate::cli::SaveArgs;
use crate::domain::WordText;
use crate::store::{SaveOutcome, SaveRequest, VocabStore};

pub fn handle_save(args: &SaveArgs, db_path: &Path, verbose: bool) -> Result<()> {
    let text = WordText::new(&args.word)
        .with_context(|| format!("invalid word: {:?}", args.word))?;

    if verbose {
        println!("database: {}", db_path.display());
    }

    let request = SaveRequest {
        text,
        pos: args.pos.clone(),
        definition: args.definition.clone(),
        note: args.notes.clone(),
        force: args.force,
    };

    let mut store = open_store(db_path)?;
    let outcome = store
        .save_word(&request, Local::now())
        .with_context(|| format!("failed to save '{}'", request.text))?;

    match outcome {
        SaveOutcome::Created { .. } => {
            println!("Added '{}'", request.text);
        }
        SaveOutcome::Reviewed { count, .. } => {
            println!("Reviewed '{}' ({} reviews)", request.text, count);
        }
        SaveOutcome::CoolingDown { count, .. } => {
            println!(
                "'{}' was reviewed moments ago; count stays at {} (use --force to count it)",
                request.text, count
            );
        }
    }

    if args.definition.is_some() {
        println!("Recorded a new meaning.");
    }

    Ok(())
}
