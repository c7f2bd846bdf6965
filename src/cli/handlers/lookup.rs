//! Lookup command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use crate::cli::LookupArgs;
use crate::cli::output::{LookupListing, Output, OutputFormat};
use crate::domain::WordText;
use crate::store::VocabStore;

pub fn handle_lookup(args: &LookupArgs, db_path: &Path) -> Result<()> {
    let text = WordText::new(&args.word)
        .with_context(|| format!("invalid word: {:?}", args.word))?;

    let store = open_store(db_path)?;
    let entry = store
        .lookup(&text)
        .with_context(|| format!("lookup failed for '{}'", text))?;

    let listing = match entry {
        Some(entry) => LookupListing::found(entry.word, entry.meanings),
        None => LookupListing::not_found(),
    };

    match args.format {
        OutputFormat::Human => print_human(&text, &listing),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
    }

    Ok(())
}

fn print_human(text: &WordText, listing: &LookupListing) {
    if !listing.exists {
        println!("'{}' has not been studied yet.", text);
        return;
    }

    // found() always populates both fields
    let word = listing.word.as_ref().expect("found listing has word");
    let meanings = listing.meanings.as_ref().expect("found listing has meanings");

    println!(
        "{} (id {}, reviewed {} times, last {})",
        word.text, word.id, word.review_count, word.last_reviewed
    );

    for meaning in meanings {
        if meaning.pos.is_empty() {
            println!("  [{}] {}", meaning.id, meaning.definition);
        } else {
            println!("  [{}] ({}) {}", meaning.id, meaning.pos, meaning.definition);
        }
    }

    if !word.notes.is_empty() {
        println!("notes:");
        for line in word.notes.lines() {
            println!("  {}", line);
        }
    }
}
