//! Show command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use crate::cli::ShowArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::store::VocabStore;

pub fn handle_show(args: &ShowArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let details = store
        .word_details(args.id)
        .with_context(|| format!("failed to fetch word {}", args.id))?;

    match args.format {
        OutputFormat::Human => {
            println!("{} (id {})", details.text, details.id);
            if details.meanings.is_empty() {
                println!("  no meanings recorded");
            }
            for meaning in &details.meanings {
                if meaning.pos.is_empty() {
                    println!("  [{}] {}", meaning.id, meaning.definition);
                } else {
                    println!("  [{}] ({}) {}", meaning.id, meaning.pos, meaning.definition);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(details))?);
        }
    }

    Ok(())
}
