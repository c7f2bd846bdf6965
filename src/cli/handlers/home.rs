//! Home command handler.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;

use super::open_store;
use crate::cli::HomeArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::store::VocabStore;

pub fn handle_home(args: &HomeArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let summary = store
        .home_summary(Local::now())
        .context("failed to collect home summary")?;

    match args.format {
        OutputFormat::Human => {
            println!(
                "{} word(s) reviewed today, {} total",
                summary.today_count, summary.total_count
            );

            if summary.recent.is_empty() {
                println!("No words recorded yet.");
            } else {
                println!();
                for word in &summary.recent {
                    println!("{:>5}  {} ({} reviews)", word.id, word.text, word.review_count);
                    if !word.meanings_text.is_empty() {
                        println!("       {}", word.meanings_text);
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(summary))?);
        }
    }

    Ok(())
}
