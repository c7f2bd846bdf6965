//! Export command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use crate::cli::ExportArgs;
use crate::export::{write_csv, write_csv_file};
use crate::store::VocabStore;

pub fn handle_export(args: &ExportArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let rows = store.export_rows().context("failed to collect export rows")?;

    match &args.output {
        Some(path) => {
            write_csv_file(&rows, path)?;
            eprintln!("Exported {} row(s) to {}", rows.len(), path.display());
        }
        None => {
            write_csv(&rows, std::io::stdout().lock())?;
        }
    }

    Ok(())
}
