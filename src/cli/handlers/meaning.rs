//! Meaning edit and delete command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::open_store;
use crate::cli::{DeleteMeaningArgs, EditMeaningArgs};
use crate::store::VocabStore;

pub fn handle_edit_meaning(args: &EditMeaningArgs, db_path: &Path) -> Result<()> {
    if args.pos.is_none() && args.definition.is_none() {
        bail!("nothing to update: pass --pos and/or --definition");
    }

    let mut store = open_store(db_path)?;
    store
        .update_meaning(args.id, args.pos.as_deref(), args.definition.as_deref())
        .with_context(|| format!("failed to update meaning {}", args.id))?;

    println!("Updated meaning {}", args.id);
    Ok(())
}

pub fn handle_delete_meaning(args: &DeleteMeaningArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;
    store
        .delete_meaning(args.id)
        .with_context(|| format!("failed to delete meaning {}", args.id))?;

    println!("Deleted meaning {}", args.id);
    Ok(())
}
