//! Command handlers for the CLI.

mod export;
mod home;
mod lookup;
mod meaning;
mod save;
mod show;
mod word_edit;

use std::path::Path;

use anyhow::{Context, Result};

use crate::store::SqliteStore;

// Re-export public items
pub use export::handle_export;
pub use home::handle_home;
pub use lookup::handle_lookup;
pub use meaning::{handle_delete_meaning, handle_edit_meaning};
pub use save::handle_save;
pub use show::handle_show;
pub use word_edit::{handle_rename, handle_set_notes};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the vocabulary store at the given database path.
///
/// Each handler opens its own connection and drops it when done; there is
/// no shared process-wide handle.
pub(crate) fn open_store(db_path: &Path) -> Result<SqliteStore> {
    SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))
}
