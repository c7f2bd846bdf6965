//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared across suites
#![allow(dead_code)]

use super::VocabCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vocab::store::SqliteStore;

/// Isolated test environment with a temporary database.
///
/// Creates a temp directory that is automatically cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the database file
    db_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("vocab.db");
        Self {
            _temp_dir: temp_dir,
            db_path,
        }
    }

    /// Returns the path to the database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens the store directly, bypassing the CLI.
    ///
    /// Useful for seeding rows or inspecting state that the CLI does not
    /// expose, such as backdating `last_reviewed`.
    pub fn open_store(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path).expect("Failed to open test database")
    }

    /// Backdates a word's last_reviewed timestamp so the next save is
    /// outside the cooldown window.
    pub fn backdate_word(&self, text: &str) {
        let store = self.open_store();
        store
            .conn()
            .execute(
                "UPDATE words SET last_reviewed = '2020-01-01T00:00:00+00:00' WHERE text = ?",
                [text],
            )
            .expect("Failed to backdate word");
    }

    /// Creates a VocabCommand configured for this test environment.
    pub fn cmd(&self) -> VocabCommand {
        VocabCommand::new().db(&self.db_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
