//! VocabStore trait and result types.

use crate::domain::WordText;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested word was not found.
    #[error("word not found: {id}")]
    WordNotFound { id: i64 },

    /// The requested meaning was not found.
    #[error("meaning not found: {id}")]
    MeaningNotFound { id: i64 },

    /// Renaming would collide with an existing word.
    #[error("a word named '{text}' already exists")]
    DuplicateWord { text: String },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// Record Types
// ===========================================

/// A word row as stored.
///
/// Timestamps are kept as the stored RFC 3339 text. `last_reviewed` is only
/// interpreted by the save path, which tolerates corrupt values; everywhere
/// else the raw text is displayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordRecord {
    pub id: i64,
    pub text: String,
    pub notes: String,
    pub review_count: i64,
    pub created_at: String,
    pub last_reviewed: String,
}

/// One part-of-speech/definition pair attached to a word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meaning {
    pub id: i64,
    pub word_id: i64,
    pub pos: String,
    pub definition: String,
}

/// A word row together with all of its meanings.
#[derive(Debug, Clone, Serialize)]
pub struct WordEntry {
    pub word: WordRecord,
    pub meanings: Vec<Meaning>,
}

/// Word text and meanings fetched by id for the editing views.
#[derive(Debug, Clone, Serialize)]
pub struct WordDetails {
    pub id: i64,
    pub text: String,
    pub meanings: Vec<Meaning>,
}

/// One row of the spreadsheet export: words LEFT JOINed with meanings.
///
/// A word with no meanings appears once with empty meaning fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub text: String,
    pub notes: String,
    pub pos: Option<String>,
    pub definition: Option<String>,
    pub review_count: i64,
    pub last_reviewed: String,
}

/// A recently reviewed word for the home view, with its meanings
/// concatenated into a single display string.
#[derive(Debug, Clone, Serialize)]
pub struct RecentWord {
    pub id: i64,
    pub text: String,
    pub notes: String,
    pub review_count: i64,
    pub last_reviewed: String,
    pub meanings_text: String,
}

/// Home view statistics and recent activity.
#[derive(Debug, Clone, Serialize)]
pub struct HomeSummary {
    pub today_count: i64,
    pub total_count: i64,
    pub recent: Vec<RecentWord>,
}

// ===========================================
// Save Types
// ===========================================

/// Inputs to a save operation.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub text: WordText,
    pub pos: Option<String>,
    pub definition: Option<String>,
    pub note: Option<String>,
    pub force: bool,
}

/// What a save did to the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// First save of a previously-unseen word; count starts at 1.
    Created { id: i64 },
    /// Existing word, counter incremented.
    Reviewed { id: i64, count: i64 },
    /// Existing word saved inside the cooldown window; counter unchanged.
    CoolingDown { id: i64, count: i64 },
}

impl SaveOutcome {
    /// Returns the id of the saved word.
    pub fn word_id(&self) -> i64 {
        match *self {
            SaveOutcome::Created { id }
            | SaveOutcome::Reviewed { id, .. }
            | SaveOutcome::CoolingDown { id, .. } => id,
        }
    }
}

// ===========================================
// VocabStore Trait
// ===========================================

/// Storage operations for the vocabulary collection.
pub trait VocabStore {
    /// Looks up a word by its normalized text, with all meanings.
    fn lookup(&self, text: &WordText) -> StoreResult<Option<WordEntry>>;

    /// Saves a word: creates it on first sight, otherwise applies the review
    /// cooldown and notes merge rules; inserts a meaning row when a
    /// definition was supplied. `last_reviewed` is advanced to `now` on
    /// every save.
    fn save_word(
        &mut self,
        request: &SaveRequest,
        now: DateTime<Local>,
    ) -> StoreResult<SaveOutcome>;

    /// Fetches a word's text and meanings by id.
    fn word_details(&self, id: i64) -> StoreResult<WordDetails>;

    /// Changes a word's text. Fails with [`StoreError::DuplicateWord`] when
    /// the normalized new text collides with another word.
    fn rename_word(&mut self, id: i64, new_text: &WordText) -> StoreResult<()>;

    /// Overwrites a word's notes. No merge.
    fn overwrite_notes(&mut self, id: i64, notes: &str) -> StoreResult<()>;

    /// Updates a meaning's part-of-speech and/or definition.
    fn update_meaning(
        &mut self,
        id: i64,
        pos: Option<&str>,
        definition: Option<&str>,
    ) -> StoreResult<()>;

    /// Deletes a single meaning row. The parent word is unaffected.
    fn delete_meaning(&mut self, id: i64) -> StoreResult<()>;

    /// Returns all words joined with their meanings, most recently reviewed
    /// first, for the spreadsheet export.
    fn export_rows(&self) -> StoreResult<Vec<ExportRow>>;

    /// Returns the home view statistics: words reviewed on the local
    /// calendar date of `now`, the total count, and the 30 most recently
    /// reviewed words.
    fn home_summary(&self, now: DateTime<Local>) -> StoreResult<HomeSummary>;
}
