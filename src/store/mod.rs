//! SQLite-backed vocabulary store.

mod repository;
mod schema;
mod sqlite;

pub use repository::{
    ExportRow, HomeSummary, Meaning, RecentWord, SaveOutcome, SaveRequest, StoreError,
    StoreResult, VocabStore, WordDetails, WordEntry, WordRecord,
};
pub use schema::create_schema;
pub use sqlite::{SqliteStore, Transaction};
