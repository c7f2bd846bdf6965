//! rusqlite-backed vocabulary store implementation.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

// Re-export the Transaction type
pub use transaction::Transaction;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed vocabulary store.
///
/// Manages the database connection and provides access to the collection.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
