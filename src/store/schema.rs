//! SQLite schema creation for the vocabulary store.

use rusqlite::Connection;

/// Creates the database schema for the vocabulary store.
///
/// It is idempotent - calling it multiple times is safe.
///
/// # Tables Created
/// - `words` - One row per unique vocabulary entry
/// - `meanings` - Part-of-speech/definition pairs, many per word
///
/// The `meanings.word_id` foreign key deliberately does not cascade: no
/// exposed operation deletes a word, so orphaning cannot occur through this
/// interface.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS words (
            id INTEGER PRIMARY KEY,
            text TEXT NOT NULL UNIQUE,
            notes TEXT NOT NULL DEFAULT '',
            review_count INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            last_reviewed TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS meanings (
            id INTEGER PRIMARY KEY,
            word_id INTEGER NOT NULL REFERENCES words(id),
            pos TEXT NOT NULL DEFAULT '',
            definition TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_words_last_reviewed ON words(last_reviewed);
         CREATE INDEX IF NOT EXISTS idx_meanings_word_id ON meanings(word_id);",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Test Helpers
    // ===========================================

    fn test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        conn
    }

    fn table_exists(conn: &Connection, name: &str) -> bool {
        conn.query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name=?",
            [name],
            |_| Ok(()),
        )
        .is_ok()
    }

    fn index_exists(conn: &Connection, name: &str) -> bool {
        conn.query_row(
            "SELECT 1 FROM sqlite_master WHERE type='index' AND name=?",
            [name],
            |_| Ok(()),
        )
        .is_ok()
    }

    fn insert_word(conn: &Connection, text: &str) -> i64 {
        conn.execute(
            "INSERT INTO words (text, created_at, last_reviewed) VALUES (?, ?, ?)",
            [text, "2026-03-14T10:00:00+00:00", "2026-03-14T10:00:00+00:00"],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    // ===========================================
    // Words Table
    // ===========================================

    #[test]
    fn create_schema_returns_ok() {
        let conn = test_connection();
        assert!(create_schema(&conn).is_ok(), "create_schema should return Ok");
    }

    #[test]
    fn words_table_created() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        assert!(table_exists(&conn, "words"), "words table should exist");
    }

    #[test]
    fn words_table_accepts_valid_row() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        insert_word(&conn, "apple");

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn words_table_enforces_unique_text() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        insert_word(&conn, "apple");

        let result = conn.execute(
            "INSERT INTO words (text, created_at, last_reviewed) VALUES (?, ?, ?)",
            ["apple", "2026-03-14T11:00:00+00:00", "2026-03-14T11:00:00+00:00"],
        );
        assert!(result.is_err(), "should reject duplicate word text");
    }

    #[test]
    fn words_review_count_defaults_to_one() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        let id = insert_word(&conn, "apple");

        let count: i64 = conn
            .query_row("SELECT review_count FROM words WHERE id = ?", [id], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 1, "review_count should default to 1");
    }

    #[test]
    fn words_notes_default_to_empty_string() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        let id = insert_word(&conn, "apple");

        let notes: String = conn
            .query_row("SELECT notes FROM words WHERE id = ?", [id], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(notes, "", "notes should default to empty string");
    }

    // ===========================================
    // Meanings Table
    // ===========================================

    #[test]
    fn meanings_table_created() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        assert!(table_exists(&conn, "meanings"), "meanings table should exist");
    }

    #[test]
    fn meanings_accepts_valid_row() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        let id = insert_word(&conn, "apple");

        let result = conn.execute(
            "INSERT INTO meanings (word_id, pos, definition) VALUES (?, ?, ?)",
            rusqlite::params![id, "n.", "a round fruit"],
        );
        assert!(result.is_ok(), "should accept valid meaning");
    }

    #[test]
    fn meanings_allow_multiple_per_word() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        let id = insert_word(&conn, "run");

        conn.execute(
            "INSERT INTO meanings (word_id, pos, definition) VALUES (?, ?, ?)",
            rusqlite::params![id, "v.", "to move quickly"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO meanings (word_id, pos, definition) VALUES (?, ?, ?)",
            rusqlite::params![id, "n.", "a sequence"],
        )
        .unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM meanings WHERE word_id = ?",
                [id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2, "should allow multiple meanings per word");
    }

    #[test]
    fn meanings_fk_enforced() {
        let conn = test_connection();
        create_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO meanings (word_id, definition) VALUES (?, ?)",
            rusqlite::params![999, "orphan"],
        );
        assert!(result.is_err(), "should reject invalid word_id FK");
    }

    #[test]
    fn meanings_do_not_cascade_on_word_delete() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        let id = insert_word(&conn, "apple");
        conn.execute(
            "INSERT INTO meanings (word_id, definition) VALUES (?, ?)",
            rusqlite::params![id, "a round fruit"],
        )
        .unwrap();

        // With a plain FK the delete itself is rejected while meanings
        // still reference the word.
        let result = conn.execute("DELETE FROM words WHERE id = ?", [id]);
        assert!(result.is_err(), "plain FK should block deleting a referenced word");
    }

    // ===========================================
    // Indexes and Idempotency
    // ===========================================

    #[test]
    fn idx_words_last_reviewed_created() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        assert!(
            index_exists(&conn, "idx_words_last_reviewed"),
            "idx_words_last_reviewed should exist"
        );
    }

    #[test]
    fn idx_meanings_word_id_created() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        assert!(
            index_exists(&conn, "idx_meanings_word_id"),
            "idx_meanings_word_id should exist"
        );
    }

    #[test]
    fn create_schema_is_idempotent() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap();

        assert!(table_exists(&conn, "words"));
        assert!(table_exists(&conn, "meanings"));
    }

    #[test]
    fn create_schema_preserves_existing_data() {
        let conn = test_connection();
        create_schema(&conn).unwrap();
        insert_word(&conn, "apple");

        create_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "existing data should be preserved");
    }

    #[test]
    fn foreign_keys_enabled() {
        let conn = test_connection();
        create_schema(&conn).unwrap();

        let fk_enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk_enabled, 1, "foreign keys should be enabled");
    }
}
