//! VocabStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{ReviewDecision, WordText, decide_review, merge_notes, parse_last_reviewed};
use crate::store::{
    ExportRow, HomeSummary, Meaning, RecentWord, SaveOutcome, SaveRequest, StoreError,
    StoreResult, VocabStore, WordDetails, WordEntry, WordRecord,
};
use chrono::{DateTime, Local};
use rusqlite::{Connection, ErrorCode};

// ===========================================
// Row Helpers
// ===========================================

fn word_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<WordRecord> {
    Ok(WordRecord {
        id: row.get(0)?,
        text: row.get(1)?,
        notes: row.get(2)?,
        review_count: row.get(3)?,
        created_at: row.get(4)?,
        last_reviewed: row.get(5)?,
    })
}

fn meanings_for(conn: &Connection, word_id: i64) -> StoreResult<Vec<Meaning>> {
    let mut stmt =
        conn.prepare("SELECT id, word_id, pos, definition FROM meanings WHERE word_id = ?")?;
    let meanings = stmt
        .query_map([word_id], |row| {
            Ok(Meaning {
                id: row.get(0)?,
                word_id: row.get(1)?,
                pos: row.get(2)?,
                definition: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(meanings)
}

/// True when the error is SQLite's unique-constraint violation.
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    )
}

impl VocabStore for SqliteStore {
    fn lookup(&self, text: &WordText) -> StoreResult<Option<WordEntry>> {
        let word = self
            .conn
            .query_row(
                "SELECT id, text, notes, review_count, created_at, last_reviewed
                 FROM words WHERE text = ?",
                [text.as_str()],
                word_row,
            )
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                e => Err(StoreError::Database(e)),
            })?;

        match word {
            Some(word) => {
                let meanings = meanings_for(&self.conn, word.id)?;
                Ok(Some(WordEntry { word, meanings }))
            }
            None => Ok(None),
        }
    }

    fn save_word(
        &mut self,
        request: &SaveRequest,
        now: DateTime<Local>,
    ) -> StoreResult<SaveOutcome> {
        let now_str = now.to_rfc3339();
        let note = request.note.as_deref().map(str::trim).unwrap_or("");

        // Word upsert and meaning insert share one transaction so a crash
        // cannot leave a word without its intended meaning.
        let tx = self.transaction()?;

        let existing = tx
            .conn()
            .query_row(
                "SELECT id, review_count, last_reviewed, notes FROM words WHERE text = ?",
                [request.text.as_str()],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                e => Err(StoreError::Database(e)),
            })?;

        let outcome = match existing {
            Some((id, current_count, last_reviewed_str, old_notes)) => {
                let last_reviewed = parse_last_reviewed(&last_reviewed_str, now);
                let decision = decide_review(last_reviewed, current_count, request.force, now);
                let merged = merge_notes(&old_notes, note);

                tx.execute(
                    "UPDATE words SET review_count = ?, last_reviewed = ?, notes = ?
                     WHERE id = ?",
                    rusqlite::params![decision.count(), now_str, merged, id],
                )?;

                match decision {
                    ReviewDecision::Counted { new_count } => SaveOutcome::Reviewed {
                        id,
                        count: new_count,
                    },
                    ReviewDecision::CoolingDown { count } => SaveOutcome::CoolingDown { id, count },
                }
            }
            None => {
                tx.execute(
                    "INSERT INTO words (text, notes, review_count, created_at, last_reviewed)
                     VALUES (?, ?, 1, ?, ?)",
                    rusqlite::params![request.text.as_str(), note, now_str, now_str],
                )?;
                SaveOutcome::Created {
                    id: tx.conn().last_insert_rowid(),
                }
            }
        };

        if let Some(definition) = request.definition.as_deref().filter(|d| !d.trim().is_empty()) {
            let pos = request.pos.as_deref().unwrap_or("");
            tx.execute(
                "INSERT INTO meanings (word_id, pos, definition) VALUES (?, ?, ?)",
                rusqlite::params![outcome.word_id(), pos, definition],
            )?;
        }

        tx.commit()?;
        Ok(outcome)
    }

    fn word_details(&self, id: i64) -> StoreResult<WordDetails> {
        let text = self
            .conn
            .query_row("SELECT text FROM words WHERE id = ?", [id], |row| {
                row.get::<_, String>(0)
            })
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Err(StoreError::WordNotFound { id }),
                e => Err(StoreError::Database(e)),
            })?;

        let meanings = meanings_for(&self.conn, id)?;
        Ok(WordDetails { id, text, meanings })
    }

    fn rename_word(&mut self, id: i64, new_text: &WordText) -> StoreResult<()> {
        let updated = self
            .conn
            .execute(
                "UPDATE words SET text = ? WHERE id = ?",
                rusqlite::params![new_text.as_str(), id],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateWord {
                        text: new_text.as_str().to_string(),
                    }
                } else {
                    StoreError::Database(e)
                }
            })?;

        if updated == 0 {
            return Err(StoreError::WordNotFound { id });
        }
        Ok(())
    }

    fn overwrite_notes(&mut self, id: i64, notes: &str) -> StoreResult<()> {
        let updated = self.conn.execute(
            "UPDATE words SET notes = ? WHERE id = ?",
            rusqlite::params![notes, id],
        )?;

        if updated == 0 {
            return Err(StoreError::WordNotFound { id });
        }
        Ok(())
    }

    fn update_meaning(
        &mut self,
        id: i64,
        pos: Option<&str>,
        definition: Option<&str>,
    ) -> StoreResult<()> {
        let existing = self
            .conn
            .query_row(
                "SELECT pos, definition FROM meanings WHERE id = ?",
                [id],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Err(StoreError::MeaningNotFound { id }),
                e => Err(StoreError::Database(e)),
            })?;

        let pos = pos.unwrap_or(&existing.0);
        let definition = definition.unwrap_or(&existing.1);

        self.conn.execute(
            "UPDATE meanings SET pos = ?, definition = ? WHERE id = ?",
            rusqlite::params![pos, definition, id],
        )?;
        Ok(())
    }

    fn delete_meaning(&mut self, id: i64) -> StoreResult<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM meanings WHERE id = ?", [id])?;

        if deleted == 0 {
            return Err(StoreError::MeaningNotFound { id });
        }
        Ok(())
    }

    fn export_rows(&self) -> StoreResult<Vec<ExportRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT w.text, w.notes, m.pos, m.definition, w.review_count, w.last_reviewed
             FROM words w
             LEFT JOIN meanings m ON w.id = m.word_id
             ORDER BY w.last_reviewed DESC, m.id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ExportRow {
                    text: row.get(0)?,
                    notes: row.get(1)?,
                    pos: row.get(2)?,
                    definition: row.get(3)?,
                    review_count: row.get(4)?,
                    last_reviewed: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    fn home_summary(&self, now: DateTime<Local>) -> StoreResult<HomeSummary> {
        // Timestamps are written in local time, so the leading ten
        // characters of the stored text are the local calendar date.
        let today = now.format("%Y-%m-%d").to_string();
        let today_count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM words WHERE substr(last_reviewed, 1, 10) = ?",
            [&today],
            |row| row.get(0),
        )?;

        let total_count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;

        let mut stmt = self.conn.prepare(
            "SELECT w.id, w.text, w.notes, w.review_count, w.last_reviewed,
                    COALESCE(GROUP_CONCAT(
                        CASE WHEN m.pos = '' THEN m.definition
                             ELSE '[' || m.pos || '] ' || m.definition END,
                        '; '), '') AS meanings_text
             FROM words w
             LEFT JOIN meanings m ON w.id = m.word_id
             GROUP BY w.id
             ORDER BY w.last_reviewed DESC
             LIMIT 30",
        )?;

        let recent = stmt
            .query_map([], |row| {
                Ok(RecentWord {
                    id: row.get(0)?,
                    text: row.get(1)?,
                    notes: row.get(2)?,
                    review_count: row.get(3)?,
                    last_reviewed: row.get(4)?,
                    meanings_text: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(HomeSummary {
            today_count,
            total_count,
            recent,
        })
    }
}
