//! SQLite-backed entry repository.
//!
//! # Invariants
//! - Listing order is `created_at DESC, seq DESC`, so among equal timestamps
//!   the most recently inserted entry comes first.
//! - Each insert/delete is a single statement and therefore atomic.
//! - The demo-seeded marker is a `journal_meta` row and never goes away.

use crate::db::migrations::latest_version;
use crate::model::emotion::Emotion;
use crate::model::entry::{Entry, EntryId};
use crate::repo::entry_repo::{EntryRepository, RepoError, RepoResult};
use rusqlite::{params, Connection, ErrorCode, Row};
use uuid::Uuid;

const ENTRY_SELECT_SQL: &str = "SELECT
    id,
    text,
    emotion,
    confidence,
    emoji_feedback,
    created_at
FROM entries";

const DEMO_SEEDED_KEY: &str = "demo_seeded";

/// SQLite-backed entry repository borrowing a migrated connection.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Constructs a repository from a connection opened via `open_db*`.
    ///
    /// Fails with `SchemaNotReady` when migrations have not been applied.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let found = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let expected = latest_version();
        if found != expected {
            return Err(RepoError::SchemaNotReady { found, expected });
        }
        Ok(Self { conn })
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn insert_entry(&mut self, entry: &Entry) -> RepoResult<()> {
        entry.validate()?;

        let result = self.conn.execute(
            "INSERT INTO entries (
                id,
                text,
                emotion,
                confidence,
                emoji_feedback,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                entry.id.to_string(),
                entry.text.as_str(),
                entry.emotion.as_str(),
                entry.confidence,
                entry.emoji_feedback.as_str(),
                entry.created_at,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(RepoError::DuplicateId(entry.id)),
            Err(err) => Err(err.into()),
        }
    }

    fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entry_row(row)?));
        }
        Ok(None)
    }

    fn list_entries(&self) -> RepoResult<Vec<Entry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ENTRY_SELECT_SQL} ORDER BY created_at DESC, seq DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }
        Ok(entries)
    }

    fn delete_entry(&mut self, id: EntryId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }

    fn count_entries(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries;", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative entry count `{count}`")))
    }

    fn demo_seeded(&self) -> RepoResult<bool> {
        let seeded: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM journal_meta WHERE key = ?1);",
            [DEMO_SEEDED_KEY],
            |row| row.get(0),
        )?;
        Ok(seeded == 1)
    }

    fn mark_demo_seeded(&mut self) -> RepoResult<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO journal_meta (key, value) VALUES (?1, '1');",
            [DEMO_SEEDED_KEY],
        )?;
        Ok(())
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in entries.id"))
    })?;

    let emotion_text: String = row.get("emotion")?;
    let emotion = Emotion::parse(&emotion_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid emotion `{emotion_text}` in entries.emotion"
        ))
    })?;

    let entry = Entry {
        id,
        text: row.get("text")?,
        emotion,
        confidence: row.get("confidence")?,
        emoji_feedback: row.get("emoji_feedback")?,
        created_at: row.get("created_at")?,
    };
    entry.validate().map_err(|err| {
        RepoError::InvalidData(format!("entry {id} failed validation: {err}"))
    })?;
    Ok(entry)
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
