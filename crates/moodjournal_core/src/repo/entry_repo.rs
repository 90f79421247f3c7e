//! Entry repository contract and shared error type.

use crate::db::DbError;
use crate::model::entry::{Entry, EntryId, EntryValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by every entry store backend.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Db(DbError),
    Io(std::io::Error),
    Serialization(serde_json::Error),
    /// An entry with the same id is already stored.
    DuplicateId(EntryId),
    /// Connection schema is not at the version this binary expects.
    SchemaNotReady { found: u32, expected: u32 },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "entry store I/O failed: {err}"),
            Self::Serialization(err) => write!(f, "entry store is not valid JSON: {err}"),
            Self::DuplicateId(id) => write!(f, "entry already exists: {id}"),
            Self::SchemaNotReady { found, expected } => write!(
                f,
                "database schema version {found} does not match expected {expected}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::DuplicateId(_) | Self::SchemaNotReady { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Storage contract for journal entries.
///
/// A single writer per store instance is assumed.
pub trait EntryRepository {
    /// Validates and persists one entry. Each call is all-or-nothing.
    fn insert_entry(&mut self, entry: &Entry) -> RepoResult<()>;
    fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>>;
    /// Returns every entry, newest first.
    fn list_entries(&self) -> RepoResult<Vec<Entry>>;
    /// Removes the entry with `id`; returns whether a row was removed.
    fn delete_entry(&mut self, id: EntryId) -> RepoResult<bool>;
    fn count_entries(&self) -> RepoResult<usize>;
    /// Whether this store has already been offered the demo journal.
    fn demo_seeded(&self) -> RepoResult<bool>;
    /// Records that the demo journal must never be inserted into this store.
    fn mark_demo_seeded(&mut self) -> RepoResult<()>;
}

/// Position at which `entry` keeps a newest-first list sorted.
///
/// Among equal timestamps the new entry goes first, matching prepend
/// semantics for the common case of entries created "now".
pub(crate) fn newest_first_position(entries: &[Entry], entry: &Entry) -> usize {
    entries
        .iter()
        .position(|existing| existing.created_at <= entry.created_at)
        .unwrap_or(entries.len())
}
