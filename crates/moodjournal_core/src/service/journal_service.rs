//! Journal use-case service.
//!
//! # Invariants
//! - Stored emotion metadata is exactly the classifier output for the
//!   trimmed text at creation time.
//! - Blank text is rejected before any storage access.
//! - Deleting an unknown id succeeds and changes nothing.
//! - Demo entries are inserted at most once per store.
//! - Service logs carry metadata only, never entry text.

use crate::analytics::stats::MoodStats;
use crate::model::entry::{Entry, EntryId, EntryValidationError};
use crate::repo::entry_repo::{EntryRepository, RepoError, RepoResult};
use crate::service::demo_data::DEMO_ENTRIES;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum JournalServiceError {
    /// Input rejected before persistence; surface to the user, do not retry.
    Validation(EntryValidationError),
    /// Storage failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for JournalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent journal state: {details}"),
        }
    }
}

impl Error for JournalServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<EntryValidationError> for JournalServiceError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for JournalServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

pub type JournalResult<T> = Result<T, JournalServiceError>;

/// Journal service facade over an entry store.
pub struct JournalService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> JournalService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records a new entry stamped with the current time.
    pub fn create_entry(&mut self, text: &str) -> JournalResult<Entry> {
        self.create_entry_at(text, now_epoch_ms())
    }

    /// Records a new entry with an explicit `created_at` (epoch ms).
    ///
    /// Returns the entry as read back from the store.
    pub fn create_entry_at(&mut self, text: &str, created_at: i64) -> JournalResult<Entry> {
        let started_at = Instant::now();
        let entry = match Entry::new(text.trim(), created_at) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("event=entry_create module=service status=rejected reason={err}");
                return Err(err.into());
            }
        };

        self.repo.insert_entry(&entry)?;
        let stored = self
            .repo
            .get_entry(entry.id)?
            .ok_or(JournalServiceError::InconsistentState(
                "created entry not found in read-back",
            ))?;

        info!(
            "event=entry_create module=service status=ok emotion={} confidence={:.2} text_chars={} duration_ms={}",
            stored.emotion,
            stored.confidence,
            stored.text.chars().count(),
            started_at.elapsed().as_millis()
        );
        Ok(stored)
    }

    /// Gets one entry by id.
    pub fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        self.repo.get_entry(id)
    }

    /// Returns a newest-first snapshot of all entries.
    pub fn list_entries(&self) -> RepoResult<Vec<Entry>> {
        self.repo.list_entries()
    }

    /// Deletes an entry by id; returns whether anything was removed.
    pub fn delete_entry(&mut self, id: EntryId) -> RepoResult<bool> {
        let removed = self.repo.delete_entry(id)?;
        info!("event=entry_delete module=service status=ok removed={removed}");
        Ok(removed)
    }

    /// Computes counts, recent entries and trend from one snapshot.
    pub fn mood_stats(&self) -> RepoResult<MoodStats> {
        let entries = self.repo.list_entries()?;
        Ok(MoodStats::from_entries(&entries))
    }

    /// Seeds the demo journal into a store that has never been used.
    ///
    /// Demo texts go through the regular write path. A store is offered the
    /// demo at most once: after the first call (or after
    /// [`Self::retire_demo_seed`]) it stays as the user leaves it, even when
    /// emptied. Returns how many entries were inserted.
    pub fn seed_demo_entries(&mut self) -> JournalResult<usize> {
        if self.repo.demo_seeded()? {
            info!("event=demo_seed module=service status=skipped reason=already_seeded");
            return Ok(0);
        }
        if self.repo.count_entries()? > 0 {
            self.repo.mark_demo_seeded()?;
            info!("event=demo_seed module=service status=skipped reason=store_not_empty");
            return Ok(0);
        }

        for demo in DEMO_ENTRIES {
            self.create_entry_at(demo.text, demo.created_at)?;
        }
        self.repo.mark_demo_seeded()?;
        info!(
            "event=demo_seed module=service status=ok inserted={}",
            DEMO_ENTRIES.len()
        );
        Ok(DEMO_ENTRIES.len())
    }

    /// Marks the store as in use so the demo journal is never inserted.
    pub fn retire_demo_seed(&mut self) -> RepoResult<()> {
        self.repo.mark_demo_seeded()
    }
}

/// Current wall-clock time in unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}
