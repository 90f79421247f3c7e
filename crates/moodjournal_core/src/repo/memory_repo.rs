//! Volatile in-memory entry repository.

use crate::model::entry::{Entry, EntryId};
use crate::repo::entry_repo::{newest_first_position, EntryRepository, RepoError, RepoResult};

/// Entry store that lives only as long as the value itself.
#[derive(Debug, Default)]
pub struct InMemoryEntryRepository {
    /// Newest first.
    entries: Vec<Entry>,
    demo_seeded: bool,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryRepository for InMemoryEntryRepository {
    fn insert_entry(&mut self, entry: &Entry) -> RepoResult<()> {
        entry.validate()?;
        if self.entries.iter().any(|existing| existing.id == entry.id) {
            return Err(RepoError::DuplicateId(entry.id));
        }
        let position = newest_first_position(&self.entries, entry);
        self.entries.insert(position, entry.clone());
        Ok(())
    }

    fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        Ok(self.entries.iter().find(|entry| entry.id == id).cloned())
    }

    fn list_entries(&self) -> RepoResult<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn delete_entry(&mut self, id: EntryId) -> RepoResult<bool> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        Ok(self.entries.len() != before)
    }

    fn count_entries(&self) -> RepoResult<usize> {
        Ok(self.entries.len())
    }

    fn demo_seeded(&self) -> RepoResult<bool> {
        Ok(self.demo_seeded)
    }

    fn mark_demo_seeded(&mut self) -> RepoResult<()> {
        self.demo_seeded = true;
        Ok(())
    }
}
