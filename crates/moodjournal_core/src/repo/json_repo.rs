//! JSON file entry repository.
//!
//! # Responsibility
//! - Persist the whole entry list as one JSON array, newest first.
//!
//! # Invariants
//! - Every write replaces the file via rename of a fully written sibling, so
//!   a failed write leaves the previous list intact.
//! - A missing file reads as an empty store; an unreadable or corrupt file
//!   is an error, never an empty list.
//! - The demo-seeded marker is an empty sibling file `<name>.seeded`.

use crate::model::entry::{Entry, EntryId};
use crate::repo::entry_repo::{newest_first_position, EntryRepository, RepoError, RepoResult};
use log::debug;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

const STAGING_SUFFIX: &str = ".tmp";
const SEEDED_SUFFIX: &str = ".seeded";

/// Entry store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileEntryRepository {
    path: PathBuf,
}

impl JsonFileEntryRepository {
    /// Creates a repository for `path`; the file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> RepoResult<Vec<Entry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let entries: Vec<Entry> = serde_json::from_reader(BufReader::new(file))?;
        for entry in &entries {
            entry.validate().map_err(|err| {
                RepoError::InvalidData(format!("entry {} failed validation: {err}", entry.id))
            })?;
        }
        Ok(entries)
    }

    fn store(&self, entries: &[Entry]) -> RepoResult<()> {
        self.ensure_parent_dir()?;

        let staging = self.sibling_path(STAGING_SUFFIX);
        let written = write_json(&staging, entries)
            .and_then(|()| fs::rename(&staging, &self.path).map_err(RepoError::from));
        if let Err(err) = written {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }
        debug!(
            "event=json_store_write module=repo status=ok entries={}",
            entries.len()
        );
        Ok(())
    }

    fn ensure_parent_dir(&self) -> RepoResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

fn write_json(path: &Path, entries: &[Entry]) -> RepoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, entries)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

impl EntryRepository for JsonFileEntryRepository {
    fn insert_entry(&mut self, entry: &Entry) -> RepoResult<()> {
        entry.validate()?;
        let mut entries = self.load()?;
        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(RepoError::DuplicateId(entry.id));
        }
        let position = newest_first_position(&entries, entry);
        entries.insert(position, entry.clone());
        self.store(&entries)
    }

    fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        Ok(self.load()?.into_iter().find(|entry| entry.id == id))
    }

    fn list_entries(&self) -> RepoResult<Vec<Entry>> {
        self.load()
    }

    fn delete_entry(&mut self, id: EntryId) -> RepoResult<bool> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.store(&entries)?;
        Ok(true)
    }

    fn count_entries(&self) -> RepoResult<usize> {
        Ok(self.load()?.len())
    }

    fn demo_seeded(&self) -> RepoResult<bool> {
        Ok(self.sibling_path(SEEDED_SUFFIX).try_exists()?)
    }

    fn mark_demo_seeded(&mut self) -> RepoResult<()> {
        self.ensure_parent_dir()?;
        File::create(self.sibling_path(SEEDED_SUFFIX))?;
        Ok(())
    }
}
