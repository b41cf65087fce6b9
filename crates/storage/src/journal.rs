//! Append-only JSON-lines journal of completed sessions.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::repository::{SessionEntry, SessionStore, StorageError};

/// File-backed session store: one JSON record per line, append-only.
///
/// A missing file reads as an empty journal (zero prior sessions). Each
/// append is a single buffered write of one full line.
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Vec<SessionEntry>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        // Lines that fail to parse are skipped: the journal is append-only,
        // and a truncated trailing write must not poison the whole history.
        Ok(text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect())
    }
}

impl SessionStore for JournalStore {
    fn count_sessions(&self, mode_label: &str) -> Result<u32, StorageError> {
        let count = self
            .read_entries()?
            .iter()
            .filter(|e| e.mode_label == mode_label)
            .count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    fn append(&self, entry: &SessionEntry) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(entry)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SessionEntry>, StorageError> {
        let mut entries = self.read_entries()?;
        entries.reverse();
        entries.truncate(limit);
        Ok(entries)
    }
}
