use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use drill_core::model::{DateRange, Session};

/// Errors surfaced by session stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("journal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// One persisted question line: date, weekday name, verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleLine {
    pub date: NaiveDate,
    pub weekday_name: String,
    pub is_correct: bool,
}

/// Persisted shape of a completed session.
///
/// One record per session; the mode label is an explicit field so numbering
/// queries match by equality instead of scanning free text. The label also
/// appears verbatim in every serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    pub mode_label: String,
    pub ordinal: u32,
    pub correct: u32,
    pub total: u32,
    pub average_secs_per_question: Option<f64>,
    pub elapsed_secs: i64,
    pub recorded_at: DateTime<Utc>,
    pub range: DateRange,
    pub samples: Vec<SampleLine>,
}

impl SessionEntry {
    /// Flatten a scored session into its persisted record.
    #[must_use]
    pub fn from_session(session: &Session, recorded_at: DateTime<Utc>) -> Self {
        Self {
            mode_label: session.mode_label().to_owned(),
            ordinal: session.ordinal(),
            correct: session.correct_count(),
            total: session.total(),
            average_secs_per_question: session.average_secs_per_question(),
            elapsed_secs: session.elapsed().num_seconds(),
            recorded_at,
            range: session.date_range(),
            samples: session
                .samples()
                .iter()
                .map(|s| SampleLine {
                    date: s.date(),
                    weekday_name: s.weekday_name(),
                    is_correct: s.is_correct(),
                })
                .collect(),
        }
    }
}

/// Append-only store of completed sessions.
///
/// The process model is single-instance and strictly sequential, so the
/// trait is synchronous. A `count_sessions` followed by `append` is not
/// atomic across processes; concurrent writers could compute the same
/// ordinal.
pub trait SessionStore: Send + Sync {
    /// Number of persisted sessions whose recorded mode label equals
    /// `mode_label`. A store with no records yet reports zero.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the underlying log cannot be read.
    fn count_sessions(&self, mode_label: &str) -> Result<u32, StorageError>;

    /// Append one session record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    fn append(&self, entry: &SessionEntry) -> Result<(), StorageError>;

    /// The most recent records, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the underlying log cannot be read.
    fn recent(&self, limit: usize) -> Result<Vec<SessionEntry>, StorageError>;
}

/// Simple in-memory store for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<Mutex<Vec<SessionEntry>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn count_sessions(&self, mode_label: &str) -> Result<u32, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        let count = guard.iter().filter(|e| e.mode_label == mode_label).count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    fn append(&self, entry: &SessionEntry) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        guard.push(entry.clone());
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SessionEntry>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}
