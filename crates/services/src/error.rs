//! Shared error types for the services crate.

use chrono::NaiveDate;
use thiserror::Error;

use drill_core::model::SessionError;
use storage::repository::StorageError;

/// Errors emitted by `DateSampler`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SamplerError {
    /// The caller's contract is `start <= end`; an inverted range has no
    /// dates to draw from.
    #[error("date range starts after it ends: {start}..{end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Errors emitted by `SessionScorer`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScorerError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `DrillService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrillError {
    #[error(transparent)]
    Sampler(#[from] SamplerError),
    #[error(transparent)]
    Scorer(#[from] ScorerError),
    #[error("failed to read an answer: {0}")]
    Input(#[from] std::io::Error),
}
