use chrono::Duration;
use thiserror::Error;

use crate::model::mode::{DateRange, DrillMode};
use crate::model::sample::AnsweredSample;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// Batches are always generated with at least one question; an empty
    /// batch cannot occur through the supported entry points.
    #[error("session batch contains no samples")]
    EmptyBatch,

    #[error("too many samples for a single session: {len}")]
    TooManySamples { len: usize },
}

/// One completed drill batch, scored and numbered.
///
/// All derived quantities are computed once at construction and stored in
/// immutable fields, so rereading them is trivially idempotent and there is
/// no ambiguity about when the numbering query ran relative to persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    samples: Vec<AnsweredSample>,
    mode: DrillMode,
    elapsed: Duration,
    date_range: DateRange,
    ordinal: u32,
    correct_count: u32,
}

impl Session {
    /// Build a scored session from a fully answered batch.
    ///
    /// `ordinal` is the 1-based count of prior persisted sessions with the
    /// same mode label, plus one; the caller queries it from the store.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBatch` for an empty sample list and
    /// `SessionError::TooManySamples` if the count cannot fit in `u32`.
    pub fn new(
        samples: Vec<AnsweredSample>,
        mode: DrillMode,
        elapsed: Duration,
        date_range: DateRange,
        ordinal: u32,
    ) -> Result<Self, SessionError> {
        if samples.is_empty() {
            return Err(SessionError::EmptyBatch);
        }
        u32::try_from(samples.len())
            .map_err(|_| SessionError::TooManySamples { len: samples.len() })?;

        let correct_count = samples.iter().filter(|s| s.is_correct()).count() as u32;

        Ok(Self {
            samples,
            mode,
            elapsed,
            date_range,
            ordinal,
            correct_count,
        })
    }

    /// The answered questions, in question order.
    #[must_use]
    pub fn samples(&self) -> &[AnsweredSample] {
        &self.samples
    }

    #[must_use]
    pub fn mode(&self) -> DrillMode {
        self.mode
    }

    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        self.mode.label()
    }

    /// Wall-clock duration of the answer-collection phase.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The sampling bounds used for this session, recorded for audit.
    #[must_use]
    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    /// 1-based sequence number among logged sessions of the same mode.
    #[must_use]
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.samples.len() as u32
    }

    /// Average answer time per question in seconds.
    ///
    /// Reported as `None` when no elapsed time was measured, so a zero
    /// duration never turns into a division error.
    #[must_use]
    pub fn average_secs_per_question(&self) -> Option<f64> {
        let millis = self.elapsed.num_milliseconds();
        if millis <= 0 {
            return None;
        }
        Some(millis as f64 / 1000.0 / f64::from(self.total()))
    }
}
