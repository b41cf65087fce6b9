use std::sync::Arc;

use chrono::Duration;

use drill_core::Clock;
use drill_core::model::{AnsweredSample, DateRange, DrillMode, Session};
use storage::repository::{SessionEntry, SessionStore};

use crate::error::ScorerError;

/// Scores a completed batch, numbers it, and persists the summary record.
pub struct SessionScorer {
    clock: Clock,
    store: Arc<dyn SessionStore>,
}

impl SessionScorer {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<dyn SessionStore>) -> Self {
        Self { clock, store }
    }

    /// Aggregate answered samples into a numbered, persisted session.
    ///
    /// The ordinal is one plus the number of already-persisted sessions
    /// whose mode label equals this batch's label; an empty journal yields
    /// ordinal 1. The count and the append are not atomic across processes;
    /// single-instance use is the supported model.
    ///
    /// # Errors
    ///
    /// Returns `ScorerError::Session` for an out-of-contract batch and
    /// `ScorerError::Storage` if the journal cannot be read or appended.
    pub fn score(
        &self,
        samples: Vec<AnsweredSample>,
        mode: DrillMode,
        elapsed: Duration,
        date_range: DateRange,
    ) -> Result<Session, ScorerError> {
        let ordinal = self.store.count_sessions(mode.label())? + 1;
        let session = Session::new(samples, mode, elapsed, date_range, ordinal)?;

        let entry = SessionEntry::from_session(&session, self.clock.now());
        self.store.append(&entry)?;

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use drill_core::model::{Blank, DateSample, SessionError, UserAnswer};
    use drill_core::time::fixed_clock;
    use storage::repository::InMemorySessionStore;

    fn answered(day: u32, raw: &str) -> AnsweredSample {
        DateSample::new(NaiveDate::from_ymd_opt(2021, 1, day).unwrap())
            .answered(UserAnswer::parse(raw, Blank::Unanswered))
    }

    fn scorer(store: &InMemorySessionStore) -> SessionScorer {
        SessionScorer::new(fixed_clock(), Arc::new(store.clone()))
    }

    #[test]
    fn first_session_of_a_mode_gets_ordinal_one() {
        let store = InMemorySessionStore::new();
        let session = scorer(&store)
            .score(
                vec![answered(1, "5")],
                DrillMode::FullDate,
                Duration::seconds(3),
                DrillMode::FullDate.date_range(),
            )
            .unwrap();

        assert_eq!(session.ordinal(), 1);
        assert_eq!(session.correct_count(), 1);
        assert_eq!(store.count_sessions("Full game").unwrap(), 1);
    }

    #[test]
    fn ordinals_count_only_the_same_mode_label() {
        let store = InMemorySessionStore::new();
        let scorer = scorer(&store);
        let range = DrillMode::FullDate.date_range();

        let first = scorer
            .score(
                vec![answered(1, "5")],
                DrillMode::FullDate,
                Duration::seconds(3),
                range,
            )
            .unwrap();
        let other_mode = scorer
            .score(
                vec![answered(1, "5")],
                DrillMode::YearAndCentury,
                Duration::seconds(3),
                range,
            )
            .unwrap();
        let second = scorer
            .score(
                vec![answered(2, "6")],
                DrillMode::FullDate,
                Duration::seconds(3),
                range,
            )
            .unwrap();

        assert_eq!(first.ordinal(), 1);
        assert_eq!(other_mode.ordinal(), 1);
        assert_eq!(second.ordinal(), 2);
    }

    #[test]
    fn persisted_entry_mirrors_the_session() {
        let store = InMemorySessionStore::new();
        let session = scorer(&store)
            .score(
                vec![answered(1, "5"), answered(2, "1")],
                DrillMode::FullDate,
                Duration::seconds(10),
                DrillMode::FullDate.date_range(),
            )
            .unwrap();

        let recent = store.recent(1).unwrap();
        let entry = &recent[0];
        assert_eq!(entry.mode_label, session.mode_label());
        assert_eq!(entry.ordinal, 1);
        assert_eq!(entry.correct, 1);
        assert_eq!(entry.total, 2);
        assert_eq!(entry.average_secs_per_question, Some(5.0));
        assert_eq!(entry.samples.len(), 2);
        assert_eq!(entry.samples[0].weekday_name, "Friday");
        assert!(entry.samples[0].is_correct);
        assert!(!entry.samples[1].is_correct);
    }

    #[test]
    fn empty_batch_is_rejected_and_not_persisted() {
        let store = InMemorySessionStore::new();
        let err = scorer(&store)
            .score(
                Vec::new(),
                DrillMode::FullDate,
                Duration::zero(),
                DrillMode::FullDate.date_range(),
            )
            .unwrap_err();

        assert!(matches!(err, ScorerError::Session(SessionError::EmptyBatch)));
        assert_eq!(store.count_sessions("Full game").unwrap(), 0);
    }
}
