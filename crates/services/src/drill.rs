use std::io;
use std::sync::Arc;

use rand::Rng;
use rand::rngs::ThreadRng;

use drill_core::Clock;
use drill_core::model::{DEFAULT_QUESTIONS, DateRange, DateSample, DrillMode, Session, UserAnswer};
use storage::repository::SessionStore;

use crate::error::DrillError;
use crate::sampler::DateSampler;
use crate::scorer::SessionScorer;

/// One line of free text per question.
///
/// The CLI implements this over stdin; tests script the answers. Reading may
/// block indefinitely — there is exactly one consumer and no answer timeout.
pub trait AnswerSource {
    /// Produce the raw answer for question `index` (0-based) of `total`.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if the input channel fails; malformed *content*
    /// is not an error and is normalized downstream.
    fn answer(
        &mut self,
        index: usize,
        total: usize,
        sample: &DateSample,
        mode: DrillMode,
    ) -> io::Result<String>;
}

/// Canned answers for tests and prototyping.
pub struct ScriptedAnswers {
    answers: Vec<String>,
    next: usize,
}

impl ScriptedAnswers {
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn answer(
        &mut self,
        _index: usize,
        _total: usize,
        _sample: &DateSample,
        _mode: DrillMode,
    ) -> io::Result<String> {
        let raw = self.answers.get(self.next).cloned().unwrap_or_default();
        self.next += 1;
        Ok(raw)
    }
}

/// Orchestrates one full drill cycle: sample, collect, score, persist.
pub struct DrillService<R: Rng> {
    clock: Clock,
    sampler: DateSampler<R>,
    store: Arc<dyn SessionStore>,
}

impl DrillService<ThreadRng> {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            clock: Clock::default_clock(),
            sampler: DateSampler::new(),
            store,
        }
    }
}

impl<R: Rng> DrillService<R> {
    #[must_use]
    pub fn from_parts(clock: Clock, sampler: DateSampler<R>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            clock,
            sampler,
            store,
        }
    }

    /// Override the clock (usually for deterministic testing).
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Run one drill session with the mode's default date range.
    ///
    /// # Errors
    ///
    /// Returns `DrillError` for sampling contract violations, input channel
    /// failures, or persistence failures.
    pub fn run(
        &mut self,
        mode: DrillMode,
        questions: usize,
        answers: &mut dyn AnswerSource,
    ) -> Result<Session, DrillError> {
        self.run_with_range(mode, mode.date_range(), questions, answers)
    }

    /// Run one drill session over an explicit date range.
    ///
    /// Generates the batch up front, then collects one answer per question
    /// in order, timing only the answer-collection phase. A question count
    /// of zero falls back to the default batch size. Elapsed time that
    /// cannot be measured (a fixed clock) simply yields a zero duration;
    /// the session then reports its per-question average as unavailable.
    ///
    /// # Errors
    ///
    /// Returns `DrillError` for sampling contract violations, input channel
    /// failures, or persistence failures.
    pub fn run_with_range(
        &mut self,
        mode: DrillMode,
        range: DateRange,
        questions: usize,
        answers: &mut dyn AnswerSource,
    ) -> Result<Session, DrillError> {
        let count = if questions == 0 {
            DEFAULT_QUESTIONS
        } else {
            questions
        };
        let samples = self.sampler.sample_batch(range, mode, count)?;

        let started = self.clock.now();
        let mut scored = Vec::with_capacity(samples.len());
        for (index, sample) in samples.iter().enumerate() {
            let raw = answers.answer(index, samples.len(), sample, mode)?;
            let answer = UserAnswer::parse(&raw, mode.blank());
            scored.push(sample.answered(answer));
        }
        let elapsed = self.clock.now() - started;

        let scorer = SessionScorer::new(self.clock, Arc::clone(&self.store));
        Ok(scorer.score(scored, mode, elapsed, range)?)
    }
}
