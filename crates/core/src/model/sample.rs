use chrono::NaiveDate;

use crate::weekday::{MAX_WEEKDAY, weekday_name, weekday_number};

//
// ─── ANSWER NORMALIZATION ──────────────────────────────────────────────────────
//

/// What an empty or non-numeric answer normalizes to.
///
/// Ordinary modes map blank input to an unanswered sentinel that never equals
/// a weekday. The weekday-restricted mode instead maps it to the first
/// weekday *outside* the trained range (`weekdays_quantity + 1`), encoding
/// the rule that any answer is acceptable when the true weekday was never
/// part of the drill. Note the flip side: a blank answer to an in-range
/// question scores as a concrete wrong weekday, not as "unanswered".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blank {
    Unanswered,
    Excluded(u8),
}

/// A normalized user answer.
///
/// Out-of-range numbers pass through unchanged; scoring simply treats them as
/// unequal to any true weekday. Raw input is never rejected or re-prompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAnswer {
    Unanswered,
    Weekday(u8),
}

impl UserAnswer {
    /// Normalize one line of free-text input.
    ///
    /// Rules, in order: non-numeric or empty input resolves per `blank`;
    /// `0` is an alias for `7` (Sunday); any other number passes through.
    /// This never fails — malformed input is absorbed, not surfaced.
    #[must_use]
    pub fn parse(raw: &str, blank: Blank) -> Self {
        match raw.trim().parse::<u8>() {
            Ok(0) => Self::Weekday(MAX_WEEKDAY),
            Ok(n) => Self::Weekday(n),
            Err(_) => match blank {
                Blank::Unanswered => Self::Unanswered,
                Blank::Excluded(value) => Self::Weekday(value),
            },
        }
    }

    /// Whether this answer names the given true weekday.
    #[must_use]
    pub fn matches(self, true_weekday: u8) -> bool {
        matches!(self, Self::Weekday(n) if n == true_weekday)
    }
}

//
// ─── SAMPLES ───────────────────────────────────────────────────────────────────
//

/// One generated question: a concrete calendar date.
///
/// The true weekday is always recomputed from the date, never stored
/// alongside it, so the two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSample {
    date: NaiveDate,
}

impl DateSample {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The question's true weekday, 1 = Monday .. 7 = Sunday.
    #[must_use]
    pub fn true_weekday(&self) -> u8 {
        weekday_number(self.date)
    }

    /// Full weekday name for display and persistence.
    #[must_use]
    pub fn weekday_name(&self) -> String {
        weekday_name(self.date)
    }

    /// Record the user's normalized answer, scoring it eagerly.
    ///
    /// The result is a read-only record; correctness is fixed at this point
    /// and cannot be recomputed differently later.
    #[must_use]
    pub fn answered(self, answer: UserAnswer) -> AnsweredSample {
        let is_correct = answer.matches(self.true_weekday());
        AnsweredSample {
            date: self.date,
            answer,
            is_correct,
        }
    }
}

/// A scored question: date, the user's answer, and the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsweredSample {
    date: NaiveDate,
    answer: UserAnswer,
    is_correct: bool,
}

impl AnsweredSample {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn true_weekday(&self) -> u8 {
        weekday_number(self.date)
    }

    #[must_use]
    pub fn weekday_name(&self) -> String {
        weekday_name(self.date)
    }

    #[must_use]
    pub fn answer(&self) -> UserAnswer {
        self.answer
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn friday() -> DateSample {
        // 2021-01-01 was a Friday.
        DateSample::new(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
    }

    #[test]
    fn zero_is_an_alias_for_sunday() {
        assert_eq!(
            UserAnswer::parse("0", Blank::Unanswered),
            UserAnswer::Weekday(7)
        );
        assert_eq!(
            UserAnswer::parse("0", Blank::Excluded(3)),
            UserAnswer::Weekday(7)
        );
    }

    #[test]
    fn non_numeric_input_becomes_the_blank_policy() {
        assert_eq!(
            UserAnswer::parse("abc", Blank::Unanswered),
            UserAnswer::Unanswered
        );
        assert_eq!(UserAnswer::parse("", Blank::Unanswered), UserAnswer::Unanswered);
        assert_eq!(
            UserAnswer::parse("  \n", Blank::Excluded(3)),
            UserAnswer::Weekday(3)
        );
    }

    #[test]
    fn numbers_pass_through_even_out_of_range() {
        assert_eq!(
            UserAnswer::parse("3", Blank::Unanswered),
            UserAnswer::Weekday(3)
        );
        assert_eq!(
            UserAnswer::parse("9", Blank::Unanswered),
            UserAnswer::Weekday(9)
        );
        assert!(!UserAnswer::Weekday(9).matches(2));
    }

    #[test]
    fn answering_scores_eagerly() {
        let sample = friday();
        assert_eq!(sample.true_weekday(), 5);

        let right = sample.answered(UserAnswer::parse("5", Blank::Unanswered));
        assert!(right.is_correct());

        let wrong = sample.answered(UserAnswer::parse("4", Blank::Unanswered));
        assert!(!wrong.is_correct());

        let unanswered = sample.answered(UserAnswer::parse("nope", Blank::Unanswered));
        assert!(!unanswered.is_correct());
        assert_eq!(unanswered.answer(), UserAnswer::Unanswered);
    }

    #[test]
    fn blank_in_restricted_mode_scores_as_a_concrete_wrong_weekday() {
        // weekdays_quantity = 2: blank normalizes to 3. A true weekday of 1
        // is inside the trained range, so the blank scores as incorrect.
        // 2118-03-14 is a Monday (true weekday 1).
        let sample = DateSample::new(NaiveDate::from_ymd_opt(2118, 3, 14).unwrap());
        assert_eq!(sample.true_weekday(), 1);

        let answer = UserAnswer::parse("", Blank::Excluded(3));
        assert_eq!(answer, UserAnswer::Weekday(3));
        assert!(!sample.answered(answer).is_correct());
    }

    #[test]
    fn blank_in_restricted_mode_accepts_the_first_excluded_weekday() {
        // The sentinel equals weekdays_quantity + 1, so a blank answer scores
        // correct exactly when the question's true weekday is the first one
        // outside the trained range. 2125-03-14 is a Wednesday (weekday 3).
        let sample = DateSample::new(NaiveDate::from_ymd_opt(2125, 3, 14).unwrap());
        assert_eq!(sample.true_weekday(), 3);
        assert!(
            sample
                .answered(UserAnswer::parse("", Blank::Excluded(3)))
                .is_correct()
        );
    }

    #[test]
    fn weekday_is_recomputed_from_the_date() {
        let sample = friday();
        let answered = sample.answered(UserAnswer::Weekday(5));
        assert_eq!(answered.true_weekday(), sample.true_weekday());
        assert_eq!(answered.weekday_name(), "Friday");
    }
}
