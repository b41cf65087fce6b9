use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use rand::rngs::ThreadRng;

use drill_core::model::{DateRange, DateSample, DrillMode, clamp_weekdays_quantity};
use drill_core::weekday::{march_anchor, masked_year, weekday_number};

use crate::error::SamplerError;

/// Generates constrained random date questions.
///
/// Generic over the RNG so tests can drive it with a seeded `StdRng`.
pub struct DateSampler<R: Rng> {
    rng: R,
}

impl DateSampler<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for DateSampler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DateSampler<R> {
    #[must_use]
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one question for the given mode from `range`.
    ///
    /// - `FullDate` / `MonthAndDay`: a uniformly random date in the range.
    /// - `YearAndCentury`: a random date canonicalized to March 14 of its
    ///   year, isolating the year+century weekday contribution.
    /// - `MaskedYears`: as above, with the year remapped into the fixed
    ///   reference century, resampled until the weekday falls inside the
    ///   trained range. Expected draws are `7 / weekdays_quantity`, so the
    ///   loop is bounded in expectation for every valid threshold.
    ///
    /// A range with `start == end` is valid and degenerates to that date.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvertedRange` if `start > end`.
    pub fn sample(
        &mut self,
        range: DateRange,
        mode: DrillMode,
    ) -> Result<DateSample, SamplerError> {
        match mode {
            DrillMode::FullDate | DrillMode::MonthAndDay => {
                Ok(DateSample::new(self.random_date(range)?))
            }
            DrillMode::YearAndCentury => {
                let date = self.random_date(range)?;
                Ok(DateSample::new(march_anchor(date.year())))
            }
            DrillMode::MaskedYears { weekdays_quantity } => {
                let limit = clamp_weekdays_quantity(weekdays_quantity);
                loop {
                    let date = self.random_date(range)?;
                    let anchor = march_anchor(masked_year(date.year()));
                    if weekday_number(anchor) <= limit {
                        return Ok(DateSample::new(anchor));
                    }
                }
            }
        }
    }

    /// Draw a whole question batch in order.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvertedRange` if `start > end`.
    pub fn sample_batch(
        &mut self,
        range: DateRange,
        mode: DrillMode,
        count: usize,
    ) -> Result<Vec<DateSample>, SamplerError> {
        (0..count).map(|_| self.sample(range, mode)).collect()
    }

    fn random_date(&mut self, range: DateRange) -> Result<NaiveDate, SamplerError> {
        let days = (range.end - range.start).num_days();
        if days < 0 {
            return Err(SamplerError::InvertedRange {
                start: range.start,
                end: range.end,
            });
        }
        let offset = self.rng.random_range(0..=days);
        Ok(range.start + Duration::days(offset))
    }
}
