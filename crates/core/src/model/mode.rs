use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::sample::Blank;
use crate::weekday::MAX_WEEKDAY;

/// Number of questions in a drill batch unless configured otherwise.
pub const DEFAULT_QUESTIONS: usize = 10;

/// Inclusive calendar date range used for sampling and recorded for audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Clamp a free-text weekday threshold into 1..=7.
///
/// Out-of-range values mean "no restriction" (7), never an error, because
/// the threshold originates from unvalidated user input.
#[must_use]
pub fn clamp_weekdays_quantity(quantity: u8) -> u8 {
    if (1..=MAX_WEEKDAY).contains(&quantity) {
        quantity
    } else {
        MAX_WEEKDAY
    }
}

/// The drill variants the trainer offers.
///
/// Each mode fixes which generation constraints apply, how a blank answer is
/// normalized, and the default sampling range. The label doubles as the
/// equality key for numbering repeated sessions in the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillMode {
    /// A fully random date; the user names its weekday.
    FullDate,
    /// Random year, canonicalized to March 14: trains the year+century
    /// contribution in isolation.
    YearAndCentury,
    /// A fully random date presented as month/day plus the year's anchor
    /// code, so only the month/day contribution is left to work out.
    MonthAndDay,
    /// Year-only training with the century masked into 2100..=2199 and the
    /// produced weekdays restricted to 1..=weekdays_quantity.
    MaskedYears { weekdays_quantity: u8 },
}

impl DrillMode {
    /// Build the weekday-restricted mode, clamping the threshold.
    #[must_use]
    pub fn masked_years(weekdays_quantity: u8) -> Self {
        Self::MaskedYears {
            weekdays_quantity: clamp_weekdays_quantity(weekdays_quantity),
        }
    }

    /// Stable human-readable label; also the session-numbering key.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullDate => "Full game",
            Self::YearAndCentury => "Years and centuries",
            Self::MonthAndDay => "Months and days",
            Self::MaskedYears { .. } => "Years without centuries",
        }
    }

    /// Default sampling range for the mode.
    ///
    /// The masked mode draws directly from the reference century; the other
    /// modes use the trainer's historical range (Gregorian adoption in the
    /// last holdout countries through the end of the 21st century).
    #[must_use]
    pub fn date_range(&self) -> DateRange {
        match self {
            Self::MaskedYears { .. } => DateRange::new(ymd(2100, 1, 1), ymd(2199, 12, 31)),
            _ => DateRange::new(ymd(1918, 3, 1), ymd(2099, 1, 1)),
        }
    }

    /// How a blank or non-numeric answer normalizes in this mode.
    #[must_use]
    pub fn blank(&self) -> Blank {
        match self {
            Self::MaskedYears { weekdays_quantity } => {
                Blank::Excluded(clamp_weekdays_quantity(*weekdays_quantity) + 1)
            }
            _ => Blank::Unanswered,
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("mode range bounds are valid dates")
}
