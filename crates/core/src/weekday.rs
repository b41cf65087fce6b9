//! Weekday arithmetic on the proleptic Gregorian calendar.
//!
//! Weekdays are numbered 1 = Monday through 7 = Sunday throughout the crate.

use chrono::{Datelike, NaiveDate};

/// Highest weekday number (Sunday). Also the alias target for an input of 0.
pub const MAX_WEEKDAY: u8 = 7;

/// First year of the fixed reference century used for century masking.
pub const REFERENCE_CENTURY: i32 = 2100;

/// ISO weekday of a date: 1 = Monday .. 7 = Sunday.
#[must_use]
pub fn weekday_number(date: NaiveDate) -> u8 {
    // number_from_monday is 1..=7, so the narrowing cast is lossless.
    date.weekday().number_from_monday() as u8
}

/// Full English weekday name for a date (e.g. "Friday").
#[must_use]
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Canonicalize a year to its March 14.
///
/// March 14 falls after any leap day, so its weekday carries the year's full
/// contribution (year + century) without month/day variation and without a
/// leap-year adjustment.
///
/// # Panics
///
/// Never panics for years representable by `NaiveDate`: March 14 exists in
/// every year.
#[must_use]
pub fn march_anchor(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 3, 14).expect("March 14 exists in every year")
}

/// Remap a year's last two digits into the fixed reference century
/// (2100..=2199), removing the century's weekday contribution.
#[must_use]
pub fn masked_year(year: i32) -> i32 {
    REFERENCE_CENTURY + year.rem_euclid(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    /// Independent weekday computation via Zeller's congruence, mapped onto
    /// the ISO 1=Monday..7=Sunday scale.
    fn zeller_iso_weekday(date: NaiveDate) -> u8 {
        let (mut year, mut month) = (date.year(), date.month() as i32);
        if month < 3 {
            month += 12;
            year -= 1;
        }
        let q = date.day() as i32;
        let k = year.rem_euclid(100);
        let j = year.div_euclid(100);
        // h: 0 = Saturday .. 6 = Friday
        let h = (q + (13 * (month + 1)) / 5 + k + k / 4 + j / 4 + 5 * j).rem_euclid(7);
        (((h + 5) % 7) + 1) as u8
    }

    #[test]
    fn weekday_number_matches_zeller_across_supported_range() {
        // Stride through 1918..2399 in 66-day steps: ~2600 dates, all months,
        // leap and non-leap years, multiple centuries.
        let start = NaiveDate::from_ymd_opt(1918, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2399, 12, 31).unwrap();
        let mut date = start;
        let mut checked = 0;
        while date <= end {
            assert_eq!(
                weekday_number(date),
                zeller_iso_weekday(date),
                "weekday mismatch for {date}"
            );
            date = date + Duration::days(66);
            checked += 1;
        }
        assert!(checked >= 1000);
    }

    #[test]
    fn known_weekdays() {
        assert_eq!(weekday_number(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()), 5); // Friday
        assert_eq!(weekday_number(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()), 6); // Saturday
        assert_eq!(weekday_number(NaiveDate::from_ymd_opt(1918, 3, 1).unwrap()), 5); // Friday
    }

    #[test]
    fn march_anchor_is_leap_invariant_within_the_year() {
        // 2020 is a leap year; the anchor must land on March 14 regardless.
        let anchor = march_anchor(2020);
        assert_eq!((anchor.month(), anchor.day()), (3, 14));
        assert_eq!(weekday_number(anchor), 6); // 2020-03-14 was a Saturday
    }

    #[test]
    fn masked_year_keeps_last_two_digits() {
        assert_eq!(masked_year(1918), 2118);
        assert_eq!(masked_year(2099), 2199);
        assert_eq!(masked_year(2100), 2100);
        assert_eq!(masked_year(1900), 2100);
    }

    #[test]
    fn weekday_name_is_full_english() {
        assert_eq!(
            weekday_name(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()),
            "Friday"
        );
    }
}
