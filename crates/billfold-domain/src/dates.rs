//! Calendar-date helpers shared by recurrence and reporting code.
//!
//! All user-visible dates travel as `YYYY-MM-DD` strings and become
//! [`NaiveDate`] at the parsing boundary. Because the format is fixed-width,
//! string order and calendar order coincide; comparisons use `NaiveDate`'s
//! `Ord` directly.

use std::fmt;

use chrono::{Duration, NaiveDate};

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format used by the presentation layer.
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Raised when a string is not a syntactically valid `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDate(pub String);

impl fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid YYYY-MM-DD date", self.0)
    }
}

impl std::error::Error for InvalidDate {}

/// Parses a `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, InvalidDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| InvalidDate(trimmed.to_string()))
}

/// Formats a date for display as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Adds `months` calendar months to `date`, carrying year rollover.
///
/// Overflow policy: the day-of-month clamps to the last valid day of the
/// target month, so the 31st shifted into February lands on the 28th/29th.
/// Callers stepping a series should shift from the series anchor with an
/// increasing month count rather than re-shifting the clamped result, so the
/// anchor day is recovered in longer months.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    use chrono::Datelike;

    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day)
        .unwrap_or(date)
}

/// Adds `years` calendar years to `date`, keeping the same day and month.
/// Feb 29 clamps to Feb 28 when the target year is not a leap year.
pub fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    use chrono::Datelike;

    let year = date.year() + years;
    let month = date.month();
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Advances a date by exactly one calendar month.
pub fn advance_by_month(date: NaiveDate) -> NaiveDate {
    shift_month(date, 1)
}

/// Advances a date by exactly one calendar year.
pub fn advance_by_year(date: NaiveDate) -> NaiveDate {
    shift_year(date, 1)
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    use chrono::Datelike;

    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_well_formed_dates() {
        assert_eq!(parse_date("2024-01-31"), Ok(date(2024, 1, 31)));
        assert_eq!(parse_date(" 2024-04-30 "), Ok(date(2024, 4, 30)));
    }

    #[test]
    fn rejects_malformed_dates() {
        for raw in ["", "31/01/2024", "2024-13-01", "2024-02-30", "not a date"] {
            assert!(parse_date(raw).is_err(), "expected `{raw}` to be rejected");
        }
    }

    #[test]
    fn month_shift_clamps_to_end_of_shorter_month() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(shift_month(date(2024, 1, 31), 2), date(2024, 3, 31));
        assert_eq!(shift_month(date(2024, 1, 31), 3), date(2024, 4, 30));
    }

    #[test]
    fn month_shift_carries_year_rollover() {
        assert_eq!(shift_month(date(2024, 11, 15), 2), date(2025, 1, 15));
        assert_eq!(shift_month(date(2024, 1, 15), -1), date(2023, 12, 15));
    }

    #[test]
    fn year_shift_clamps_leap_day() {
        assert_eq!(shift_year(date(2024, 2, 29), 1), date(2025, 2, 28));
        assert_eq!(shift_year(date(2024, 2, 29), 4), date(2028, 2, 29));
    }

    #[test]
    fn display_format_is_day_first() {
        assert_eq!(format_date(date(2024, 3, 5)), "05/03/2024");
    }

    #[test]
    fn days_in_month_handles_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
