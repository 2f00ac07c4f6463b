//! Calendar month windows used for filtering and navigation.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A `(year, month)` reporting window over the bill list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthWindow {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

impl MonthWindow {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month must be 1-12");
        Self { year, month }
    }

    /// The window containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Whether the date's calendar year and month fall in this window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// One month back; January wraps to December of the previous year.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// One month forward; December wraps to January of the next year.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn month_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[(self.month - 1) as usize]
    }

    /// Display label for the month header, e.g. `January 2024`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backward_from_january_wraps_to_previous_december() {
        assert_eq!(MonthWindow::new(2024, 1).prev(), MonthWindow::new(2023, 12));
    }

    #[test]
    fn forward_from_december_wraps_to_next_january() {
        assert_eq!(MonthWindow::new(2024, 12).next(), MonthWindow::new(2025, 1));
    }

    #[test]
    fn interior_months_step_without_wrapping() {
        assert_eq!(MonthWindow::new(2024, 6).prev(), MonthWindow::new(2024, 5));
        assert_eq!(MonthWindow::new(2024, 6).next(), MonthWindow::new(2024, 7));
    }

    #[test]
    fn contains_matches_year_and_month_only() {
        let window = MonthWindow::new(2024, 2);
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2023, 2, 15).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn label_names_the_month() {
        assert_eq!(MonthWindow::new(2024, 1).label(), "January 2024");
    }
}
