//! Calendar date arithmetic.
//!
//! Month navigation is total: stepping or offsetting a [`ViewMonth`] always
//! lands on a valid year/month pair, with year rollover handled here.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A concrete calendar day.
///
/// Two dates are the same day exactly when year, month and day all match.
/// There is no time-of-day component anywhere in the widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Today according to the local clock.
    pub fn today() -> Self {
        let now = chrono::Local::now();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }
}

/// The year/month pair a calendar is currently displaying.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl Default for ViewMonth {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }
}

impl ViewMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// One month back, rolling into December of the previous year from January.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// One month forward, rolling into January of the next year from December.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Jump by an arbitrary number of months (negative for the past).
    ///
    /// The result is normalized, so November 2024 + 14 months is January 2026.
    pub fn with_offset(self, months: i32) -> Self {
        let zero_based = self.month as i32 - 1 + months;
        Self {
            year: self.year + zero_based.div_euclid(12),
            month: (zero_based.rem_euclid(12) + 1) as u32,
        }
    }

    /// Number of days in this month, accounting for leap years.
    pub fn days_in_month(self) -> u32 {
        match self.month {
            2 => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the 1st of this month (0 = Sunday, 6 = Saturday).
    pub fn first_day_of_week(self) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            // chrono's num_days_from_sunday already uses Sunday = 0
            date.weekday().num_days_from_sunday()
        } else {
            0 // fallback for out-of-range input
        }
    }

    /// The full date of a given day number inside this month.
    pub fn date(self, day: u32) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day,
        }
    }

    /// Whether the given date falls inside this month.
    pub fn contains(self, date: CalendarDate) -> bool {
        date.year == self.year && date.month == self.month
    }
}

/// Check if a year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(ViewMonth::new(2024, 1).days_in_month(), 31);
        assert_eq!(ViewMonth::new(2024, 2).days_in_month(), 29); // leap year
        assert_eq!(ViewMonth::new(2023, 2).days_in_month(), 28); // non-leap year
        assert_eq!(ViewMonth::new(1900, 2).days_in_month(), 28); // century, not leap
        assert_eq!(ViewMonth::new(2000, 2).days_in_month(), 29); // divisible by 400
        assert_eq!(ViewMonth::new(2024, 4).days_in_month(), 30);
        assert_eq!(ViewMonth::new(2024, 6).days_in_month(), 30);
        assert_eq!(ViewMonth::new(2024, 12).days_in_month(), 31);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024)); // divisible by 4
        assert!(!is_leap_year(2023)); // not divisible by 4
        assert!(!is_leap_year(1900)); // divisible by 100 but not 400
        assert!(is_leap_year(2000)); // divisible by 400
    }

    #[test]
    fn test_first_day_of_week() {
        // March 2024 starts on a Friday
        assert_eq!(ViewMonth::new(2024, 3).first_day_of_week(), 5);
        // June 2025 starts on a Sunday
        assert_eq!(ViewMonth::new(2025, 6).first_day_of_week(), 0);
        // April 2024 starts on a Monday
        assert_eq!(ViewMonth::new(2024, 4).first_day_of_week(), 1);
    }

    #[test]
    fn test_first_day_matches_chrono_everywhere() {
        for year in 1999..=2031 {
            for month in 1..=12 {
                let first = ViewMonth::new(year, month).first_day_of_week();
                assert!(first <= 6, "{}/{} produced weekday {}", month, year, first);
                let expected = NaiveDate::from_ymd_opt(year, month, 1)
                    .unwrap()
                    .weekday()
                    .num_days_from_sunday();
                assert_eq!(first, expected, "{}/{}", month, year);
            }
        }
    }

    #[test]
    fn test_navigation() {
        // Previous month from March 2024
        assert_eq!(ViewMonth::new(2024, 3).previous(), ViewMonth::new(2024, 2));

        // Previous month from January 2024 (year rollover)
        assert_eq!(ViewMonth::new(2024, 1).previous(), ViewMonth::new(2023, 12));

        // Next month from March 2024
        assert_eq!(ViewMonth::new(2024, 3).next(), ViewMonth::new(2024, 4));

        // Next month from December 2024 (year rollover)
        assert_eq!(ViewMonth::new(2024, 12).next(), ViewMonth::new(2025, 1));
    }

    #[test]
    fn test_navigation_round_trips() {
        let months = [
            ViewMonth::new(2024, 1),
            ViewMonth::new(2024, 6),
            ViewMonth::new(2024, 12),
            ViewMonth::new(1999, 2),
        ];
        for month in months {
            assert_eq!(month.next().previous(), month);
            assert_eq!(month.previous().next(), month);
        }
    }

    #[test]
    fn test_with_offset() {
        let november = ViewMonth::new(2024, 11);
        assert_eq!(november.with_offset(0), november);
        assert_eq!(november.with_offset(1), november.next());
        assert_eq!(november.with_offset(-1), november.previous());
        assert_eq!(november.with_offset(14), ViewMonth::new(2026, 1));
        assert_eq!(november.with_offset(-11), ViewMonth::new(2023, 12));
        assert_eq!(november.with_offset(-24), ViewMonth::new(2022, 11));
    }

    #[test]
    fn test_with_offset_matches_stepping() {
        let mut stepped = ViewMonth::new(2023, 8);
        for delta in 1..=30 {
            stepped = stepped.next();
            assert_eq!(ViewMonth::new(2023, 8).with_offset(delta), stepped);
        }
    }

    #[test]
    fn test_view_month_contains() {
        let march = ViewMonth::new(2024, 3);
        assert!(march.contains(CalendarDate::new(2024, 3, 1)));
        assert!(march.contains(CalendarDate::new(2024, 3, 31)));
        assert!(!march.contains(CalendarDate::new(2024, 4, 1)));
        assert!(!march.contains(CalendarDate::new(2023, 3, 15)));
    }

    #[test]
    fn test_date_equality_is_by_fields() {
        let a = CalendarDate::new(2024, 3, 10);
        let b = CalendarDate::new(2024, 3, 10);
        assert_eq!(a, b);
        assert_ne!(a, CalendarDate::new(2024, 3, 11));
        assert_ne!(a, CalendarDate::new(2024, 4, 10));
        assert_ne!(a, CalendarDate::new(2025, 3, 10));
    }

    #[test]
    fn test_today_is_plausible() {
        let today = CalendarDate::today();
        assert!(today.month >= 1 && today.month <= 12);
        assert!(today.day >= 1 && today.day <= 31);
        assert!(today.year >= 2024);

        let view = ViewMonth::default();
        assert_eq!(view.year, today.year);
        assert_eq!(view.month, today.month);
    }
}
