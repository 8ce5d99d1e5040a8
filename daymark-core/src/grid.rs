//! Month grid layout.
//!
//! A [`ViewMonth`] is laid out as a flat list of cells meant for a 7-column
//! grid: padding cells up to the weekday of the 1st, one cell per day of the
//! month, then padding cells until the count is a multiple of seven. Rendering
//! code can chunk the list into rows without any further date math.

use serde::{Deserialize, Serialize};

use crate::date::ViewMonth;

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty cell before the 1st of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Empty cell completing the final week row
    PaddingAfter,
}

/// A single cell in the month grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarDay {
    /// Day number within the month; 0 for padding cells
    pub day: u32,
    pub day_type: CalendarDayType,
}

/// A month laid out as grid cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarMonth {
    /// 1-12
    pub month: u32,
    pub year: i32,
    /// Always a multiple of 7 cells
    pub days: Vec<CalendarDay>,
    /// Weekday of the 1st (0 = Sunday, 6 = Saturday)
    pub first_day_of_week: u32,
}

impl ViewMonth {
    /// Lay this month out as grid cells.
    pub fn grid(self) -> CalendarMonth {
        let days_in_month = self.days_in_month();
        let first_day_of_week = self.first_day_of_week();

        log::debug!(
            "Laying out {}/{}: {} days, first weekday {}",
            self.month,
            self.year,
            days_in_month,
            first_day_of_week
        );

        let mut days = Vec::with_capacity(42);

        for _ in 0..first_day_of_week {
            days.push(CalendarDay {
                day: 0,
                day_type: CalendarDayType::PaddingBefore,
            });
        }

        for day in 1..=days_in_month {
            days.push(CalendarDay {
                day,
                day_type: CalendarDayType::MonthDay,
            });
        }

        while days.len() % 7 != 0 {
            days.push(CalendarDay {
                day: 0,
                day_type: CalendarDayType::PaddingAfter,
            });
        }

        CalendarMonth {
            month: self.month,
            year: self.year,
            days,
            first_day_of_week,
        }
    }
}

impl CalendarMonth {
    /// Number of 7-cell week rows.
    pub fn rows(&self) -> usize {
        self.days.len() / 7
    }
}
