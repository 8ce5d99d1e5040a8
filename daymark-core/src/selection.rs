//! Selected-dates list for the selection mode.
//!
//! The list behaves as a set that remembers insertion order. Membership is a
//! linear scan on date equality; the list never holds more than a handful of
//! entries.

use crate::date::CalendarDate;

/// Whether a date is currently selected.
pub fn is_selected(dates: &[CalendarDate], date: CalendarDate) -> bool {
    dates.iter().any(|d| *d == date)
}

/// Toggle a date: remove it if present, append it to the end otherwise.
pub fn toggle(dates: &mut Vec<CalendarDate>, date: CalendarDate) {
    if is_selected(dates, date) {
        dates.retain(|d| *d != date);
        log::debug!("Deselected {}-{:02}-{:02}", date.year, date.month, date.day);
    } else {
        dates.push(date);
        log::debug!("Selected {}-{:02}-{:02}", date.year, date.month, date.day);
    }
}
