//! Per-day visual state.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::events::{self, Event};
use crate::selection;

/// What clicking a day does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InteractionMode {
    /// Clicking a day toggles it in the selected-dates list
    Selection,
    /// Clicking a day opens the event-creation dialog
    Events,
}

impl Default for InteractionMode {
    fn default() -> Self {
        Self::Selection
    }
}

/// Visual state of a day cell, strongest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayHighlight {
    /// The real-world current date; wins over everything else
    Today,
    /// Member of the selected-dates list
    Selected,
    /// At least one event on this day
    HasEvent,
    /// Nothing special
    Plain,
}

/// Resolve the highlight for one day.
///
/// Today always wins. Below that only the active mode's marker applies, so a
/// lingering selection never shows through in events mode and vice versa.
pub fn day_highlight(
    date: CalendarDate,
    today: CalendarDate,
    mode: InteractionMode,
    selected_dates: &[CalendarDate],
    events: &[Event],
) -> DayHighlight {
    if date == today {
        return DayHighlight::Today;
    }
    match mode {
        InteractionMode::Selection if selection::is_selected(selected_dates, date) => {
            DayHighlight::Selected
        }
        InteractionMode::Events if events::has_event(events, date) => DayHighlight::HasEvent,
        _ => DayHighlight::Plain,
    }
}
