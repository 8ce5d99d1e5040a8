//! Day events and the event-creation dialog.
//!
//! Events are append-only annotations: once added they are never edited or
//! removed. [`EventModal`] is the dialog's state machine; it owns the clicked
//! day and the in-progress title until the entry is committed or discarded.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// An annotation attached to a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub date: CalendarDate,
    /// Non-empty, trimmed on entry
    pub title: String,
}

/// Whether at least one event falls on the given date.
pub fn has_event(events: &[Event], date: CalendarDate) -> bool {
    events.iter().any(|e| e.date == date)
}

/// State of the event-creation dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventModal {
    Closed,
    Open {
        /// The day that was clicked to open the dialog
        target: CalendarDate,
        /// Title text as typed so far
        title: String,
    },
}

impl Default for EventModal {
    fn default() -> Self {
        Self::Closed
    }
}

impl EventModal {
    /// Open the dialog for a day, starting from an empty title.
    pub fn open(&mut self, target: CalendarDate) {
        *self = Self::Open {
            target,
            title: String::new(),
        };
    }

    /// Replace the in-progress title. Does nothing while closed.
    pub fn edit_title(&mut self, text: impl Into<String>) {
        if let Self::Open { title, .. } = self {
            *title = text.into();
        }
    }

    /// Try to commit the dialog as a new event.
    ///
    /// The title is trimmed first. A title that trims to nothing is rejected:
    /// no event is appended and the dialog stays open. On success the event
    /// lands at the end of `events` and the dialog closes. Returns whether an
    /// event was added.
    pub fn submit(&mut self, events: &mut Vec<Event>) -> bool {
        let (target, title) = match self {
            Self::Open { target, title } => (*target, title.trim().to_string()),
            Self::Closed => return false,
        };

        if title.is_empty() {
            log::debug!("Ignoring event submission with a blank title");
            return false;
        }

        log::info!(
            "Adding event '{}' on {}-{:02}-{:02}",
            title,
            target.year,
            target.month,
            target.day
        );
        events.push(Event {
            date: target,
            title,
        });
        *self = Self::Closed;
        true
    }

    /// Close the dialog, discarding the in-progress title.
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The day the dialog is for, while open.
    pub fn target(&self) -> Option<CalendarDate> {
        match self {
            Self::Open { target, .. } => Some(*target),
            Self::Closed => None,
        }
    }

    /// The in-progress title text, while open.
    pub fn title(&self) -> &str {
        match self {
            Self::Open { title, .. } => title,
            Self::Closed => "",
        }
    }
}
