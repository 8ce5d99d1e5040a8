//! Core logic for the daymark month-calendar widget.
//!
//! Everything in this crate is pure state and date math. The hosting UI owns
//! the values, calls the transitions here when the user clicks something, and
//! re-renders from the result. Nothing renders, nothing is async, and nothing
//! reads the clock except the explicit `today`/`default` constructors.

pub mod date;
pub mod events;
pub mod grid;
pub mod highlight;
pub mod selection;

pub use date::{is_leap_year, CalendarDate, ViewMonth};
pub use events::{has_event, Event, EventModal};
pub use grid::{CalendarDay, CalendarDayType, CalendarMonth};
pub use highlight::{day_highlight, DayHighlight, InteractionMode};

#[cfg(test)]
mod tests {
    use super::*;

    // Walk a whole selection session the way the widget drives it: build the
    // grid, click a day, check the highlight, click it again.
    #[test]
    fn test_selection_session() {
        let today = CalendarDate::new(2024, 3, 15);
        let view = ViewMonth::new(2024, 3);
        let mut selected = Vec::new();

        let grid = view.grid();
        assert_eq!(grid.days.len(), 42);

        // click March 10th
        let clicked = view.date(10);
        selection::toggle(&mut selected, clicked);
        assert_eq!(
            day_highlight(clicked, today, InteractionMode::Selection, &selected, &[]),
            DayHighlight::Selected
        );

        // today keeps its own highlight even while other days are selected
        assert_eq!(
            day_highlight(today, today, InteractionMode::Selection, &selected, &[]),
            DayHighlight::Today
        );

        // click March 10th again
        selection::toggle(&mut selected, clicked);
        assert!(selected.is_empty());
        assert_eq!(
            day_highlight(clicked, today, InteractionMode::Selection, &selected, &[]),
            DayHighlight::Plain
        );
    }

    // Add an event, navigate away and back, and make sure the marker is
    // still there: events live outside the displayed month.
    #[test]
    fn test_event_survives_navigation() {
        let today = CalendarDate::new(2024, 4, 20);
        let mut view = ViewMonth::new(2024, 4);
        let mut events = Vec::new();
        let mut modal = EventModal::default();

        modal.open(view.date(5));
        modal.edit_title("Dentist");
        assert!(modal.submit(&mut events));

        view = view.next();
        assert_eq!(view, ViewMonth::new(2024, 5));
        view = view.previous();
        assert_eq!(view, ViewMonth::new(2024, 4));

        let april_5 = view.date(5);
        assert!(has_event(&events, april_5));
        assert_eq!(
            day_highlight(april_5, today, InteractionMode::Events, &[], &events),
            DayHighlight::HasEvent
        );
    }

    // Selections made in one month stay put while other months are shown.
    #[test]
    fn test_selection_survives_navigation() {
        let mut view = ViewMonth::new(2024, 3);
        let mut selected = Vec::new();

        selection::toggle(&mut selected, view.date(10));

        for _ in 0..14 {
            view = view.next();
        }
        assert_eq!(view, ViewMonth::new(2025, 5));
        assert!(selection::is_selected(
            &selected,
            CalendarDate::new(2024, 3, 10)
        ));

        // jumping straight back lands on the original month
        assert_eq!(view.with_offset(-14), ViewMonth::new(2024, 3));
    }
}
