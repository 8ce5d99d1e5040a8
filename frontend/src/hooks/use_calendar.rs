use yew::prelude::*;

use daymark_core::{CalendarMonth, ViewMonth};

use crate::services::date_utils;

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub view: ViewMonth,
    pub grid: CalendarMonth,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

/// Month display state plus navigation, starting on the current month.
///
/// The grid is recomputed from the view on every render. The navigation
/// callbacks take the state handle as their `use_callback` dependency: a
/// handle dereferences to the value it was created with, so the closure has
/// to be rebuilt whenever the view changes or every step would start from
/// the mount-time month.
#[hook]
pub fn use_calendar() -> UseCalendarResult {
    let view = use_state(date_utils::current_view_month);

    let prev_month = use_callback(view.clone(), |_: MouseEvent, view| {
        view.set(view.previous());
    });

    let next_month = use_callback(view.clone(), |_: MouseEvent, view| {
        view.set(view.next());
    });

    let state = CalendarState {
        view: *view,
        grid: view.grid(),
    };

    let actions = UseCalendarActions {
        prev_month,
        next_month,
    };

    UseCalendarResult { state, actions }
}
