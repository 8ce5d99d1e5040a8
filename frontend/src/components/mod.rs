pub mod calendar;
pub mod event_modal;
pub mod month_calendar;
