use yew::prelude::*;

use daymark_core::{selection, CalendarDate, Event, EventModal as EventModalState, InteractionMode};

use crate::components::calendar::Calendar;
use crate::components::event_modal::EventModal;
use crate::hooks::use_calendar::use_calendar;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct MonthCalendarProps {
    /// What clicking a day does; defaults to selection
    #[prop_or_default]
    pub mode: InteractionMode,
}

/// The complete month-calendar widget: header with navigation, the day grid,
/// a summary list underneath, and the event-creation dialog.
///
/// Selected dates and events live here and survive month navigation and mode
/// switches. The dialog belongs to events mode: leaving that mode abandons an
/// open dialog, and the dialog is only rendered while events mode is active.
#[function_component(MonthCalendar)]
pub fn month_calendar(props: &MonthCalendarProps) -> Html {
    let calendar = use_calendar();
    let selected_dates = use_state(Vec::<CalendarDate>::new);
    let events = use_state(Vec::<Event>::new);
    let modal = use_state(EventModalState::default);

    use_effect_with(props.mode, {
        let modal = modal.clone();
        move |mode| {
            if *mode != InteractionMode::Events && modal.is_open() {
                let mut state = (*modal).clone();
                state.cancel();
                modal.set(state);
            }
            || ()
        }
    });

    let view = calendar.state.view;
    let today = date_utils::current_date();

    let on_day_click = {
        let selected_dates = selected_dates.clone();
        let modal = modal.clone();
        let mode = props.mode;
        Callback::from(move |day: u32| {
            let date = view.date(day);
            match mode {
                InteractionMode::Selection => {
                    let mut dates = (*selected_dates).clone();
                    selection::toggle(&mut dates, date);
                    selected_dates.set(dates);
                }
                InteractionMode::Events => {
                    gloo::console::log!(
                        "Opening event dialog for",
                        date_utils::format_full_date(&date)
                    );
                    let mut state = (*modal).clone();
                    state.open(date);
                    modal.set(state);
                }
            }
        })
    };

    let on_title_change = {
        let modal = modal.clone();
        Callback::from(move |text: String| {
            let mut state = (*modal).clone();
            state.edit_title(text);
            modal.set(state);
        })
    };

    let on_modal_submit = {
        let modal = modal.clone();
        let events = events.clone();
        Callback::from(move |_| {
            let mut state = (*modal).clone();
            let mut list = (*events).clone();
            if !state.submit(&mut list) {
                gloo::console::warn!("Ignoring event with an empty title");
            }
            events.set(list);
            modal.set(state);
        })
    };

    let on_modal_close = {
        let modal = modal.clone();
        Callback::from(move |_| {
            let mut state = (*modal).clone();
            state.cancel();
            modal.set(state);
        })
    };

    html! {
        <section class="calendar-section">
            <div class="calendar-header">
                <button
                    class="calendar-nav-btn"
                    onclick={calendar.actions.prev_month.clone()}
                    title="Previous month"
                >
                    {"‹"}
                </button>
                <h2 class="calendar-title">
                    {format!("{} {}", date_utils::month_name(view.month), view.year)}
                </h2>
                <button
                    class="calendar-nav-btn"
                    onclick={calendar.actions.next_month.clone()}
                    title="Next month"
                >
                    {"›"}
                </button>
            </div>

            <Calendar
                calendar_data={calendar.state.grid.clone()}
                mode={props.mode}
                today={today}
                selected_dates={(*selected_dates).clone()}
                events={(*events).clone()}
                on_day_click={on_day_click}
            />

            {if props.mode == InteractionMode::Selection && !selected_dates.is_empty() {
                html! {
                    <div class="day-summary">
                        <h3>{"Selected days"}</h3>
                        <ul class="summary-list">
                            {for selected_dates.iter().map(|date| {
                                html! {
                                    <li>{date_utils::format_full_date(date)}</li>
                                }
                            })}
                        </ul>
                    </div>
                }
            } else {
                html! {}
            }}

            {if props.mode == InteractionMode::Events && !events.is_empty() {
                html! {
                    <div class="day-summary">
                        <h3>{"Events"}</h3>
                        <ul class="summary-list">
                            {for events.iter().map(|event| {
                                html! {
                                    <li>
                                        <span class="event-date">
                                            {date_utils::format_full_date(&event.date)}
                                        </span>
                                        <span class="event-title">{&event.title}</span>
                                    </li>
                                }
                            })}
                        </ul>
                    </div>
                }
            } else {
                html! {}
            }}

            {if props.mode == InteractionMode::Events {
                html! {
                    <EventModal
                        is_open={modal.is_open()}
                        target={modal.target()}
                        title={modal.title().to_string()}
                        on_title_change={on_title_change}
                        on_submit={on_modal_submit}
                        on_close={on_modal_close}
                    />
                }
            } else {
                html! {}
            }}
        </section>
    }
}
