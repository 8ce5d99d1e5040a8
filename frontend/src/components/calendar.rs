use yew::prelude::*;

use daymark_core::{
    day_highlight, CalendarDate, CalendarDayType, CalendarMonth, DayHighlight, Event,
    InteractionMode,
};

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub calendar_data: CalendarMonth,
    pub mode: InteractionMode,
    pub today: CalendarDate,
    pub selected_dates: Vec<CalendarDate>,
    pub events: Vec<Event>,
    /// Emits the clicked day number within the displayed month
    pub on_day_click: Callback<u32>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_data = &props.calendar_data;

    let mut calendar_days = Vec::new();

    for day_data in &calendar_data.days {
        // Padding cells render empty and take no clicks
        if day_data.day_type != CalendarDayType::MonthDay {
            calendar_days.push(html! {
                <div class="calendar-day empty"></div>
            });
            continue;
        }

        let date = CalendarDate::new(calendar_data.year, calendar_data.month, day_data.day);
        let highlight = day_highlight(
            date,
            props.today,
            props.mode,
            &props.selected_dates,
            &props.events,
        );
        let day_class = match highlight {
            DayHighlight::Today => "calendar-day today",
            DayHighlight::Selected => "calendar-day selected",
            DayHighlight::HasEvent => "calendar-day has-event",
            DayHighlight::Plain => "calendar-day",
        };

        let onclick = {
            let on_day_click = props.on_day_click.clone();
            let day = day_data.day;
            Callback::from(move |_: MouseEvent| {
                on_day_click.emit(day);
            })
        };

        calendar_days.push(html! {
            <div class={day_class} onclick={onclick}>
                <div class="day-number">{day_data.day}</div>
            </div>
        });
    }

    html! {
        <div class="calendar">
            <div class="calendar-weekdays">
                <div class="weekday">{"Sun"}</div>
                <div class="weekday">{"Mon"}</div>
                <div class="weekday">{"Tue"}</div>
                <div class="weekday">{"Wed"}</div>
                <div class="weekday">{"Thu"}</div>
                <div class="weekday">{"Fri"}</div>
                <div class="weekday">{"Sat"}</div>
            </div>
            <div class="calendar-grid">
                {for calendar_days}
            </div>
        </div>
    }
}
