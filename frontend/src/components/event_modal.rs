use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use daymark_core::CalendarDate;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct EventModalProps {
    pub is_open: bool,
    /// The day being annotated, while the dialog is open
    pub target: Option<CalendarDate>,
    /// Current title text, owned by the parent
    pub title: String,
    pub on_title_change: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(EventModal)]
pub fn event_modal(props: &EventModalProps) -> Html {
    let on_title_input = {
        let on_title_change = props.on_title_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_title_change.emit(input.value());
        })
    };

    let on_form_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let heading = match props.target.as_ref() {
        Some(date) => format!("Add event on {}", date_utils::format_full_date(date)),
        None => "Add event".to_string(),
    };

    html! {
        <div class="event-modal-backdrop" onclick={on_backdrop_click}>
            <div class="event-modal" onclick={on_modal_click}>
                <h3 class="event-modal-title">{heading}</h3>

                <form class="event-form" onsubmit={on_form_submit}>
                    <div class="form-group">
                        <label for="event-title">{"What's happening?"}</label>
                        <input
                            id="event-title"
                            type="text"
                            class="event-title-input"
                            placeholder="Dentist, birthday, deadline..."
                            value={props.title.clone()}
                            oninput={on_title_input}
                            autofocus=true
                        />
                    </div>

                    <div class="event-modal-buttons">
                        <button type="submit" class="btn btn-primary">
                            {"Add Event"}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
