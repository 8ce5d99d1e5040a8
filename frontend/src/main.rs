use yew::prelude::*;

mod components;
mod hooks;
mod services;

use daymark_core::InteractionMode;

use components::month_calendar::MonthCalendar;

#[function_component(App)]
fn app() -> Html {
    let mode = use_state(|| InteractionMode::Selection);

    let pick_days = {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| {
            gloo::console::log!("Switching to selection mode");
            mode.set(InteractionMode::Selection);
        })
    };

    let plan_events = {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| {
            gloo::console::log!("Switching to events mode");
            mode.set(InteractionMode::Events);
        })
    };

    let mode_class = |active: bool| {
        if active {
            "mode-btn active"
        } else {
            "mode-btn"
        }
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Daymark"}</h1>
                    <div class="mode-switch">
                        <button
                            class={mode_class(*mode == InteractionMode::Selection)}
                            onclick={pick_days}
                        >
                            {"Pick days"}
                        </button>
                        <button
                            class={mode_class(*mode == InteractionMode::Events)}
                            onclick={plan_events}
                        >
                            {"Plan events"}
                        </button>
                    </div>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <MonthCalendar mode={*mode} />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
