//! Main module for the Count Down Timer application using Yew.
//! Wires the countdown hook, UI components and side effects.

use countdown_timer::{Theme, TimerAction};
use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod logging;
mod utils;

use components::{ControlButtons, DurationInput, ThemePicker, TimeDisplay};
use config::*;
use hooks::use_countdown;
use utils::{document_title, normalize_duration_text, parse_duration_input};

/// Primary application component wiring state, effects, and UI elements.
#[function_component(App)]
fn app() -> Html {
    let countdown = use_countdown();
    let duration_text = use_state(String::new);
    let state = countdown.state.clone();

    let duration_oninput = {
        let duration_text = duration_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            duration_text.set(normalize_duration_text(&input.value()));
        })
    };

    let on_set_duration = {
        let duration_text = duration_text.clone();
        let dispatch = countdown.dispatch.clone();
        Callback::from(move |_: MouseEvent| match parse_duration_input(&duration_text) {
            Ok(seconds) => dispatch.emit(TimerAction::SetDuration(seconds)),
            Err(e) => debug!("Duration not set: {}", e),
        })
    };

    let on_start = countdown.dispatch.reform(|_: MouseEvent| TimerAction::Start);
    let on_pause = countdown.dispatch.reform(|_: MouseEvent| TimerAction::Pause);
    let on_reset = countdown.dispatch.reform(|_: MouseEvent| TimerAction::Reset);
    let on_theme = countdown.dispatch.reform(TimerAction::SetTheme);

    // Mirror the remaining time in the tab title
    {
        let formatted = state.formatted_remaining();
        use_effect_with(formatted, move |formatted| {
            gloo_utils::document().set_title(&document_title(formatted, APP_TITLE));
            || ()
        });
    }

    html! {
        <div class={classes!("countdown", state.theme.css_class())}>
            <h1 class="title">{ APP_TITLE }</h1>

            <DurationInput
                text={AttrValue::from((*duration_text).clone())}
                oninput={duration_oninput}
                onset={on_set_duration}
            />

            <TimeDisplay remaining_seconds={state.remaining_seconds} />

            <ControlButtons
                can_start={state.can_start()}
                can_pause={state.can_pause()}
                onstart={on_start}
                onpause={on_pause}
                onreset={on_reset}
            />

            <ThemePicker onselect={on_theme} />
        </div>
    }
}

/// Entry point: installs logging and renders the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init(LOG_LEVEL) {
        web_sys::console::error_1(&format!("Logger already installed: {}", e).into());
    }
    info!("Starting {} with default theme {:?}", APP_TITLE, Theme::default());
    yew::Renderer::<App>::new().render();
}
