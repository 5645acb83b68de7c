//! Pure Yew view components for the countdown UI.
//!
//! This module contains stateless components that render based on props,
//! so every piece of output is a projection of the current timer state.

use countdown_timer::{format_remaining, Theme};
use yew::prelude::*;

use crate::config::DURATION_PLACEHOLDER;

/// Remaining time in `MM:SS`.
#[derive(Properties, PartialEq)]
pub struct TimeDisplayProps {
    pub remaining_seconds: u32,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    html! {
        <div class="time-display">
            <h1 class="time-value">{ format_remaining(props.remaining_seconds) }</h1>
        </div>
    }
}

/// Number field plus the button that commits it as the new duration.
#[derive(Properties, PartialEq)]
pub struct DurationInputProps {
    pub text: AttrValue,
    pub oninput: Callback<InputEvent>,
    pub onset: Callback<MouseEvent>,
}

#[function_component(DurationInput)]
pub fn duration_input(props: &DurationInputProps) -> Html {
    html! {
        <div class="duration-input">
            <input type="number"
                value={props.text.clone()}
                placeholder={DURATION_PLACEHOLDER}
                oninput={props.oninput.clone()}
            />
            <button class="set-duration" onclick={props.onset.clone()}>
                { "Set Duration" }
            </button>
        </div>
    }
}

/// Start, Pause and Reset. Start is disabled while running, Pause otherwise.
#[derive(Properties, PartialEq)]
pub struct ControlButtonsProps {
    pub can_start: bool,
    pub can_pause: bool,
    pub onstart: Callback<MouseEvent>,
    pub onpause: Callback<MouseEvent>,
    pub onreset: Callback<MouseEvent>,
}

#[function_component(ControlButtons)]
pub fn control_buttons(props: &ControlButtonsProps) -> Html {
    html! {
        <div class="controls">
            <button class="start" disabled={!props.can_start} onclick={props.onstart.clone()}>
                { "Start" }
            </button>
            <button class="pause" disabled={!props.can_pause} onclick={props.onpause.clone()}>
                { "Pause" }
            </button>
            <button class="reset" onclick={props.onreset.clone()}>
                { "Reset" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemePickerProps {
    pub onselect: Callback<Theme>,
}

#[function_component(ThemePicker)]
pub fn theme_picker(props: &ThemePickerProps) -> Html {
    html! {
        <div class="theme-picker">
            { Theme::SELECTABLE.iter().map(|&theme| {
                let onselect = props.onselect.clone();
                html! {
                    <button class={classes!("theme-button", theme.css_class())}
                        onclick={Callback::from(move |_: MouseEvent| onselect.emit(theme))}
                    >
                        { theme.label() }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}
