use countdown_timer::{scheduler::IntervalScheduler, Countdown, TimerAction, TimerState};
use yew::prelude::*;

use crate::logging::trace_state;

/// Holds the rendered timer state and the callback used to drive it.
#[derive(Clone)]
pub struct CountdownHandle {
    /// Latest state published by the countdown.
    pub state: TimerState,
    /// Send an action to the countdown. The component re-renders afterwards.
    pub dispatch: Callback<TimerAction>,
}

/// Custom hook owning one countdown per mounted component.
///
/// The countdown is created on first render, publishes every transition into
/// component state, and is torn down when the component unmounts so no
/// interval outlives it.
#[hook]
pub fn use_countdown() -> CountdownHandle {
    let countdown = use_state(|| Countdown::new(IntervalScheduler));
    let view = use_state(TimerState::new);

    {
        let countdown = (*countdown).clone();
        let view_setter = view.setter();
        use_effect_with((), move |_| {
            countdown.subscribe(move |state| {
                trace_state(state);
                view_setter.set(state.clone());
            });
            move || countdown.teardown()
        });
    }

    let dispatch = {
        let countdown = (*countdown).clone();
        Callback::from(move |action: TimerAction| countdown.dispatch(action))
    };

    CountdownHandle {
        state: (*view).clone(),
        dispatch,
    }
}
