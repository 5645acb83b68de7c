use log::{debug, info};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

pub mod scheduler;

use scheduler::{ScheduleChange, Scheduler, Ticker};

/// Default timing parameters
pub mod defaults {
    /// Scheduler period for one countdown step.
    pub const TICK_INTERVAL_MS: u32 = 1_000;
}

/// Lifecycle of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

/// Visual identifier for the widget background.
///
/// The first five variants are applied by the timer itself on transitions,
/// the last three can be picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Default,
    Running,
    Paused,
    Reset,
    Completed,
    DarkPink,
    DarkBlue,
    Black,
}

impl Theme {
    /// Themes offered as buttons, in display order.
    pub const SELECTABLE: [Theme; 3] = [Theme::DarkPink, Theme::DarkBlue, Theme::Black];

    /// CSS class carried by the outer container.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Default => "theme-default",
            Theme::Running => "theme-running",
            Theme::Paused => "theme-paused",
            Theme::Reset => "theme-reset",
            Theme::Completed => "theme-completed",
            Theme::DarkPink => "theme-dark-pink",
            Theme::DarkBlue => "theme-dark-blue",
            Theme::Black => "theme-black",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Default => "Default Theme",
            Theme::Running => "Running Theme",
            Theme::Paused => "Paused Theme",
            Theme::Reset => "Reset Theme",
            Theme::Completed => "Completed Theme",
            Theme::DarkPink => "Dark Pink Theme",
            Theme::DarkBlue => "Dark Blue Theme",
            Theme::Black => "Black Theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a user (or the scheduler) can ask the timer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerAction {
    SetDuration(i64),
    Start,
    Pause,
    Reset,
    Tick,
    SetTheme(Theme),
}

/// Full state of one countdown widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TimerState {
    pub duration_seconds: Option<u32>,
    pub remaining_seconds: u32,
    pub status: TimerStatus,
    pub theme: Theme,
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and report what the scheduler has to do about it.
    ///
    /// Invalid actions leave the state untouched and return
    /// [`ScheduleChange::Keep`].
    pub fn apply(&mut self, action: TimerAction) -> ScheduleChange {
        match action {
            TimerAction::SetDuration(value) => self.set_duration(value),
            TimerAction::Start => self.start(),
            TimerAction::Pause => self.pause(),
            TimerAction::Reset => self.reset(),
            TimerAction::Tick => self.tick(),
            TimerAction::SetTheme(theme) => self.set_theme(theme),
        }
    }

    pub fn set_duration(&mut self, value: i64) -> ScheduleChange {
        let seconds = match u32::try_from(value) {
            Ok(seconds) if seconds > 0 => seconds,
            _ => {
                debug!("Ignoring duration {}", value);
                return ScheduleChange::Keep;
            }
        };
        self.duration_seconds = Some(seconds);
        self.remaining_seconds = seconds;
        self.status = TimerStatus::Idle;
        ScheduleChange::Cancel
    }

    pub fn start(&mut self) -> ScheduleChange {
        if self.status == TimerStatus::Running || self.remaining_seconds == 0 {
            return ScheduleChange::Keep;
        }
        self.status = TimerStatus::Running;
        self.theme = Theme::Running;
        ScheduleChange::Start
    }

    pub fn pause(&mut self) -> ScheduleChange {
        if self.status != TimerStatus::Running {
            return ScheduleChange::Keep;
        }
        self.status = TimerStatus::Paused;
        self.theme = Theme::Paused;
        ScheduleChange::Cancel
    }

    pub fn reset(&mut self) -> ScheduleChange {
        self.remaining_seconds = self.duration_seconds.unwrap_or(0);
        self.status = TimerStatus::Idle;
        self.theme = Theme::Reset;
        ScheduleChange::Cancel
    }

    /// One elapsed second. Only meaningful while running.
    pub fn tick(&mut self) -> ScheduleChange {
        if self.status != TimerStatus::Running {
            return ScheduleChange::Keep;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.status = TimerStatus::Completed;
            self.theme = Theme::Completed;
            info!("Countdown completed");
            return ScheduleChange::Cancel;
        }
        ScheduleChange::Keep
    }

    pub fn set_theme(&mut self, theme: Theme) -> ScheduleChange {
        self.theme = theme;
        ScheduleChange::Keep
    }

    pub fn can_start(&self) -> bool {
        self.status != TimerStatus::Running
    }

    pub fn can_pause(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn formatted_remaining(&self) -> String {
        format_remaining(self.remaining_seconds)
    }
}

/// Render seconds as `MM:SS`. Minutes are not capped, so 3661 gives `61:01`.
pub fn format_remaining(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

type Observer = Rc<dyn Fn(&TimerState)>;

struct Shared<S: Scheduler> {
    state: TimerState,
    ticker: Ticker<S>,
    observer: Option<Observer>,
    torn_down: bool,
}

/// Owns a [`TimerState`] together with the one schedule handle that drives it.
///
/// Clones share the same timer. The scheduled callback only keeps a weak
/// reference, so dropping the last clone (or calling [`Countdown::teardown`])
/// guarantees no further ticks are delivered.
pub struct Countdown<S: Scheduler + 'static> {
    shared: Rc<RefCell<Shared<S>>>,
}

impl<S: Scheduler + 'static> Clone for Countdown<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S: Scheduler + 'static> Countdown<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_period(scheduler, defaults::TICK_INTERVAL_MS)
    }

    pub fn with_period(scheduler: S, period_ms: u32) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                state: TimerState::new(),
                ticker: Ticker::new(scheduler, period_ms),
                observer: None,
                torn_down: false,
            })),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> TimerState {
        self.shared.borrow().state.clone()
    }

    pub fn is_ticking(&self) -> bool {
        self.shared.borrow().ticker.is_active()
    }

    /// Register the single observer notified after every dispatched action.
    /// Replaces any previous observer.
    ///
    /// An observer that dispatches is notified again for its own action, so it
    /// must stop the loop itself (e.g. only react when the state still differs
    /// from what it wants).
    pub fn subscribe(&self, observer: impl Fn(&TimerState) + 'static) {
        self.shared.borrow_mut().observer = Some(Rc::new(observer));
    }

    pub fn dispatch(&self, action: TimerAction) {
        dispatch(&self.shared, action);
    }

    /// Cancel any outstanding schedule and detach the observer.
    /// Every later dispatch is ignored.
    pub fn teardown(&self) {
        let mut shared = self.shared.borrow_mut();
        shared.ticker.cancel();
        shared.observer = None;
        shared.torn_down = true;
        debug!("Countdown torn down");
    }
}

fn dispatch<S: Scheduler + 'static>(shared: &Rc<RefCell<Shared<S>>>, action: TimerAction) {
    let (snapshot, observer) = {
        let mut inner = shared.borrow_mut();
        if inner.torn_down {
            debug!("Dropping {:?} after teardown", action);
            return;
        }

        let change = inner.state.apply(action);
        let weak: Weak<RefCell<Shared<S>>> = Rc::downgrade(shared);
        inner.ticker.apply(change, move || {
            if let Some(shared) = weak.upgrade() {
                dispatch(&shared, TimerAction::Tick);
            }
        });

        debug!(
            "{:?} -> {:?}, {}s left, schedule {:?}",
            action, inner.state.status, inner.state.remaining_seconds, change
        );
        (inner.state.clone(), inner.observer.clone())
    };

    // Notify outside the borrow so the observer may read or dispatch freely.
    if let Some(observer) = observer {
        observer(&snapshot);
    }
}
