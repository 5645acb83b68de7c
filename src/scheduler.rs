//! Periodic callbacks for the countdown.
//!
//! The timer never talks to a clock directly. It reports a [`ScheduleChange`]
//! and a [`Ticker`] turns that into calls on a [`Scheduler`]: browser intervals
//! in the app, a hand-cranked scheduler in tests.

use gloo_timers::callback::Interval;
use log::debug;

/// What has to happen to the repeating callback after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleChange {
    Keep,
    Start,
    Cancel,
}

/// A facility that invokes a callback once per period until cancelled.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&mut self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Holds the only schedule handle of a timer.
///
/// Starting always cancels first, so two callbacks can never be outstanding.
/// Dropping the ticker cancels whatever is still scheduled.
pub struct Ticker<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    active: Option<S::Handle>,
}

impl<S: Scheduler> Ticker<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn apply<F>(&mut self, change: ScheduleChange, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        match change {
            ScheduleChange::Keep => {}
            ScheduleChange::Cancel => self.cancel(),
            ScheduleChange::Start => {
                self.cancel();
                let handle = self.scheduler.schedule(self.period_ms, Box::new(on_tick));
                self.active = Some(handle);
                debug!("Scheduled tick every {} ms", self.period_ms);
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.active.take() {
            self.scheduler.cancel(handle);
            debug!("Cancelled tick schedule");
        }
    }
}

impl<S: Scheduler> Drop for Ticker<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Browser scheduler backed by `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn schedule(&mut self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, on_tick)
    }

    fn cancel(&mut self, handle: Interval) {
        // The interval is cleared right away. Its closure may be the one
        // currently executing (completion happens inside a tick), so it is
        // released on the next microtask instead of here.
        let closure = handle.cancel();
        wasm_bindgen_futures::spawn_local(async move {
            drop(closure);
        });
    }
}
