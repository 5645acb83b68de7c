//! Browser console backend for the `log` facade.

use countdown_timer::TimerState;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp: String = js_sys::Date::new_0().to_iso_string().into();
        let line = JsValue::from_str(&format!(
            "[{} {} {}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger with the given maximum level.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Dump the timer state to the console as an inspectable object.
pub fn trace_state(state: &TimerState) {
    if !log::log_enabled!(Level::Debug) {
        return;
    }
    match serde_wasm_bindgen::to_value(state) {
        Ok(value) => console::debug_2(&JsValue::from_str("timer state"), &value),
        Err(e) => log::warn!("Failed to convert timer state: {}", e),
    }
}
