//! Application-level configuration constants.

use log::LevelFilter;

// Page text
pub const APP_TITLE: &str = "Count Down Timer";
pub const DURATION_PLACEHOLDER: &str = "Set duration (seconds)";

// Logging. Debug traces every tick; switch to it while developing.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
