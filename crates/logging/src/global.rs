//! crates/logging/src/global.rs
//! Process-wide context and the free-function facade over it.
//!
//! The first call to any function here lazily creates one [`Tracelog`] at
//! `NORMAL` with the process-start bindings. Configuration is expected to
//! happen once near startup; [`reset`] tears it back down, mainly for tests.

use std::sync::{Arc, OnceLock};

use logging_sink::{Logger, Sink};

use super::context::Tracelog;
use super::error::LevelError;
use super::format::ErrorFormat;
use super::level::Level;

static GLOBAL: OnceLock<Tracelog> = OnceLock::new();

/// Returns the process-wide context.
pub fn global() -> &'static Tracelog {
    GLOBAL.get_or_init(Tracelog::new)
}

/// Validates and applies a new process-wide level.
pub fn update_level(new_level: &str) -> Result<(), LevelError> {
    global().update_level(new_level)
}

/// Returns the process-wide level.
pub fn level() -> Level {
    global().level()
}

/// Returns the error format mapped to the process-wide level.
pub fn error_formatter() -> ErrorFormat {
    global().error_formatter()
}

/// Redirects the process-wide info channel.
pub fn set_info_output(sink: Sink) {
    global().set_info_output(sink);
}

/// Redirects the process-wide warning channel.
pub fn set_warning_output(sink: Sink) {
    global().set_warning_output(sink);
}

/// Redirects the process-wide error channel.
pub fn set_error_output(sink: Sink) {
    global().set_error_output(sink);
}

/// Returns the process-wide debug handle.
pub fn debug_logger() -> Arc<Logger> {
    global().debug()
}

/// Returns the process-wide info handle.
pub fn info_logger() -> Arc<Logger> {
    global().info()
}

/// Returns the process-wide warning handle.
pub fn warning_logger() -> Arc<Logger> {
    global().warning()
}

/// Returns the process-wide error handle.
pub fn error_logger() -> Arc<Logger> {
    global().error()
}

/// Restores the process-wide context to its start state.
pub fn reset() {
    global().reset();
}
