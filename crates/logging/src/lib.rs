#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the control half of the tracelog facility: four severity
//! channels (debug, info, warning, error) and one verbosity [`Level`] that
//! decides which of them are live and how errors are rendered.
//!
//! # Design
//!
//! - [`ChannelRegistry`] holds one [`Logger`](logging_sink::Logger) handle per
//!   [`Channel`]. Redirecting a channel swaps in a new handle.
//! - [`Tracelog`] owns a registry and the active level. Its
//!   [`update_level`](Tracelog::update_level) validates a level name and then
//!   re-derives the debug, info and warning bindings from it.
//! - [`ErrorFormat`] maps the level to a concise or verbose error rendering;
//!   [`LevelError`] picks its format when displayed, from the level active at
//!   that moment.
//! - A lazily created process-wide [`Tracelog`] backs the free functions
//!   ([`update_level`], [`set_info_output`], ...) and the
//!   [`debug_log!`]/[`info_log!`]/[`warning_log!`]/[`error_log!`] macros.
//!
//! # Levels
//!
//! | level  | debug   | info      | warning   | error     | errors render |
//! |--------|---------|-----------|-----------|-----------|---------------|
//! | NORMAL | discard | unchanged | unchanged | unchanged | concise       |
//! | DEVEL  | stderr  | unchanged | unchanged | unchanged | verbose       |
//! | ERROR  | discard | discard   | discard   | unchanged | concise       |
//!
//! Leaving `ERROR` does not bring info and warning back; redirect them
//! explicitly with [`set_info_output`] / [`set_warning_output`].
//!
//! # Examples
//!
//! ```
//! use logging::{ErrorFormat, Tracelog};
//! use logging_sink::{CaptureBuffer, Sink};
//!
//! let log = Tracelog::new();
//! let warnings = CaptureBuffer::new();
//! log.set_warning_output(Sink::from(warnings.clone()));
//!
//! log.update_level("DEVEL")?;
//! assert_eq!(log.error_formatter(), ErrorFormat::Verbose);
//!
//! log.warning().log(format_args!("cache miss rate {}%", 40));
//! assert!(warnings.contents().ends_with("WARNING: cache miss rate 40%\n"));
//! # Ok::<(), logging::LevelError>(())
//! ```

mod channel;
mod config;
mod context;
mod error;
mod format;
mod global;
mod level;
mod macros;
mod registry;
#[cfg(feature = "tracing-bridge")]
mod tracing_bridge;

pub use channel::Channel;
pub use config::{
    ConfigError, ERROR_OUTPUT_ENV, INFO_OUTPUT_ENV, LEVEL_ENV, LoggingConfig, OutputTarget,
    WARNING_OUTPUT_ENV,
};
pub use context::Tracelog;
pub use error::LevelError;
pub use format::ErrorFormat;
pub use global::{
    debug_logger, error_formatter, error_logger, global, info_logger, level, reset,
    set_error_output, set_info_output, set_warning_output, update_level, warning_logger,
};
pub use level::{
    DEVEL_LOG_LEVEL, ERROR_LOG_LEVEL, LOG_LEVELS, Level, NORMAL_LOG_LEVEL, ParseLevelError,
};
pub use logging_sink::{Logger, Sink, SinkKind, new_logger};
pub use registry::ChannelRegistry;
#[cfg(feature = "tracing-bridge")]
pub use tracing_bridge::{TracelogLayer, init_tracing};
