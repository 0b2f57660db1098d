#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `tracelog` is a process-wide logging facility with four channels
//! (debug, info, warning, error) and a single verbosity level that can be
//! changed at runtime from a validated name (`NORMAL`, `DEVEL`, `ERROR`).
//!
//! The work is split across two workspace crates, re-exported here:
//!
//! - [`logging_sink`] provides [`Sink`] destinations and the timestamped,
//!   prefixed [`Logger`] handle.
//! - [`logging`] provides the [`Tracelog`] context, the level controller,
//!   the error-format selector and the process-wide facade.
//!
//! # Examples
//!
//! ```
//! use tracelog::{CaptureBuffer, Level, Sink, info_log};
//!
//! let info = CaptureBuffer::new();
//! tracelog::set_info_output(Sink::from(info.clone()));
//!
//! assert!(tracelog::update_level("LOUD").is_err());
//! assert_eq!(tracelog::level(), Level::Normal);
//!
//! info_log!("listening on port {}", 8080);
//! assert!(info.contents().ends_with("INFO: listening on port 8080\n"));
//! # tracelog::reset();
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`Level`], [`OutputTarget`] and [`LoggingConfig`].
//! - `tracing`: forward `tracing` events into the channels via
//!   `TracelogLayer` / `init_tracing`.

pub use logging::*;
pub use logging_sink::{CaptureBuffer, LOG_TIMESTAMP_FORMAT, format_timestamp};

pub use logging;
pub use logging_sink;
