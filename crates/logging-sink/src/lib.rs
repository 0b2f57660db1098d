#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output half of the tracelog facility: the
//! destinations a channel can be bound to and the timestamped, prefixed line
//! logger that writes into them.
//!
//! # Design
//!
//! [`Sink`] is a cheaply clonable handle to a destination: standard error,
//! standard output, a discard target, or any [`std::io::Write`] implementor
//! shared behind a mutex. [`Logger`] pairs a sink with a fixed line prefix and
//! renders every write as a single line of the form
//! `YYYY/MM/DD HH:MM:SS.ffffff PREFIX message`.
//!
//! # Invariants
//!
//! - A rendered line reaches its sink through exactly one `write_all` call, so
//!   concurrent writers sharing a sink never interleave mid-line.
//! - Writes to a discard sink succeed without formatting the message.
//! - A [`Logger`] never changes its sink or prefix; rebinding a channel means
//!   building a new logger.
//!
//! # Errors
//!
//! [`Logger::log`] swallows sink failures. [`Logger::try_log`] and
//! [`Sink::write_line`] surface the [`std::io::Error`] from the underlying
//! writer unchanged.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{new_logger, CaptureBuffer, Sink};
//!
//! let buffer = CaptureBuffer::new();
//! let logger = new_logger(Sink::from(buffer.clone()), "INFO: ");
//! logger.log(format_args!("listening on port {}", 8080));
//!
//! assert!(buffer.contents().ends_with("INFO: listening on port 8080\n"));
//! ```
//!
//! # See also
//!
//! - `logging` crate for the channel registry and the verbosity level that
//!   rebinds these loggers.

mod capture;
mod logger;
mod sink;
mod timestamp;

pub use capture::CaptureBuffer;
pub use logger::{Logger, new_logger};
pub use sink::{Sink, SinkKind};
pub use timestamp::{LOG_TIMESTAMP_FORMAT, format_timestamp, now};
