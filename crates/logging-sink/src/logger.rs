//! crates/logging-sink/src/logger.rs
//! Timestamped, prefixed line logger bound to a [`Sink`].

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::io;

use time::OffsetDateTime;

use crate::sink::Sink;
use crate::timestamp::{format_timestamp, now};

/// A channel handle: one destination plus one fixed line prefix.
///
/// Each call to [`log`](Self::log) renders
/// `<timestamp> <prefix><message>` followed by a newline and hands the whole
/// line to the sink in one write. The prefix sits directly in front of the
/// message, so a debug write of `x=1` ends with `DEBUG: x=1`.
///
/// Loggers are immutable. Redirecting a channel builds a fresh logger and
/// swaps it in; writers still holding the previous handle finish against the
/// old destination.
///
/// # Examples
///
/// ```
/// use logging_sink::{CaptureBuffer, Logger, Sink};
///
/// let buffer = CaptureBuffer::new();
/// let logger = Logger::new(Sink::from(buffer.clone()), "WARNING: ");
/// logger.log(format_args!("disk {}% full", 91));
///
/// let line = buffer.contents();
/// assert!(line.ends_with("WARNING: disk 91% full\n"));
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    sink: Sink,
    prefix: Cow<'static, str>,
}

impl Logger {
    /// Creates a logger writing prefixed lines to `sink`.
    #[must_use]
    pub fn new(sink: Sink, prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            sink,
            prefix: prefix.into(),
        }
    }

    /// Returns the destination this logger writes to.
    #[must_use]
    pub const fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Returns the prefix placed in front of every message.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `false` when the logger is bound to a discard sink.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.sink.is_discard()
    }

    /// Writes one line, ignoring sink failures.
    pub fn log(&self, args: fmt::Arguments<'_>) {
        let _ = self.try_log(args);
    }

    /// Writes one line and reports sink failures.
    ///
    /// Nothing is formatted when the logger is bound to a discard sink.
    pub fn try_log(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        let line = self.render_line(now(), args);
        self.sink.write_line(line.as_bytes())
    }

    /// Renders the line [`log`](Self::log) would write at time `at`.
    ///
    /// A message that already ends in a newline does not receive a second one.
    #[must_use]
    pub fn render_line(&self, at: OffsetDateTime, args: fmt::Arguments<'_>) -> String {
        let timestamp = format_timestamp(at);
        let mut line = String::with_capacity(timestamp.len() + self.prefix.len() + 64);
        line.push_str(&timestamp);
        line.push(' ');
        line.push_str(&self.prefix);
        let _ = line.write_fmt(args);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

/// Creates a logger writing timestamped lines with `prefix` to `sink`.
///
/// `sink` is not validated beyond being a [`Sink`]; binding a discard sink
/// yields a logger whose writes succeed and produce no output.
#[must_use]
pub fn new_logger(sink: Sink, prefix: impl Into<Cow<'static, str>>) -> Logger {
    Logger::new(sink, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaptureBuffer;
    use time::macros::datetime;

    #[test]
    fn render_places_prefix_before_message() {
        let logger = Logger::new(Sink::discard(), "DEBUG: ");
        let at = datetime!(2020-05-06 07:08:09.010203 UTC);
        let line = logger.render_line(at, format_args!("x={}", 1));
        assert_eq!(line, "2020/05/06 07:08:09.010203 DEBUG: x=1\n");
    }

    #[test]
    fn render_keeps_single_trailing_newline() {
        let logger = Logger::new(Sink::discard(), "INFO: ");
        let at = datetime!(2020-05-06 07:08:09 UTC);
        let line = logger.render_line(at, format_args!("done\n"));
        assert!(line.ends_with("INFO: done\n"));
        assert!(!line.ends_with("\n\n"));
    }

    #[test]
    fn log_writes_one_line_per_call() {
        let buffer = CaptureBuffer::new();
        let logger = new_logger(Sink::from(buffer.clone()), "ERROR: ");
        logger.log(format_args!("first"));
        logger.log(format_args!("second"));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("ERROR: first"));
        assert!(lines[1].ends_with("ERROR: second"));
    }

    #[test]
    fn discard_logger_is_disabled() {
        let logger = new_logger(Sink::discard(), "DEBUG: ");
        assert!(!logger.is_enabled());
        logger
            .try_log(format_args!("ignored"))
            .expect("discard never fails");
    }

    #[test]
    fn accessors_report_binding() {
        let logger = Logger::new(Sink::stderr(), String::from("CUSTOM: "));
        assert_eq!(logger.prefix(), "CUSTOM: ");
        assert!(logger.sink().is_stderr());
        assert!(logger.is_enabled());
    }
}
