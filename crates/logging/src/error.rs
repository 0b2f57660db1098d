//! crates/logging/src/error.rs
//! The rejected-level error and its render-time formatting.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use super::format::ErrorFormat;
use super::level::{LOG_LEVELS, Level, SharedLevel};

/// Returned by [`Tracelog::update_level`](crate::Tracelog::update_level) when
/// the requested level is not one of [`LOG_LEVELS`].
///
/// The error keeps a handle to the level of the context that produced it.
/// Its `Display` output is chosen when it is rendered, not when it is built:
/// under `DEVEL` it renders verbosely (including a backtrace when one was
/// captured), under `NORMAL` and `ERROR` it renders the message alone. The
/// alternate flag (`{:#}`) forces the verbose rendering.
pub struct LevelError {
    rejected: String,
    level: Arc<SharedLevel>,
    backtrace: Backtrace,
}

impl LevelError {
    pub(crate) fn new(rejected: &str, level: Arc<SharedLevel>) -> Self {
        Self {
            rejected: rejected.to_owned(),
            level,
            backtrace: Backtrace::capture(),
        }
    }

    /// Returns the input that was rejected.
    #[must_use]
    pub fn rejected(&self) -> &str {
        &self.rejected
    }

    /// Returns the names that would have been accepted.
    #[must_use]
    pub const fn valid_levels(&self) -> &'static [&'static str] {
        &LOG_LEVELS
    }

    /// Returns the format this error renders with right now.
    #[must_use]
    pub fn current_format(&self) -> ErrorFormat {
        ErrorFormat::for_level(self.level.get())
    }

    /// Returns the level currently active in the owning context.
    ///
    /// A rejected update never changes the level, so right after the failure
    /// this is the level that was active when the update was attempted.
    #[must_use]
    pub fn active_level(&self) -> Level {
        self.level.get()
    }

    /// Returns the backtrace captured at construction.
    ///
    /// Capture follows `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`; when disabled
    /// the backtrace is empty and verbose rendering omits it.
    #[must_use]
    pub const fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    fn write_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "got incorrect log level: '{}', expected one of: [{}]",
            self.rejected,
            LOG_LEVELS.join(" ")
        )
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if f.alternate() {
            ErrorFormat::Verbose
        } else {
            self.current_format()
        };
        self.write_message(f)?;
        if format.is_verbose() && self.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nstack backtrace:\n{}", self.backtrace)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelError")
            .field("rejected", &self.rejected)
            .field("valid_levels", &LOG_LEVELS)
            .finish_non_exhaustive()
    }
}

impl Error for LevelError {}
