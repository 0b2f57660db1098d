//! crates/logging/src/context.rs
//! The level controller: one verbosity level driving one channel registry.

use std::sync::{Arc, Mutex, PoisonError};

use logging_sink::{Logger, Sink};

use super::channel::Channel;
use super::error::LevelError;
use super::format::ErrorFormat;
use super::level::{Level, SharedLevel};
use super::registry::ChannelRegistry;

/// A self-contained logging context: the active [`Level`] plus the four
/// channel handles it governs.
///
/// The process-wide facade ([`global`](crate::global)) is one `Tracelog`;
/// tests and embedders can build isolated instances with [`Tracelog::new`].
///
/// # Examples
///
/// ```
/// use logging::{Level, Tracelog};
///
/// let log = Tracelog::new();
/// assert!(log.update_level("BOGUS").is_err());
/// assert_eq!(log.level(), Level::Normal);
///
/// log.update_level("DEVEL")?;
/// assert!(log.debug().sink().is_stderr());
/// # Ok::<(), logging::LevelError>(())
/// ```
#[derive(Debug)]
pub struct Tracelog {
    level: Arc<SharedLevel>,
    channels: ChannelRegistry,
    reconfigure: Mutex<()>,
}

impl Tracelog {
    /// Creates a context at [`Level::Normal`] with the process-start bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Arc::new(SharedLevel::new(Level::Normal)),
            channels: ChannelRegistry::new(),
            reconfigure: Mutex::new(()),
        }
    }

    /// Returns the active level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level.get()
    }

    /// Returns the error format mapped to the active level.
    #[must_use]
    pub fn error_formatter(&self) -> ErrorFormat {
        ErrorFormat::for_level(self.level())
    }

    /// Validates `new_level` against the exact level names and applies it.
    ///
    /// On success the level is stored and the debug, info and warning
    /// channels are re-derived from it. On failure neither the level nor any
    /// channel binding changes.
    pub fn update_level(&self, new_level: &str) -> Result<(), LevelError> {
        match Level::from_name(new_level) {
            Some(level) => {
                self.set_level(level);
                Ok(())
            }
            None => {
                tracing::warn!(
                    target: "tracelog",
                    rejected = new_level,
                    active = %self.level(),
                    "rejected log level change"
                );
                Err(LevelError::new(new_level, Arc::clone(&self.level)))
            }
        }
    }

    /// Applies an already validated level.
    ///
    /// Reconfigurations on one context are serialized, so the stored level
    /// and the channel bindings always come from the same call.
    pub fn set_level(&self, level: Level) {
        let previous = {
            let _guard = self
                .reconfigure
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let previous = self.level.get();
            self.level.set(level);
            self.channels.apply_level(level);
            previous
        };
        tracing::debug!(target: "tracelog", %previous, %level, "log level updated");
    }

    /// Redirects the info channel. Survives later `NORMAL`/`DEVEL` changes.
    pub fn set_info_output(&self, sink: Sink) {
        self.redirect(Channel::Info, sink);
    }

    /// Redirects the warning channel. Survives later `NORMAL`/`DEVEL` changes.
    pub fn set_warning_output(&self, sink: Sink) {
        self.redirect(Channel::Warning, sink);
    }

    /// Redirects the error channel. No level change ever alters it.
    pub fn set_error_output(&self, sink: Sink) {
        self.redirect(Channel::Error, sink);
    }

    fn redirect(&self, channel: Channel, sink: Sink) {
        tracing::trace!(target: "tracelog", %channel, sink = %sink.kind(), "channel redirected");
        self.channels.bind(channel, sink);
    }

    /// Returns the current handle of `channel`.
    #[must_use]
    pub fn logger(&self, channel: Channel) -> Arc<Logger> {
        self.channels.logger(channel)
    }

    /// Returns the current debug handle.
    #[must_use]
    pub fn debug(&self) -> Arc<Logger> {
        self.logger(Channel::Debug)
    }

    /// Returns the current info handle.
    #[must_use]
    pub fn info(&self) -> Arc<Logger> {
        self.logger(Channel::Info)
    }

    /// Returns the current warning handle.
    #[must_use]
    pub fn warning(&self) -> Arc<Logger> {
        self.logger(Channel::Warning)
    }

    /// Returns the current error handle.
    #[must_use]
    pub fn error(&self) -> Arc<Logger> {
        self.logger(Channel::Error)
    }

    /// Returns the underlying registry.
    #[must_use]
    pub const fn channels(&self) -> &ChannelRegistry {
        &self.channels
    }

    /// Returns the context to [`Level::Normal`] and the process-start
    /// bindings, including info and warning silenced by an earlier `ERROR`.
    pub fn reset(&self) {
        let _guard = self
            .reconfigure
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.level.set(Level::Normal);
        self.channels.reset();
    }
}

impl Default for Tracelog {
    fn default() -> Self {
        Self::new()
    }
}
