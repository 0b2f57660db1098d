//! crates/logging/src/registry.rs
//! The four live channel handles.

use std::sync::{Arc, PoisonError, RwLock};

use logging_sink::{Logger, Sink};

use super::channel::Channel;
use super::level::Level;

/// Holds exactly one live [`Logger`] per [`Channel`].
///
/// Rebinding a channel builds a new logger and swaps the `Arc` in the slot;
/// the previous handle is never mutated. Callers that fetched a handle before
/// the swap keep writing to the old destination until they fetch again.
///
/// The registry is read-only from outside the crate: redirects go through
/// [`Tracelog`](crate::Tracelog), which also rebinds the debug channel when
/// the level changes.
#[derive(Debug)]
pub struct ChannelRegistry {
    debug: RwLock<Arc<Logger>>,
    info: RwLock<Arc<Logger>>,
    warning: RwLock<Arc<Logger>>,
    error: RwLock<Arc<Logger>>,
}

fn default_handle(channel: Channel) -> RwLock<Arc<Logger>> {
    RwLock::new(Arc::new(Logger::new(
        channel.default_sink(),
        channel.prefix(),
    )))
}

impl ChannelRegistry {
    /// Creates a registry with the process-start bindings: info, warning and
    /// error on standard error, debug discarded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            debug: default_handle(Channel::Debug),
            info: default_handle(Channel::Info),
            warning: default_handle(Channel::Warning),
            error: default_handle(Channel::Error),
        }
    }

    const fn slot(&self, channel: Channel) -> &RwLock<Arc<Logger>> {
        match channel {
            Channel::Debug => &self.debug,
            Channel::Info => &self.info,
            Channel::Warning => &self.warning,
            Channel::Error => &self.error,
        }
    }

    /// Returns a snapshot of the channel's current handle.
    #[must_use]
    pub fn logger(&self, channel: Channel) -> Arc<Logger> {
        let slot = self
            .slot(channel)
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&slot)
    }

    /// Replaces the channel's handle with a fresh one bound to `sink`.
    pub(crate) fn bind(&self, channel: Channel, sink: Sink) {
        let replacement = Arc::new(Logger::new(sink, channel.prefix()));
        let previous = {
            let mut slot = self
                .slot(channel)
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *slot, replacement)
        };
        drop(previous);
    }

    /// Re-derives the level-controlled bindings for `level`.
    ///
    /// | level  | debug   | info      | warning   |
    /// |--------|---------|-----------|-----------|
    /// | NORMAL | discard | unchanged | unchanged |
    /// | ERROR  | discard | discard   | discard   |
    /// | DEVEL  | stderr  | unchanged | unchanged |
    ///
    /// The error channel is never touched. Leaving `ERROR` does not restore
    /// info or warning; they stay discarded until redirected explicitly.
    pub(crate) fn apply_level(&self, level: Level) {
        match level {
            Level::Normal => self.bind(Channel::Debug, Sink::discard()),
            Level::Error => {
                self.bind(Channel::Debug, Sink::discard());
                self.bind(Channel::Info, Sink::discard());
                self.bind(Channel::Warning, Sink::discard());
            }
            Level::Devel => self.bind(Channel::Debug, Sink::stderr()),
        }
    }

    /// Restores every channel to its process-start binding.
    pub(crate) fn reset(&self) {
        for channel in Channel::ALL {
            self.bind(channel, channel.default_sink());
        }
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging_sink::{CaptureBuffer, SinkKind};

    fn kinds(registry: &ChannelRegistry) -> [SinkKind; 4] {
        Channel::ALL.map(|channel| registry.logger(channel).sink().kind())
    }

    #[test]
    fn defaults_match_process_start() {
        let registry = ChannelRegistry::new();
        assert_eq!(
            kinds(&registry),
            [
                SinkKind::Discard,
                SinkKind::Stderr,
                SinkKind::Stderr,
                SinkKind::Stderr
            ]
        );
        for channel in Channel::ALL {
            assert_eq!(registry.logger(channel).prefix(), channel.prefix());
        }
    }

    #[test]
    fn set_output_touches_one_channel() {
        let registry = ChannelRegistry::new();
        let before: Vec<_> = Channel::ALL.map(|c| registry.logger(c)).into();

        let buffer = CaptureBuffer::new();
        registry.bind(Channel::Warning, Sink::from(buffer.clone()));

        for (channel, old) in Channel::ALL.into_iter().zip(before) {
            let current = registry.logger(channel);
            if channel == Channel::Warning {
                assert!(!Arc::ptr_eq(&old, &current));
                assert_eq!(current.prefix(), "WARNING: ");
            } else {
                assert!(Arc::ptr_eq(&old, &current), "{channel} was rebound");
            }
        }

        registry.logger(Channel::Warning).log(format_args!("low disk"));
        assert!(buffer.contents().ends_with("WARNING: low disk\n"));
    }

    #[test]
    fn replaced_handle_keeps_old_destination() {
        let registry = ChannelRegistry::new();
        let first = CaptureBuffer::new();
        let second = CaptureBuffer::new();

        registry.bind(Channel::Info, Sink::from(first.clone()));
        let stale = registry.logger(Channel::Info);
        registry.bind(Channel::Info, Sink::from(second.clone()));

        stale.log(format_args!("old"));
        registry.logger(Channel::Info).log(format_args!("new"));

        assert!(first.contents().ends_with("INFO: old\n"));
        assert!(second.contents().ends_with("INFO: new\n"));
    }

    #[test]
    fn error_level_silences_all_but_error() {
        let registry = ChannelRegistry::new();
        let errors = CaptureBuffer::new();
        registry.bind(Channel::Error, Sink::from(errors.clone()));
        let error_handle = registry.logger(Channel::Error);

        registry.apply_level(Level::Error);

        assert_eq!(
            kinds(&registry),
            [
                SinkKind::Discard,
                SinkKind::Discard,
                SinkKind::Discard,
                SinkKind::Writer
            ]
        );
        assert!(Arc::ptr_eq(&error_handle, &registry.logger(Channel::Error)));
    }

    #[test]
    fn devel_enables_debug_on_stderr() {
        let registry = ChannelRegistry::new();
        registry.apply_level(Level::Devel);
        assert!(registry.logger(Channel::Debug).sink().is_stderr());

        registry.apply_level(Level::Normal);
        assert!(registry.logger(Channel::Debug).sink().is_discard());
    }

    #[test]
    fn leaving_error_does_not_restore_info() {
        let registry = ChannelRegistry::new();
        registry.apply_level(Level::Error);
        registry.apply_level(Level::Normal);
        assert!(registry.logger(Channel::Info).sink().is_discard());
        assert!(registry.logger(Channel::Warning).sink().is_discard());
    }

    #[test]
    fn reset_restores_defaults() {
        let registry = ChannelRegistry::new();
        registry.apply_level(Level::Error);
        registry.bind(Channel::Error, Sink::discard());

        registry.reset();

        assert_eq!(kinds(&registry), kinds(&ChannelRegistry::new()));
    }
}
