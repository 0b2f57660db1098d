//! crates/logging/src/channel.rs
//! The four severity channels and their fixed prefixes.

use std::fmt;

use logging_sink::Sink;

/// One of the four named logging severities.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    /// Developer diagnostics; live only at [`Level::Devel`](crate::Level::Devel).
    Debug,
    /// Informational progress messages.
    Info,
    /// Suspicious but recoverable conditions.
    Warning,
    /// Failures; never silenced by a level change.
    Error,
}

impl Channel {
    /// All channels in severity order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    /// Returns the literal prefix written in front of every message.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG: ",
            Self::Info => "INFO: ",
            Self::Warning => "WARNING: ",
            Self::Error => "ERROR: ",
        }
    }

    /// Returns the lowercase channel name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Returns the destination the channel is bound to at process start.
    #[must_use]
    pub const fn default_sink(self) -> Sink {
        match self {
            Self::Debug => Sink::discard(),
            Self::Info | Self::Warning | Self::Error => Sink::stderr(),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
