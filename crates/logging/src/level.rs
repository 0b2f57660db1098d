//! crates/logging/src/level.rs
//! Verbosity levels and the shared cell holding the active one.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use thiserror::Error;

/// Name of the default level: debug silenced, everything else untouched.
pub const NORMAL_LOG_LEVEL: &str = "NORMAL";
/// Name of the development level: debug written to standard error.
pub const DEVEL_LOG_LEVEL: &str = "DEVEL";
/// Name of the quiet level: only the error channel stays live.
pub const ERROR_LOG_LEVEL: &str = "ERROR";

/// Every valid level name, in declaration order.
pub const LOG_LEVELS: [&str; 3] = [NORMAL_LOG_LEVEL, DEVEL_LOG_LEVEL, ERROR_LOG_LEVEL];

/// Process-wide verbosity level.
///
/// The set is closed: a string outside [`LOG_LEVELS`] never becomes a
/// [`Level`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Level {
    /// Debug channel silenced; info and warning keep their bindings.
    #[default]
    Normal = 0,
    /// Debug channel written to standard error; errors render verbosely.
    Devel = 1,
    /// Debug, info and warning channels silenced.
    Error = 2,
}

impl Level {
    /// All levels, in the same order as [`LOG_LEVELS`].
    pub const ALL: [Self; 3] = [Self::Normal, Self::Devel, Self::Error];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => NORMAL_LOG_LEVEL,
            Self::Devel => DEVEL_LOG_LEVEL,
            Self::Error => ERROR_LOG_LEVEL,
        }
    }

    /// Looks up a level by its exact canonical name.
    ///
    /// Unlike [`FromStr`], no trimming or case folding is applied.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == name)
    }

    const fn from_repr(value: u8) -> Self {
        match value {
            1 => Self::Devel,
            2 => Self::Error,
            _ => Self::Normal,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`Level`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log level '{input}'; expected one of: {}", LOG_LEVELS.join(", "))]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the rejected text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses configuration input, tolerating surrounding whitespace and ASCII
    /// case differences.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLevelError {
                input: s.to_owned(),
            })
    }
}

/// Atomic cell holding the active level of one context.
///
/// The context and every [`LevelError`](crate::LevelError) it produced share
/// one cell, so an error rendered later sees the level active at render time.
#[derive(Debug, Default)]
pub(crate) struct SharedLevel(AtomicU8);

impl SharedLevel {
    pub(crate) const fn new(level: Level) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    pub(crate) fn get(&self) -> Level {
        Level::from_repr(self.0.load(Ordering::Acquire))
    }

    pub(crate) fn set(&self, level: Level) {
        self.0.store(level as u8, Ordering::Release);
    }
}
