//! crates/logging/src/config.rs
//! Startup configuration: a level plus the info/warning/error destinations.

use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use logging_sink::Sink;
use thiserror::Error;

use super::context::Tracelog;
use super::level::{Level, ParseLevelError};

/// Environment variable holding the level name.
pub const LEVEL_ENV: &str = "TRACELOG_LEVEL";
/// Environment variable holding the info destination.
pub const INFO_OUTPUT_ENV: &str = "TRACELOG_INFO_OUTPUT";
/// Environment variable holding the warning destination.
pub const WARNING_OUTPUT_ENV: &str = "TRACELOG_WARNING_OUTPUT";
/// Environment variable holding the error destination.
pub const ERROR_OUTPUT_ENV: &str = "TRACELOG_ERROR_OUTPUT";

/// Where a configured channel writes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputTarget {
    /// Standard error.
    #[default]
    Stderr,
    /// Standard output.
    Stdout,
    /// Drop everything.
    Discard,
    /// Append to a file, creating it when missing.
    File(PathBuf),
}

impl OutputTarget {
    /// Opens the destination.
    pub fn open(&self) -> io::Result<Sink> {
        match self {
            Self::Stderr => Ok(Sink::stderr()),
            Self::Stdout => Ok(Sink::stdout()),
            Self::Discard => Ok(Sink::discard()),
            Self::File(path) => Sink::file(path),
        }
    }
}

impl FromStr for OutputTarget {
    type Err = std::convert::Infallible;

    /// `stderr`, `stdout` and `discard` (any ASCII case) name the built-in
    /// destinations; anything else is taken as a file path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "stderr" => Self::Stderr,
            "stdout" => Self::Stdout,
            "discard" => Self::Discard,
            _ => Self::File(PathBuf::from(trimmed)),
        })
    }
}

/// Errors raised while loading or applying a [`LoggingConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The level variable does not name a level.
    #[error("invalid {variable}: {source}")]
    InvalidLevel {
        /// The variable that held the bad value.
        variable: &'static str,
        /// The parse failure.
        #[source]
        source: ParseLevelError,
    },
    /// A file destination could not be opened.
    #[error("failed to open log output {}: {source}", path.display())]
    OpenOutput {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Startup configuration for a [`Tracelog`].
///
/// The debug channel has no destination here: it follows the level.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggingConfig {
    /// Verbosity level.
    pub level: Level,
    /// Info channel destination.
    pub info: OutputTarget,
    /// Warning channel destination.
    pub warning: OutputTarget,
    /// Error channel destination.
    pub error: OutputTarget,
}

impl LoggingConfig {
    /// Reads the `TRACELOG_*` environment variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Missing or empty variables keep their defaults.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = lookup(LEVEL_ENV) {
            config.level = value
                .parse()
                .map_err(|source| ConfigError::InvalidLevel {
                    variable: LEVEL_ENV,
                    source,
                })?;
        }
        if let Some(value) = lookup(INFO_OUTPUT_ENV) {
            config.info = parse_target(&value);
        }
        if let Some(value) = lookup(WARNING_OUTPUT_ENV) {
            config.warning = parse_target(&value);
        }
        if let Some(value) = lookup(ERROR_OUTPUT_ENV) {
            config.error = parse_target(&value);
        }
        Ok(config)
    }

    /// Applies the configuration to `context`.
    ///
    /// Every destination is opened before anything changes, so a failure
    /// leaves the context untouched. Outputs are bound before the level is
    /// applied; an `ERROR` level therefore silences the info and warning
    /// destinations configured here.
    pub fn apply(&self, context: &Tracelog) -> Result<(), ConfigError> {
        let info = open_target(&self.info)?;
        let warning = open_target(&self.warning)?;
        let error = open_target(&self.error)?;

        context.set_info_output(info);
        context.set_warning_output(warning);
        context.set_error_output(error);
        context.set_level(self.level);
        Ok(())
    }
}

fn parse_target(value: &str) -> OutputTarget {
    match value.parse() {
        Ok(target) => target,
        Err(never) => match never {},
    }
}

fn open_target(target: &OutputTarget) -> Result<Sink, ConfigError> {
    target.open().map_err(|source| ConfigError::OpenOutput {
        path: match target {
            OutputTarget::File(path) => path.clone(),
            _ => PathBuf::new(),
        },
        source,
    })
}
