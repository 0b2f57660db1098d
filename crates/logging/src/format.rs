//! crates/logging/src/format.rs
//! Level-dependent rendering of error values.

use std::error::Error;
use std::fmt::Write as _;

use super::level::Level;

/// How an error value is rendered for the active level.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorFormat {
    /// The error's `Display` text only.
    Concise,
    /// The alternate `Display` text, every `source()` in the chain, and any
    /// captured backtrace.
    Verbose,
}

impl ErrorFormat {
    /// Returns the format mapped to `level`.
    ///
    /// | level  | format  |
    /// |--------|---------|
    /// | NORMAL | concise |
    /// | ERROR  | concise |
    /// | DEVEL  | verbose |
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Normal | Level::Error => Self::Concise,
            Level::Devel => Self::Verbose,
        }
    }

    /// Returns the `format!` directive equivalent to this format.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Concise => "{}",
            Self::Verbose => "{:#}",
        }
    }

    /// Returns `true` for [`ErrorFormat::Verbose`].
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Renders `error` in this format.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::ErrorFormat;
    /// use std::io;
    ///
    /// let err = io::Error::other("disk full");
    /// assert_eq!(ErrorFormat::Concise.render(&err), "disk full");
    /// ```
    #[must_use]
    pub fn render(self, error: &(dyn Error + 'static)) -> String {
        match self {
            Self::Concise => error.to_string(),
            Self::Verbose => {
                let mut rendered = format!("{error:#}");
                let mut source = error.source();
                while let Some(cause) = source {
                    let _ = write!(rendered, "\ncaused by: {cause}");
                    source = cause.source();
                }
                rendered
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("outer failed")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("inner failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    impl Error for Inner {}

    #[test]
    fn mapping_matches_levels() {
        assert_eq!(ErrorFormat::for_level(Level::Normal), ErrorFormat::Concise);
        assert_eq!(ErrorFormat::for_level(Level::Error), ErrorFormat::Concise);
        assert_eq!(ErrorFormat::for_level(Level::Devel), ErrorFormat::Verbose);
    }

    #[test]
    fn directives() {
        assert_eq!(ErrorFormat::Concise.directive(), "{}");
        assert_eq!(ErrorFormat::Verbose.directive(), "{:#}");
        assert!(ErrorFormat::Verbose.is_verbose());
        assert!(!ErrorFormat::Concise.is_verbose());
    }

    #[test]
    fn concise_omits_sources() {
        assert_eq!(ErrorFormat::Concise.render(&Outer(Inner)), "outer failed");
    }

    #[test]
    fn verbose_walks_source_chain() {
        assert_eq!(
            ErrorFormat::Verbose.render(&Outer(Inner)),
            "outer failed\ncaused by: inner failed"
        );
    }
}
