//! crates/logging-sink/src/sink.rs
//! Shared output destinations for channel loggers.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Identifies which kind of destination a [`Sink`] writes to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SinkKind {
    /// The process standard error stream.
    Stderr,
    /// The process standard output stream.
    Stdout,
    /// Accepts every line and drops it.
    Discard,
    /// A caller-supplied writer such as a file or an in-memory buffer.
    Writer,
}

impl SinkKind {
    /// Returns a short lowercase label suitable for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stderr => "stderr",
            Self::Stdout => "stdout",
            Self::Discard => "discard",
            Self::Writer => "writer",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone)]
enum Target {
    Stderr,
    Stdout,
    Discard,
    Writer(SharedWriter),
}

/// A destination capable of accepting lines of text.
///
/// Cloning a sink is cheap and yields a handle to the same destination:
/// clones of a writer-backed sink share one mutex-protected writer, so a line
/// written through any clone is serialized against lines written through the
/// others. The sink never closes or otherwise manages the lifecycle of the
/// standard streams; writer-backed sinks drop their writer when the last clone
/// goes away.
///
/// # Examples
///
/// ```
/// use logging_sink::{CaptureBuffer, Sink, SinkKind};
///
/// assert_eq!(Sink::stderr().kind(), SinkKind::Stderr);
/// assert!(Sink::discard().is_discard());
///
/// let buffer = CaptureBuffer::new();
/// let sink = Sink::from(buffer.clone());
/// sink.write_line(b"hello\n")?;
/// assert_eq!(buffer.contents(), "hello\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct Sink {
    target: Target,
}

impl Sink {
    /// Returns a sink bound to the process standard error stream.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            target: Target::Stderr,
        }
    }

    /// Returns a sink bound to the process standard output stream.
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    /// Returns a sink that accepts every write and produces no output.
    #[must_use]
    pub const fn discard() -> Self {
        Self {
            target: Target::Discard,
        }
    }

    /// Wraps an arbitrary writer.
    ///
    /// The writer is flushed after every line so that output is visible as soon
    /// as [`write_line`](Self::write_line) returns.
    #[must_use]
    pub fn from_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            target: Target::Writer(Arc::new(Mutex::new(Box::new(writer)))),
        }
    }

    /// Opens `path` for appending, creating it when missing, and wraps it.
    pub fn file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::from_writer(file))
    }

    /// Reports which kind of destination this sink writes to.
    #[must_use]
    pub const fn kind(&self) -> SinkKind {
        match self.target {
            Target::Stderr => SinkKind::Stderr,
            Target::Stdout => SinkKind::Stdout,
            Target::Discard => SinkKind::Discard,
            Target::Writer(_) => SinkKind::Writer,
        }
    }

    /// Returns `true` when the sink drops everything written to it.
    #[must_use]
    pub const fn is_discard(&self) -> bool {
        matches!(self.target, Target::Discard)
    }

    /// Returns `true` when the sink writes to standard error.
    #[must_use]
    pub const fn is_stderr(&self) -> bool {
        matches!(self.target, Target::Stderr)
    }

    /// Reports whether two sinks write to the same destination.
    ///
    /// Standard streams and discard sinks compare by kind. Writer-backed sinks
    /// are the same destination only when one is a clone of the other.
    #[must_use]
    pub fn same_destination(&self, other: &Self) -> bool {
        match (&self.target, &other.target) {
            (Target::Writer(lhs), Target::Writer(rhs)) => Arc::ptr_eq(lhs, rhs),
            (Target::Writer(_), _) | (_, Target::Writer(_)) => false,
            _ => self.kind() == other.kind(),
        }
    }

    /// Writes one pre-rendered line with a single `write_all` call.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match &self.target {
            Target::Stderr => io::stderr().lock().write_all(line),
            Target::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(line)?;
                stdout.flush()
            }
            Target::Discard => Ok(()),
            Target::Writer(writer) => {
                let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
                writer.write_all(line)?;
                writer.flush()
            }
        }
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sink").field(&self.kind()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaptureBuffer;

    #[test]
    fn kinds_match_constructors() {
        assert_eq!(Sink::stderr().kind(), SinkKind::Stderr);
        assert_eq!(Sink::stdout().kind(), SinkKind::Stdout);
        assert_eq!(Sink::discard().kind(), SinkKind::Discard);
        assert_eq!(Sink::from_writer(Vec::new()).kind(), SinkKind::Writer);
        assert_eq!(Sink::default().kind(), SinkKind::Stderr);
    }

    #[test]
    fn discard_accepts_writes() {
        let sink = Sink::discard();
        sink.write_line(b"dropped\n").expect("discard never fails");
        assert!(sink.is_discard());
        assert!(!sink.is_stderr());
    }

    #[test]
    fn writer_clones_share_destination() {
        let buffer = CaptureBuffer::new();
        let sink = Sink::from(buffer.clone());
        let clone = sink.clone();

        sink.write_line(b"one\n").expect("write succeeds");
        clone.write_line(b"two\n").expect("write succeeds");

        assert_eq!(buffer.contents(), "one\ntwo\n");
        assert!(sink.same_destination(&clone));
    }

    #[test]
    fn distinct_writers_are_distinct_destinations() {
        let first = Sink::from_writer(Vec::new());
        let second = Sink::from_writer(Vec::new());
        assert!(!first.same_destination(&second));
        assert!(!first.same_destination(&Sink::stderr()));
        assert!(Sink::stderr().same_destination(&Sink::stderr()));
        assert!(!Sink::stderr().same_destination(&Sink::discard()));
    }

    #[test]
    fn file_sink_appends() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("channel.log");

        Sink::file(&path)
            .expect("open")
            .write_line(b"first\n")
            .expect("write");
        Sink::file(&path)
            .expect("reopen")
            .write_line(b"second\n")
            .expect("write");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn debug_shows_kind_only() {
        assert_eq!(format!("{:?}", Sink::discard()), "Sink(Discard)");
        assert_eq!(SinkKind::Writer.to_string(), "writer");
    }
}
