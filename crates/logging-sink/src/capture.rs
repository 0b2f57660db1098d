//! crates/logging-sink/src/capture.rs
//! In-memory writer whose clones share one buffer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::sink::Sink;

/// Clonable in-memory writer.
///
/// Every clone appends to the same buffer, so a test can hand one clone to a
/// [`Sink`] and keep another to inspect what was written.
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn bytes(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns everything written so far, replacing invalid UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Returns the captured output split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Returns `true` when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }

    /// Drains the buffer and returns what it held.
    pub fn take(&self) -> String {
        let drained = std::mem::take(&mut *self.bytes());
        String::from_utf8_lossy(&drained).into_owned()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<CaptureBuffer> for Sink {
    fn from(buffer: CaptureBuffer) -> Self {
        Self::from_writer(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_contents() {
        let buffer = CaptureBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"alpha\nbeta\n").expect("write succeeds");

        assert_eq!(buffer.lines(), vec!["alpha", "beta"]);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn take_drains() {
        let buffer = CaptureBuffer::new();
        buffer.clone().write_all(b"once").expect("write succeeds");

        assert_eq!(buffer.take(), "once");
        assert!(buffer.is_empty());
        assert_eq!(buffer.contents(), "");
    }
}
