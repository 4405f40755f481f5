use super::LogSink;
use crate::line_mode::LineMode;
use std::error::Error;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Prefix written in front of every rendered error.
const PREFIX: &str = "srcscan: ";

/// Sink that renders errors into an [`io::Write`](std::io::Write) target.
///
/// Every error is written as `srcscan: <error>` followed by a newline unless
/// the sink was built with [`LineMode::WithoutNewline`]. The writer is guarded
/// by a mutex so the walker thread and the consumer can share one sink. Write
/// failures are dropped.
///
/// # Examples
///
/// ```
/// use logging::{LogSink, MessageSink};
/// use std::io;
///
/// let sink = MessageSink::new(Vec::new());
/// sink.log(&io::Error::other("permission denied"));
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "srcscan: permission denied\n");
/// ```
#[derive(Debug)]
pub struct MessageSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
}

impl<W> MessageSink<W> {
    /// Creates a sink that appends a newline after each error.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
        }
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> LogSink for MessageSink<W>
where
    W: Write + Send,
{
    fn log(&self, error: &dyn Error) {
        let mut line = format!("{PREFIX}{error}");
        if self.line_mode.append_newline() {
            line.push('\n');
        }

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if writer.write_all(line.as_bytes()).is_ok() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn sink_appends_newlines_by_default() {
        let sink = MessageSink::new(Vec::new());
        sink.log(&io::Error::other("first"));
        sink.log(&io::Error::other("second"));

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("srcscan: first"));
        assert_eq!(lines.next(), Some("srcscan: second"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn sink_without_newline_preserves_output() {
        let sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        assert_eq!(sink.line_mode(), LineMode::WithoutNewline);
        sink.log(&io::Error::other("ready"));

        assert_eq!(sink.into_inner(), b"srcscan: ready".to_vec());
    }

    #[test]
    fn failing_writer_is_ignored() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let sink = MessageSink::new(Broken);
        sink.log(&io::Error::other("dropped"));
    }
}
