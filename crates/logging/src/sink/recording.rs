use super::LogSink;
use std::error::Error;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Sink that keeps every rendered error in memory.
///
/// Useful for embedders that want to surface recovered errors after a scan,
/// and for asserting on the exact diagnostics a walk produced.
///
/// # Examples
///
/// ```
/// use logging::{LogSink, RecordingSink};
/// use std::io;
///
/// let sink = RecordingSink::new();
/// assert!(sink.is_empty());
///
/// sink.log(&io::Error::other("stale mount"));
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.take(), vec!["stale mount".to_owned()]);
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every message recorded so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Removes and returns every message recorded so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of recorded messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for RecordingSink {
    fn log(&self, error: &dyn Error) {
        self.lock().push(error.to_string());
    }
}
