use super::LogSink;
use std::error::Error;

/// Sink that forwards recovered errors to the active [`tracing`] subscriber.
///
/// Each error becomes a `WARN` event on the `srcscan::walk` target with the
/// rendered error attached as the `error` field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn log(&self, error: &dyn Error) {
        ::tracing::warn!(target: crate::WALK_TARGET, error = %error, "skipping directory");
    }
}
