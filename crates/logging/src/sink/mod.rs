//! Destinations for errors the directory walk recovers from.

mod recording;
mod tracing_sink;
mod writer;

pub use recording::RecordingSink;
pub use tracing_sink::TracingSink;
pub use writer::MessageSink;

use std::error::Error;
use std::sync::Arc;

/// Write-only destination for errors that are reported and then recovered from.
///
/// The background walker owns one handle to the sink while the consumer keeps
/// another, so implementations must be shareable across threads. `log` takes
/// `&self`; sinks that buffer state use interior mutability.
pub trait LogSink: Send + Sync {
    /// Records a single error.
    fn log(&self, error: &dyn Error);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn log(&self, error: &dyn Error) {
        (**self).log(error);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn log(&self, error: &dyn Error) {
        (**self).log(error);
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn log(&self, error: &dyn Error) {
        (**self).log(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn report<S: LogSink>(sink: S, message: &'static str) {
        sink.log(&io::Error::other(message));
    }

    #[test]
    fn shared_handles_forward_to_the_same_sink() {
        let sink = Arc::new(RecordingSink::new());
        let shared: Arc<dyn LogSink> = sink.clone();
        let boxed: Box<dyn LogSink> = Box::new(Arc::clone(&sink));

        shared.log(&io::Error::other("first"));
        boxed.log(&io::Error::other("second"));
        report(&*sink, "third");

        assert_eq!(sink.messages(), vec!["first", "second", "third"]);
    }
}
