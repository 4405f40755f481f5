//! Background half of the scanner: drains the walk into the handoff channel.

use crossbeam_channel::Sender;
use logging::{LogSink, trace_scan};
use std::path::PathBuf;
use walk::WalkError;

/// Name of the thread running the walk.
pub(crate) const THREAD_NAME: &str = "srcscan-walk";

/// Sends every source directory of `walk` over `sender`, reporting walk errors
/// to `sink`.
///
/// Each send blocks until the consumer takes the value. Dropping `sender` on
/// return closes the channel. If the consumer has gone away the walk stops at
/// the next send.
pub(crate) fn run<I>(walk: I, sender: Sender<PathBuf>, sink: &dyn LogSink)
where
    I: IntoIterator<Item = Result<PathBuf, WalkError>>,
{
    let mut emitted = 0_usize;
    for item in walk {
        match item {
            Ok(dir) => {
                if sender.send(dir).is_err() {
                    trace_scan!("consumer dropped after {} directories; stopping walk", emitted);
                    return;
                }
                emitted += 1;
            }
            Err(error) => sink.log(&error),
        }
    }
    trace_scan!("walk complete: {} source directories", emitted);
}
