use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::producer;
use crossbeam_channel::Receiver;
use logging::{LogSink, trace_scan};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use walk::{DirectoryReader, SourceDirs};

/// Initial capacity of the directory cache.
const INITIAL_CACHE: usize = 1000;

/// Replayable scan of source directories.
///
/// A background thread walks the configured roots and hands each source
/// directory over a zero-capacity channel, so it only runs ahead of the
/// consumer by the one directory it is waiting to deliver. Every directory
/// received is appended to a cache. [`reset`](Self::reset) rewinds the read
/// cursor; later passes are served from the cache until they reach its end,
/// and only then wait on the walker again. The filesystem is walked once no
/// matter how many passes are made.
///
/// The scanner is an [`Iterator`] that is deliberately not fused: after it
/// returns `None`, a call to `reset` makes it yield the cached sequence again.
///
/// A scanner has a single consumer. Calls take `&mut self`; share one scanner
/// between threads through a mutex, as [`global`](crate::global) does.
#[derive(Debug)]
pub struct Scanner {
    paths: Vec<PathBuf>,
    offset: usize,
    scan: Receiver<PathBuf>,
    complete: bool,
    absolute_served: bool,
}

impl Scanner {
    /// Starts a scan of the real filesystem.
    pub fn spawn(config: &ScanConfig, sink: Arc<dyn LogSink>) -> Result<Self, ScanError> {
        Self::start(config.walk_builder().build(), sink)
    }

    /// Starts a scan that lists directories through `reader`.
    pub fn spawn_with_reader<R>(
        config: &ScanConfig,
        reader: R,
        sink: Arc<dyn LogSink>,
    ) -> Result<Self, ScanError>
    where
        R: DirectoryReader + Send + 'static,
    {
        Self::start(config.walk_builder().build_with(reader), sink)
    }

    fn start<R>(walk: SourceDirs<R>, sink: Arc<dyn LogSink>) -> Result<Self, ScanError>
    where
        R: DirectoryReader + Send + 'static,
    {
        let (sender, receiver) = crossbeam_channel::bounded(0);
        thread::Builder::new()
            .name(producer::THREAD_NAME.to_owned())
            .spawn(move || producer::run(walk, sender, sink.as_ref()))
            .map_err(ScanError::Spawn)?;

        Ok(Self {
            paths: Vec::with_capacity(INITIAL_CACHE),
            offset: 0,
            scan: receiver,
            complete: false,
            absolute_served: false,
        })
    }

    /// Puts the scan back at the beginning.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.absolute_served = false;
    }

    /// Returns every directory received from the walker so far, in order.
    #[must_use]
    pub fn cached(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Position of the read cursor within the cache.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Reports whether the walker has finished and the cache is final.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    pub(crate) fn absolute_served(&mut self) -> bool {
        std::mem::replace(&mut self.absolute_served, true)
    }
}

impl Iterator for Scanner {
    type Item = PathBuf;

    /// Returns the next source directory, or `None` once the walk is done.
    ///
    /// Cached entries are returned without touching the channel. Past the end
    /// of the cache the call blocks until the walker delivers the next
    /// directory or finishes. After the end every call returns `None`
    /// immediately until the next [`reset`](Scanner::reset).
    fn next(&mut self) -> Option<PathBuf> {
        if let Some(path) = self.paths.get(self.offset) {
            self.offset += 1;
            return Some(path.clone());
        }

        match self.scan.recv() {
            Ok(path) => {
                self.paths.push(path.clone());
                self.offset += 1;
                Some(path)
            }
            Err(_) => {
                if !self.complete {
                    trace_scan!("scan complete with {} cached directories", self.paths.len());
                    self.complete = true;
                }
                None
            }
        }
    }
}
