use crate::entry::EntryKind;
use crate::error::WalkError;
use crate::reader::DirectoryReader;
use logging::trace_walk;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::mem;
use std::path::{Path, PathBuf};

/// Lazy, level-synchronous breadth-first iterator over source directories.
///
/// Each item is either a directory that held at least one regular file with
/// the configured suffix, or the error met while reading some directory. An
/// error never ends the iteration; the failing directory is simply neither
/// emitted nor descended into. Directories are read only as the iterator is
/// advanced, so a consumer that stops pulling stops the walk.
///
/// Within one root every directory at depth `k` is yielded before any at
/// depth `k + 1`; siblings keep the order their parent listing returned.
/// All directories of one root precede those of the next.
pub struct SourceDirs<R> {
    reader: R,
    pending_roots: VecDeque<PathBuf>,
    current: Vec<PathBuf>,
    cursor: usize,
    next: Vec<PathBuf>,
    suffix: OsString,
    depth: usize,
}

impl<R> SourceDirs<R> {
    pub(crate) fn new(reader: R, starts: Vec<PathBuf>, suffix: OsString) -> Self {
        Self {
            reader,
            pending_roots: starts.into(),
            current: Vec::new(),
            cursor: 0,
            next: Vec::new(),
            suffix,
            depth: 0,
        }
    }
}

impl<R: DirectoryReader> SourceDirs<R> {
    /// Reads `dir`, queues its visible subdirectories for the next level and
    /// reports whether it holds a source file.
    fn visit(&mut self, dir: &Path) -> Result<bool, WalkError> {
        let entries = self.reader.read_dir(dir)?;

        let mut has_source = false;
        for entry in entries {
            match entry.kind() {
                EntryKind::File => {
                    if !has_source && entry.has_suffix(&self.suffix) {
                        has_source = true;
                    }
                }
                EntryKind::Directory => {
                    // No .git or other dot directories.
                    if !entry.is_hidden() {
                        self.next.push(dir.join(entry.name()));
                    }
                }
                EntryKind::Other => {}
            }
        }
        Ok(has_source)
    }
}

impl<R: DirectoryReader> Iterator for SourceDirs<R> {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.current.get_mut(self.cursor) {
                let dir = mem::take(slot);
                self.cursor += 1;
                match self.visit(&dir) {
                    Ok(true) => return Some(Ok(dir)),
                    Ok(false) => continue,
                    Err(error) => return Some(Err(error)),
                }
            }

            if !self.next.is_empty() {
                mem::swap(&mut self.current, &mut self.next);
                self.next.clear();
                self.cursor = 0;
                self.depth += 1;
                trace_walk!("level {}: {} directories", self.depth, self.current.len());
                continue;
            }

            let start = self.pending_roots.pop_front()?;
            trace_walk!("walking {}", start.display());
            self.current.clear();
            self.current.push(start);
            self.cursor = 0;
            self.depth = 0;
        }
    }
}
