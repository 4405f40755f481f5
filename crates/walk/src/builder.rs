use crate::reader::{DirectoryReader, OsDirectoryReader};
use crate::walker::SourceDirs;
use crate::{ROOT_SUBDIR, SOURCE_SUFFIX};
use std::ffi::OsString;
use std::path::PathBuf;

/// Configures a breadth-first search for source directories across roots.
///
/// Roots are walked strictly in the order given. Each root is joined with
/// [`root_subdir`](Self::root_subdir) before the walk starts; the root itself
/// is never inspected.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    roots: Vec<PathBuf>,
    root_subdir: OsString,
    source_suffix: OsString,
    follow_symlinks: bool,
}

impl WalkBuilder {
    /// Creates a builder over the given roots with the default subdirectory
    /// ([`ROOT_SUBDIR`]) and suffix ([`SOURCE_SUFFIX`]).
    #[must_use]
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            root_subdir: OsString::from(ROOT_SUBDIR),
            source_suffix: OsString::from(SOURCE_SUFFIX),
            follow_symlinks: true,
        }
    }

    /// Sets the subdirectory appended to every root. An empty name walks the
    /// roots themselves.
    #[must_use]
    pub fn root_subdir<S: Into<OsString>>(mut self, subdir: S) -> Self {
        self.root_subdir = subdir.into();
        self
    }

    /// Sets the file-name suffix that marks a source file.
    #[must_use]
    pub fn source_suffix<S: Into<OsString>>(mut self, suffix: S) -> Self {
        self.source_suffix = suffix.into();
        self
    }

    /// Configures whether symlinks are classified by their targets when the
    /// walk reads the real filesystem. Ignored by [`build_with`](Self::build_with).
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Builds a walk over the real filesystem.
    #[must_use]
    pub fn build(self) -> SourceDirs<OsDirectoryReader> {
        let reader = OsDirectoryReader::new().follow_symlinks(self.follow_symlinks);
        self.build_with(reader)
    }

    /// Builds a walk that lists directories through `reader`.
    #[must_use]
    pub fn build_with<R: DirectoryReader>(self, reader: R) -> SourceDirs<R> {
        let starts = self
            .roots
            .into_iter()
            .map(|root| {
                if self.root_subdir.is_empty() {
                    root
                } else {
                    root.join(&self.root_subdir)
                }
            })
            .collect();
        SourceDirs::new(reader, starts, self.source_suffix)
    }
}
