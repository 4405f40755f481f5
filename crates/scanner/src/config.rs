use crate::roots::Roots;
use std::ffi::OsString;
use walk::{ROOT_SUBDIR, SOURCE_SUFFIX, WalkBuilder};

/// Everything a [`Scanner`](crate::Scanner) needs to start its walk.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    roots: Roots,
    source_suffix: OsString,
    root_subdir: OsString,
    follow_symlinks: bool,
}

impl ScanConfig {
    /// Creates a configuration over `roots` with the default suffix (`.go`),
    /// root subdirectory (`src`), and symlink following enabled.
    #[must_use]
    pub fn new(roots: Roots) -> Self {
        Self {
            roots,
            source_suffix: OsString::from(SOURCE_SUFFIX),
            root_subdir: OsString::from(ROOT_SUBDIR),
            follow_symlinks: true,
        }
    }

    /// Overrides the suffix that marks a source file.
    #[must_use]
    pub fn source_suffix<S: Into<OsString>>(mut self, suffix: S) -> Self {
        self.source_suffix = suffix.into();
        self
    }

    /// Overrides the subdirectory appended to every root.
    #[must_use]
    pub fn root_subdir<S: Into<OsString>>(mut self, subdir: S) -> Self {
        self.root_subdir = subdir.into();
        self
    }

    /// Configures whether symlinks are classified by their targets.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub(crate) fn walk_builder(&self) -> WalkBuilder {
        WalkBuilder::new(self.roots.iter())
            .root_subdir(self.root_subdir.clone())
            .source_suffix(self.source_suffix.clone())
            .follow_symlinks(self.follow_symlinks)
    }
}
