use crate::entry::{DirEntry, EntryKind};
use crate::error::WalkError;
use logging::trace_walk;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Source of directory listings for the walk.
///
/// The walker performs all of its filesystem access through this trait, so a
/// reader that counts or scripts calls observes every read the walk makes.
pub trait DirectoryReader {
    /// Returns every immediate entry of `dir`, in the order the underlying
    /// storage yields them.
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, WalkError>;
}

impl<R: DirectoryReader + ?Sized> DirectoryReader for &R {
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, WalkError> {
        (**self).read_dir(dir)
    }
}

impl<R: DirectoryReader + ?Sized> DirectoryReader for Arc<R> {
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, WalkError> {
        (**self).read_dir(dir)
    }
}

impl<R: DirectoryReader + ?Sized> DirectoryReader for Box<R> {
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, WalkError> {
        (**self).read_dir(dir)
    }
}

/// [`DirectoryReader`] backed by [`std::fs::read_dir`].
///
/// The directory handle lives only for the duration of one call and is
/// released before the call returns, whether enumeration succeeded or not.
#[derive(Clone, Copy, Debug)]
pub struct OsDirectoryReader {
    follow_symlinks: bool,
}

impl Default for OsDirectoryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl OsDirectoryReader {
    /// Creates a reader that classifies symlinks by their targets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            follow_symlinks: true,
        }
    }

    /// Configures whether symlinks are classified by their targets.
    ///
    /// When enabled, a link to a directory is reported as
    /// [`EntryKind::Directory`] and a link to a regular file as
    /// [`EntryKind::File`]; dangling links become [`EntryKind::Other`]. When
    /// disabled every symlink is [`EntryKind::Other`]. Link cycles are not
    /// detected.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    fn classify(&self, entry: &fs::DirEntry, file_type: fs::FileType) -> EntryKind {
        if !file_type.is_symlink() {
            return EntryKind::from(file_type);
        }
        if !self.follow_symlinks {
            return EntryKind::Other;
        }

        let target = entry.path();
        match fs::metadata(&target) {
            Ok(metadata) => EntryKind::from(metadata.file_type()),
            Err(error) => {
                trace_walk!("ignoring dangling symlink {}: {}", target.display(), error);
                EntryKind::Other
            }
        }
    }
}

impl DirectoryReader for OsDirectoryReader {
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, WalkError> {
        let handle =
            fs::read_dir(dir).map_err(|error| WalkError::open_dir(dir.to_path_buf(), error))?;

        let mut entries = Vec::new();
        for entry in handle {
            let entry = entry.map_err(|error| WalkError::read_dir(dir.to_path_buf(), error))?;
            let file_type = entry
                .file_type()
                .map_err(|error| WalkError::read_dir(dir.to_path_buf(), error))?;
            let kind = self.classify(&entry, file_type);
            entries.push(DirEntry::new(entry.file_name(), kind));
        }

        trace_walk!("found {} entries in {}", entries.len(), dir.display());
        Ok(entries)
    }
}
