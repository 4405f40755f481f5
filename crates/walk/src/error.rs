use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error reported when a directory cannot be read during the walk.
///
/// The walk never stops on these; each one is surfaced once and the offending
/// directory is skipped without being emitted or descended into.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    /// Builds an error for a directory whose handle could not be obtained.
    #[must_use]
    pub fn open_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::OpenDir { path, source })
    }

    /// Builds an error for a directory whose entries could not be enumerated.
    #[must_use]
    pub fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDir { path, source })
    }

    /// Returns the specific failure.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the directory the failure refers to.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use std::path::{Path, PathBuf};
    /// use walk::WalkError;
    ///
    /// let error = WalkError::open_dir(
    ///     PathBuf::from("/r1/src/bad"),
    ///     io::Error::from(io::ErrorKind::PermissionDenied),
    /// );
    /// assert_eq!(error.path(), Path::new("/r1/src/bad"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::OpenDir { path, source } => {
                write!(
                    f,
                    "failed to open directory '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::ReadDir { path, source } => {
                write!(
                    f,
                    "failed to read directory '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            WalkErrorKind::OpenDir { source, .. } | WalkErrorKind::ReadDir { source, .. } => {
                Some(source)
            }
        }
    }
}

/// Classification of walk failures.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// The directory could not be opened for reading.
    OpenDir {
        /// Directory that failed to open.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// The directory was opened but enumerating its entries failed.
    ReadDir {
        /// Directory whose entries could not be enumerated.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the directory tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            WalkErrorKind::OpenDir { path, .. } | WalkErrorKind::ReadDir { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(message: &'static str) -> io::Error {
        io::Error::other(message)
    }

    #[test]
    fn walk_error_path_matches_variant_path() {
        let open = WalkError::open_dir(PathBuf::from("open"), io_error("open"));
        assert_eq!(Path::new("open"), open.path());

        let read = WalkError::read_dir(PathBuf::from("read"), io_error("read"));
        assert_eq!(Path::new("read"), read.path());
    }

    #[test]
    fn walk_error_display_is_specific_per_variant() {
        let open = WalkError::open_dir(PathBuf::from("dir"), io_error("boom"));
        assert_eq!("failed to open directory 'dir': boom", open.to_string());

        let read = WalkError::read_dir(PathBuf::from("dir"), io_error("boom"));
        assert_eq!("failed to read directory 'dir': boom", read.to_string());
    }

    #[test]
    fn walk_error_kind_accessor_reveals_inner_variant() {
        let read = WalkError::read_dir(PathBuf::from("dir"), io_error("read"));
        match read.kind() {
            WalkErrorKind::ReadDir { path, .. } => assert_eq!(Path::new("dir"), path),
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn walk_error_source_refers_to_underlying_io_error() {
        let error = WalkError::open_dir(PathBuf::from("dir"), io_error("source"));
        let source_ref = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("walk error should expose the underlying io::Error");
        assert_eq!(source_ref.to_string(), "source");
    }
}
