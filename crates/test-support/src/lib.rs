//! Shared fixtures for srcscan tests.
//!
//! [`TreeBuilder`] lays out a directory tree inside a temporary directory.
//! [`assert_levels`] checks breadth-first output when sibling order depends
//! on the platform's directory listing.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Temporary directory tree that is removed when dropped.
///
/// Paths passed to the builder are relative to the tree's base directory and
/// use `/` as separator.
///
/// ```
/// use test_support::TreeBuilder;
///
/// let tree = TreeBuilder::new();
/// tree.file("r1/src/a/x.go").dir("r1/src/.hidden");
/// assert!(tree.join("r1/src/a/x.go").is_file());
/// assert!(tree.join("r1/src/.hidden").is_dir());
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    base: TempDir,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            base: tempfile::tempdir().expect("create tempdir"),
        }
    }

    /// Absolute path of `relative` inside the tree.
    pub fn join(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.base.path().to_path_buf(), |path, part| path.join(part))
    }

    /// Creates a directory and all missing parents.
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.join(relative)).expect("create directory");
        self
    }

    /// Creates an empty file, creating parents as needed.
    pub fn file(&self, relative: &str) -> &Self {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, b"package fixture\n").expect("write file");
        self
    }

    /// Absolute paths for several relative paths.
    pub fn paths(&self, relatives: &[&str]) -> Vec<PathBuf> {
        relatives.iter().map(|relative| self.join(relative)).collect()
    }
}

/// Asserts that `actual` consists of the given levels in order, where the
/// members of each level may appear in any order.
///
/// ```
/// use std::path::PathBuf;
/// use test_support::assert_levels;
///
/// let actual = vec![PathBuf::from("b"), PathBuf::from("a"), PathBuf::from("a/deep")];
/// assert_levels(
///     &actual,
///     &[
///         vec![PathBuf::from("a"), PathBuf::from("b")],
///         vec![PathBuf::from("a/deep")],
///     ],
/// );
/// ```
pub fn assert_levels(actual: &[PathBuf], levels: &[Vec<PathBuf>]) {
    let expected_len: usize = levels.iter().map(Vec::len).sum();
    assert_eq!(
        actual.len(),
        expected_len,
        "expected {expected_len} directories, got {actual:?}"
    );

    let mut offset = 0;
    for (index, level) in levels.iter().enumerate() {
        let got: BTreeSet<_> = actual[offset..offset + level.len()].iter().collect();
        let want: BTreeSet<_> = level.iter().collect();
        assert_eq!(got, want, "level {index} mismatch in {actual:?}");
        offset += level.len();
    }
}
