//! Root hierarchies the scanner walks, in the order they are walked.

use crate::error::RootsError;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Environment variable naming the primary root.
pub const GOROOT_VAR: &str = "GOROOT";

/// Environment variable holding the additional roots as a path list.
pub const GOPATH_VAR: &str = "GOPATH";

/// Ordered set of roots: the primary root first, then the additional roots.
///
/// Duplicates are kept; a root listed twice is walked twice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Roots {
    primary: PathBuf,
    additional: Vec<PathBuf>,
}

impl Roots {
    /// Creates a set holding only the primary root.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(primary: P) -> Self {
        Self {
            primary: primary.into(),
            additional: Vec::new(),
        }
    }

    /// Appends the roots in a platform path list (`:`-separated on Unix,
    /// `;`-separated on Windows).
    ///
    /// ```
    /// use scanner::Roots;
    /// use std::path::PathBuf;
    ///
    /// # #[cfg(unix)] {
    /// let roots = Roots::new("/usr/local/go").with_additional("/r2::/r3:/r2");
    /// assert_eq!(
    ///     roots.additional(),
    ///     &[PathBuf::from("/r2"), PathBuf::from("/r3"), PathBuf::from("/r2")]
    /// );
    /// # }
    /// ```
    #[must_use]
    pub fn with_additional<S: AsRef<OsStr>>(mut self, list: S) -> Self {
        self.additional.extend(split_path_list(list.as_ref()));
        self
    }

    /// Resolves the roots from `GOROOT` and `GOPATH`.
    ///
    /// An unset or empty `GOPATH` falls back to `go` under the home directory.
    pub fn from_env() -> Result<Self, RootsError> {
        Self::from_env_or(None, None)
    }

    /// Like [`from_env`](Self::from_env), but an explicit `goroot` or `gopath`
    /// takes the place of the corresponding variable.
    pub fn from_env_or(
        goroot: Option<OsString>,
        gopath: Option<OsString>,
    ) -> Result<Self, RootsError> {
        Self::from_vars(
            goroot.or_else(|| env::var_os(GOROOT_VAR)),
            gopath.or_else(|| env::var_os(GOPATH_VAR)),
            home_dir(),
        )
    }

    /// Resolves the roots from explicit values for `GOROOT`, `GOPATH`, and the
    /// home directory.
    pub fn from_vars(
        goroot: Option<OsString>,
        gopath: Option<OsString>,
        home: Option<PathBuf>,
    ) -> Result<Self, RootsError> {
        let primary = goroot
            .filter(|value| !value.is_empty())
            .ok_or(RootsError::MissingPrimary {
                variable: GOROOT_VAR,
            })?;
        let roots = Self::new(primary);

        match gopath.filter(|value| !value.is_empty()) {
            Some(list) => Ok(roots.with_additional(list)),
            None => Ok(match home {
                Some(home) => Self {
                    additional: vec![home.join("go")],
                    ..roots
                },
                None => roots,
            }),
        }
    }

    /// Returns the primary root.
    #[must_use]
    pub fn primary(&self) -> &Path {
        &self.primary
    }

    /// Returns the additional roots in configured order.
    #[must_use]
    pub fn additional(&self) -> &[PathBuf] {
        &self.additional
    }

    /// Iterates over every root in walk order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.primary.as_path()).chain(self.additional.iter().map(PathBuf::as_path))
    }
}

/// Splits a platform path list, dropping empty entries and keeping order and
/// duplicates.
#[must_use]
pub fn split_path_list(list: &OsStr) -> Vec<PathBuf> {
    env::split_paths(list)
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}

#[cfg(unix)]
fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(windows)]
fn home_dir() -> Option<PathBuf> {
    env::var_os("USERPROFILE")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(not(any(unix, windows)))]
fn home_dir() -> Option<PathBuf> {
    None
}
