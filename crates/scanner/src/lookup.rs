//! Package lookup on top of the scan: find directories whose trailing path
//! components spell a package path.

use crate::scanner::Scanner;
use std::path::{Component, Path, PathBuf};

impl Scanner {
    /// Continues the scan until a directory ending in `package` is found.
    ///
    /// `package` is matched component by component against the end of each
    /// directory, so `"fmt"` matches `/usr/local/go/src/fmt` but not
    /// `/usr/local/go/src/myfmt`. The path is cleaned lexically first; an
    /// empty package or one that climbs out with `..` matches nothing.
    ///
    /// An absolute `package` names a directory directly: it is returned once,
    /// and only when the cursor is at the start of a pass.
    pub fn find_next(&mut self, package: &str) -> Option<PathBuf> {
        let package = Path::new(package);
        if package.is_absolute() {
            if self.offset() == 0 && !self.absolute_served() {
                return Some(package.to_path_buf());
            }
            return None;
        }

        let wanted = clean(package)?;
        self.find(|dir| dir.ends_with(&wanted))
    }

    /// Rewinds the scan and returns every directory matching `package`, in
    /// scan order.
    pub fn find_all(&mut self, package: &str) -> Vec<PathBuf> {
        self.reset();
        std::iter::from_fn(|| self.find_next(package)).collect()
    }
}

/// Lexically cleans a relative package path, or returns `None` when nothing
/// is left or the path escapes upwards.
fn clean(package: &Path) -> Option<PathBuf> {
    let mut cleaned = PathBuf::new();
    for component in package.components() {
        match component {
            Component::Normal(part) => cleaned.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if cleaned.as_os_str().is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::clean;
    use std::path::{Path, PathBuf};

    #[test]
    fn clean_normalises_relative_paths() {
        assert_eq!(clean(Path::new("net/http")), Some(PathBuf::from("net/http")));
        assert_eq!(clean(Path::new("./net//http/")), Some(PathBuf::from("net/http")));
        assert_eq!(clean(Path::new("net/../fmt")), Some(PathBuf::from("fmt")));
    }

    #[test]
    fn clean_rejects_empty_and_escaping_paths() {
        assert_eq!(clean(Path::new("")), None);
        assert_eq!(clean(Path::new(".")), None);
        assert_eq!(clean(Path::new("..")), None);
        assert_eq!(clean(Path::new("fmt/../..")), None);
    }
}
