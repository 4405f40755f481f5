use std::ffi::{OsStr, OsString};
use std::fs::FileType;

/// What a directory entry turned out to be when its parent was read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory, possibly reached through a followed symlink.
    Directory,
    /// Anything else: devices, sockets, fifos, unfollowed or dangling links.
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// Single entry returned by a [`DirectoryReader`](crate::DirectoryReader).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirEntry {
    name: OsString,
    kind: EntryKind,
}

impl DirEntry {
    /// Creates an entry from its file name and kind.
    #[must_use]
    pub fn new<N: Into<OsString>>(name: N, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Returns the entry's file name (a single path component).
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Returns the entry's kind.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Reports whether the name starts with a `.` byte.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().first() == Some(&b'.')
    }

    /// Reports whether the name ends with `suffix`, compared byte for byte.
    #[must_use]
    pub fn has_suffix(&self, suffix: &OsStr) -> bool {
        self.name
            .as_encoded_bytes()
            .ends_with(suffix.as_encoded_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_names_start_with_a_dot() {
        assert!(DirEntry::new(".git", EntryKind::Directory).is_hidden());
        assert!(DirEntry::new(".", EntryKind::Directory).is_hidden());
        assert!(!DirEntry::new("a.b", EntryKind::Directory).is_hidden());
        assert!(!DirEntry::new("", EntryKind::Directory).is_hidden());
    }

    #[test]
    fn suffix_matches_the_end_of_the_name() {
        let suffix = OsStr::new(".go");
        assert!(DirEntry::new("x.go", EntryKind::File).has_suffix(suffix));
        assert!(DirEntry::new(".go", EntryKind::File).has_suffix(suffix));
        assert!(!DirEntry::new("x.go.txt", EntryKind::File).has_suffix(suffix));
        assert!(!DirEntry::new("go", EntryKind::File).has_suffix(suffix));
    }

    #[cfg(unix)]
    #[test]
    fn suffix_match_accepts_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.go");
        let entry = DirEntry::new(name, EntryKind::File);
        assert!(entry.has_suffix(OsStr::new(".go")));
    }
}
