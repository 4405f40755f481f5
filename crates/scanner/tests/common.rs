//! Scripted in-memory filesystem shared by the scanner integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use walk::{DirEntry, DirectoryReader, EntryKind, WalkError};

/// Directory listings keyed by absolute path, returned in insertion order.
/// Clones share the read counter.
#[derive(Clone, Debug, Default)]
pub struct MemoryFs {
    listings: HashMap<PathBuf, Vec<DirEntry>>,
    denied: HashSet<PathBuf>,
    reads: Arc<AtomicUsize>,
}

impl MemoryFs {
    pub fn dir(&mut self, path: &str) -> &mut Self {
        self.add_dir(Path::new(path));
        self
    }

    pub fn file(&mut self, path: &str) -> &mut Self {
        let path = Path::new(path);
        let parent = path.parent().expect("parent");
        self.add_dir(parent);
        self.listings
            .get_mut(parent)
            .expect("parent listing")
            .push(DirEntry::new(path.file_name().expect("name"), EntryKind::File));
        self
    }

    pub fn deny(&mut self, path: &str) -> &mut Self {
        self.add_dir(Path::new(path));
        self.denied.insert(PathBuf::from(path));
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn add_dir(&mut self, path: &Path) {
        if self.listings.contains_key(path) {
            return;
        }
        self.listings.insert(path.to_path_buf(), Vec::new());
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            self.add_dir(parent);
            self.listings
                .get_mut(parent)
                .expect("parent listing")
                .push(DirEntry::new(name, EntryKind::Directory));
        }
    }
}

impl DirectoryReader for MemoryFs {
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, WalkError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.denied.contains(dir) {
            return Err(WalkError::open_dir(
                dir.to_path_buf(),
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }
        self.listings.get(dir).cloned().ok_or_else(|| {
            WalkError::open_dir(dir.to_path_buf(), io::Error::from(io::ErrorKind::NotFound))
        })
    }
}

pub fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
