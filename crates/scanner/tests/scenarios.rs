//! End-to-end scenarios for the scanner over a scripted filesystem.

mod common;

use common::{MemoryFs, paths};
use logging::RecordingSink;
use scanner::{Roots, ScanConfig, Scanner};
use std::sync::Arc;

fn scan(fs: &MemoryFs, roots: Roots) -> (Scanner, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let scanner = Scanner::spawn_with_reader(&ScanConfig::new(roots), fs.clone(), sink.clone())
        .expect("spawn scanner");
    (scanner, sink)
}

/// Root not emitted, hidden directory skipped.
#[test]
fn s1_single_root_flat() {
    let mut fs = MemoryFs::default();
    fs.file("/r1/src/a/x.go")
        .file("/r1/src/b/x.go")
        .file("/r1/src/.hidden/y.go");

    let (scanner, sink) = scan(&fs, Roots::new("/r1"));
    assert_eq!(scanner.collect::<Vec<_>>(), paths(&["/r1/src/a", "/r1/src/b"]));
    assert!(sink.is_empty());
}

/// Depth one before depth two.
#[test]
fn s2_breadth_first_ordering() {
    let mut fs = MemoryFs::default();
    fs.file("/r1/src/a/x.go")
        .file("/r1/src/a/deep/y.go")
        .file("/r1/src/b/z.go");

    let (scanner, _) = scan(&fs, Roots::new("/r1"));
    assert_eq!(
        scanner.collect::<Vec<_>>(),
        paths(&["/r1/src/a", "/r1/src/b", "/r1/src/a/deep"])
    );
}

/// Interior node without sources is descended but not emitted.
#[test]
fn s3_no_sources_at_interior_node() {
    let mut fs = MemoryFs::default();
    fs.file("/r1/src/a/inner/x.go");

    let (scanner, _) = scan(&fs, Roots::new("/r1"));
    assert_eq!(scanner.collect::<Vec<_>>(), paths(&["/r1/src/a/inner"]));
}

/// Primary root first, then the additional roots in list order.
#[cfg(unix)]
#[test]
fn s4_multi_root_ordering() {
    let mut fs = MemoryFs::default();
    fs.file("/r1/src/a/x.go")
        .file("/r2/src/p/x.go")
        .file("/r3/src/q/x.go");

    let (scanner, _) = scan(&fs, Roots::new("/r1").with_additional("/r2:/r3"));
    assert_eq!(
        scanner.collect::<Vec<_>>(),
        paths(&["/r1/src/a", "/r2/src/p", "/r3/src/q"])
    );
}

/// A second full pass is served entirely from the cache.
#[test]
fn s5_reset_replay() {
    let mut fs = MemoryFs::default();
    fs.file("/r1/src/a/x.go")
        .file("/r1/src/a/deep/y.go")
        .file("/r1/src/b/z.go");

    let (mut scanner, _) = scan(&fs, Roots::new("/r1"));
    let first: Vec<_> = scanner.by_ref().collect();
    let reads = fs.reads();

    scanner.reset();
    let second: Vec<_> = scanner.by_ref().collect();
    assert_eq!(first, second);
    assert_eq!(fs.reads(), reads);
}

/// The unreadable directory is logged and skipped; siblings are emitted.
#[test]
fn s6_unreadable_directory() {
    let mut fs = MemoryFs::default();
    fs.file("/r1/src/a/x.go")
        .deny("/r1/src/bad")
        .file("/r1/src/c/x.go");

    let (scanner, sink) = scan(&fs, Roots::new("/r1"));
    assert_eq!(scanner.collect::<Vec<_>>(), paths(&["/r1/src/a", "/r1/src/c"]));

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("/r1/src/bad"), "{messages:?}");
}

/// A missing `src` under one root does not stop later roots.
#[test]
fn missing_src_root_is_logged_and_skipped() {
    let mut fs = MemoryFs::default();
    fs.dir("/r1").file("/r2/src/p/x.go");

    let (scanner, sink) = scan(
        &fs,
        Roots::new("/r1").with_additional(std::env::join_paths(["/r2"]).expect("join")),
    );
    assert_eq!(scanner.collect::<Vec<_>>(), paths(&["/r2/src/p"]));
    assert_eq!(sink.len(), 1);
}
