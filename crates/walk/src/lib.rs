#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` finds source directories: directories that directly contain at
//! least one regular file whose name ends in a configured suffix (`.go` by
//! default). It searches a list of roots in order, walking `root/src` of each
//! breadth-first, and yields every source directory exactly once.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures the roots, the subdirectory appended to each
//!   root, the source suffix, and symlink handling.
//! - [`SourceDirs`] implements [`Iterator`] and performs a level-synchronous
//!   breadth-first search. It holds two queues, the level being read and the
//!   level being collected, and swaps them when the current level runs dry.
//! - [`DirectoryReader`] is the only way the walk touches the filesystem.
//!   [`OsDirectoryReader`] is the real implementation.
//! - [`WalkError`] describes directories that could not be opened or
//!   enumerated. They are yielded in-line and the walk carries on.
//!
//! # Invariants
//!
//! - Directories whose names begin with `.` are never descended into, at any
//!   depth. There is no other ignore list.
//! - A directory is emitted only if its own listing contains a regular file
//!   with the suffix; directories with only subdirectories are descended into
//!   but not emitted.
//! - No sorting is applied: siblings keep the order the listing returned.
//! - Traversal never panics and never stops early on a failed read.
//!
//! # Examples
//!
//! ```
//! use std::fs;
//! use walk::WalkBuilder;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let pkg = temp.path().join("src").join("fmt");
//! fs::create_dir_all(pkg.join(".git"))?;
//! fs::write(pkg.join("print.go"), b"package fmt")?;
//!
//! let found: Vec<_> = WalkBuilder::new([temp.path()])
//!     .build()
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(found, vec![pkg]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod reader;
mod walker;

pub use builder::WalkBuilder;
pub use entry::{DirEntry, EntryKind};
pub use error::{WalkError, WalkErrorKind};
pub use reader::{DirectoryReader, OsDirectoryReader};
pub use walker::SourceDirs;

/// File-name suffix that marks a source file.
pub const SOURCE_SUFFIX: &str = ".go";

/// Subdirectory of every root that the walk starts from.
pub const ROOT_SUBDIR: &str = "src";
