#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `scanner` enumerates Go source directories across a set of roots on
//! demand. The first pass pulls directories from a background breadth-first
//! walk one at a time; every later pass replays what was found without
//! reading the filesystem again.
//!
//! # Design
//!
//! - [`Scanner`] owns the cache (an append-only list of directories), the
//!   read cursor, and the receiving end of a zero-capacity
//!   [`crossbeam_channel`]. The walker thread blocks on every send until the
//!   consumer asks for the next directory, which keeps the walk lazy.
//! - [`ScanConfig`] and [`Roots`] describe what to walk: the primary root,
//!   then the additional roots, each joined with `src`.
//! - [`global`] holds the process-wide scanner, started eagerly at program
//!   entry.
//! - Walk errors never reach the consumer. They are handed to a
//!   [`LogSink`](logging::LogSink) and the affected directory is skipped.
//!
//! # Invariants
//!
//! - The cache only grows; entries are never reordered or removed.
//! - After [`Scanner::reset`], the `k`-th directory returned is the same as
//!   the `k`-th directory returned on every earlier pass.
//! - The channel is closed exactly once, when the walk ends; from then on the
//!   cache is final.
//!
//! # Examples
//!
//! ```
//! use logging::RecordingSink;
//! use scanner::{Roots, ScanConfig, Scanner};
//! use std::fs;
//! use std::sync::Arc;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let goroot = tempfile::tempdir()?;
//! let fmt = goroot.path().join("src").join("fmt");
//! fs::create_dir_all(&fmt)?;
//! fs::write(fmt.join("print.go"), b"package fmt")?;
//!
//! let config = ScanConfig::new(Roots::new(goroot.path()));
//! let mut scanner = Scanner::spawn(&config, Arc::new(RecordingSink::new()))?;
//!
//! assert_eq!(scanner.next(), Some(fmt.clone()));
//! assert_eq!(scanner.next(), None);
//!
//! scanner.reset();
//! assert_eq!(scanner.find_next("fmt"), Some(fmt));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod config;
mod error;
pub mod global;
mod lookup;
mod producer;
mod roots;
mod scanner;

pub use config::ScanConfig;
pub use error::{RootsError, ScanError};
pub use roots::{GOPATH_VAR, GOROOT_VAR, Roots, split_path_list};
pub use scanner::Scanner;
