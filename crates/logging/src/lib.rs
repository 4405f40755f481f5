#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` collects the diagnostics plumbing shared by the srcscan
//! workspace. The directory walk never fails towards its consumer; every
//! filesystem error it meets is handed to a [`LogSink`] instead. This crate
//! defines that sink interface together with the implementations the binary
//! and the tests rely on, plus the [`tracing`] setup used for everything else.
//!
//! # Design
//!
//! - [`LogSink`] is a write-only interface accepting a single error value.
//!   Sinks are shared between the consumer thread and the background walker,
//!   so the trait requires `Send + Sync`.
//! - [`TracingSink`] forwards errors as `WARN` events on the
//!   `srcscan::walk` target.
//! - [`MessageSink`] renders errors line by line into any [`io::Write`]
//!   target, honouring a [`LineMode`].
//! - [`RecordingSink`] keeps rendered messages in memory so callers can
//!   inspect what was reported.
//! - [`Verbosity`] maps `-q`/`-v` counts onto a tracing level and
//!   [`init_tracing`] installs the global subscriber.
//!
//! # Invariants
//!
//! - Sinks never panic and never propagate write failures; a sink that cannot
//!   deliver a message drops it.
//! - Subscriber installation is fallible but never panics, so repeated
//!   initialisation in tests is harmless.
//!
//! # Examples
//!
//! ```
//! use logging::{LogSink, RecordingSink};
//! use std::io;
//!
//! let sink = RecordingSink::new();
//! sink.log(&io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
//!
//! assert_eq!(sink.messages(), vec!["denied".to_owned()]);
//! ```
//!
//! [`io::Write`]: std::io::Write

mod line_mode;
mod sink;
mod subscriber;
mod tracing_macros;
mod verbosity;

pub use line_mode::LineMode;
pub use sink::{LogSink, MessageSink, RecordingSink, TracingSink};
pub use subscriber::{LOG_ENV_VAR, TracingInitError, init_tracing, init_tracing_with_filter};
pub use verbosity::Verbosity;

/// Tracing target used for directory walk diagnostics.
pub const WALK_TARGET: &str = "srcscan::walk";

/// Tracing target used for scanner cache and handoff diagnostics.
pub const SCAN_TARGET: &str = "srcscan::scan";
