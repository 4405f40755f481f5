//! crates/logging/src/tracing_macros.rs
//! Target-specific wrappers around the standard tracing macros.
//!
//! Crates invoking these macros must depend on `tracing` themselves.

/// Emit a directory walk trace on the `srcscan::walk` target.
///
/// # Example
/// ```ignore
/// trace_walk!("reading {}", dir.display());
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::WALK_TARGET, $($arg)*);
    };
}

/// Emit a scanner cache or handoff trace on the `srcscan::scan` target.
///
/// # Example
/// ```ignore
/// trace_scan!("cache hit at offset {}", offset);
/// ```
#[macro_export]
macro_rules! trace_scan {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::SCAN_TARGET, $($arg)*);
    };
}
