//! Process-wide scanner.
//!
//! The host calls [`init`] once at program entry; the walk starts right away,
//! before anyone asks for a directory. Every later caller reaches the same
//! scanner, and its cache, through [`get`]. There is no teardown; the walker
//! lives as long as the process.

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::scanner::Scanner;
use logging::LogSink;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

static SCANNER: OnceLock<Mutex<Scanner>> = OnceLock::new();

/// Serialises [`init`] so only one walker thread is ever started.
static STARTING: Mutex<()> = Mutex::new(());

/// Starts the process-wide scan of the real filesystem and returns it locked
/// for the caller.
///
/// Fails with [`ScanError::AlreadyInitialized`] on every call after the first
/// successful one, without starting another walker.
pub fn init(
    config: &ScanConfig,
    sink: Arc<dyn LogSink>,
) -> Result<MutexGuard<'static, Scanner>, ScanError> {
    let _starting = STARTING.lock().unwrap_or_else(PoisonError::into_inner);
    if SCANNER.get().is_some() {
        return Err(ScanError::AlreadyInitialized);
    }

    let scanner = Scanner::spawn(config, sink)?;
    let scanner = SCANNER.get_or_init(|| Mutex::new(scanner));
    Ok(lock(scanner))
}

/// Locks the process-wide scanner, or returns `None` before [`init`].
pub fn get() -> Option<MutexGuard<'static, Scanner>> {
    SCANNER.get().map(lock)
}

fn lock(scanner: &'static Mutex<Scanner>) -> MutexGuard<'static, Scanner> {
    scanner.lock().unwrap_or_else(PoisonError::into_inner)
}
