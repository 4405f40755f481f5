use std::io;
use thiserror::Error;

/// Failures when starting a scan.
///
/// A running scan never fails; directory errors go to the log sink.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The background walker thread could not be started.
    #[error("failed to start directory walker")]
    Spawn(#[source] io::Error),

    /// The process-wide scanner was already started.
    #[error("scanner already initialized")]
    AlreadyInitialized,
}

/// Failures while resolving the roots to scan.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum RootsError {
    /// The primary root was not supplied.
    #[error("{variable} is not set")]
    MissingPrimary {
        /// Environment variable that should have named the primary root.
        variable: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn spawn_failure_renders_cause_only_through_source() {
        let error = ScanError::Spawn(io::Error::other("resource temporarily unavailable"));
        assert_eq!(error.to_string(), "failed to start directory walker");

        let source = error.source().expect("io source");
        assert_eq!(source.to_string(), "resource temporarily unavailable");
    }
}
