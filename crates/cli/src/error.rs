use scanner::{RootsError, ScanError};
use std::io;
use thiserror::Error;

/// Exit status for command-line usage errors.
pub(crate) const USAGE_EXIT_CODE: i32 = 2;

/// Failures that end a command-line run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The arguments could not be parsed.
    #[error("{0}")]
    Usage(#[from] clap::Error),
    /// No primary root was given.
    #[error("{0}; pass --goroot or set it in the environment")]
    Roots(#[from] RootsError),
    /// The scanner could not be started.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// Writing the results failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    /// Some packages matched no directory.
    #[error("no source directory found for {}", quoted(.0))]
    PackageNotFound(Vec<String>),
}

impl CliError {
    /// Exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => USAGE_EXIT_CODE,
            _ => 1,
        }
    }
}

fn quoted(packages: &[String]) -> String {
    packages
        .iter()
        .map(|package| format!("'{package}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
