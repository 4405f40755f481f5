//! crates/logging/src/verbosity.rs
//! Mapping from command-line verbosity flags to tracing levels.

use tracing_subscriber::filter::LevelFilter;

/// Diagnostic verbosity selected on the command line.
///
/// `-q` wins over any number of `-v` flags. Each `-v` raises the level by one
/// step; counts beyond the most verbose level saturate.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    /// Warnings and errors, including recovered walk failures.
    #[default]
    Normal,
    /// Informational progress messages.
    Verbose,
    /// Per-directory walk and cache diagnostics.
    Debug,
}

impl Verbosity {
    /// Derives the verbosity from a `-v` count and the `-q` flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Verbosity;
    ///
    /// assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
    /// assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
    /// assert_eq!(Verbosity::from_flags(7, false), Verbosity::Debug);
    /// assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
    /// ```
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Returns the most verbose tracing level enabled at this verbosity.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
        }
    }
}
