#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front end of `srcscan`. It resolves the roots to
//! scan from flags and the environment, starts a [`Scanner`], and prints
//! either every source directory or the directories matching the packages
//! named on the command line.
//!
//! # Design
//!
//! [`run`] takes the argument list and handles for standard output and error,
//! so the whole program can be driven in-process by tests. The binary calls
//! [`run_with`] with [`ScannerSource::Global`], starting the process-wide
//! scanner at program entry; [`run`] uses a private scanner. A `clap` command
//! performs the parse; help and version output are rendered by hand. Walk
//! diagnostics travel through a [`TracingSink`] into the subscriber installed
//! for the chosen [`Verbosity`], which writes to the process stderr.
//!
//! # Errors
//!
//! Usage errors exit with `2`. A missing `GOROOT`, a scanner that cannot be
//! started, an unwritable stdout, or a package with no matching directory exit
//! with `1`. Unreadable directories are only logged; they never change the
//! exit code.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["srcscan", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("srcscan "));
//! ```
//!
//! [`Scanner`]: scanner::Scanner
//! [`TracingSink`]: logging::TracingSink
//! [`Verbosity`]: logging::Verbosity

mod command;
mod error;
mod help;


pub use error::CliError;

use command::{ParsedArgs, parse_args};
use logging::{LogSink, TracingSink, Verbosity};
use scanner::{Roots, ScanConfig, Scanner};
use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;

/// Program name used in diagnostics.
const PROGRAM_NAME: &str = "srcscan";

/// Highest exit status representable on every platform.
const MAX_EXIT_CODE: i32 = 255;

/// Where a run obtains the scanner it reads from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScannerSource {
    /// A scanner owned by the run and dropped when it returns.
    #[default]
    Private,
    /// The process-wide scanner in [`scanner::global`], started by the run.
    /// Only one such run can succeed per process.
    Global,
}

/// Runs the program with `arguments` (including the program name) on a
/// private scanner and returns the process exit status.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    run_with(arguments, ScannerSource::Private, stdout, stderr)
}

/// Runs the program reading directories from the scanner `source` selects.
pub fn run_with<I, S, Out, Err>(
    arguments: I,
    source: ScannerSource,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let result = parse_args(arguments).and_then(|parsed| execute(parsed, source, stdout));
    match result {
        Ok(()) => 0,
        Err(error) => {
            report(stderr, &error);
            error.exit_code()
        }
    }
}

/// Converts a status returned by [`run`] into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

fn execute<Out: Write>(
    parsed: ParsedArgs,
    source: ScannerSource,
    stdout: &mut Out,
) -> Result<(), CliError> {
    if parsed.show_help {
        stdout.write_all(help::render_help().as_bytes())?;
        return Ok(());
    }
    if parsed.show_version {
        stdout.write_all(help::render_version().as_bytes())?;
        return Ok(());
    }

    let verbosity = Verbosity::from_flags(parsed.verbose, parsed.quiet);
    if logging::init_tracing(verbosity).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    let roots = Roots::from_env_or(parsed.goroot, parsed.gopath)?;
    let config = ScanConfig::new(roots).follow_symlinks(parsed.follow_symlinks);
    let sink: Arc<dyn LogSink> = Arc::new(TracingSink::new());
    match source {
        ScannerSource::Private => {
            let mut scanner = Scanner::spawn(&config, sink)?;
            print_dirs(&mut scanner, parsed.packages, stdout)
        }
        ScannerSource::Global => {
            let mut scanner = scanner::global::init(&config, sink)?;
            print_dirs(&mut scanner, parsed.packages, stdout)
        }
    }
}

/// Prints every directory, or the matches of each package in turn.
fn print_dirs<Out: Write>(
    scanner: &mut Scanner,
    packages: Vec<String>,
    stdout: &mut Out,
) -> Result<(), CliError> {
    if packages.is_empty() {
        for dir in scanner.by_ref() {
            writeln!(stdout, "{}", dir.display())?;
        }
        stdout.flush()?;
        tracing::info!(directories = scanner.cached().len(), "scan complete");
        return Ok(());
    }

    let mut missing = Vec::new();
    for package in packages {
        let matches = scanner.find_all(&package);
        if matches.is_empty() {
            missing.push(package);
            continue;
        }
        for dir in matches {
            writeln!(stdout, "{}", dir.display())?;
        }
    }
    stdout.flush()?;

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CliError::PackageNotFound(missing))
    }
}

fn report<Err: Write>(stderr: &mut Err, error: &CliError) {
    let rendered = error.to_string();
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {}", rendered.trim_end());
}
