//! crates/logging/src/subscriber.rs
//! Global tracing subscriber installation.
//!
//! Output always goes to stderr so that stdout stays reserved for the list of
//! discovered directories.

use super::verbosity::Verbosity;
use std::error::Error;
use std::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Registry, fmt as tracing_fmt};

/// Environment variable holding an [`EnvFilter`] directive that replaces the
/// verbosity chosen on the command line, e.g. `SRCSCAN_LOG=srcscan::walk=debug`.
pub const LOG_ENV_VAR: &str = "SRCSCAN_LOG";

/// Returned when a global subscriber is already installed.
#[derive(Debug)]
pub struct TracingInitError {
    source: TryInitError,
}

impl fmt::Display for TracingInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to install tracing subscriber: {}", self.source)
    }
}

impl Error for TracingInitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Installs the global subscriber for the given verbosity.
///
/// When [`LOG_ENV_VAR`] is set its directives are used instead; malformed
/// directives are ignored in favour of the verbosity level.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{Verbosity, init_tracing};
///
/// init_tracing(Verbosity::from_flags(2, false))?;
/// tracing::debug!(target: "srcscan::walk", "visible at -vv");
/// ```
pub fn init_tracing(verbosity: Verbosity) -> Result<(), TracingInitError> {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.level_filter().into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();
    init_tracing_with_filter(filter)
}

/// Installs the global subscriber with a caller-supplied filter layer.
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TracingInitError>
where
    F: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .map_err(|source| TracingInitError { source })
}
