//! Logging setup
//!
//! Installs a `tracing` subscriber that writes to stderr, so REPL output on
//! stdout stays clean. `RUST_LOG` takes precedence over the verbosity level.

use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Build the filter for a verbosity level, honouring `RUST_LOG`
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: Verbosity, color: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(verbosity == Verbosity::VeryVerbose)
        .try_init();
}
