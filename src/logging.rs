//! Diagnostic logging
//!
//! Logs go to stderr so they never mix with the game on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `BULLS_COWS_LOG=debug`
pub const LOG_ENV: &str = "BULLS_COWS_LOG";

/// Install the global subscriber
///
/// Defaults to `warn` when the variable is unset or invalid. Calling this
/// more than once is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
