//! Logging infrastructure for the destiny predictor.
//!
//! Logs go to stderr so the interactive transcript on stdout stays
//! byte-for-byte stable for scripted drivers.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default log level. Anything chattier would interleave with prompts.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (debug, info, warn, error)
///
/// This can still be overridden by RUST_LOG environment variable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
