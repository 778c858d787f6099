//! Tracing subscriber setup for the `qjack` binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set, so it is safe to call
/// from tests.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
