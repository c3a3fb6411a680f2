//! Development-time tracing for the demo binaries.
//!
//! Diagnostics go to stderr via `RUST_LOG`; the iteration tables on stdout
//! are product output and never pass through the subscriber.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the stderr tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
