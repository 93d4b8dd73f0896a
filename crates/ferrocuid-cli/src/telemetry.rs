//! Diagnostic logging for the command-line tool.
//!
//! Logs go to stderr so that stdout carries only identifiers. Filtering
//! follows `RUST_LOG` and defaults to `warn`. Set `RUST_LOG=trace` to see the
//! library's generation spans.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global `tracing` subscriber.
pub fn init_tracing() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
