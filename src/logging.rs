//! Logging init: stderr subscriber with env-controlled filtering.
//!
//! The library only emits `tracing` events; it never installs a
//! subscriber on its own. Host binaries and tests that want pipeline
//! visibility call [`init_logging`] once at startup.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// The filter comes from `RUST_LOG` when set, otherwise defaults to
/// `info,pathsafe=debug` so defusal and fallback events are visible.
/// Returns Err when a global subscriber is already installed so the
/// caller can ignore or report it.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pathsafe=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))?;

    Ok(())
}
