//! Tracing setup for the devmind server
//!
//! Usage:
//!   RUST_LOG=devmind_server=debug devmind  # Fine-grained log control
//!   DEVMIND_DEBUG=1 devmind                # Debug everything
//!
//! Environment variables:
//!   RUST_LOG                               # Log filter (default: info)
//!   DEVMIND_DEBUG                          # Debug level when RUST_LOG is unset

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used unless RUST_LOG is explicitly set)
    pub debug: bool,
}

impl TracingConfig {
    pub fn from_env() -> Self {
        let debug = std::env::var("DEVMIND_DEBUG")
            .map(|v| matches!(v.as_str(), "1" | "true"))
            .unwrap_or(false);
        Self { debug }
    }
}

/// Initialize console tracing
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    let filter = if config.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
