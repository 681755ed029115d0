//! # Structured Logging
//!
//! Subscriber setup for the tracing ecosystem. Logs are written to stderr:
//! stdout belongs to the MCP protocol channel and must carry nothing but
//! JSON-RPC responses.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::errors::{Error, Result};

/// Initialize the global tracing subscriber
///
/// The filter honors `RUST_LOG` when set, falling back to the configured
/// level. With `json_logs` enabled, entries are emitted as one JSON object
/// per line for log collectors.
pub fn init_logging(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let init_result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    init_result.map_err(|e| Error::config(format!("Failed to initialize logging: {}", e)))
}
