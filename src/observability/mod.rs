//! # Observability Infrastructure
//!
//! Structured logging for the Bolna MCP server using the tracing ecosystem.

pub mod logging;

pub use logging::init_logging;
