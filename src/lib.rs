//! # Bolna MCP
//!
//! An MCP (Model Context Protocol) server that exposes the Bolna voice-AI
//! platform's REST API as callable tools over a stdio JSON-RPC transport.
//!
//! ## Architecture
//!
//! ```text
//! MCP Client (stdio) → JSON-RPC Handler → Tool Execution → BolnaClient
//!                                                              ↓
//!                                                       RequestGateway
//!                                                              ↓
//!                                                    Bolna REST API (HTTPS)
//! ```
//!
//! ## Core Components
//!
//! - **MCP Layer**: line-delimited JSON-RPC 2.0 server implementing the MCP
//!   `initialize`, `tools/list`, and `tools/call` methods over stdin/stdout
//! - **BolnaClient**: the seven operation wrappers (agent CRUD, execution,
//!   execution status) mapping tool arguments to API endpoints
//! - **RequestGateway**: the sole component issuing outbound HTTP calls,
//!   applying bearer authentication, timeout, and error normalization
//! - **Config**: immutable credentials and endpoint configuration loaded once
//!   from the environment at startup

pub mod bolna;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod mcp;
pub mod observability;

// Re-export commonly used types
pub use bolna::BolnaClient;
pub use config::{BolnaConfig, ObservabilityConfig};
pub use errors::{Error, Result};
pub use gateway::{GatewayError, HttpMethod, RequestGateway};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
