//! MCP (Model Context Protocol) Server Implementation
//!
//! Provides the stdio-based MCP server exposing Bolna operations as tools.

pub mod error;
pub mod handler;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::McpError;
pub use handler::McpHandler;
pub use protocol::*;
pub use server::McpStdioServer;
