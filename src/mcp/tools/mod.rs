//! MCP Tools Module
//!
//! Tool definitions and execution functions for the Bolna operations. Each
//! tool is a thin wrapper: it pulls its identifier arguments and payload out
//! of the call arguments, delegates to [`BolnaClient`](crate::bolna::BolnaClient),
//! and renders whatever comes back. A failed remote call renders as JSON
//! `null` rather than a tool error, preserving the best-effort contract.

use serde_json::Value;

use crate::mcp::error::McpError;
use crate::mcp::protocol::{ContentBlock, ToolCallResult};

pub mod agents;
pub mod executions;

pub use agents::{
    create_agent_tool, delete_agent_tool, get_agent_tool, get_agents_tool, update_agent_tool,
};
pub use agents::{
    execute_create_agent, execute_delete_agent, execute_get_agent, execute_get_agents,
    execute_update_agent,
};

pub use executions::{execute_agent_tool, get_execution_status_tool};
pub use executions::{execute_execute_agent, execute_get_execution_status};

/// Render an operation result as tool call content
///
/// Absent results render as `null`; remote failures are never surfaced as
/// protocol errors.
pub(crate) fn render_result(value: Option<Value>) -> Result<ToolCallResult, McpError> {
    let text = serde_json::to_string_pretty(&value.unwrap_or(Value::Null))
        .map_err(McpError::SerializationError)?;
    Ok(ToolCallResult { content: vec![ContentBlock::Text { text }], is_error: None })
}

/// Extract a required string argument
pub(crate) fn required_str<'a>(args: &'a Value, name: &str) -> Result<&'a str, McpError> {
    args.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| McpError::InvalidParams(format!("{} is required and must be a string", name)))
}

/// Extract a required object argument
pub(crate) fn required_object(args: &Value, name: &str) -> Result<Value, McpError> {
    match args.get(name) {
        Some(value) if value.is_object() => Ok(value.clone()),
        _ => Err(McpError::InvalidParams(format!("{} is required and must be an object", name))),
    }
}
