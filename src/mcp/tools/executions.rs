//! MCP Tools for Bolna Execution Operations
//!
//! Tool definitions and execution functions for running agents and querying
//! execution status.

use serde_json::{json, Value};
use tracing::instrument;

use crate::bolna::BolnaClient;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{Tool, ToolCallResult};
use crate::mcp::tools::{render_result, required_object, required_str};

/// Returns the MCP tool definition for executing an agent.
pub fn execute_agent_tool() -> Tool {
    Tool {
        name: "execute_agent".to_string(),
        description: "Execute a voice AI agent with the given execution data (for example, a phone number to call). Returns the started execution, including its ID.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "agent_id": {
                    "type": "string",
                    "description": "The ID of the agent to execute"
                },
                "execution_data": {
                    "type": "object",
                    "description": "Execution parameters forwarded verbatim to the Bolna API"
                }
            },
            "required": ["agent_id", "execution_data"]
        }),
    }
}

/// Returns the MCP tool definition for querying execution status.
pub fn get_execution_status_tool() -> Tool {
    Tool {
        name: "get_execution_status".to_string(),
        description: "Retrieve the status of a specific agent execution by its execution ID.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "execution_id": {
                    "type": "string",
                    "description": "The ID of the execution to look up"
                }
            },
            "required": ["execution_id"]
        }),
    }
}

/// Execute the execute_agent tool.
#[instrument(skip(client, args), name = "mcp_execute_execute_agent")]
pub async fn execute_execute_agent(
    client: &BolnaClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let agent_id = required_str(&args, "agent_id")?;
    let execution_data = required_object(&args, "execution_data")?;
    let result = client.execute_agent(agent_id, &execution_data).await;
    render_result(result)
}

/// Execute the get_execution_status tool.
#[instrument(skip(client, args), name = "mcp_execute_get_execution_status")]
pub async fn execute_get_execution_status(
    client: &BolnaClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let execution_id = required_str(&args, "execution_id")?;
    let result = client.get_execution_status(execution_id).await;
    render_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definitions() {
        let tool = execute_agent_tool();
        assert_eq!(tool.name, "execute_agent");
        let required = tool.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("agent_id")));
        assert!(required.contains(&json!("execution_data")));

        let tool = get_execution_status_tool();
        assert_eq!(tool.name, "get_execution_status");
    }

    #[tokio::test]
    async fn test_execute_agent_rejects_non_object_payload() {
        let client = BolnaClient::new(crate::config::BolnaConfig {
            base_url: "http://127.0.0.1:0".to_string(),
            api_key: "bn-test-key".to_string(),
            timeout_seconds: 1,
        });
        let args = json!({"agent_id": "a-1", "execution_data": "not-an-object"});
        let err = execute_execute_agent(&client, args).await.unwrap_err();
        assert!(matches!(err, McpError::InvalidParams(_)));
    }
}
