//! MCP Tools for Bolna Agent Operations
//!
//! Tool definitions and execution functions for agent CRUD against the Bolna
//! platform.

use serde_json::{json, Value};
use tracing::instrument;

use crate::bolna::BolnaClient;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{Tool, ToolCallResult};
use crate::mcp::tools::{render_result, required_object, required_str};

/// Returns the MCP tool definition for creating an agent.
pub fn create_agent_tool() -> Tool {
    Tool {
        name: "create_agent".to_string(),
        description: "Create a new voice AI agent on the Bolna platform. Takes the full agent configuration and returns the created agent, including its assigned ID.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "agent_config": {
                    "type": "object",
                    "description": "Agent configuration forwarded verbatim to the Bolna API"
                }
            },
            "required": ["agent_config"]
        }),
    }
}

/// Returns the MCP tool definition for listing all agents.
pub fn get_agents_tool() -> Tool {
    Tool {
        name: "get_agents".to_string(),
        description: "Retrieve all voice AI agents configured on the Bolna platform.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// Returns the MCP tool definition for getting an agent by ID.
pub fn get_agent_tool() -> Tool {
    Tool {
        name: "get_agent".to_string(),
        description: "Retrieve a specific voice AI agent by its ID.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "agent_id": {
                    "type": "string",
                    "description": "The ID of the agent to retrieve"
                }
            },
            "required": ["agent_id"]
        }),
    }
}

/// Returns the MCP tool definition for updating an agent.
pub fn update_agent_tool() -> Tool {
    Tool {
        name: "update_agent".to_string(),
        description: "Update an existing voice AI agent. Takes the agent ID and the replacement configuration.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "agent_id": {
                    "type": "string",
                    "description": "The ID of the agent to update"
                },
                "agent_config": {
                    "type": "object",
                    "description": "Replacement agent configuration forwarded verbatim to the Bolna API"
                }
            },
            "required": ["agent_id", "agent_config"]
        }),
    }
}

/// Returns the MCP tool definition for deleting an agent.
pub fn delete_agent_tool() -> Tool {
    Tool {
        name: "delete_agent".to_string(),
        description: "Delete a voice AI agent by its ID. Always returns a deletion confirmation.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "agent_id": {
                    "type": "string",
                    "description": "The ID of the agent to delete"
                }
            },
            "required": ["agent_id"]
        }),
    }
}

/// Execute the create_agent tool.
#[instrument(skip(client, args), name = "mcp_execute_create_agent")]
pub async fn execute_create_agent(
    client: &BolnaClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let agent_config = required_object(&args, "agent_config")?;
    let result = client.create_agent(&agent_config).await;
    render_result(result)
}

/// Execute the get_agents tool.
#[instrument(skip(client, _args), name = "mcp_execute_get_agents")]
pub async fn execute_get_agents(
    client: &BolnaClient,
    _args: Value,
) -> Result<ToolCallResult, McpError> {
    let result = client.get_agents().await;
    render_result(result)
}

/// Execute the get_agent tool.
#[instrument(skip(client, args), name = "mcp_execute_get_agent")]
pub async fn execute_get_agent(
    client: &BolnaClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let agent_id = required_str(&args, "agent_id")?;
    let result = client.get_agent(agent_id).await;
    render_result(result)
}

/// Execute the update_agent tool.
#[instrument(skip(client, args), name = "mcp_execute_update_agent")]
pub async fn execute_update_agent(
    client: &BolnaClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let agent_id = required_str(&args, "agent_id")?;
    let agent_config = required_object(&args, "agent_config")?;
    let result = client.update_agent(agent_id, &agent_config).await;
    render_result(result)
}

/// Execute the delete_agent tool.
///
/// Unlike the other tools this one never renders `null`: the client layer
/// substitutes a `{"status": "deleted"}` marker when the remote returns no
/// body.
#[instrument(skip(client, args), name = "mcp_execute_delete_agent")]
pub async fn execute_delete_agent(
    client: &BolnaClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let agent_id = required_str(&args, "agent_id")?;
    let result = client.delete_agent(agent_id).await;
    render_result(Some(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definitions_declare_required_arguments() {
        let tool = update_agent_tool();
        assert_eq!(tool.name, "update_agent");
        let required = tool.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("agent_id")));
        assert!(required.contains(&json!("agent_config")));

        let tool = get_agents_tool();
        assert!(tool.input_schema.get("required").is_none());
    }

    #[tokio::test]
    async fn test_execute_get_agent_rejects_missing_id() {
        let client = BolnaClient::new(crate::config::BolnaConfig {
            base_url: "http://127.0.0.1:0".to_string(),
            api_key: "bn-test-key".to_string(),
            timeout_seconds: 1,
        });
        let err = execute_get_agent(&client, json!({})).await.unwrap_err();
        assert!(matches!(err, McpError::InvalidParams(_)));
    }
}
