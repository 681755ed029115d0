//! MCP Request Handler
//!
//! Routes incoming JSON-RPC requests to the appropriate method handlers.

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::bolna::BolnaClient;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools;

pub struct McpHandler {
    client: BolnaClient,
    initialized: bool,
}

impl McpHandler {
    /// Create a new MCP handler serving tools over the given Bolna client
    pub fn new(client: BolnaClient) -> Self {
        Self { client, initialized: false }
    }

    /// Handle an incoming JSON-RPC request
    pub async fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let method = request.method.clone();
        let id = request.id.clone();

        debug!(method = %method, id = ?id, "Handling MCP request");

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id.clone(), request.params).await,
            "initialized" | "notifications/initialized" => {
                self.handle_initialized(request.id.clone()).await
            }
            "notifications/cancelled" => {
                // There is no mechanism to cancel an in-flight call early;
                // acknowledge and rely on the per-call timeout.
                debug!("Received cancellation notification");
                JsonRpcResponse::success(request.id.clone(), serde_json::json!({}))
            }
            "ping" => self.handle_ping(request.id.clone()).await,
            "tools/list" => self.handle_tools_list(request.id.clone()).await,
            "tools/call" => self.handle_tools_call(request.id.clone(), request.params).await,
            _ => self.method_not_found(request.id.clone(), &request.method),
        };

        debug!(
            method = %method,
            id = ?id,
            has_error = response.error.is_some(),
            "Completed MCP request"
        );

        response
    }

    async fn handle_initialize(&mut self, id: Option<JsonRpcId>, params: Value) -> JsonRpcResponse {
        let params: InitializeParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, "Failed to parse initialize params");
                return self.error_response(
                    id,
                    McpError::InvalidParams(format!("Failed to parse initialize params: {}", e)),
                );
            }
        };

        if let Some(client_info) = &params.client_info {
            debug!(
                protocol_version = %params.protocol_version,
                client_name = %client_info.name,
                "Received initialize request"
            );
        }

        self.initialized = true;

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: Some(false) }),
            },
            server_info: ServerInfo {
                name: crate::APP_NAME.to_string(),
                version: crate::VERSION.to_string(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => self.error_response(id, McpError::SerializationError(e)),
        }
    }

    async fn handle_initialized(&mut self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        debug!("Received initialized notification");
        JsonRpcResponse::success(id, serde_json::json!({}))
    }

    async fn handle_ping(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        debug!("Received ping request");
        JsonRpcResponse::success(id, serde_json::json!({}))
    }

    async fn handle_tools_list(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        debug!("Listing available tools");

        let tools = vec![
            // Agent CRUD
            tools::create_agent_tool(),
            tools::get_agents_tool(),
            tools::get_agent_tool(),
            tools::update_agent_tool(),
            tools::delete_agent_tool(),
            // Executions
            tools::execute_agent_tool(),
            tools::get_execution_status_tool(),
        ];

        let result = ToolsListResult { tools, next_cursor: None };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => self.error_response(id, McpError::SerializationError(e)),
        }
    }

    async fn handle_tools_call(&self, id: Option<JsonRpcId>, params: Value) -> JsonRpcResponse {
        let params: ToolCallParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, "Failed to parse tool call params");
                return self.error_response(
                    id,
                    McpError::InvalidParams(format!("Failed to parse tool call params: {}", e)),
                );
            }
        };

        if !self.initialized {
            debug!(tool_name = %params.name, "Tool call received before initialize");
        }

        debug!(tool_name = %params.name, "Executing tool call");

        let args = params.arguments.unwrap_or(serde_json::json!({}));

        let result = match params.name.as_str() {
            "create_agent" => tools::execute_create_agent(&self.client, args).await,
            "get_agents" => tools::execute_get_agents(&self.client, args).await,
            "get_agent" => tools::execute_get_agent(&self.client, args).await,
            "update_agent" => tools::execute_update_agent(&self.client, args).await,
            "delete_agent" => tools::execute_delete_agent(&self.client, args).await,
            "execute_agent" => tools::execute_execute_agent(&self.client, args).await,
            "get_execution_status" => {
                tools::execute_get_execution_status(&self.client, args).await
            }
            _ => Err(McpError::ToolNotFound(params.name.clone())),
        };

        match result {
            Ok(tool_result) => match serde_json::to_value(tool_result) {
                Ok(value) => JsonRpcResponse::success(id, value),
                Err(e) => self.error_response(id, McpError::SerializationError(e)),
            },
            Err(e) => {
                warn!(tool_name = %params.name, error = %e, "Tool call failed");
                self.error_response(id, e)
            }
        }
    }

    fn method_not_found(&self, id: Option<JsonRpcId>, method: &str) -> JsonRpcResponse {
        warn!(method = %method, "Method not found");
        self.error_response(id, McpError::MethodNotFound(method.to_string()))
    }

    fn error_response(&self, id: Option<JsonRpcId>, error: McpError) -> JsonRpcResponse {
        JsonRpcResponse::error(id, error.to_json_rpc_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BolnaConfig;
    use serde_json::json;

    fn test_handler() -> McpHandler {
        let client = BolnaClient::new(BolnaConfig {
            base_url: "http://127.0.0.1:0".to_string(),
            api_key: "bn-test-key".to_string(),
            timeout_seconds: 1,
        });
        McpHandler::new(client)
    }

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(JsonRpcId::Number(1)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize_advertises_tools_capability() {
        let mut handler = test_handler();
        let response = handler
            .handle_request(request(
                "initialize",
                json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": {"name": "test-client", "version": "0.0.1"}
                }),
            ))
            .await;

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], json!(PROTOCOL_VERSION));
        assert!(result["capabilities"]["tools"].is_object());
        assert_eq!(result["serverInfo"]["name"], json!(crate::APP_NAME));
    }

    #[tokio::test]
    async fn test_tools_list_exposes_all_seven_operations() {
        let mut handler = test_handler();
        let response = handler.handle_request(request("tools/list", Value::Null)).await;

        let result = response.result.unwrap();
        let names: Vec<&str> =
            result["tools"].as_array().unwrap().iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "create_agent",
                "get_agents",
                "get_agent",
                "update_agent",
                "delete_agent",
                "execute_agent",
                "get_execution_status"
            ]
        );
    }

    #[tokio::test]
    async fn test_ping() {
        let mut handler = test_handler();
        let response = handler.handle_request(request("ping", Value::Null)).await;
        assert!(response.error.is_none());
        assert_eq!(response.result.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_unknown_method_returns_method_not_found() {
        let mut handler = test_handler();
        let response = handler.handle_request(request("resources/list", Value::Null)).await;
        assert_eq!(response.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_tool_returns_method_not_found() {
        let mut handler = test_handler();
        let response = handler
            .handle_request(request("tools/call", json!({"name": "no_such_tool"})))
            .await;
        assert_eq!(response.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tool_call_with_missing_argument_is_invalid_params() {
        let mut handler = test_handler();
        let response = handler
            .handle_request(request("tools/call", json!({"name": "get_agent", "arguments": {}})))
            .await;
        assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
    }
}
