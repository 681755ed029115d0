//! MCP Protocol Types
//!
//! JSON-RPC 2.0 and MCP message types for the stdio transport. Only the
//! surface this server uses is modeled: initialization, ping, and the tools
//! capability.

use serde::{Deserialize, Serialize};

/// Supported MCP protocol version
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC 2.0 Request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<JsonRpcId>,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<JsonRpcId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Build a success response carrying the given result value
    pub fn success(id: Option<JsonRpcId>, result: serde_json::Value) -> Self {
        Self { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    /// Build an error response
    pub fn error(id: Option<JsonRpcId>, error: JsonRpcError) -> Self {
        Self { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum JsonRpcId {
    Number(i64),
    String(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// JSON-RPC error codes used by the MCP surface
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// MCP Initialize Parameters
///
/// Lenient on purpose: clients vary in what they send, and nothing beyond
/// the protocol version and client identity matters to this server.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    #[serde(default)]
    pub protocol_version: String,
    #[serde(default)]
    pub capabilities: serde_json::Value,
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// Client information provided during initialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// MCP Initialize Result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

/// Server information provided during initialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// Capabilities advertised by this server (tools only)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCapability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// MCP Tool Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Unique identifier for the tool
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input validation
    pub input_schema: serde_json::Value,
}

/// MCP Tools List Result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsListResult {
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// MCP Tool Call Parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
}

/// MCP Tool Call Result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub content: Vec<ContentBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_deserializes_without_params() {
        let raw = r#"{"jsonrpc": "2.0", "id": 1, "method": "ping"}"#;
        let request: JsonRpcRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.method, "ping");
        assert_eq!(request.id, Some(JsonRpcId::Number(1)));
        assert!(request.params.is_null());
    }

    #[test]
    fn test_response_omits_absent_fields() {
        let response = JsonRpcResponse::success(Some(JsonRpcId::Number(1)), json!({"ok": true}));
        let serialized = serde_json::to_value(&response).unwrap();
        assert!(serialized.get("error").is_none());
        assert_eq!(serialized["result"]["ok"], json!(true));
    }

    #[test]
    fn test_string_ids_round_trip() {
        let raw = r#"{"jsonrpc": "2.0", "id": "req-7", "method": "tools/list"}"#;
        let request: JsonRpcRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.id, Some(JsonRpcId::String("req-7".to_string())));
    }

    #[test]
    fn test_tool_serializes_input_schema_camel_case() {
        let tool = Tool {
            name: "get_agent".to_string(),
            description: "Retrieve an agent".to_string(),
            input_schema: json!({"type": "object"}),
        };
        let serialized = serde_json::to_value(&tool).unwrap();
        assert!(serialized.get("inputSchema").is_some());
        assert!(serialized.get("input_schema").is_none());
    }

    #[test]
    fn test_content_block_tagging() {
        let block = ContentBlock::Text { text: "hello".to_string() };
        let serialized = serde_json::to_value(&block).unwrap();
        assert_eq!(serialized["type"], json!("text"));
        assert_eq!(serialized["text"], json!("hello"));
    }

    #[test]
    fn test_tool_call_result_is_error_field() {
        let result = ToolCallResult {
            content: vec![ContentBlock::Text { text: "null".to_string() }],
            is_error: Some(true),
        };
        let serialized = serde_json::to_value(&result).unwrap();
        assert_eq!(serialized["isError"], json!(true));
    }
}
