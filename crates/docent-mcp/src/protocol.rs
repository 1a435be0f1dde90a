//! MCP protocol types (JSON-RPC 2.0)

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Protocol revision this server speaks
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC request or notification
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID (absent for notifications; an explicit `null` is still a request)
    #[serde(default, deserialize_with = "present_id")]
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Value,
}

/// Any `id` member that is present, `null` included
fn present_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl JsonRpcRequest {
    /// Notifications carry no ID and get no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC response (success)
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID
    pub id: Option<Value>,
    /// Result data
    pub result: Value,
}

/// JSON-RPC error response
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID
    pub id: Option<Value>,
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error code
    pub code: i32,
    /// Error message
    pub message: String,
}

impl JsonRpcResponse {
    /// Create a new success response
    pub fn new(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcError {
    /// Create a new error response
    pub fn new(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            error: ErrorDetail { code, message },
        }
    }
}

/// MCP tool list response
#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    /// Available tools
    pub tools: Vec<ToolDefinition>,
}

/// Tool definition
#[derive(Debug, Serialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input schema (JSON Schema)
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result of a `tools/call`
///
/// The payload is returned twice: as pretty-printed text for clients that
/// only read `content`, and as `structuredContent` for those that parse it.
#[derive(Debug, Serialize)]
pub struct ToolCallResult {
    /// Text blocks
    pub content: Vec<TextContent>,
    /// Tool output as JSON
    #[serde(rename = "structuredContent")]
    pub structured_content: Value,
}

/// One text content block
#[derive(Debug, Serialize)]
pub struct TextContent {
    /// Always "text"
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Block text
    pub text: String,
}

impl ToolCallResult {
    /// Wrap a tool's JSON output
    pub fn new(value: Value) -> Result<Self, serde_json::Error> {
        let text = serde_json::to_string_pretty(&value)?;
        Ok(Self {
            content: vec![TextContent { kind: "text", text }],
            structured_content: value,
        })
    }
}

/// MCP server info
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// Initialize response
#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    /// Protocol version
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server info
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Capabilities
    pub capabilities: Capabilities,
}

/// Server capabilities
#[derive(Debug, Serialize)]
pub struct Capabilities {
    /// Tools capability
    pub tools: ToolsCapability,
}

/// Tools capability
#[derive(Debug, Serialize)]
pub struct ToolsCapability {
    /// Whether the tool list can change at runtime
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}
