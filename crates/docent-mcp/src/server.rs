//! MCP server implementation

use chrono::Utc;
use docent_search::SearchEngine;
use docent_store::{CorpusHandle, DocentConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};

use crate::error::McpError;
use crate::protocol::*;
use crate::tools;

/// MCP Server
///
/// Handles Model Context Protocol requests via stdio transport. Every request
/// works on a snapshot of the corpus, so a concurrent `docent_reload` never
/// changes the documents a request is looking at.
pub struct McpServer {
    handle: CorpusHandle,
    engine: SearchEngine,
    clock: fn() -> u64,
}

impl McpServer {
    /// Load the corpus described by `config` and create a server over it
    pub fn new(config: &DocentConfig) -> Result<Self, McpError> {
        let handle = CorpusHandle::open(config)?;
        let stats = handle.snapshot().stats().clone();
        info!(
            "Loaded {} documents from {} ({} internal links, {} dangling)",
            stats.documents,
            config.docs_root.display(),
            stats.internal_links,
            stats.dangling_references
        );

        Ok(Self {
            handle,
            engine: SearchEngine::new(config.search.clone()),
            clock: now_millis,
        })
    }

    /// Replace the wall clock used for freshness and recency
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    /// Run the MCP server (stdio transport)
    ///
    /// Reads JSON-RPC requests from stdin and writes responses to stdout.
    pub fn run(&self) -> Result<(), McpError> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        self.serve(stdin.lock(), &mut stdout)
    }

    /// Serve line-delimited JSON-RPC until `reader` is exhausted
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> Result<(), McpError> {
        info!("MCP server started");

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_message(&line) {
                write_response(writer, &response)?;
            }
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Handle one raw JSON-RPC message
    ///
    /// Returns `None` for notifications, which get no response.
    pub fn handle_message(&self, line: &str) -> Option<Value> {
        debug!("Received request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse request: {}", e);
                return Some(error_response(None, -32700, format!("Parse error: {}", e)));
            }
        };

        if request.jsonrpc != "2.0" {
            let e = McpError::InvalidRequest(format!("unsupported jsonrpc version '{}'", request.jsonrpc));
            return Some(error_response(request.id, e.error_code(), e.to_string()));
        }
        if request.is_notification() {
            debug!("Notification: {}", request.method);
            return None;
        }

        Some(self.handle_request(request))
    }

    /// Handle a JSON-RPC request
    fn handle_request(&self, request: JsonRpcRequest) -> Value {
        let id = request.id.clone();

        let result = match request.method.as_str() {
            "initialize" => to_json(self.initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => to_json(ToolListResponse { tools: tool_definitions() }),
            "tools/call" => self.handle_tool_call(request.params),
            _ => {
                return error_response(id, -32601, format!("Method not found: {}", request.method));
            }
        };

        match result {
            Ok(value) => success_response(id, value),
            Err(e) => {
                warn!("Request failed: {}", e);
                error_response(id, e.error_code(), e.to_string())
            }
        }
    }

    fn initialize(&self) -> InitializeResponse {
        InitializeResponse {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ServerInfo {
                name: "docent-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: Capabilities {
                tools: ToolsCapability { list_changed: false },
            },
        }
    }

    /// Handle tools/call request
    fn handle_tool_call(&self, params: Value) -> Result<Value, McpError> {
        let tool_name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::InvalidParams("Missing tool name".to_string()))?;
        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        let corpus = self.handle.snapshot();
        let now = (self.clock)();

        // Route to appropriate tool handler
        let output = match tool_name {
            "docent_search" => to_json(tools::handle_search(&corpus, &self.engine, parse(arguments)?, now)?),
            "docent_get_document" => to_json(tools::handle_get_document(&corpus, &self.engine, parse(arguments)?)?),
            "docent_related" => to_json(tools::handle_related(&corpus, &self.engine, parse(arguments)?)?),
            "docent_categories" => to_json(tools::handle_categories(&corpus)),
            "docent_outdated" => to_json(tools::handle_outdated(&corpus, &self.engine, parse(arguments)?, now)),
            "docent_reload" => to_json(tools::handle_reload(&self.handle)?),
            _ => return Err(McpError::ToolNotFound(tool_name.to_string())),
        }?;

        to_json(ToolCallResult::new(output)?)
    }
}

/// Tool definitions for tools/list response
fn tool_definitions() -> Vec<ToolDefinition> {
    let types: Vec<&str> = docent_domain::DocumentType::ALL.iter().map(|t| t.as_str()).collect();
    vec![
        ToolDefinition {
            name: "docent_search".to_string(),
            description: "Search the documentation by keyword, ranked by relevance".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Search query text"},
                    "category": {"type": "string", "description": "Filter by category (top-level folder)"},
                    "document_types": {
                        "type": "array",
                        "items": {"type": "string", "enum": types},
                        "description": "Filter by document type"
                    },
                    "context": {"type": "string", "description": "What you are trying to do, used to boost relevant documents"},
                    "exclude_outdated": {"type": "boolean", "description": "Drop outdated documents", "default": false},
                    "limit": {"type": "integer", "description": "Maximum results (default: 10)", "minimum": 1},
                    "include_content": {"type": "boolean", "description": "Include full markdown in results", "default": false}
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: "docent_get_document".to_string(),
            description: "Fetch a document by identifier, optionally with related documents".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {"type": "string", "description": "Document path, e.g. setup/README"},
                    "include_related": {"type": "boolean", "description": "Expand prerequisites, follow-ups, see-also and dependents", "default": false}
                },
                "required": ["id"]
            }),
        },
        ToolDefinition {
            name: "docent_related".to_string(),
            description: "List documents related to a document, grouped by relationship".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {"type": "string", "description": "Document path"},
                    "max_per_type": {"type": "integer", "description": "Maximum documents per relationship (default: 3)", "minimum": 1}
                },
                "required": ["id"]
            }),
        },
        ToolDefinition {
            name: "docent_categories".to_string(),
            description: "List document categories with document counts".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        },
        ToolDefinition {
            name: "docent_outdated".to_string(),
            description: "List documents that look outdated and why".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "category": {"type": "string", "description": "Filter by category"}
                }
            }),
        },
        ToolDefinition {
            name: "docent_reload".to_string(),
            description: "Re-read the documentation tree from disk".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        },
    ]
}

fn parse<T: DeserializeOwned>(arguments: Value) -> Result<T, McpError> {
    serde_json::from_value(arguments).map_err(|e| McpError::InvalidParams(e.to_string()))
}

fn to_json<T: Serialize>(value: T) -> Result<Value, McpError> {
    Ok(serde_json::to_value(value)?)
}

fn success_response(id: Option<Value>, result: Value) -> Value {
    json!(JsonRpcResponse::new(id, result))
}

fn error_response(id: Option<Value>, code: i32, message: String) -> Value {
    json!(JsonRpcError::new(id, code, message))
}

/// Write response to the transport
fn write_response<W: Write>(writer: &mut W, response: &Value) -> Result<(), McpError> {
    let response_str = serde_json::to_string(response)?;
    writeln!(writer, "{}", response_str)?;
    writer.flush()?;
    debug!("Sent response: {}", response_str);
    Ok(())
}

/// Wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
