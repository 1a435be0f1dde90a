//! Error types for MCP server operations.

use docent_search::SearchError;
use docent_store::StoreError;
use thiserror::Error;

/// MCP server error types
#[derive(Error, Debug)]
pub enum McpError {
    /// Invalid request format
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tool arguments missing or malformed
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// No document matches the identifier
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Search request rejected
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Loading or reloading the corpus failed
    #[error("Corpus error: {0}")]
    Store(#[from] StoreError),

    /// A result could not be serialized
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl McpError {
    /// Convert to JSON-RPC error code
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::InvalidRequest(_) => -32600,
            McpError::ToolNotFound(_) => -32601,
            McpError::InvalidParams(_) | McpError::Search(_) => -32602,
            McpError::DocumentNotFound(_) => -32002,
            McpError::Store(_) => -32000,
            McpError::JsonError(_) => -32603,
            McpError::IoError(_) => -32000,
        }
    }
}
