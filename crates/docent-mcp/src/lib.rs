//! Docent MCP Server
//!
//! Model Context Protocol server that lets AI clients (Claude Desktop, Cline,
//! etc.) search and navigate a markdown documentation tree.
//!
//! Provides 6 MCP tools:
//! - `docent_search` - Ranked keyword search with filters and reader context
//! - `docent_get_document` - Full document record, optionally with related documents
//! - `docent_related` - Prerequisites, follow-ups, see-also and dependents
//! - `docent_categories` - Categories with document counts
//! - `docent_outdated` - Documents flagged as outdated, with reasons
//! - `docent_reload` - Re-read the tree from disk
//!
//! # Example
//!
//! ```no_run
//! use docent_mcp::McpServer;
//! use docent_store::DocentConfig;
//!
//! let server = McpServer::new(&DocentConfig::for_root("./docs")).unwrap();
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod protocol;
mod server;

pub mod tools;

pub use error::McpError;
pub use server::{now_millis, McpServer};
