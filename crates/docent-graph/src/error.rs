//! Error types for graph building

use thiserror::Error;

/// Errors that can occur while building the relationship graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// Two documents share a canonical identifier
    #[error("Duplicate document identifier: {0}")]
    DuplicateDocument(String),

    /// A document has an empty identifier
    #[error("Document at position {0} has an empty identifier")]
    EmptyIdentifier(usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
