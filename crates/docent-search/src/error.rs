//! Error types for search operations

use thiserror::Error;

/// Errors that can occur while answering a search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The request itself is unusable (empty query, zero limit)
    #[error("Invalid search request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
