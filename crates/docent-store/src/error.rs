//! Error types for loading and holding the corpus

use docent_graph::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading documents or swapping corpora
#[derive(Error, Debug)]
pub enum StoreError {
    /// The docs root is missing or is not a directory
    #[error("Docs root not found: {}", .0.display())]
    DocsRootNotFound(PathBuf),

    /// The docs root could not be walked
    #[error("Failed to read docs root {}: {source}", path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph build error
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}
