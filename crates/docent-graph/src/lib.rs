//! Docent Graph
//!
//! Builds the relationship graph between markdown documents.
//!
//! # Overview
//!
//! Every document's raw content is scanned for markdown links and explicit
//! relationship sections ("Prerequisites", "See also", "Next steps", ...).
//! Internal links are resolved against the corpus to synthesize reverse
//! `dependents` edges, and a small table of heuristic rules fills edge types
//! the author left empty.
//!
//! # Architecture
//!
//! ```text
//! Vec<Document> → extract links → resolve + reverse edges → infer → Corpus
//! ```
//!
//! # Example Usage
//!
//! ```
//! use docent_domain::{Document, DocumentType};
//! use docent_graph::{GraphBuilder, GraphConfig};
//!
//! let docs = vec![
//!     Document::new("setup/README.md", "Getting Started", "Install first.")
//!         .with_type(DocumentType::SetupGuide),
//!     Document::new("setup/guide.md", "Guide", "see also: - setup/README")
//!         .with_type(DocumentType::Guide),
//! ];
//!
//! let corpus = GraphBuilder::new(GraphConfig::default()).build(docs).unwrap();
//! let guide = corpus.resolve("setup/guide").unwrap();
//! assert_eq!(guide.relationships.see_also, vec!["setup/README"]);
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod corpus;
mod error;
mod types;

pub mod inference;
pub mod links;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use builder::GraphBuilder;
pub use config::{AmbiguityPolicy, GraphConfig};
pub use corpus::Corpus;
pub use error::GraphError;
pub use resolver::{IdentifierIndex, MatchStrategy, Resolution, STRICT_STRATEGIES};
pub use types::{ExtractedLinks, GraphStats};
