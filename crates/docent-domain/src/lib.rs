//! Docent Domain Layer
//!
//! This crate contains the document model shared by every other Docent crate.
//! It performs no I/O and defines the value objects and trait interfaces that
//! the graph builder, the search engine and the loaders depend upon.
//!
//! ## Key Concepts
//!
//! - **Document**: an immutable, already-parsed markdown file from the corpus
//! - **Document Type**: coarse classification (guide, api-docs, setup-guide, ...)
//! - **Link Set**: internal and external references found in a document
//! - **Relationship Edges**: prerequisites, follow-ups, see-also and dependents
//! - **Corpus-relative paths**: canonical identifiers and their categories
//!
//! ## Architecture
//!
//! - Pure data and logic only
//! - Infrastructure (file walking, front matter, transports) lives in other crates
//! - Trait definitions for the seams between the core and its collaborators

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod document_type;
pub mod path;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use document::{Document, DocumentSummary, Metadata, MILLIS_PER_DAY};
pub use document_type::DocumentType;
pub use relationship::{EdgeType, LinkSet, RelationshipEdges};
