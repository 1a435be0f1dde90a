//! Docent Search
//!
//! Query-time services over a frozen [`Corpus`](docent_graph::Corpus).
//!
//! # Overview
//!
//! - **Freshness**: classifies documents as outdated by age, deprecation
//!   markers and end-of-life technology versions
//! - **Scoring**: filters and ranks documents for a query, with optional
//!   reader context
//! - **Related**: expands a document's relationship edges into summaries
//!
//! Nothing here mutates the corpus. The current time is always passed in,
//! so every result is reproducible.
//!
//! # Usage
//!
//! ```
//! use docent_domain::{Document, DocumentType};
//! use docent_graph::GraphBuilder;
//! use docent_search::{SearchEngine, SearchRequest};
//!
//! let corpus = GraphBuilder::default()
//!     .build(vec![
//!         Document::new("setup/README.md", "Getting Started", "Install the tools.")
//!             .with_type(DocumentType::SetupGuide),
//!         Document::new("setup/guide.md", "Guide", "Getting started is covered elsewhere.")
//!             .with_type(DocumentType::Guide),
//!     ])
//!     .unwrap();
//!
//! let engine = SearchEngine::default();
//! let results = engine
//!     .search(&corpus, &SearchRequest::new("Getting Started"), 0)
//!     .unwrap();
//! assert_eq!(results[0].document.id, "setup/README.md");
//! ```
//!
//! # Configuration
//!
//! ```toml
//! default_limit = 10
//! max_limit = 100
//! related_per_type = 3
//!
//! [freshness]
//! max_age_days = 365
//! check_markers = true
//! check_legacy_versions = true
//! ```

#![warn(missing_docs)]

mod config;
mod error;

pub mod freshness;
pub mod related;
pub mod scoring;

pub use config::{FreshnessConfig, SearchConfig};
pub use error::SearchError;
pub use freshness::{FreshnessAssessor, FreshnessReport, OutdatedDocument, OutdatedReason};
pub use related::{resolve_related, RelatedDocuments, RelatedGroup};
pub use scoring::{ScoredDocument, SearchEngine, SearchRequest};
