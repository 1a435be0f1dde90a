//! Intermediate and result types for graph building

use docent_domain::{LinkSet, RelationshipEdges};
use serde::Serialize;

/// Output of the link extractor for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedLinks {
    /// Internal and external links
    pub links: LinkSet,

    /// Explicitly declared prerequisites, follow-ups and see-also edges
    pub explicit: RelationshipEdges,
}

/// Statistics about one graph build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Documents in the corpus
    pub documents: usize,

    /// Distinct internal links across all documents
    pub internal_links: usize,

    /// Distinct external links across all documents
    pub external_links: usize,

    /// Author-declared forward edges
    pub explicit_edges: usize,

    /// Forward edges added by inference rules
    pub inferred_edges: usize,

    /// Reverse (`dependents`) edges
    pub dependent_edges: usize,

    /// Internal links that did not resolve to a document
    pub dangling_references: usize,
}
