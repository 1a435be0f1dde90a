//! Related-document expansion

use docent_domain::{Document, DocumentSummary, EdgeType};
use docent_graph::Corpus;

/// Resolved documents for one edge type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedGroup {
    /// Edge type
    pub edge: EdgeType,
    /// Resolved documents, in edge order
    pub documents: Vec<DocumentSummary>,
}

/// Related documents grouped by edge type
///
/// Groups appear in [`EdgeType::ALL`] order; edge types with no resolvable
/// members are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedDocuments {
    /// Non-empty groups
    pub groups: Vec<RelatedGroup>,
}

impl RelatedDocuments {
    /// Whether no edge resolved
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Documents for an edge type, if any resolved
    pub fn get(&self, edge: EdgeType) -> Option<&[DocumentSummary]> {
        self.groups
            .iter()
            .find(|group| group.edge == edge)
            .map(|group| group.documents.as_slice())
    }

    /// Total resolved documents across groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.documents.len()).sum()
    }
}

/// Expand `doc`'s edges into summaries
///
/// At most `max_per_type` identifiers are taken from each edge list before
/// resolution; identifiers that do not resolve are dropped silently.
pub fn resolve_related(corpus: &Corpus, doc: &Document, max_per_type: usize) -> RelatedDocuments {
    let groups = EdgeType::ALL
        .iter()
        .filter_map(|&edge| {
            let documents: Vec<DocumentSummary> = doc
                .relationships
                .get(edge)
                .iter()
                .take(max_per_type)
                .filter_map(|id| corpus.resolve(id))
                .map(Document::summary_view)
                .collect();
            (!documents.is_empty()).then_some(RelatedGroup { edge, documents })
        })
        .collect();

    RelatedDocuments { groups }
}
