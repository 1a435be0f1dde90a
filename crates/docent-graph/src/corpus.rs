//! The frozen, queryable corpus

use crate::resolver::{IdentifierIndex, STRICT_STRATEGIES};
use crate::types::GraphStats;
use crate::AmbiguityPolicy;
use docent_domain::traits::ReferenceResolver;
use docent_domain::Document;

/// Documents with their relationship graph, immutable after the build
///
/// Only [`GraphBuilder`](crate::GraphBuilder) creates a populated corpus.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
    index: IdentifierIndex,
    stats: GraphStats,
}

impl Corpus {
    pub(crate) fn new(documents: Vec<Document>, index: IdentifierIndex, stats: GraphStats) -> Self {
        Self {
            documents,
            index,
            stats,
        }
    }

    /// A corpus with no documents
    pub fn empty() -> Self {
        Self::new(
            Vec::new(),
            IdentifierIndex::new(std::iter::empty::<&str>(), AmbiguityPolicy::default()),
            GraphStats::default(),
        )
    }

    /// Documents in corpus order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus has no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document at a corpus position
    pub fn get(&self, position: usize) -> Option<&Document> {
        self.documents.get(position)
    }

    /// Resolve a loosely formatted reference to a document
    pub fn resolve(&self, raw: &str) -> Option<&Document> {
        self.index.resolve(raw).and_then(|position| self.documents.get(position))
    }

    /// Find the document a caller names, without fuzzy matching
    ///
    /// Accepts the identifier with or without its markdown extension.
    pub fn lookup(&self, id: &str) -> Option<&Document> {
        self.index
            .resolve_with(id, &STRICT_STRATEGIES)
            .index()
            .and_then(|position| self.documents.get(position))
    }

    /// Identifier index used for resolution
    pub fn index(&self) -> &IdentifierIndex {
        &self.index
    }

    /// Statistics from the build
    pub fn stats(&self) -> &GraphStats {
        &self.stats
    }

    /// Categories with document counts, in first-seen corpus order
    pub fn categories(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for doc in &self.documents {
            match counts.iter_mut().find(|(category, _)| *category == doc.category) {
                Some((_, count)) => *count += 1,
                None => counts.push((doc.category.clone(), 1)),
            }
        }
        counts
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::empty()
    }
}
