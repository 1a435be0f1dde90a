//! Core graph builder implementation

use crate::config::GraphConfig;
use crate::corpus::Corpus;
use crate::error::GraphError;
use crate::inference::{apply_rules, default_rules, InferenceRule};
use crate::links::extract_links;
use crate::resolver::IdentifierIndex;
use crate::types::GraphStats;
use docent_domain::traits::ReferenceResolver;
use docent_domain::{Document, EdgeType};
use std::collections::HashSet;
use tracing::{debug, info};

/// Builds the relationship graph for a corpus in one pass
///
/// The build runs in phases: links and explicit edges are extracted per
/// document, reverse edges are combined in one deterministic step once every
/// document has been extracted, and inference runs last so its rules can see
/// the whole corpus.
pub struct GraphBuilder {
    config: GraphConfig,
    rules: Vec<InferenceRule>,
}

impl GraphBuilder {
    /// Create a builder with the default inference rules
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            rules: default_rules(),
        }
    }

    /// Replace the inference rules
    pub fn with_rules(mut self, rules: Vec<InferenceRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Builder configuration
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Build the graph and freeze the corpus
    ///
    /// `documents` must be in corpus order; that order is kept and used for
    /// every tie-break downstream.
    pub fn build(&self, mut documents: Vec<Document>) -> Result<Corpus, GraphError> {
        self.config.validate().map_err(GraphError::Config)?;
        check_identifiers(&documents)?;

        let mut stats = GraphStats {
            documents: documents.len(),
            ..GraphStats::default()
        };

        // Phase 1: per-document extraction
        for doc in documents.iter_mut() {
            let extracted = extract_links(&doc.id, &doc.content);
            stats.internal_links += extracted.links.internal.len();
            stats.external_links += extracted.links.external.len();
            stats.explicit_edges += extracted.explicit.len();
            doc.links = extracted.links;
            doc.relationships = extracted.explicit;
        }

        let index = IdentifierIndex::new(
            documents.iter().map(|d| d.id.as_str()),
            self.config.ambiguity_policy,
        );

        // Phase 2: collect forward links, then combine reverse edges
        let mut reverse: Vec<(usize, String)> = Vec::new();
        for (source, doc) in documents.iter().enumerate() {
            for link in &doc.links.internal {
                match index.resolve(link) {
                    Some(target) if target != source => reverse.push((target, doc.id.clone())),
                    Some(_) => {}
                    None => {
                        debug!("Dangling link '{}' in {}", link, doc.id);
                        stats.dangling_references += 1;
                    }
                }
            }
        }
        for (target, source_id) in reverse {
            if documents[target]
                .relationships
                .push_unique(EdgeType::Dependents, source_id)
            {
                stats.dependent_edges += 1;
            }
        }

        // Phase 3: inference over the complete corpus
        if self.config.infer_relationships {
            stats.inferred_edges = apply_rules(&mut documents, &self.rules, &self.config);
        }

        info!(
            "Built relationship graph: {} documents, {} internal / {} external links, {} explicit, {} inferred, {} dependent edges, {} dangling",
            stats.documents,
            stats.internal_links,
            stats.external_links,
            stats.explicit_edges,
            stats.inferred_edges,
            stats.dependent_edges,
            stats.dangling_references
        );

        Ok(Corpus::new(documents, index, stats))
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

fn check_identifiers(documents: &[Document]) -> Result<(), GraphError> {
    let mut seen = HashSet::new();
    for (position, doc) in documents.iter().enumerate() {
        if doc.id.trim().is_empty() {
            return Err(GraphError::EmptyIdentifier(position));
        }
        if !seen.insert(doc.id.as_str()) {
            return Err(GraphError::DuplicateDocument(doc.id.clone()));
        }
    }
    Ok(())
}
