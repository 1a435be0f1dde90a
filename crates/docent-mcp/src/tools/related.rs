//! Related tool - Expand a document's relationship edges

use crate::error::McpError;
use crate::tools::views::RelatedInfo;
use docent_graph::Corpus;
use docent_search::SearchEngine;
use serde::{Deserialize, Serialize};

/// Parameters for expanding related documents
#[derive(Debug, Deserialize)]
pub struct RelatedParams {
    /// Identifier, with or without the `.md` extension
    pub id: String,
    /// Cap per edge type (defaults to the configured cap)
    #[serde(default)]
    pub max_per_type: Option<usize>,
}

/// Related documents of one document
#[derive(Debug, Serialize)]
pub struct RelatedResult {
    /// Canonical identifier of the resolved document
    pub id: String,
    /// Number of related documents across all groups
    pub count: usize,
    /// Groups keyed by edge type
    pub related: RelatedInfo,
}

/// Handle docent_related tool invocation
pub fn handle_related(
    corpus: &Corpus,
    engine: &SearchEngine,
    params: RelatedParams,
) -> Result<RelatedResult, McpError> {
    if params.max_per_type == Some(0) {
        return Err(McpError::InvalidParams("max_per_type must be > 0".to_string()));
    }
    let doc = corpus
        .lookup(&params.id)
        .ok_or_else(|| McpError::DocumentNotFound(params.id.clone()))?;

    let related = engine.related(corpus, doc, params.max_per_type);
    Ok(RelatedResult {
        id: doc.id.clone(),
        count: related.len(),
        related: RelatedInfo::from(&related),
    })
}
