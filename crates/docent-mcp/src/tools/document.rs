//! Document tool - Fetch one document by identifier

use crate::error::McpError;
use crate::tools::views::{DocumentInfo, RelatedInfo};
use docent_graph::Corpus;
use docent_search::SearchEngine;
use serde::{Deserialize, Serialize};

/// Parameters for fetching a document
#[derive(Debug, Deserialize)]
pub struct DocumentParams {
    /// Identifier, with or without the `.md` extension
    pub id: String,
    /// Expand relationship edges into summaries
    #[serde(default)]
    pub include_related: bool,
}

/// Full document record
#[derive(Debug, Serialize)]
pub struct DocumentResult {
    /// The document, content included
    #[serde(flatten)]
    pub document: DocumentInfo,
    /// Related documents; absent unless requested and non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<RelatedInfo>,
}

/// Handle docent_get_document tool invocation
pub fn handle_get_document(
    corpus: &Corpus,
    engine: &SearchEngine,
    params: DocumentParams,
) -> Result<DocumentResult, McpError> {
    let doc = corpus
        .lookup(&params.id)
        .ok_or_else(|| McpError::DocumentNotFound(params.id.clone()))?;

    let related = if params.include_related {
        let related = engine.related(corpus, doc, None);
        (!related.is_empty()).then(|| RelatedInfo::from(&related))
    } else {
        None
    };

    Ok(DocumentResult {
        document: DocumentInfo::new(doc, true),
        related,
    })
}
