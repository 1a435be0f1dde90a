//! Search tool - Ranked full-text search over the corpus

use crate::error::McpError;
use crate::tools::views::DocumentInfo;
use docent_domain::DocumentType;
use docent_graph::Corpus;
use docent_search::{SearchEngine, SearchRequest};
use serde::{Deserialize, Serialize};

/// Parameters for searching documents
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Query text (required, non-empty)
    pub query: String,
    /// Filter by category
    #[serde(default)]
    pub category: Option<String>,
    /// Filter by document type tags
    #[serde(default)]
    pub document_types: Vec<String>,
    /// What the reader is trying to do
    #[serde(default)]
    pub context: Option<String>,
    /// Drop outdated documents
    #[serde(default)]
    pub exclude_outdated: bool,
    /// Maximum number of results
    #[serde(default)]
    pub limit: Option<usize>,
    /// Include raw markdown in each result
    #[serde(default)]
    pub include_content: bool,
}

impl SearchParams {
    /// Convert to an engine request, rejecting unknown type tags
    pub fn to_request(&self) -> Result<SearchRequest, McpError> {
        let document_types = self
            .document_types
            .iter()
            .map(|tag| {
                DocumentType::parse(tag)
                    .ok_or_else(|| McpError::InvalidParams(format!("unknown document type: {}", tag)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchRequest {
            query: self.query.clone(),
            category: self.category.clone(),
            document_types,
            context: self.context.clone(),
            exclude_outdated: self.exclude_outdated,
            limit: self.limit,
        })
    }
}

/// One ranked hit
#[derive(Debug, Serialize)]
pub struct SearchHit {
    /// Relevance score
    pub score: u32,
    /// The matching document
    #[serde(flatten)]
    pub document: DocumentInfo,
}

/// Result of a search
#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// Number of results returned
    pub count: usize,
    /// Query text
    pub query: String,
    /// Hits, best first
    pub results: Vec<SearchHit>,
}

/// Handle docent_search tool invocation
pub fn handle_search(
    corpus: &Corpus,
    engine: &SearchEngine,
    params: SearchParams,
    now_millis: u64,
) -> Result<SearchResult, McpError> {
    let request = params.to_request()?;
    let hits = engine.search(corpus, &request, now_millis)?;

    let results: Vec<SearchHit> = hits
        .iter()
        .map(|hit| SearchHit {
            score: hit.score,
            document: DocumentInfo::new(hit.document, params.include_content),
        })
        .collect();

    Ok(SearchResult {
        count: results.len(),
        query: params.query,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_deserialize() {
        let json = r#"{
            "query": "deploy",
            "category": "ops",
            "document_types": ["guide", "setup"],
            "context": "first deployment",
            "exclude_outdated": true,
            "limit": 5,
            "include_content": true
        }"#;

        let params: SearchParams = serde_json::from_str(json).unwrap();
        let request = params.to_request().unwrap();
        assert_eq!(request.category.as_deref(), Some("ops"));
        assert_eq!(request.document_types, vec![DocumentType::Guide, DocumentType::SetupGuide]);
        assert!(request.exclude_outdated);
        assert_eq!(request.limit, Some(5));
        assert!(params.include_content);
    }

    #[test]
    fn test_search_params_defaults() {
        let params: SearchParams = serde_json::from_str(r#"{ "query": "test" }"#).unwrap();
        assert!(params.document_types.is_empty());
        assert!(!params.exclude_outdated);
        assert!(!params.include_content);
        assert_eq!(params.limit, None);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let params: SearchParams =
            serde_json::from_str(r#"{ "query": "x", "document_types": ["poem"] }"#).unwrap();
        assert!(matches!(params.to_request(), Err(McpError::InvalidParams(_))));
    }
}
