//! Catalog tools - Categories, outdated documents and reload

use crate::error::McpError;
use crate::tools::views::OutdatedInfo;
use docent_graph::{Corpus, GraphStats};
use docent_search::SearchEngine;
use docent_store::CorpusHandle;
use serde::{Deserialize, Serialize};

/// One category and its size
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    /// Category name
    pub name: String,
    /// Documents in the category
    pub documents: usize,
}

/// Result of listing categories
#[derive(Debug, Serialize)]
pub struct CategoriesResult {
    /// Documents in the corpus
    pub total_documents: usize,
    /// Categories in first-seen corpus order
    pub categories: Vec<CategoryInfo>,
}

/// Handle docent_categories tool invocation
pub fn handle_categories(corpus: &Corpus) -> CategoriesResult {
    CategoriesResult {
        total_documents: corpus.len(),
        categories: corpus
            .categories()
            .into_iter()
            .map(|(name, documents)| CategoryInfo { name, documents })
            .collect(),
    }
}

/// Parameters for listing outdated documents
#[derive(Debug, Default, Deserialize)]
pub struct OutdatedParams {
    /// Only documents in this category
    #[serde(default)]
    pub category: Option<String>,
}

/// Result of listing outdated documents
#[derive(Debug, Serialize)]
pub struct OutdatedResult {
    /// Number of outdated documents
    pub count: usize,
    /// Outdated documents in corpus order
    pub documents: Vec<OutdatedInfo>,
}

/// Handle docent_outdated tool invocation
pub fn handle_outdated(
    corpus: &Corpus,
    engine: &SearchEngine,
    params: OutdatedParams,
    now_millis: u64,
) -> OutdatedResult {
    let documents: Vec<OutdatedInfo> = engine
        .freshness()
        .outdated_documents(corpus, now_millis)
        .iter()
        .filter(|outdated| {
            params
                .category
                .as_deref()
                .is_none_or(|category| outdated.document.category == category)
        })
        .map(OutdatedInfo::from)
        .collect();

    OutdatedResult {
        count: documents.len(),
        documents,
    }
}

/// Handle docent_reload tool invocation
pub fn handle_reload(handle: &CorpusHandle) -> Result<GraphStats, McpError> {
    Ok(handle.reload()?)
}
