//! Multi-signal relevance scoring
//!
//! Search is filter-then-score. Filters are hard: a document that fails any
//! of them is never scored. Scoring adds integer bonuses from independent
//! signals (title, summary, content frequency, context, type and recency),
//! then results are sorted stably so ties keep corpus order.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::freshness::FreshnessAssessor;
use crate::related::{resolve_related, RelatedDocuments};
use docent_domain::{Document, DocumentType};
use docent_graph::Corpus;
use tracing::debug;

/// Bonus for a query found in the title
pub const TITLE_MATCH_BONUS: u32 = 100;
/// Additional bonus when the title is exactly the query
pub const EXACT_TITLE_BONUS: u32 = 50;
/// Bonus for a query found in the summary
pub const SUMMARY_MATCH_BONUS: u32 = 50;
/// Bonus per occurrence in the content
pub const CONTENT_OCCURRENCE_BONUS: u32 = 5;
/// Flat bonus for guides and setup guides
pub const GUIDE_TYPE_BONUS: u32 = 10;

/// A search request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query (required, matched case-insensitively)
    pub query: String,

    /// Only documents in this category
    pub category: Option<String>,

    /// Only documents of these types (empty means any)
    pub document_types: Vec<DocumentType>,

    /// Free-text description of what the reader is doing
    pub context: Option<String>,

    /// Drop documents the freshness assessor flags
    pub exclude_outdated: bool,

    /// Maximum results (defaults to the configured limit)
    pub limit: Option<usize>,
}

impl SearchRequest {
    /// Request with only a query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Restrict to a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to document types
    pub fn with_types(mut self, types: Vec<DocumentType>) -> Self {
        self.document_types = types;
        self
    }

    /// Add reader context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Drop outdated documents
    pub fn excluding_outdated(mut self) -> Self {
        self.exclude_outdated = true;
        self
    }

    /// Limit the number of results
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A matching document and its score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument<'a> {
    /// The matched document
    pub document: &'a Document,
    /// Relevance score (higher is better)
    pub score: u32,
}

/// One row of the context bonus table
#[derive(Clone, Copy)]
pub struct ContextRule {
    /// Rule name, used in tests and logs
    pub name: &'static str,
    /// Lowercase terms; any one of them in the context activates the rule
    pub triggers: &'static [&'static str],
    /// Whether the document earns the bonus
    pub matcher: fn(&Document) -> bool,
    /// Points added
    pub bonus: u32,
}

const ONBOARDING_TRIGGERS: &[&str] = &["new developer", "getting started", "onboarding"];
const API_TRIGGERS: &[&str] = &["api", "integration"];

/// Context bonus table; every matching row adds its bonus
pub const CONTEXT_RULES: [ContextRule; 7] = [
    ContextRule {
        name: "onboarding-setup-guide",
        triggers: ONBOARDING_TRIGGERS,
        matcher: is_setup_guide,
        bonus: 30,
    },
    ContextRule {
        name: "onboarding-intro-title",
        triggers: ONBOARDING_TRIGGERS,
        matcher: has_intro_title,
        bonus: 20,
    },
    ContextRule {
        name: "api-docs",
        triggers: API_TRIGGERS,
        matcher: is_api_docs,
        bonus: 25,
    },
    ContextRule {
        name: "api-endpoints",
        triggers: API_TRIGGERS,
        matcher: mentions_endpoint,
        bonus: 15,
    },
    ContextRule {
        name: "troubleshooting",
        triggers: &["troubleshoot", "debug", "error"],
        matcher: is_troubleshooting,
        bonus: 20,
    },
    ContextRule {
        name: "deployment",
        triggers: &["deploy", "release"],
        matcher: is_deployment,
        bonus: 20,
    },
    ContextRule {
        name: "testing",
        triggers: &["test"],
        matcher: is_testing,
        bonus: 20,
    },
];

fn is_setup_guide(doc: &Document) -> bool {
    doc.doc_type == DocumentType::SetupGuide
}

fn has_intro_title(doc: &Document) -> bool {
    let title = doc.title.to_lowercase();
    ["getting started", "introduction", "overview", "quickstart"]
        .iter()
        .any(|term| title.contains(term))
}

fn is_api_docs(doc: &Document) -> bool {
    doc.doc_type == DocumentType::ApiDocs
}

fn mentions_endpoint(doc: &Document) -> bool {
    doc.content.to_lowercase().contains("endpoint")
}

fn title_or_content_mentions(doc: &Document, terms: &[&str]) -> bool {
    let title = doc.title.to_lowercase();
    let content = doc.content.to_lowercase();
    terms
        .iter()
        .any(|term| title.contains(term) || content.contains(term))
}

fn is_troubleshooting(doc: &Document) -> bool {
    title_or_content_mentions(doc, &["troubleshoot", "debug", "error", "faq"])
}

fn is_deployment(doc: &Document) -> bool {
    title_or_content_mentions(doc, &["deploy", "release", "production"])
}

fn is_testing(doc: &Document) -> bool {
    doc.doc_type == DocumentType::Testing
}

impl ContextRule {
    /// Whether this row fires for a lowercase context and document
    pub fn applies(&self, context: &str, doc: &Document) -> bool {
        self.triggers.iter().any(|trigger| context.contains(trigger)) && (self.matcher)(doc)
    }
}

/// Bonus for recently modified documents
///
/// # Examples
///
/// ```
/// use docent_search::scoring::recency_bonus;
///
/// assert_eq!(recency_bonus(Some(3)), 20);
/// assert_eq!(recency_bonus(Some(120)), 5);
/// assert_eq!(recency_bonus(None), 0);
/// ```
pub fn recency_bonus(age_days: Option<u64>) -> u32 {
    match age_days {
        Some(days) if days < 30 => 20,
        Some(days) if days < 90 => 10,
        Some(days) if days < 180 => 5,
        _ => 0,
    }
}

/// Search engine over a frozen corpus
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    freshness: FreshnessAssessor,
}

impl SearchEngine {
    /// Create an engine with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        let freshness = FreshnessAssessor::new(config.freshness.clone());
        Self { config, freshness }
    }

    /// Engine configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Freshness assessor used for `exclude_outdated`
    pub fn freshness(&self) -> &FreshnessAssessor {
        &self.freshness
    }

    /// Filter, score and rank documents
    ///
    /// Returns at most `limit` results, best first. An empty result is not
    /// an error.
    pub fn search<'a>(
        &self,
        corpus: &'a Corpus,
        request: &SearchRequest,
        now_millis: u64,
    ) -> Result<Vec<ScoredDocument<'a>>, SearchError> {
        let query = request.query.trim().to_lowercase();
        if query.is_empty() {
            return Err(SearchError::InvalidRequest("query must not be empty".to_string()));
        }
        let limit = request
            .limit
            .unwrap_or(self.config.default_limit)
            .min(self.config.max_limit);
        if limit == 0 {
            return Err(SearchError::InvalidRequest("limit must be > 0".to_string()));
        }
        let context = request.context.as_deref().map(str::to_lowercase);

        let mut results: Vec<ScoredDocument<'a>> = corpus
            .documents()
            .iter()
            .filter(|doc| self.passes_filters(doc, request, &query, now_millis))
            .map(|doc| ScoredDocument {
                document: doc,
                score: self.score(doc, &query, context.as_deref(), now_millis),
            })
            .collect();

        // Stable: ties keep corpus order
        results.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            "Search '{}' matched {} of {} documents, returning {}",
            request.query,
            results.len(),
            corpus.len(),
            results.len().min(limit)
        );

        results.truncate(limit);
        Ok(results)
    }

    fn passes_filters(&self, doc: &Document, request: &SearchRequest, query: &str, now_millis: u64) -> bool {
        if let Some(category) = &request.category {
            if doc.category != *category {
                return false;
            }
        }
        if !request.document_types.is_empty() && !request.document_types.contains(&doc.doc_type) {
            return false;
        }
        if request.exclude_outdated && self.freshness.is_outdated(doc, now_millis) {
            return false;
        }
        searchable_text(doc).contains(query)
    }

    /// Score one document against a lowercase query and optional lowercase context
    pub fn score(&self, doc: &Document, query: &str, context: Option<&str>, now_millis: u64) -> u32 {
        let mut score = 0;

        let title = doc.title.to_lowercase();
        if title.contains(query) {
            score += TITLE_MATCH_BONUS;
            if title.trim() == query {
                score += EXACT_TITLE_BONUS;
            }
        }

        if doc.summary.to_lowercase().contains(query) {
            score += SUMMARY_MATCH_BONUS;
        }

        let occurrences = doc.content.to_lowercase().matches(query).count() as u32;
        score += occurrences.saturating_mul(CONTENT_OCCURRENCE_BONUS);

        if let Some(context) = context {
            score += CONTEXT_RULES
                .iter()
                .filter(|rule| rule.applies(context, doc))
                .map(|rule| rule.bonus)
                .sum::<u32>();
        }

        if doc.doc_type.is_guide_like() {
            score += GUIDE_TYPE_BONUS;
        }

        score + recency_bonus(doc.age_days(now_millis))
    }

    /// Related documents for `doc`, capped per edge type
    ///
    /// `max_per_type` falls back to the configured cap.
    pub fn related(&self, corpus: &Corpus, doc: &Document, max_per_type: Option<usize>) -> RelatedDocuments {
        resolve_related(corpus, doc, max_per_type.unwrap_or(self.config.related_per_type))
    }
}

/// Lowercase title, content and serialized metadata, the text the query must occur in
fn searchable_text(doc: &Document) -> String {
    let metadata = serde_json::to_string(&doc.metadata).unwrap_or_default();
    format!("{} {} {}", doc.title, doc.content, metadata).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docent_domain::MILLIS_PER_DAY;

    const NOW: u64 = 10_000 * MILLIS_PER_DAY;

    fn doc(title: &str, doc_type: DocumentType, content: &str) -> Document {
        Document::new("docs/x.md", title, content).with_type(doc_type)
    }

    fn score(d: &Document, query: &str, context: Option<&str>) -> u32 {
        SearchEngine::default().score(d, query, context, NOW)
    }

    fn rule(name: &str) -> ContextRule {
        *CONTEXT_RULES.iter().find(|r| r.name == name).expect("rule exists")
    }

    #[test]
    fn test_title_bonuses() {
        let plain = doc("Other", DocumentType::Rfc, "");
        let partial = doc("Deploy guide", DocumentType::Rfc, "");
        let exact = doc("Deploy", DocumentType::Rfc, "");
        assert_eq!(score(&plain, "deploy", None), 0);
        assert_eq!(score(&partial, "deploy", None), 100);
        assert_eq!(score(&exact, "deploy", None), 150);
    }

    #[test]
    fn test_summary_and_content_frequency() {
        let d = doc("Other", DocumentType::Rfc, "cache, Cache and CACHE")
            .with_summary("All about the cache");
        assert_eq!(score(&d, "cache", None), 50 + 3 * 5);
    }

    #[test]
    fn test_content_occurrences_do_not_overlap() {
        let d = doc("Other", DocumentType::Rfc, "aaaa");
        assert_eq!(score(&d, "aa", None), 2 * 5);
    }

    #[test]
    fn test_guide_type_bonus() {
        let guide = doc("Other", DocumentType::Guide, "");
        let setup = doc("Other", DocumentType::SetupGuide, "");
        let api = doc("Other", DocumentType::ApiDocs, "");
        assert_eq!(score(&guide, "zzz", None), 10);
        assert_eq!(score(&setup, "zzz", None), 10);
        assert_eq!(score(&api, "zzz", None), 0);
    }

    #[test]
    fn test_recency_bonus_tiers() {
        assert_eq!(recency_bonus(Some(0)), 20);
        assert_eq!(recency_bonus(Some(29)), 20);
        assert_eq!(recency_bonus(Some(30)), 10);
        assert_eq!(recency_bonus(Some(89)), 10);
        assert_eq!(recency_bonus(Some(90)), 5);
        assert_eq!(recency_bonus(Some(179)), 5);
        assert_eq!(recency_bonus(Some(180)), 0);
        assert_eq!(recency_bonus(None), 0);
    }

    #[test]
    fn test_context_rules_individually() {
        let setup = doc("Install", DocumentType::SetupGuide, "");
        assert!(rule("onboarding-setup-guide").applies("i am a new developer", &setup));
        assert!(!rule("onboarding-setup-guide").applies("deploying", &setup));

        let intro = doc("Quickstart", DocumentType::Rfc, "");
        assert!(rule("onboarding-intro-title").applies("onboarding", &intro));

        let api = doc("Users", DocumentType::ApiDocs, "GET endpoint");
        assert!(rule("api-docs").applies("api integration", &api));
        assert!(rule("api-endpoints").applies("api", &api));

        let faq = doc("FAQ", DocumentType::Rfc, "");
        assert!(rule("troubleshooting").applies("debugging a crash", &faq));

        let release = doc("Ops", DocumentType::Rfc, "Ship to production");
        assert!(rule("deployment").applies("release day", &release));

        let tests = doc("Suite", DocumentType::Testing, "");
        assert!(rule("testing").applies("writing tests", &tests));
        assert!(!rule("testing").applies("writing docs", &tests));
    }

    #[test]
    fn test_context_rules_stack() {
        let d = doc("Getting Started", DocumentType::SetupGuide, "");
        // 30 (setup guide) + 20 (intro title) + 10 (guide-like)
        assert_eq!(score(&d, "zzz", Some("onboarding a new developer")), 60);
        assert_eq!(score(&d, "zzz", None), 10);
    }

    #[test]
    fn test_api_context_bonus() {
        let d = doc("Users", DocumentType::ApiDocs, "");
        assert_eq!(score(&d, "zzz", Some("api")), 25);
    }
}
