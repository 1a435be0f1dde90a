//! Heuristic relationship inference
//!
//! Inference fills an edge list only when the author left it empty. Each rule
//! is a named row of condition, target edge and candidate selection, so rules
//! can be tested one at a time.

use crate::config::GraphConfig;
use docent_domain::path::strip_markdown_extension;
use docent_domain::{Document, DocumentType, EdgeType};

/// Content terms suggesting the document depends on earlier reading
pub const DEPENDENCY_TERMS: [&str; 3] = ["before", "first", "prerequisite"];

/// Title terms marking a document as setup or introductory material
pub const SETUP_TITLE_TERMS: [&str; 9] = [
    "setup",
    "set up",
    "install",
    "getting started",
    "introduction",
    "intro",
    "overview",
    "quickstart",
    "readme",
];

/// One inference rule
#[derive(Clone, Copy)]
pub struct InferenceRule {
    /// Rule name, used in logs and tests
    pub name: &'static str,

    /// Edge the rule fills
    pub edge: EdgeType,

    /// Whether the rule applies to a document
    pub condition: fn(&Document) -> bool,

    /// Whether a same-category document is an acceptable target
    pub selects: fn(&Document) -> bool,

    /// Maximum number of targets attached
    pub limit: fn(&GraphConfig) -> usize,
}

/// The built-in rules, in evaluation order
pub fn default_rules() -> Vec<InferenceRule> {
    vec![
        InferenceRule {
            name: "setup-prerequisites",
            edge: EdgeType::Prerequisites,
            condition: uses_dependency_language,
            selects: |candidate| candidate.doc_type == DocumentType::SetupGuide,
            limit: |config| config.max_inferred_prerequisites,
        },
        InferenceRule {
            name: "setup-follow-ups",
            edge: EdgeType::FollowUps,
            condition: is_entry_point,
            selects: |candidate| {
                matches!(candidate.doc_type, DocumentType::Guide | DocumentType::Testing)
            },
            limit: |config| config.max_inferred_follow_ups,
        },
    ]
}

/// Content mentions dependency language and the title is not itself setup material
pub fn uses_dependency_language(doc: &Document) -> bool {
    let content = doc.content.to_lowercase();
    DEPENDENCY_TERMS.iter().any(|term| content.contains(term)) && !title_looks_like_setup(&doc.title)
}

/// Setup guides and "getting started" pages lead on to other guides
pub fn is_entry_point(doc: &Document) -> bool {
    doc.doc_type == DocumentType::SetupGuide || doc.title.to_lowercase().contains("getting started")
}

/// Whether a title names setup or introductory material
pub fn title_looks_like_setup(title: &str) -> bool {
    let title = title.to_lowercase();
    SETUP_TITLE_TERMS.iter().any(|term| title.contains(term))
}

impl InferenceRule {
    /// Targets this rule would attach to the document at `position`
    ///
    /// Returns an empty list when the edge is already populated or the
    /// condition does not hold. Targets are extension-stripped identifiers
    /// of same-category documents, in corpus order.
    pub fn targets(&self, documents: &[Document], position: usize, config: &GraphConfig) -> Vec<String> {
        let doc = &documents[position];
        if !doc.relationships.get(self.edge).is_empty() || !(self.condition)(doc) {
            return Vec::new();
        }

        documents
            .iter()
            .enumerate()
            .filter(|(other, candidate)| {
                *other != position && candidate.category == doc.category && (self.selects)(candidate)
            })
            .take((self.limit)(config))
            .map(|(_, candidate)| strip_markdown_extension(&candidate.id).to_string())
            .collect()
    }
}

/// Apply rules to the corpus; returns the number of edges added
///
/// All targets are computed against the pre-inference state before any edge
/// is written, so rule order cannot influence another rule's condition.
pub fn apply_rules(documents: &mut [Document], rules: &[InferenceRule], config: &GraphConfig) -> usize {
    let mut planned: Vec<(usize, EdgeType, Vec<String>)> = Vec::new();
    for position in 0..documents.len() {
        for rule in rules {
            let targets = rule.targets(documents, position, config);
            if !targets.is_empty() {
                tracing::debug!(
                    "Rule '{}' adds {} {} edge(s) to {}",
                    rule.name,
                    targets.len(),
                    rule.edge,
                    documents[position].id
                );
                planned.push((position, rule.edge, targets));
            }
        }
    }

    let mut added = 0;
    for (position, edge, targets) in planned {
        for target in targets {
            if documents[position].relationships.push_unique(edge, target) {
                added += 1;
            }
        }
    }
    added
}
