//! Identifier resolution over a loosely keyed document index
//!
//! Every document is indexed under two keys: its identifier (`guides/deploy.md`)
//! and the identifier with the markdown extension stripped (`guides/deploy`).
//! A raw reference is resolved by trying an ordered list of strategies; the
//! first strategy that produces a match wins.

use crate::config::AmbiguityPolicy;
use docent_domain::path::{strip_markdown_extension, with_markdown_extension, MARKDOWN_EXTENSION};
use docent_domain::traits::ReferenceResolver;
use std::collections::HashMap;
use tracing::debug;

/// A single way of matching a raw reference against the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The raw string is a key
    Exact,
    /// The raw string plus `.md` is a key
    AppendExtension,
    /// The raw string minus `.md` is a key
    StripExtension,
    /// A key ends with, or contains, the raw string
    Fuzzy,
}

/// Precision-first strategy order
pub const DEFAULT_STRATEGIES: [MatchStrategy; 4] = [
    MatchStrategy::Exact,
    MatchStrategy::AppendExtension,
    MatchStrategy::StripExtension,
    MatchStrategy::Fuzzy,
];

/// Strategies that never guess: a user-supplied identifier must name a document
pub const STRICT_STRATEGIES: [MatchStrategy; 3] = [
    MatchStrategy::Exact,
    MatchStrategy::AppendExtension,
    MatchStrategy::StripExtension,
];

/// Outcome of resolving one raw reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Resolved to the document at `index` in corpus order
    Matched {
        /// Position in corpus order
        index: usize,
        /// Strategy that produced the match
        strategy: MatchStrategy,
    },
    /// Several documents matched fuzzily and the policy rejects the reference
    Ambiguous(Vec<usize>),
    /// Nothing matched
    Unresolved,
}

impl Resolution {
    /// Matched position, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Resolution::Matched { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Index from identifier keys to corpus positions
#[derive(Debug, Clone)]
pub struct IdentifierIndex {
    /// Keys in corpus order, two per document
    keys: Vec<(String, usize)>,
    lookup: HashMap<String, usize>,
    strategies: Vec<MatchStrategy>,
    policy: AmbiguityPolicy,
}

impl IdentifierIndex {
    /// Build an index from identifiers in corpus order
    pub fn new<'a, I>(ids: I, policy: AmbiguityPolicy) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut keys = Vec::new();
        let mut lookup = HashMap::new();

        for (index, id) in ids.into_iter().enumerate() {
            let stripped = strip_markdown_extension(id);
            keys.push((id.to_string(), index));
            lookup.entry(id.to_string()).or_insert(index);
            if stripped != id {
                keys.push((stripped.to_string(), index));
                lookup.entry(stripped.to_string()).or_insert(index);
            }
        }

        Self {
            keys,
            lookup,
            strategies: DEFAULT_STRATEGIES.to_vec(),
            policy,
        }
    }

    /// Replace the strategy list (order is precedence)
    pub fn with_strategies(mut self, strategies: Vec<MatchStrategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Active strategies, in precedence order
    pub fn strategies(&self) -> &[MatchStrategy] {
        &self.strategies
    }

    /// Number of indexed documents
    pub fn document_count(&self) -> usize {
        self.keys.last().map(|(_, index)| index + 1).unwrap_or(0)
    }

    /// Resolve a raw reference, reporting which strategy matched
    pub fn resolve_detailed(&self, raw: &str) -> Resolution {
        self.resolve_with(raw, &self.strategies)
    }

    /// Resolve with an explicit strategy list instead of the index's own
    pub fn resolve_with(&self, raw: &str, strategies: &[MatchStrategy]) -> Resolution {
        let raw = raw.trim();
        if raw.is_empty() {
            return Resolution::Unresolved;
        }

        for strategy in strategies {
            let outcome = match strategy {
                MatchStrategy::Exact => self.lookup_key(raw, *strategy),
                MatchStrategy::AppendExtension => {
                    self.lookup_key(&with_markdown_extension(raw), *strategy)
                }
                MatchStrategy::StripExtension if raw.ends_with(MARKDOWN_EXTENSION) => {
                    self.lookup_key(strip_markdown_extension(raw), *strategy)
                }
                MatchStrategy::StripExtension => Resolution::Unresolved,
                MatchStrategy::Fuzzy => self.fuzzy(raw),
            };
            if outcome != Resolution::Unresolved {
                return outcome;
            }
        }
        Resolution::Unresolved
    }

    fn lookup_key(&self, key: &str, strategy: MatchStrategy) -> Resolution {
        match self.lookup.get(key) {
            Some(&index) => Resolution::Matched { index, strategy },
            None => Resolution::Unresolved,
        }
    }

    fn fuzzy(&self, raw: &str) -> Resolution {
        if self.policy == AmbiguityPolicy::FirstInCorpusOrder {
            return self
                .keys
                .iter()
                .find(|(key, _)| key.contains(raw))
                .map(|(_, index)| Resolution::Matched {
                    index: *index,
                    strategy: MatchStrategy::Fuzzy,
                })
                .unwrap_or(Resolution::Unresolved);
        }

        // Suffix matches are more specific than substring matches
        let suffix = self.candidates(|key| key.ends_with(raw));
        let candidates = if suffix.is_empty() {
            self.candidates(|key| key.contains(raw))
        } else {
            suffix
        };

        match candidates.as_slice() {
            [] => Resolution::Unresolved,
            [index] => Resolution::Matched {
                index: *index,
                strategy: MatchStrategy::Fuzzy,
            },
            _ => {
                debug!("Ambiguous reference '{}' matches {} documents", raw, candidates.len());
                Resolution::Ambiguous(candidates)
            }
        }
    }

    /// Distinct matching documents, in corpus order
    fn candidates(&self, matches: impl Fn(&str) -> bool) -> Vec<usize> {
        let mut found: Vec<usize> = Vec::new();
        for (key, index) in &self.keys {
            if matches(key) && !found.contains(index) {
                found.push(*index);
            }
        }
        found
    }
}

impl ReferenceResolver for IdentifierIndex {
    fn resolve(&self, raw: &str) -> Option<usize> {
        self.resolve_detailed(raw).index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(ids: &[&str]) -> IdentifierIndex {
        IdentifierIndex::new(ids.iter().copied(), AmbiguityPolicy::Reject)
    }

    fn strategy_of(resolution: Resolution) -> Option<MatchStrategy> {
        match resolution {
            Resolution::Matched { strategy, .. } => Some(strategy),
            _ => None,
        }
    }

    #[test]
    fn test_strict_strategies_never_guess() {
        let idx = index(&["setup/README.md", "guides/deployment-checklist.md"]);
        assert_eq!(idx.resolve("ploy"), Some(1));
        assert_eq!(idx.resolve_with("ploy", &STRICT_STRATEGIES), Resolution::Unresolved);
        assert_eq!(idx.resolve_with("setup/README", &STRICT_STRATEGIES).index(), Some(0));
        assert_eq!(
            idx.resolve_with("guides/deployment-checklist.md", &STRICT_STRATEGIES).index(),
            Some(1)
        );
    }

    #[test]
    fn test_exact_matches_either_key() {
        let idx = index(&["setup/README.md", "guides/deploy.md"]);
        assert_eq!(idx.resolve("setup/README.md"), Some(0));
        assert_eq!(idx.resolve("guides/deploy"), Some(1));
        assert_eq!(
            strategy_of(idx.resolve_detailed("guides/deploy")),
            Some(MatchStrategy::Exact)
        );
    }

    #[test]
    fn test_strategy_precedence() {
        // "api" is a key of its own, so exact wins over fuzzy "v2/api"
        let idx = index(&["v2/api.md", "api.md"]);
        assert_eq!(idx.resolve_detailed("api"), Resolution::Matched {
            index: 1,
            strategy: MatchStrategy::Exact,
        });

        // Both keys exist, so a bare stem never needs the extension variant
        let idx = index(&["guides/deploy.md"]);
        assert_eq!(
            strategy_of(idx.resolve_detailed("guides/deploy")),
            Some(MatchStrategy::Exact)
        );
    }

    #[test]
    fn test_append_extension_strategy_in_isolation() {
        let idx = index(&["guides/deploy.md"])
            .with_strategies(vec![MatchStrategy::AppendExtension]);
        assert_eq!(
            strategy_of(idx.resolve_detailed("guides/deploy")),
            Some(MatchStrategy::AppendExtension)
        );
        assert_eq!(idx.resolve("deploy"), None);
    }

    #[test]
    fn test_strip_extension_strategy_in_isolation() {
        let idx = index(&["guides/deploy.md"])
            .with_strategies(vec![MatchStrategy::StripExtension]);
        assert_eq!(
            strategy_of(idx.resolve_detailed("guides/deploy.md")),
            Some(MatchStrategy::StripExtension)
        );
        assert_eq!(idx.resolve("guides/deploy"), None);
    }

    #[test]
    fn test_fuzzy_suffix_and_substring() {
        let idx = index(&["setup/README.md", "guides/deployment-checklist.md"]);
        assert_eq!(idx.resolve("README"), Some(0));
        assert_eq!(idx.resolve("deployment"), Some(1));
        assert_eq!(
            strategy_of(idx.resolve_detailed("README")),
            Some(MatchStrategy::Fuzzy)
        );
    }

    #[test]
    fn test_suffix_tier_beats_substring_tier() {
        let idx = index(&["guides/api-overview.md", "reference/api.md"]);
        assert_eq!(idx.resolve("/api"), Some(1));
    }

    #[test]
    fn test_ambiguous_rejected_by_default() {
        let idx = index(&["a/api.md", "b/api.md"]);
        assert_eq!(idx.resolve_detailed("api"), Resolution::Ambiguous(vec![0, 1]));
        assert_eq!(idx.resolve("api"), None);
    }

    #[test]
    fn test_first_in_corpus_order_policy() {
        let idx = IdentifierIndex::new(["a/api.md", "b/api.md"], AmbiguityPolicy::FirstInCorpusOrder);
        assert_eq!(idx.resolve("api"), Some(0));
    }

    #[test]
    fn test_unresolved_and_empty() {
        let idx = index(&["a.md"]);
        assert_eq!(idx.resolve("zzz"), None);
        assert_eq!(idx.resolve(""), None);
        assert_eq!(idx.resolve("   "), None);
        assert_eq!(idx.document_count(), 1);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let idx = index(&["a/guide.md", "b/guide.md", "c/setup.md"]);
        for raw in ["guide", "setup", "c/setup", "nothing"] {
            assert_eq!(idx.resolve_detailed(raw), idx.resolve_detailed(raw));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every indexed identifier resolves to itself
        #[test]
        fn test_identifiers_resolve_to_themselves(
            ids in proptest::collection::btree_set("[a-c]{1,3}/[a-c]{1,3}\\.md", 1..8)
        ) {
            let ids: Vec<String> = ids.into_iter().collect();
            let idx = IdentifierIndex::new(ids.iter().map(String::as_str), AmbiguityPolicy::Reject);
            for (position, id) in ids.iter().enumerate() {
                prop_assert_eq!(idx.resolve(id), Some(position));
                prop_assert_eq!(idx.resolve(strip_markdown_extension(id)), Some(position));
            }
        }

        /// Property: resolving the same reference twice gives the same answer
        #[test]
        fn test_resolution_repeatable(
            ids in proptest::collection::vec("[a-c]{1,3}/[a-c]{1,3}\\.md", 0..8),
            raw in "[a-c/]{0,6}",
        ) {
            let idx = IdentifierIndex::new(ids.iter().map(String::as_str), AmbiguityPolicy::Reject);
            prop_assert_eq!(idx.resolve_detailed(&raw), idx.resolve_detailed(&raw));
        }
    }
}
