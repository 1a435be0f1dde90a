//! Freshness assessment
//!
//! A document is outdated when any one trigger fires: it is older than the
//! configured age, its content carries a deprecation marker, or it mentions a
//! technology version that has reached end of life.

use crate::config::FreshnessConfig;
use docent_domain::Document;
use docent_graph::Corpus;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Lowercase content markers that flag a document as outdated
pub const OUTDATED_MARKERS: [&str; 7] = [
    "deprecated",
    "outdated",
    "no longer maintained",
    "archive",
    "legacy",
    "obsolete",
    "old version",
];

static VERSION_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(python|node(?:\.?js)?|angular(?:\.?js)|react(?:\.js)?|php|jquery|java|webpack|vue(?:\.js)?)\s*v?(\d+)(?:\.(\d+))?",
    )
    .expect("valid regex")
});

/// Why a document was classified as outdated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutdatedReason {
    /// Last modified longer ago than allowed
    Stale {
        /// Whole days since last modification
        age_days: u64,
        /// Configured maximum
        max_age_days: u64,
    },

    /// Content contains a deprecation marker
    Marker(&'static str),

    /// Content mentions an end-of-life technology version
    LegacyVersion {
        /// Technology family, e.g. `Python 2.x`
        technology: &'static str,
        /// The text that matched
        mention: String,
    },
}

impl fmt::Display for OutdatedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutdatedReason::Stale {
                age_days,
                max_age_days,
            } => write!(f, "last updated {} days ago (limit {})", age_days, max_age_days),
            OutdatedReason::Marker(marker) => write!(f, "content mentions '{}'", marker),
            OutdatedReason::LegacyVersion { technology, mention } => {
                write!(f, "references {} ('{}')", technology, mention)
            }
        }
    }
}

/// Result of assessing one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreshnessReport {
    /// Whether any trigger fired
    pub outdated: bool,

    /// Every trigger that fired, in check order
    pub reasons: Vec<OutdatedReason>,
}

impl FreshnessReport {
    fn from_reasons(reasons: Vec<OutdatedReason>) -> Self {
        Self {
            outdated: !reasons.is_empty(),
            reasons,
        }
    }
}

/// Classifies documents as fresh or outdated
#[derive(Debug, Clone, Default)]
pub struct FreshnessAssessor {
    config: FreshnessConfig,
}

impl FreshnessAssessor {
    /// Create an assessor with the given thresholds
    pub fn new(config: FreshnessConfig) -> Self {
        Self { config }
    }

    /// Assessor configuration
    pub fn config(&self) -> &FreshnessConfig {
        &self.config
    }

    /// Assess a document at time `now_millis`
    ///
    /// A missing timestamp never triggers; a timestamp in the future counts
    /// as age zero.
    pub fn assess(&self, doc: &Document, now_millis: u64) -> FreshnessReport {
        let mut reasons = Vec::new();

        if let Some(age_days) = doc.age_days(now_millis) {
            if age_days > self.config.max_age_days {
                reasons.push(OutdatedReason::Stale {
                    age_days,
                    max_age_days: self.config.max_age_days,
                });
            }
        }

        let content = doc.content.to_lowercase();

        if self.config.check_markers {
            reasons.extend(
                OUTDATED_MARKERS
                    .iter()
                    .copied()
                    .filter(|marker| content.contains(marker))
                    .map(OutdatedReason::Marker),
            );
        }

        if self.config.check_legacy_versions {
            for (technology, mention) in legacy_mentions(&doc.content) {
                let seen = reasons.iter().any(|r| {
                    matches!(r, OutdatedReason::LegacyVersion { technology: t, .. } if *t == technology)
                });
                if !seen {
                    reasons.push(OutdatedReason::LegacyVersion { technology, mention });
                }
            }
        }

        FreshnessReport::from_reasons(reasons)
    }

    /// Shortcut for `assess(..).outdated`
    pub fn is_outdated(&self, doc: &Document, now_millis: u64) -> bool {
        self.assess(doc, now_millis).outdated
    }

    /// Every outdated document in the corpus, in corpus order
    pub fn outdated_documents<'a>(&self, corpus: &'a Corpus, now_millis: u64) -> Vec<OutdatedDocument<'a>> {
        corpus
            .documents()
            .iter()
            .filter_map(|document| {
                let report = self.assess(document, now_millis);
                report.outdated.then_some(OutdatedDocument { document, report })
            })
            .collect()
    }
}

/// An outdated document with the reasons it was flagged
#[derive(Debug, Clone, PartialEq)]
pub struct OutdatedDocument<'a> {
    /// The flagged document
    pub document: &'a Document,
    /// Assessment result
    pub report: FreshnessReport,
}

/// End-of-life version mentions in `content`, in order of appearance
pub fn legacy_mentions(content: &str) -> Vec<(&'static str, String)> {
    VERSION_MENTION
        .captures_iter(content)
        .filter_map(|caps| {
            let name = caps[1].to_lowercase();
            let major: u32 = caps[2].parse().ok()?;
            let minor: Option<u32> = caps.get(3).and_then(|m| m.as_str().parse().ok());
            legacy_technology(&name, major, minor).map(|tech| (tech, caps[0].to_string()))
        })
        .collect()
}

/// Technology family if `name major.minor` is an end-of-life release
fn legacy_technology(name: &str, major: u32, minor: Option<u32>) -> Option<&'static str> {
    let name = name.trim_end_matches(".js").trim_end_matches("js");
    match name {
        "python" if major == 2 => Some("Python 2.x"),
        "node" if major <= 12 => Some("Node.js <= 12"),
        "angular" if major == 1 => Some("AngularJS 1.x"),
        "react" if major <= 15 => Some("React <= 15"),
        "php" if major == 5 => Some("PHP 5.x"),
        "jquery" if major == 1 => Some("jQuery 1.x"),
        // Java 1.7 and earlier used the "1.x" scheme
        "java" if major == 1 && minor.map_or(true, |m| m <= 7) => Some("Java <= 7"),
        "java" if (2..=7).contains(&major) => Some("Java <= 7"),
        "webpack" if major <= 3 => Some("Webpack <= 3"),
        "vue" if major == 1 => Some("Vue 1.x"),
        _ => None,
    }
}
