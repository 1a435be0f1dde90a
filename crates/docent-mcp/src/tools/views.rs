//! Serializable views of corpus records shared by the tools

use chrono::{DateTime, SecondsFormat, Utc};
use docent_domain::{Document, DocumentSummary, EdgeType, Metadata, RelationshipEdges};
use docent_search::{OutdatedDocument, RelatedDocuments};
use serde::Serialize;

/// Full document record
#[derive(Debug, Clone, Serialize)]
pub struct DocumentInfo {
    /// Canonical identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Category (first path segment)
    pub category: String,
    /// Document type tag
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Short summary
    pub summary: String,
    /// Key section headings
    pub sections: Vec<String>,
    /// Estimated reading time in minutes
    pub read_minutes: u32,
    /// Last modification time (RFC 3339)
    pub last_modified: Option<String>,
    /// Declared front-matter metadata
    pub metadata: Metadata,
    /// Relationship edges
    pub relationships: EdgesInfo,
    /// Links found in the content
    pub links: LinksInfo,
    /// Raw markdown, only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl DocumentInfo {
    /// Build the view, optionally carrying the raw content
    pub fn new(doc: &Document, include_content: bool) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            category: doc.category.clone(),
            doc_type: doc.doc_type.as_str().to_string(),
            summary: doc.summary.clone(),
            sections: doc.sections.clone(),
            read_minutes: doc.read_minutes,
            last_modified: doc.last_modified.and_then(rfc3339),
            metadata: doc.metadata.clone(),
            relationships: EdgesInfo::from(&doc.relationships),
            links: LinksInfo {
                internal: doc.links.internal.iter().cloned().collect(),
                external: doc.links.external.iter().cloned().collect(),
            },
            content: include_content.then(|| doc.content.clone()),
        }
    }
}

/// Relationship edge identifiers
#[derive(Debug, Clone, Default, Serialize)]
pub struct EdgesInfo {
    /// Documents to read first
    pub prerequisites: Vec<String>,
    /// Documents to read next
    pub follow_ups: Vec<String>,
    /// Loosely related documents
    pub see_also: Vec<String>,
    /// Documents linking here
    pub dependents: Vec<String>,
}

impl From<&RelationshipEdges> for EdgesInfo {
    fn from(edges: &RelationshipEdges) -> Self {
        Self {
            prerequisites: edges.prerequisites.clone(),
            follow_ups: edges.follow_ups.clone(),
            see_also: edges.see_also.clone(),
            dependents: edges.dependents.clone(),
        }
    }
}

/// Internal and external links
#[derive(Debug, Clone, Default, Serialize)]
pub struct LinksInfo {
    /// Corpus-relative targets
    pub internal: Vec<String>,
    /// http(s) targets
    pub external: Vec<String>,
}

/// Lightweight listing entry
#[derive(Debug, Clone, Serialize)]
pub struct SummaryInfo {
    /// Canonical identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Short summary
    pub summary: String,
    /// Document type tag
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Estimated reading time in minutes
    pub read_minutes: u32,
    /// Category
    pub category: String,
}

impl From<&DocumentSummary> for SummaryInfo {
    fn from(summary: &DocumentSummary) -> Self {
        Self {
            id: summary.id.clone(),
            title: summary.title.clone(),
            summary: summary.summary.clone(),
            doc_type: summary.doc_type.as_str().to_string(),
            read_minutes: summary.read_minutes,
            category: summary.category.clone(),
        }
    }
}

/// Related documents keyed by edge type; empty groups are omitted
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelatedInfo {
    /// Resolved prerequisites
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<SummaryInfo>,
    /// Resolved follow-ups
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub follow_ups: Vec<SummaryInfo>,
    /// Resolved see-also documents
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<SummaryInfo>,
    /// Resolved dependents
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependents: Vec<SummaryInfo>,
}

impl From<&RelatedDocuments> for RelatedInfo {
    fn from(related: &RelatedDocuments) -> Self {
        let mut info = RelatedInfo::default();
        for group in &related.groups {
            let slot = match group.edge {
                EdgeType::Prerequisites => &mut info.prerequisites,
                EdgeType::FollowUps => &mut info.follow_ups,
                EdgeType::SeeAlso => &mut info.see_also,
                EdgeType::Dependents => &mut info.dependents,
            };
            slot.extend(group.documents.iter().map(SummaryInfo::from));
        }
        info
    }
}

/// An outdated document and why
#[derive(Debug, Clone, Serialize)]
pub struct OutdatedInfo {
    /// Canonical identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Category
    pub category: String,
    /// Last modification time (RFC 3339)
    pub last_modified: Option<String>,
    /// Human-readable reasons, in check order
    pub reasons: Vec<String>,
}

impl From<&OutdatedDocument<'_>> for OutdatedInfo {
    fn from(outdated: &OutdatedDocument<'_>) -> Self {
        let doc = outdated.document;
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            category: doc.category.clone(),
            last_modified: doc.last_modified.and_then(rfc3339),
            reasons: outdated.report.reasons.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Format epoch milliseconds as RFC 3339 (UTC, second precision)
pub fn rfc3339(millis: u64) -> Option<String> {
    let millis = i64::try_from(millis).ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}
