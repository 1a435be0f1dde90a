//! Document module - the fundamental unit of the corpus

use crate::path::category_of;
use crate::{DocumentType, LinkSet, RelationshipEdges};
use std::collections::BTreeMap;

/// Milliseconds in one day, used for age computations
pub const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Declared front-matter metadata
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A parsed markdown document
///
/// Documents are created by a loader, handed to the graph builder which fills
/// `links` and `relationships` once, and are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Canonical identifier: corpus-relative path with extension (e.g. `setup/README.md`)
    pub id: String,

    /// Display title
    pub title: String,

    /// Raw markdown content (front matter removed)
    pub content: String,

    /// Declared front-matter metadata
    pub metadata: Metadata,

    /// First path segment of the identifier
    pub category: String,

    /// Coarse document classification
    pub doc_type: DocumentType,

    /// Short summary for listings
    pub summary: String,

    /// Section headings in document order
    pub sections: Vec<String>,

    /// Estimated reading time in minutes
    pub read_minutes: u32,

    /// Last modification time (milliseconds since Unix epoch)
    pub last_modified: Option<u64>,

    /// Links found in the content (filled by the graph builder)
    pub links: LinkSet,

    /// Relationship edges (filled by the graph builder)
    pub relationships: RelationshipEdges,
}

impl Document {
    /// Create a document with derived category and empty derived fields
    ///
    /// # Examples
    ///
    /// ```
    /// use docent_domain::{Document, DocumentType};
    ///
    /// let doc = Document::new("setup/README.md", "Getting Started", "Install it.");
    /// assert_eq!(doc.category, "setup");
    /// assert_eq!(doc.doc_type, DocumentType::Documentation);
    /// ```
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        let id = id.into();
        let category = category_of(&id).to_string();
        Self {
            id,
            title: title.into(),
            content: content.into(),
            metadata: Metadata::new(),
            category,
            doc_type: DocumentType::Documentation,
            summary: String::new(),
            sections: Vec::new(),
            read_minutes: 1,
            last_modified: None,
            links: LinkSet::default(),
            relationships: RelationshipEdges::default(),
        }
    }

    /// Set the document type
    pub fn with_type(mut self, doc_type: DocumentType) -> Self {
        self.doc_type = doc_type;
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the last modification time
    pub fn with_last_modified(mut self, millis: u64) -> Self {
        self.last_modified = Some(millis);
        self
    }

    /// Set the declared metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whole days since last modification, if known
    ///
    /// Timestamps in the future count as age zero.
    pub fn age_days(&self, now_millis: u64) -> Option<u64> {
        self.last_modified
            .map(|modified| now_millis.saturating_sub(modified) / MILLIS_PER_DAY)
    }

    /// Lightweight view used by listings and related-document expansion
    pub fn summary_view(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            doc_type: self.doc_type,
            read_minutes: self.read_minutes,
            category: self.category.clone(),
        }
    }
}

/// Lightweight document view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    /// Canonical identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Short summary
    pub summary: String,
    /// Document type
    pub doc_type: DocumentType,
    /// Estimated reading time in minutes
    pub read_minutes: u32,
    /// Category
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_category() {
        let doc = Document::new("api/users.md", "Users", "");
        assert_eq!(doc.category, "api");
        assert!(doc.links.is_empty());
        assert!(doc.relationships.is_empty());
    }

    #[test]
    fn test_age_days() {
        let doc = Document::new("a.md", "A", "").with_last_modified(0);
        assert_eq!(doc.age_days(400 * MILLIS_PER_DAY + 5), Some(400));

        let future = Document::new("b.md", "B", "").with_last_modified(10 * MILLIS_PER_DAY);
        assert_eq!(future.age_days(0), Some(0));

        let unknown = Document::new("c.md", "C", "");
        assert_eq!(unknown.age_days(1), None);
    }

    #[test]
    fn test_summary_view() {
        let doc = Document::new("setup/install.md", "Install", "body")
            .with_type(DocumentType::SetupGuide)
            .with_summary("How to install");
        let view = doc.summary_view();
        assert_eq!(view.id, "setup/install.md");
        assert_eq!(view.summary, "How to install");
        assert_eq!(view.doc_type, DocumentType::SetupGuide);
        assert_eq!(view.category, "setup");
    }
}
