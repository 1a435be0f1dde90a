//! Document type module - coarse classification of corpus documents

use std::fmt;

/// Type of a document in the corpus
///
/// The type is either declared in front matter or inferred by the loader
/// from the path, title and content. It drives both relationship inference
/// (setup guides get follow-ups) and scoring (guides get a flat bonus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    /// Task-oriented walkthrough
    Guide,

    /// API reference material
    ApiDocs,

    /// Installation or onboarding material
    SetupGuide,

    /// Testing strategy or instructions
    Testing,

    /// Design proposal
    Rfc,

    /// Anything else
    Documentation,
}

impl DocumentType {
    /// All document types, in declaration order
    pub const ALL: [DocumentType; 6] = [
        DocumentType::Guide,
        DocumentType::ApiDocs,
        DocumentType::SetupGuide,
        DocumentType::Testing,
        DocumentType::Rfc,
        DocumentType::Documentation,
    ];

    /// Get the type tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Guide => "guide",
            DocumentType::ApiDocs => "api-docs",
            DocumentType::SetupGuide => "setup-guide",
            DocumentType::Testing => "testing",
            DocumentType::Rfc => "rfc",
            DocumentType::Documentation => "documentation",
        }
    }

    /// Parse a type tag (case-insensitive, `_` and `-` interchangeable)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "guide" => Some(DocumentType::Guide),
            "api-docs" | "api" => Some(DocumentType::ApiDocs),
            "setup-guide" | "setup" => Some(DocumentType::SetupGuide),
            "testing" | "test" => Some(DocumentType::Testing),
            "rfc" => Some(DocumentType::Rfc),
            "documentation" | "docs" => Some(DocumentType::Documentation),
            _ => None,
        }
    }

    /// Whether the type earns the flat guide bonus during scoring
    pub fn is_guide_like(&self) -> bool {
        matches!(self, DocumentType::Guide | DocumentType::SetupGuide)
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid document type: {}", s))
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_tags() {
        for doc_type in DocumentType::ALL {
            assert_eq!(DocumentType::parse(doc_type.as_str()), Some(doc_type));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(DocumentType::parse("API_DOCS"), Some(DocumentType::ApiDocs));
        assert_eq!(DocumentType::parse(" setup "), Some(DocumentType::SetupGuide));
        assert_eq!(DocumentType::parse("tutorial"), None);
    }

    #[test]
    fn test_guide_like() {
        assert!(DocumentType::Guide.is_guide_like());
        assert!(DocumentType::SetupGuide.is_guide_like());
        assert!(!DocumentType::Testing.is_guide_like());
        assert!(!DocumentType::Documentation.is_guide_like());
    }

    #[test]
    fn test_from_str_error() {
        let err = "manual".parse::<DocumentType>().unwrap_err();
        assert!(err.contains("manual"));
    }
}
