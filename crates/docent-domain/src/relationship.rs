//! Relationship module - links and typed edges between documents

use std::collections::BTreeSet;
use std::fmt;

/// Type of relationship edge between documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeType {
    /// Documents that should be read first
    Prerequisites,

    /// Documents to read next
    FollowUps,

    /// Loosely related documents
    SeeAlso,

    /// Documents that link to this one (computed reverse edge)
    Dependents,
}

impl EdgeType {
    /// All edge types, in display order
    pub const ALL: [EdgeType; 4] = [
        EdgeType::Prerequisites,
        EdgeType::FollowUps,
        EdgeType::SeeAlso,
        EdgeType::Dependents,
    ];

    /// Get the edge name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::Prerequisites => "prerequisites",
            EdgeType::FollowUps => "follow_ups",
            EdgeType::SeeAlso => "see_also",
            EdgeType::Dependents => "dependents",
        }
    }

    /// Whether authors (or inference) can declare this edge
    ///
    /// `Dependents` is only ever computed from other documents' links.
    pub fn is_forward(&self) -> bool {
        !matches!(self, EdgeType::Dependents)
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Links referenced by a single document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    /// Raw internal targets (extension stripped, corpus-relative)
    pub internal: BTreeSet<String>,

    /// External URLs
    pub external: BTreeSet<String>,
}

impl LinkSet {
    /// Total number of distinct links
    pub fn len(&self) -> usize {
        self.internal.len() + self.external.len()
    }

    /// Whether the document references nothing
    pub fn is_empty(&self) -> bool {
        self.internal.is_empty() && self.external.is_empty()
    }
}

/// The four relationship edge lists of a document
///
/// Values are identifier strings and may be dangling. They are resolved
/// to documents at query time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipEdges {
    /// Read-before edges
    pub prerequisites: Vec<String>,

    /// Read-after edges
    pub follow_ups: Vec<String>,

    /// Loosely related edges
    pub see_also: Vec<String>,

    /// Documents linking here
    pub dependents: Vec<String>,
}

impl RelationshipEdges {
    /// Edge list for a type
    pub fn get(&self, edge: EdgeType) -> &[String] {
        match edge {
            EdgeType::Prerequisites => &self.prerequisites,
            EdgeType::FollowUps => &self.follow_ups,
            EdgeType::SeeAlso => &self.see_also,
            EdgeType::Dependents => &self.dependents,
        }
    }

    /// Mutable edge list for a type
    pub fn get_mut(&mut self, edge: EdgeType) -> &mut Vec<String> {
        match edge {
            EdgeType::Prerequisites => &mut self.prerequisites,
            EdgeType::FollowUps => &mut self.follow_ups,
            EdgeType::SeeAlso => &mut self.see_also,
            EdgeType::Dependents => &mut self.dependents,
        }
    }

    /// Append an identifier unless it is already present
    ///
    /// Returns `true` if the identifier was added.
    pub fn push_unique(&mut self, edge: EdgeType, id: impl Into<String>) -> bool {
        let id = id.into();
        let list = self.get_mut(edge);
        if list.contains(&id) {
            false
        } else {
            list.push(id);
            true
        }
    }

    /// Total number of edges across all types
    pub fn len(&self) -> usize {
        EdgeType::ALL.iter().map(|e| self.get(*e).len()).sum()
    }

    /// Whether every edge list is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
