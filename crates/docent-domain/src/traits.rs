//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the core and its collaborators.
//! Implementations live in other crates.

use crate::Document;

/// Trait for supplying a parsed corpus
///
/// Implemented by the infrastructure layer (docent-store). The returned order
/// is the corpus order used for every tie-break downstream.
pub trait DocumentSource {
    /// Error type for load operations
    type Error;

    /// Load every document of one load cycle
    fn load_documents(&self) -> Result<Vec<Document>, Self::Error>;
}

/// Trait for mapping loosely formatted references to documents
///
/// Implemented by the graph layer (docent-graph).
pub trait ReferenceResolver {
    /// Resolve a raw reference to a position in corpus order
    ///
    /// Returns `None` for dangling or ambiguous references; callers drop them.
    fn resolve(&self, raw: &str) -> Option<usize>;
}
