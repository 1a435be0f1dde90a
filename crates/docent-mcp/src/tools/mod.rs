//! MCP tool implementations

mod catalog;
mod document;
mod related;
mod search;
pub mod views;

pub use catalog::{
    handle_categories, handle_outdated, handle_reload, CategoriesResult, CategoryInfo, OutdatedParams,
    OutdatedResult,
};
pub use document::{handle_get_document, DocumentParams, DocumentResult};
pub use related::{handle_related, RelatedParams, RelatedResult};
pub use search::{handle_search, SearchHit, SearchParams, SearchResult};
