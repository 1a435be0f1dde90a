//! Docent Storage Layer
//!
//! Loads a markdown tree from disk and holds the built corpus.
//!
//! # Architecture
//!
//! - [`FsDocumentSource`] walks the docs root with `walkdir`, splits YAML
//!   front matter and derives each document record
//! - [`CorpusHandle`] builds the relationship graph and keeps the current
//!   corpus behind an `RwLock<Arc<_>>` so a reload swaps it atomically
//! - [`DocentConfig`] gathers loader, graph and search settings in one
//!   TOML file
//!
//! Nothing is persisted; every start (or reload) reads the tree again.
//!
//! # Examples
//!
//! ```no_run
//! use docent_store::{CorpusHandle, DocentConfig};
//!
//! let handle = CorpusHandle::open(&DocentConfig::for_root("./docs")).unwrap();
//! let corpus = handle.snapshot();
//! println!("{} documents", corpus.len());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod handle;

pub mod front_matter;
pub mod loader;

pub use config::{DocentConfig, LoaderConfig};
pub use error::StoreError;
pub use handle::CorpusHandle;
pub use loader::FsDocumentSource;
