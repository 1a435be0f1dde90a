//! Shared, swappable corpus

use crate::config::DocentConfig;
use crate::error::StoreError;
use crate::loader::FsDocumentSource;
use docent_domain::traits::DocumentSource;
use docent_graph::{Corpus, GraphBuilder, GraphStats};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// Holds the current corpus and rebuilds it on demand
///
/// Readers take an `Arc` snapshot and never block a reload for longer than
/// the pointer swap. A reload loads and builds a complete corpus before
/// taking the write lock; if it fails the previous corpus stays in place.
pub struct CorpusHandle<S = FsDocumentSource> {
    source: S,
    builder: GraphBuilder,
    current: RwLock<Arc<Corpus>>,
}

impl CorpusHandle<FsDocumentSource> {
    /// Load the docs tree described by `config`
    pub fn open(config: &DocentConfig) -> Result<Self, StoreError> {
        config.validate().map_err(StoreError::Config)?;
        let source = FsDocumentSource::new(&config.docs_root, config.loader.clone());
        Self::with_source(source, GraphBuilder::new(config.graph.clone()))
    }
}

impl<S> CorpusHandle<S>
where
    S: DocumentSource,
    StoreError: From<S::Error>,
{
    /// Build the initial corpus from any document source
    pub fn with_source(source: S, builder: GraphBuilder) -> Result<Self, StoreError> {
        let corpus = build_corpus(&source, &builder)?;
        Ok(Self {
            source,
            builder,
            current: RwLock::new(Arc::new(corpus)),
        })
    }

    /// The current corpus
    pub fn snapshot(&self) -> Arc<Corpus> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Rebuild from the source and swap the new corpus in
    pub fn reload(&self) -> Result<GraphStats, StoreError> {
        let corpus = match build_corpus(&self.source, &self.builder) {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!("Reload failed, keeping previous corpus: {}", e);
                return Err(e);
            }
        };
        let stats = corpus.stats().clone();

        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(corpus);
        drop(guard);

        info!("Corpus reloaded: {} documents", stats.documents);
        Ok(stats)
    }

    /// Document source
    pub fn source(&self) -> &S {
        &self.source
    }
}

fn build_corpus<S>(source: &S, builder: &GraphBuilder) -> Result<Corpus, StoreError>
where
    S: DocumentSource,
    StoreError: From<S::Error>,
{
    let documents = source.load_documents()?;
    Ok(builder.build(documents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docent_domain::Document;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves a growing corpus and fails on request
    struct ScriptedSource {
        loads: AtomicUsize,
        fail_after: usize,
    }

    impl DocumentSource for ScriptedSource {
        type Error = StoreError;

        fn load_documents(&self) -> Result<Vec<Document>, StoreError> {
            let n = self.loads.fetch_add(1, Ordering::SeqCst) + 1;
            if n > self.fail_after {
                return Err(StoreError::Config("source unavailable".to_string()));
            }
            Ok((0..n)
                .map(|i| Document::new(format!("d/{}.md", i), format!("Doc {}", i), ""))
                .collect())
        }
    }

    fn handle(fail_after: usize) -> CorpusHandle<ScriptedSource> {
        let source = ScriptedSource {
            loads: AtomicUsize::new(0),
            fail_after,
        };
        CorpusHandle::with_source(source, GraphBuilder::default()).unwrap()
    }

    #[test]
    fn test_reload_swaps_corpus() {
        let handle = handle(5);
        let before = handle.snapshot();
        assert_eq!(before.len(), 1);

        let stats = handle.reload().unwrap();
        assert_eq!(stats.documents, 2);
        assert_eq!(handle.snapshot().len(), 2);

        // Old snapshots stay valid
        assert_eq!(before.len(), 1);
    }

    #[test]
    fn test_failed_reload_keeps_previous() {
        let handle = handle(1);
        assert!(handle.reload().is_err());
        assert_eq!(handle.snapshot().len(), 1);
    }

    #[test]
    fn test_initial_failure_is_error() {
        let source = ScriptedSource {
            loads: AtomicUsize::new(0),
            fail_after: 0,
        };
        assert!(CorpusHandle::with_source(source, GraphBuilder::default()).is_err());
    }
}
