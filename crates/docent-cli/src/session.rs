//! Loaded corpus and engine for one CLI invocation

use crate::error::{CliError, Result};
use chrono::Utc;
use docent_domain::Document;
use docent_graph::Corpus;
use docent_search::SearchEngine;
use docent_store::{CorpusHandle, DocentConfig};
use std::sync::Arc;

/// A corpus loaded from disk plus the engine that queries it
pub struct Session {
    corpus: Arc<Corpus>,
    engine: SearchEngine,
    now_millis: u64,
}

impl Session {
    /// Load the docs tree and build the graph
    pub fn open(config: &DocentConfig) -> Result<Self> {
        let handle = CorpusHandle::open(config)?;
        Ok(Self {
            corpus: handle.snapshot(),
            engine: SearchEngine::new(config.search.clone()),
            now_millis: u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0),
        })
    }

    /// Pin the time used for freshness and recency
    pub fn at(mut self, now_millis: u64) -> Self {
        self.now_millis = now_millis;
        self
    }

    /// The loaded corpus
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Search engine
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Time used for freshness and recency
    pub fn now_millis(&self) -> u64 {
        self.now_millis
    }

    /// Find a document by identifier, with or without `.md`
    pub fn resolve(&self, id: &str) -> Result<&Document> {
        self.corpus
            .lookup(id)
            .ok_or_else(|| CliError::DocumentNotFound(id.to_string()))
    }
}
