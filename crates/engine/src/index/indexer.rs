//! Keyword extraction and store maintenance
//!
//! The indexer is the only writer of the keyword store. It turns document
//! metadata into keyword records and keeps the store in step with the
//! corpus: a full build on startup, then per-document replacement and
//! removal as change notifications arrive.

use crate::index::store::{KeywordStore, SharedKeywordStore};
use crate::search::phrase::title_keywords;
use crate::search::tokenizer::Tokenizer;
use autolink_core::{
    AutolinkConfig, AutolinkResult, CorpusProvider, DocumentMetadata, DocumentRef, IndexEvent,
    KeywordRecord, RecordOrigin, SourceId,
};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::{debug, info, warn};

// ============================================================================
// KeywordExtractor
// ============================================================================

/// Derives keyword records from one document's metadata.
///
/// Per document, in order:
/// 1. `page`: the normalized title
/// 2. `page-token`: title words and word pairs (stemming only)
/// 3. `alias`: each normalized alias
/// 4. `tag`: each tag without its leading `#` (when tags participate)
///
/// Empty and filtered keywords are skipped.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    tokenizer: Tokenizer,
    match_tags: bool,
    filter: FxHashSet<String>,
}

impl KeywordExtractor {
    /// Create an extractor for `config`
    pub fn new(config: &AutolinkConfig) -> Self {
        let tokenizer = Tokenizer::new(config.enable_stemming);
        let filter = config
            .keywords_filter
            .iter()
            .flat_map(|entry| [entry.trim().to_lowercase(), tokenizer.normalize(entry.trim())])
            .filter(|k| !k.is_empty())
            .collect();

        Self {
            tokenizer,
            match_tags: config.match_tags,
            filter,
        }
    }

    /// Normalized index form of a phrase: concatenated stems with stemming,
    /// lowercase without.
    pub fn normalize(&self, phrase: &str) -> String {
        self.tokenizer.normalize(phrase.trim())
    }

    /// Check whether a normalized keyword is excluded by the filter
    pub fn is_filtered(&self, keyword: &str) -> bool {
        self.filter.contains(keyword)
    }

    /// Records for one document
    pub fn extract(&self, meta: &DocumentMetadata) -> Vec<KeywordRecord> {
        let mut records = Vec::new();
        let mut push = |keyword: String, origin: RecordOrigin| {
            if !keyword.is_empty() && !self.is_filtered(&keyword) {
                records.push(KeywordRecord::new(meta.source_id.clone(), keyword, origin));
            }
        };

        let page = meta.title.clone();
        push(
            self.normalize(&meta.title),
            RecordOrigin::Page { page: page.clone() },
        );

        if self.tokenizer.stemming() {
            for keyword in title_keywords(&meta.title) {
                push(keyword, RecordOrigin::PageToken { page: page.clone() });
            }
        }

        for alias in &meta.aliases {
            push(
                self.normalize(alias),
                RecordOrigin::Alias {
                    page: page.clone(),
                    alias: alias.clone(),
                },
            );
        }

        if self.match_tags {
            for tag in &meta.tags {
                let bare = tag.strip_prefix('#').unwrap_or(tag);
                push(self.normalize(bare), RecordOrigin::Tag { tag: tag.clone() });
            }
        }

        records
    }
}

// ============================================================================
// Indexer
// ============================================================================

/// Keeps a keyword store in step with a corpus.
pub struct Indexer<P> {
    provider: P,
    store: SharedKeywordStore,
    extractor: KeywordExtractor,
    config: AutolinkConfig,
}

impl<P: CorpusProvider + Sync> Indexer<P> {
    /// Create an indexer with an empty store. Call
    /// [`build_index`](Self::build_index) to populate it.
    pub fn new(provider: P, config: AutolinkConfig) -> Self {
        Self::with_store(provider, config, KeywordStore::new().into_shared())
    }

    /// Create an indexer writing into an existing store
    pub fn with_store(provider: P, config: AutolinkConfig, store: SharedKeywordStore) -> Self {
        Self {
            extractor: KeywordExtractor::new(&config),
            provider,
            store,
            config,
        }
    }

    /// Rebuild the whole store from the corpus.
    ///
    /// Metadata is read and keywords extracted in parallel; records are then
    /// inserted in corpus order under a single write lock, so readers see
    /// either the old index or the new one. Documents whose metadata cannot
    /// be read are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store rejects a record set.
    pub fn build_index(&self) -> AutolinkResult<IndexEvent> {
        let started = Instant::now();
        let documents = self.provider.list_documents();

        let extracted: Vec<(SourceId, Vec<KeywordRecord>)> = documents
            .par_iter()
            .filter_map(|doc| match self.provider.metadata(doc) {
                Ok(meta) => Some((meta.source_id.clone(), self.extractor.extract(&meta))),
                Err(e) => {
                    warn!(
                        target: "autolink::index",
                        document = %doc,
                        error = %e,
                        "Skipping document whose metadata could not be read"
                    );
                    None
                }
            })
            .collect();

        let mut store = self.store.write();
        store.clear();
        for (source_id, records) in extracted {
            store.insert_document(&source_id, records)?;
        }

        info!(
            target: "autolink::index",
            documents = documents.len(),
            records = store.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Keyword index built"
        );
        Ok(IndexEvent::Rebuilt)
    }

    /// Re-extract one document and atomically replace its records.
    ///
    /// # Errors
    ///
    /// Returns an error if the document's metadata cannot be read; the
    /// store is left unchanged in that case.
    pub fn replace_document(&self, doc: &DocumentRef) -> AutolinkResult<IndexEvent> {
        let meta = self.provider.metadata(doc)?;
        let records = self.extractor.extract(&meta);
        let count = records.len();
        self.store
            .write()
            .replace_document(&meta.source_id, records)?;

        debug!(
            target: "autolink::index",
            document = %doc,
            source_id = %meta.source_id,
            records = count,
            "Document re-indexed"
        );
        Ok(IndexEvent::Updated)
    }

    /// Drop every record of a deleted document.
    pub fn remove_document(&self, source_id: &SourceId) -> IndexEvent {
        let removed = self.store.write().remove_document(source_id);
        debug!(
            target: "autolink::index",
            source_id = %source_id,
            records = removed,
            "Document removed from index"
        );
        IndexEvent::Updated
    }
}

impl<P> Indexer<P> {
    /// Swap configuration. The store is not touched; call
    /// [`build_index`](Indexer::build_index) to apply it.
    pub fn set_config(&mut self, config: AutolinkConfig) {
        self.extractor = KeywordExtractor::new(&config);
        self.config = config;
    }

    /// Current configuration
    pub fn config(&self) -> &AutolinkConfig {
        &self.config
    }

    /// Keyword extractor for the current configuration
    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    /// Shared handle to the store
    pub fn store(&self) -> &SharedKeywordStore {
        &self.store
    }

    /// The corpus being indexed
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the corpus, for hosts that own it
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }
}
