//! Session: the orchestration layer around indexer and search engine
//!
//! A session owns the indexer, the active document, the rebuild debouncer
//! and the current search engine. Hosts forward corpus events to
//! [`Session::handle`] and drive [`Session::poll`] from their own timer;
//! consumers query [`Session::engine`] and re-fetch it when a listener
//! reports an [`IndexEvent`].
//!
//! # Rebuild policy
//!
//! | Trigger | Store | Engine |
//! |---------|-------|--------|
//! | `LayoutReady`, `set_config` | full rebuild | rebuilt immediately |
//! | `DocumentChanged` / `Renamed` / `Deleted` | updated immediately | rebuilt after the debounce window |
//! | `set_active_document` | untouched | rebuilt immediately |
//!
//! Queries issued inside the debounce window keep using the previous engine;
//! stale hits are filtered against the live store.

use crate::debounce::RebuildDebouncer;
use crate::index::Indexer;
use crate::search::{EngineOptions, SearchEngine};
use autolink_core::{
    AutolinkConfig, AutolinkResult, CorpusEvent, CorpusProvider, IndexEvent, MatchResult,
    SourceId,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Callback invoked after the current engine was replaced
pub type IndexListener = Arc<dyn Fn(IndexEvent) + Send + Sync>;

/// Indexer, current engine and rebuild scheduling for one corpus.
pub struct Session<P> {
    indexer: Indexer<P>,
    engine: Arc<SearchEngine>,
    active: Option<SourceId>,
    debouncer: RebuildDebouncer,
    pending: Option<IndexEvent>,
    listeners: Vec<IndexListener>,
}

impl<P: CorpusProvider + Sync> Session<P> {
    /// Index the corpus and build the first engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the index or the automaton cannot be built.
    pub fn new(provider: P, config: AutolinkConfig) -> AutolinkResult<Self> {
        let debouncer = RebuildDebouncer::new(config.rebuild_delay());
        let indexer = Indexer::new(provider, config);
        indexer.build_index()?;
        let engine = Arc::new(SearchEngine::new(
            indexer.store().clone(),
            EngineOptions::from_config(indexer.config()),
        )?);

        Ok(Self {
            indexer,
            engine,
            active: None,
            debouncer,
            pending: None,
            listeners: Vec::new(),
        })
    }

    /// React to a corpus change notification.
    ///
    /// # Errors
    ///
    /// Returns an error if a changed document cannot be read or a rebuild
    /// fails. The previous engine stays in place.
    pub fn handle(&mut self, event: CorpusEvent, now: Instant) -> AutolinkResult<()> {
        match event {
            CorpusEvent::LayoutReady => {
                let event = self.indexer.build_index()?;
                self.debouncer.cancel();
                self.pending = None;
                self.rebuild_engine()?;
                self.notify(event);
            }
            CorpusEvent::DocumentChanged(doc) | CorpusEvent::DocumentRenamed(doc) => {
                let event = self.indexer.replace_document(&doc)?;
                self.schedule(event, now);
            }
            CorpusEvent::DocumentDeleted(source_id) => {
                let event = self.indexer.remove_document(&source_id);
                self.schedule(event, now);
            }
        }
        Ok(())
    }

    /// Rebuild the engine if the debounce window has elapsed.
    ///
    /// Returns true if the engine was replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the automaton cannot be built.
    pub fn poll(&mut self, now: Instant) -> AutolinkResult<bool> {
        if !self.debouncer.poll(now) {
            return Ok(false);
        }
        self.apply_pending()?;
        Ok(true)
    }

    /// Rebuild now if a rebuild is pending, skipping the rest of the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the automaton cannot be built.
    pub fn flush(&mut self) -> AutolinkResult<bool> {
        if !self.debouncer.is_pending() {
            return Ok(false);
        }
        self.debouncer.cancel();
        self.apply_pending()?;
        Ok(true)
    }

    /// Switch the document being edited. Its own keywords stop matching.
    ///
    /// # Errors
    ///
    /// Returns an error if the automaton cannot be built.
    pub fn set_active_document(&mut self, source_id: Option<SourceId>) -> AutolinkResult<()> {
        if self.active == source_id {
            return Ok(());
        }
        self.active = source_id;
        self.rebuild_engine()?;
        self.notify(IndexEvent::Updated);
        Ok(())
    }

    /// Apply a new configuration: re-index the corpus and rebuild now.
    ///
    /// # Errors
    ///
    /// Returns an error if the index or the automaton cannot be built.
    pub fn set_config(&mut self, config: AutolinkConfig) -> AutolinkResult<()> {
        self.debouncer.set_delay(config.rebuild_delay());
        self.indexer.set_config(config);
        let event = self.indexer.build_index()?;
        self.debouncer.cancel();
        self.pending = None;
        self.rebuild_engine()?;
        self.notify(event);
        Ok(())
    }
}

impl<P> Session<P> {
    /// Current engine. Hold on to it for a batch of queries and re-fetch
    /// after an [`IndexEvent`].
    pub fn engine(&self) -> Arc<SearchEngine> {
        Arc::clone(&self.engine)
    }

    /// Shorthand for `engine().find(text)`
    pub fn find(&self, text: &str) -> Vec<MatchResult> {
        self.engine.find(text)
    }

    /// Shorthand for `engine().suggestions(keyword)`
    pub fn suggestions(&self, keyword: &str) -> Vec<String> {
        self.engine.suggestions(keyword)
    }

    /// Register a callback for engine replacements
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(IndexEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
    }

    /// Document currently excluded from matching
    pub fn active_document(&self) -> Option<&SourceId> {
        self.active.as_ref()
    }

    /// Check whether a debounced rebuild is waiting
    pub fn is_rebuild_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Current configuration
    pub fn config(&self) -> &AutolinkConfig {
        self.indexer.config()
    }

    /// The indexer and its store
    pub fn indexer(&self) -> &Indexer<P> {
        &self.indexer
    }

    /// Mutable access to the corpus, for hosts that own it
    pub fn provider_mut(&mut self) -> &mut P {
        self.indexer.provider_mut()
    }

    fn schedule(&mut self, event: IndexEvent, now: Instant) {
        self.debouncer.schedule(now);
        self.pending.get_or_insert(event);
        debug!(
            target: "autolink::session",
            delay_ms = self.debouncer.delay().as_millis() as u64,
            "Engine rebuild scheduled"
        );
    }

    fn apply_pending(&mut self) -> AutolinkResult<()> {
        self.rebuild_engine()?;
        let event = self.pending.take().unwrap_or(IndexEvent::Updated);
        self.notify(event);
        Ok(())
    }

    /// Replace the engine unless the current one already reflects the
    /// store's keyword set, active document and stemming mode.
    fn rebuild_engine(&mut self) -> AutolinkResult<()> {
        let options = EngineOptions::from_config(self.indexer.config())
            .with_active_source(self.active.clone());

        let unchanged = self.engine.stemming() == options.stemming
            && self.engine.active_source() == options.active_source.as_ref()
            && self.engine.is_current();
        if unchanged {
            debug!(target: "autolink::session", "Keyword set unchanged; keeping automaton");
            return Ok(());
        }

        let engine = SearchEngine::new(self.indexer.store().clone(), options)?;
        self.engine = Arc::new(engine);
        Ok(())
    }

    fn notify(&self, event: IndexEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}
