//! Search engine: one immutable automaton snapshot plus read access to the store
//!
//! A `SearchEngine` is built from the store's distinct keywords at
//! construction time and never changes afterwards. When the store changes,
//! build a new engine and swap it in; queries against the old one keep
//! working and drop any hit whose keyword has since disappeared.
//!
//! Query pipeline:
//!
//! ```text
//! text → redact → tokenize (stem) → stemmed stream → automaton scan
//!      → map to original spans → drop stale → dedupe (start, keyword) → sort
//! ```

use super::mapper::{is_aligned, map_to_original};
use super::matcher::Matcher;
use super::redact::redact;
use super::tokenizer::Tokenizer;
use crate::index::SharedKeywordStore;
use autolink_core::{AutolinkConfig, AutolinkResult, MatchResult, SourceId};
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::{error, info, warn};

/// Options fixed for the lifetime of one engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Reduce query tokens to stems before matching
    pub stemming: bool,
    /// Document being edited; its own records are invisible to the engine
    pub active_source: Option<SourceId>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            stemming: true,
            active_source: None,
        }
    }
}

impl EngineOptions {
    /// Options derived from configuration, with no active document
    pub fn from_config(config: &AutolinkConfig) -> Self {
        Self {
            stemming: config.enable_stemming,
            active_source: None,
        }
    }

    /// Builder-style active document
    pub fn with_active_source(mut self, source: Option<SourceId>) -> Self {
        self.active_source = source;
        self
    }
}

/// Finds indexed keywords in arbitrary text.
#[derive(Debug)]
pub struct SearchEngine {
    matcher: Matcher,
    tokenizer: Tokenizer,
    store: SharedKeywordStore,
    active_source: Option<SourceId>,
}

impl SearchEngine {
    /// Snapshot the store's keywords and build the automaton.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::Automaton` if the automaton cannot be built.
    pub fn new(store: SharedKeywordStore, options: EngineOptions) -> AutolinkResult<Self> {
        let started = Instant::now();
        let keywords = store
            .read()
            .distinct_keywords(options.active_source.as_ref());
        let matcher = Matcher::build(&keywords)?;

        info!(
            target: "autolink::search",
            keywords = matcher.len(),
            stemming = options.stemming,
            active = ?options.active_source,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Keyword automaton built"
        );

        Ok(Self {
            matcher,
            tokenizer: Tokenizer::new(options.stemming),
            store,
            active_source: options.active_source,
        })
    }

    /// Find keyword occurrences in `text`.
    ///
    /// Results are in original-text byte coordinates, sorted by start and
    /// pairwise non-overlapping.
    pub fn find(&self, text: &str) -> Vec<MatchResult> {
        if self.matcher.is_empty() || text.is_empty() {
            return Vec::new();
        }

        let redacted = redact(text);
        let tokens = self.tokenizer.tokenize(&redacted);
        let stemmed: String = tokens.iter().map(|t| t.stem.as_str()).collect();
        let matches = self
            .matcher
            .parse_aligned(&stemmed, |start, end| is_aligned(&tokens, start, end));

        let store = self.store.read();
        let mut seen = FxHashSet::default();
        let mut results = Vec::with_capacity(matches.len());

        for m in &matches {
            let mapped = map_to_original(m, &tokens, text);
            debug_assert!(mapped.is_some(), "match {:?} has no covering token", m);
            let Some(result) = mapped else {
                error!(
                    target: "autolink::search",
                    keyword = m.keyword,
                    start = m.start,
                    end = m.end,
                    "Match has no covering token; tokenizer and matcher disagree"
                );
                continue;
            };

            if !store.contains_keyword(&result.index_keyword, self.active_source.as_ref()) {
                warn!(
                    target: "autolink::search",
                    keyword = %result.index_keyword,
                    "Match keyword no longer in the index; dropping stale hit"
                );
                continue;
            }

            if seen.insert((result.start, result.index_keyword.clone())) {
                results.push(result);
            }
        }

        results.sort_by_key(|r| r.start);
        results
    }

    /// Distinct replacement texts offered for `keyword`, in index order.
    pub fn suggestions(&self, keyword: &str) -> Vec<String> {
        let keyword = keyword.to_lowercase();
        let store = self.store.read();

        let mut seen = FxHashSet::default();
        store
            .records_for_keyword_excluding(&keyword, self.active_source.as_ref())
            .into_iter()
            .map(|record| record.replacement_text())
            .filter(|text| seen.insert(text.clone()))
            .collect()
    }

    /// Keywords the automaton was built from, sorted
    pub fn keywords(&self) -> &[String] {
        self.matcher.keywords()
    }

    /// Check whether the store still has exactly the keyword set this
    /// engine was built from.
    pub fn is_current(&self) -> bool {
        let keywords = self
            .store
            .read()
            .distinct_keywords(self.active_source.as_ref());
        keywords.len() == self.matcher.len() && keywords.iter().eq(self.matcher.keywords())
    }

    /// Whether query text is stemmed
    pub fn stemming(&self) -> bool {
        self.tokenizer.stemming()
    }

    /// Document excluded from this engine
    pub fn active_source(&self) -> Option<&SourceId> {
        self.active_source.as_ref()
    }

    /// Store this engine reads from
    pub fn store(&self) -> &SharedKeywordStore {
        &self.store
    }
}
