//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

pub use autolink::{
    AutolinkConfig, CorpusEvent, DocumentMetadata, DocumentRef, EngineOptions, IndexEvent,
    KeywordKind, KeywordRecord, KeywordStore, MatchResult, MemoryCorpus, RecordOrigin,
    SearchEngine, Session, SharedKeywordStore, SourceId,
};

// ============================================================================
// Corpus builders
// ============================================================================

/// A note for [`corpus`]: title, aliases, tags.
pub type Note<'a> = (&'a str, &'a [&'a str], &'a [&'a str]);

/// Build a memory corpus; each note's source id is its title and its
/// locator `<title>.md`.
pub fn corpus(notes: &[Note<'_>]) -> MemoryCorpus {
    let mut corpus = MemoryCorpus::new();
    for (title, aliases, tags) in notes {
        corpus.upsert(
            format!("{}.md", title),
            DocumentMetadata::new(*title, *title)
                .with_aliases(aliases.iter().copied())
                .with_tags(tags.iter().copied()),
        );
    }
    corpus
}

/// Session over `notes` with the default configuration.
pub fn session(notes: &[Note<'_>]) -> Session<MemoryCorpus> {
    Session::new(corpus(notes), AutolinkConfig::default()).unwrap()
}

/// Session over `notes` with stemming switched off.
pub fn literal_session(notes: &[Note<'_>]) -> Session<MemoryCorpus> {
    let config = AutolinkConfig {
        enable_stemming: false,
        ..AutolinkConfig::default()
    };
    Session::new(corpus(notes), config).unwrap()
}

// ============================================================================
// Direct store / engine builders
// ============================================================================

/// Store holding one page record per keyword, each in its own source.
pub fn store_with_keywords(keywords: &[&str]) -> SharedKeywordStore {
    let mut store = KeywordStore::new();
    for (i, keyword) in keywords.iter().enumerate() {
        let id = SourceId::from(i as u64);
        let record = KeywordRecord::new(
            id.clone(),
            *keyword,
            RecordOrigin::Page {
                page: keyword.to_string(),
            },
        );
        store.insert_document(&id, vec![record]).unwrap();
    }
    store.into_shared()
}

/// Stemming engine over literal keywords.
pub fn engine_with(keywords: &[&str]) -> SearchEngine {
    SearchEngine::new(store_with_keywords(keywords), EngineOptions::default()).unwrap()
}

// ============================================================================
// Result helpers
// ============================================================================

/// `(original_keyword, index_keyword)` pairs.
pub fn pairs(results: &[MatchResult]) -> Vec<(String, String)> {
    results
        .iter()
        .map(|r| (r.original_keyword.clone(), r.index_keyword.clone()))
        .collect()
}

/// Assert results are sorted by start, non-overlapping and slice `text`.
pub fn assert_well_formed(text: &str, results: &[MatchResult]) {
    for window in results.windows(2) {
        assert!(
            window[0].end <= window[1].start,
            "overlapping or unsorted results: {:?}",
            window
        );
    }
    for r in results {
        assert!(r.start < r.end, "empty span: {:?}", r);
        assert_eq!(text.get(r.start..r.end), Some(r.original_keyword.as_str()));
    }
}
