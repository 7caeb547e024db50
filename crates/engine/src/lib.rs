//! Keyword index and matching engine for autolink
//!
//! This crate ties the lower layers together:
//! - search: Stemmer, tokenizer, redactor, matcher, offset mapper, `SearchEngine`
//! - index: `KeywordStore` and the `Indexer` that keeps it in step with a corpus
//! - debounce: Trailing-edge coalescing of automaton rebuilds
//! - session: `Session`, the orchestration layer a host talks to
//!
//! The engine never touches the filesystem. Documents and their metadata
//! arrive through `autolink_core::CorpusProvider`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod debounce;
pub mod index;
pub mod search;
pub mod session;

pub use debounce::RebuildDebouncer;
pub use index::{Indexer, KeywordExtractor, KeywordStore, RecordId, SharedKeywordStore};
pub use search::{
    map_to_original, redact, stem, title_keywords, tokenize, EngineOptions, Match, Matcher,
    SearchEngine, Token, Tokenizer,
};
pub use session::{IndexListener, Session};
