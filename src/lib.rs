//! Autolink - inflection-aware keyword matching for note corpora
//!
//! Autolink indexes the titles, aliases and tags of a set of notes and finds
//! every place in a piece of text where one of those keywords appears, even
//! when the text uses a different inflection ("searching notes" matches the
//! notes *Search* and *Note*).
//!
//! # Quick Start
//!
//! ```ignore
//! use autolink::{AutolinkConfig, DocumentMetadata, MemoryCorpus, Session};
//!
//! let mut corpus = MemoryCorpus::new();
//! corpus.upsert("Search.md", DocumentMetadata::new("Search", "1"));
//!
//! let session = Session::new(corpus, AutolinkConfig::default())?;
//! for m in session.find("I was searching my notes") {
//!     println!("{}..{} {} -> {}", m.start, m.end, m.original_keyword, m.index_keyword);
//! }
//! ```
//!
//! # Architecture
//!
//! - `autolink-core`: shared types, errors, configuration and the
//!   [`CorpusProvider`] seam
//! - `autolink-engine`: stemmer, tokenizer, keyword store, matcher and the
//!   [`Session`] that keeps them in step with the corpus

pub use autolink_core::*;
pub use autolink_engine::*;
