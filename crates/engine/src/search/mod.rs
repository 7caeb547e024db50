//! Search module for keyword matching
//!
//! This module contains:
//! - `stemmer`: Porter stemmer
//! - `tokenizer`: Dual-coordinate tokenization (original and stemmed spans)
//! - `phrase`: Page-title keyword permutations
//! - `redact`: Length-preserving masking of code, front matter, tags and links
//! - `matcher`: Multi-pattern automaton with longest-match overlap resolution
//! - `mapper`: Stemmed-to-original offset mapping
//! - `engine`: The `find` / `suggestions` pipeline

mod engine;
pub mod mapper;
pub mod matcher;
pub mod phrase;
pub mod redact;
pub mod stemmer;
pub mod tokenizer;

pub use engine::{EngineOptions, SearchEngine};
pub use mapper::map_to_original;
pub use matcher::{Match, Matcher};
pub use phrase::title_keywords;
pub use redact::redact;
pub use stemmer::stem;
pub use tokenizer::{tokenize, Token, Tokenizer};
