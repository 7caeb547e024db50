//! Keyword indexing
//!
//! - `store`: In-memory keyword records with per-document lifecycle
//! - `indexer`: Keyword extraction and corpus synchronization

mod indexer;
mod store;

pub use indexer::{Indexer, KeywordExtractor};
pub use store::{KeywordStore, RecordId, SharedKeywordStore};
