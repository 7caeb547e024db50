//! Core types and traits for autolink
//!
//! This crate defines the foundational types used throughout the system:
//! - SourceId: Stable identity of a corpus document
//! - KeywordRecord / RecordOrigin / KeywordKind: Indexed keywords and their provenance
//! - MatchResult: Keyword occurrence in original-text coordinates
//! - AutolinkError: Error type
//! - AutolinkConfig: `autolink.toml` configuration
//! - CorpusProvider / CorpusEvent / IndexEvent: Interfaces to the host

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod types;

pub use config::{AutolinkConfig, CONFIG_FILE_NAME, DEFAULT_REBUILD_DELAY_MS};
pub use corpus::{
    CorpusEvent, CorpusProvider, DocumentMetadata, DocumentRef, IndexEvent, MemoryCorpus,
};
pub use error::{AutolinkError, AutolinkResult};
pub use types::{KeywordKind, KeywordRecord, MatchResult, RecordOrigin, SourceId};
