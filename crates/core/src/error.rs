//! Error types for autolink
//!
//! Only a handful of operations can fail: inserting records under the wrong
//! source, building the multi-pattern automaton, loading configuration, and
//! talking to the corpus collaborator. Everything on the query path
//! (`tokenize`, `redact`, `find`) is total and never returns an error.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::SourceId;
use std::io;
use thiserror::Error;

/// Result type alias for autolink operations
pub type AutolinkResult<T> = std::result::Result<T, AutolinkError>;

/// Error types for the keyword index and search engine
#[derive(Debug, Error)]
pub enum AutolinkError {
    /// Records handed to the store reference a different source than declared.
    ///
    /// This is a programming error in the caller, never a runtime condition.
    #[error("record source mismatch: declared {declared}, found {found}")]
    SourceMismatch {
        /// Source the caller declared
        declared: SourceId,
        /// Source found on one of the records
        found: SourceId,
    },

    /// The multi-pattern automaton could not be built
    #[error("automaton build failed: {0}")]
    Automaton(String),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// The corpus collaborator failed to provide a document or its metadata
    #[error("corpus error: {0}")]
    Corpus(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AutolinkError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        AutolinkError::Config(message.into())
    }

    /// Create a corpus error
    pub fn corpus(message: impl Into<String>) -> Self {
        AutolinkError::Corpus(message.into())
    }

    /// Create an automaton build error
    pub fn automaton(message: impl Into<String>) -> Self {
        AutolinkError::Automaton(message.into())
    }

    /// Check whether this error indicates a caller bug rather than bad input
    pub fn is_programming_error(&self) -> bool {
        matches!(self, AutolinkError::SourceMismatch { .. })
    }

    /// Check whether this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, AutolinkError::Config(_))
    }
}
