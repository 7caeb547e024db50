//! Core types for autolink
//!
//! This module defines the foundational types:
//! - SourceId: Stable identity of a document in the corpus
//! - KeywordKind / RecordOrigin: What produced a keyword record
//! - KeywordRecord: One keyword indexed against one document
//! - MatchResult: A keyword occurrence in original-text coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a source document
///
/// Derived from the document's creation identity, not its path, so renaming
/// a note keeps its records attached to the same source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceId(String);

impl SourceId {
    /// Create a SourceId from any string-like identity
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identity string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for SourceId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Discriminant of a keyword record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordKind {
    /// Tag attached to a document
    Tag,
    /// Alias declared in a document's front matter
    Alias,
    /// The document title itself
    Page,
    /// A word or word pair taken from the document title
    PageToken,
}

impl KeywordKind {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordKind::Tag => "tag",
            KeywordKind::Alias => "alias",
            KeywordKind::Page => "page",
            KeywordKind::PageToken => "page-token",
        }
    }
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What produced a keyword record, carrying the fields its display rules need
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RecordOrigin {
    /// A tag as written in the document, e.g. `#sport/football`
    Tag {
        /// Tag text including its leading `#`
        tag: String,
    },
    /// An alias of a page
    Alias {
        /// Title of the page declaring the alias
        page: String,
        /// The alias as written
        alias: String,
    },
    /// The page title
    Page {
        /// Page title
        page: String,
    },
    /// A token or token pair derived from the page title
    PageToken {
        /// Page title
        page: String,
    },
}

impl RecordOrigin {
    /// Kind discriminant
    pub fn kind(&self) -> KeywordKind {
        match self {
            RecordOrigin::Tag { .. } => KeywordKind::Tag,
            RecordOrigin::Alias { .. } => KeywordKind::Alias,
            RecordOrigin::Page { .. } => KeywordKind::Page,
            RecordOrigin::PageToken { .. } => KeywordKind::PageToken,
        }
    }

    /// Text the keyword was derived from
    pub fn original_text(&self) -> &str {
        match self {
            RecordOrigin::Tag { tag } => tag,
            RecordOrigin::Alias { page, .. }
            | RecordOrigin::Page { page }
            | RecordOrigin::PageToken { page } => page,
        }
    }

    /// Text offered to replace a matched occurrence
    pub fn replacement_text(&self) -> String {
        match self {
            RecordOrigin::Tag { tag } => tag.clone(),
            RecordOrigin::Alias { page, alias } => format!("[[{}|{}]]", page, alias),
            RecordOrigin::Page { page } | RecordOrigin::PageToken { page } => {
                format!("[[{}]]", page)
            }
        }
    }
}

/// One keyword indexed against one source document
///
/// Records are immutable: when a document changes, every record of its
/// source is dropped and a fresh set is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// Owning document
    pub source_id: SourceId,
    /// Normalized keyword (lowercase, stemmed when stemming is enabled)
    pub keyword: String,
    /// What produced this record
    pub origin: RecordOrigin,
}

impl KeywordRecord {
    /// Create a record
    pub fn new(source_id: SourceId, keyword: impl Into<String>, origin: RecordOrigin) -> Self {
        Self {
            source_id,
            keyword: keyword.into(),
            origin,
        }
    }

    /// Kind discriminant
    pub fn kind(&self) -> KeywordKind {
        self.origin.kind()
    }

    /// Text the keyword was derived from
    pub fn original_text(&self) -> &str {
        self.origin.original_text()
    }

    /// Text offered to replace a matched occurrence
    pub fn replacement_text(&self) -> String {
        self.origin.replacement_text()
    }
}

/// A keyword occurrence in original-text coordinates
///
/// `start..end` is a half-open byte range into the queried text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    /// First byte of the occurrence
    pub start: usize,
    /// First byte after the occurrence
    pub end: usize,
    /// Normalized keyword that matched
    pub index_keyword: String,
    /// Literal substring of the queried text
    pub original_keyword: String,
}

impl MatchResult {
    /// Length of the occurrence in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-length span (never produced by the engine)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether two results share any byte
    pub fn overlaps(&self, other: &MatchResult) -> bool {
        self.start < other.end && other.start < self.end
    }
}
