//! Narrow interfaces to the host that owns the notes
//!
//! The engine never enumerates files or parses front matter itself. A host
//! implements [`CorpusProvider`] and forwards its change notifications as
//! [`CorpusEvent`]s; consumers learn about index changes via [`IndexEvent`].

use crate::error::{AutolinkError, AutolinkResult};
use crate::types::SourceId;
use std::fmt;
use std::time::SystemTime;

/// Host-side locator of a document (typically its vault-relative path)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentRef(String);

impl DocumentRef {
    /// Create a reference from a locator string
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Borrow the locator
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata the indexer extracts keywords from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    /// Document title (file basename without extension)
    pub title: String,
    /// Aliases declared by the document
    pub aliases: Vec<String>,
    /// Tags as written, including the leading `#`
    pub tags: Vec<String>,
    /// Stable identity that survives renames
    pub source_id: SourceId,
    /// Creation time, when the host knows it
    pub created_at: Option<SystemTime>,
}

impl DocumentMetadata {
    /// Metadata with a title and identity only
    pub fn new(title: impl Into<String>, source_id: impl Into<SourceId>) -> Self {
        Self {
            title: title.into(),
            aliases: Vec::new(),
            tags: Vec::new(),
            source_id: source_id.into(),
            created_at: None,
        }
    }

    /// Builder-style alias list
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style tag list
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Source of documents and their metadata
pub trait CorpusProvider {
    /// Every document currently in the corpus, in a stable order
    fn list_documents(&self) -> Vec<DocumentRef>;

    /// Metadata for one document
    ///
    /// # Errors
    ///
    /// Returns an error if the document vanished or could not be read.
    fn metadata(&self, doc: &DocumentRef) -> AutolinkResult<DocumentMetadata>;
}

/// Change notifications forwarded by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusEvent {
    /// Host finished loading; the full index should be built
    LayoutReady,
    /// A document's content or metadata changed
    DocumentChanged(DocumentRef),
    /// A document was renamed (its source identity is unchanged)
    DocumentRenamed(DocumentRef),
    /// A document was deleted
    DocumentDeleted(SourceId),
}

/// Notifications delivered to consumers holding a search engine handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexEvent {
    /// The whole index was rebuilt from the corpus
    Rebuilt,
    /// One or more documents were re-indexed
    Updated,
}

/// In-memory corpus, keyed by document locator
///
/// Useful for hosts that already hold their metadata in memory, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    documents: Vec<(DocumentRef, DocumentMetadata)>,
}

impl MemoryCorpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document, returning its reference
    pub fn upsert(
        &mut self,
        locator: impl Into<String>,
        metadata: DocumentMetadata,
    ) -> DocumentRef {
        let doc = DocumentRef::new(locator);
        match self.documents.iter_mut().find(|(d, _)| *d == doc) {
            Some(entry) => entry.1 = metadata,
            None => self.documents.push((doc.clone(), metadata)),
        }
        doc
    }

    /// Move a document to a new locator, keeping its metadata and identity
    pub fn rename(
        &mut self,
        from: &DocumentRef,
        to: impl Into<String>,
        title: impl Into<String>,
    ) -> Option<DocumentRef> {
        let entry = self.documents.iter_mut().find(|(d, _)| d == from)?;
        entry.0 = DocumentRef::new(to);
        entry.1.title = title.into();
        Some(entry.0.clone())
    }

    /// Remove a document, returning its metadata
    pub fn remove(&mut self, doc: &DocumentRef) -> Option<DocumentMetadata> {
        let pos = self.documents.iter().position(|(d, _)| d == doc)?;
        Some(self.documents.remove(pos).1)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if the corpus has no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl CorpusProvider for MemoryCorpus {
    fn list_documents(&self) -> Vec<DocumentRef> {
        self.documents.iter().map(|(d, _)| d.clone()).collect()
    }

    fn metadata(&self, doc: &DocumentRef) -> AutolinkResult<DocumentMetadata> {
        self.documents
            .iter()
            .find(|(d, _)| d == doc)
            .map(|(_, m)| m.clone())
            .ok_or_else(|| AutolinkError::corpus(format!("unknown document '{}'", doc)))
    }
}
