//! In-memory keyword store
//!
//! Records live in an arena keyed by a monotonically increasing `RecordId`,
//! so iterating ids in order is iterating in insertion order. Two secondary
//! indices are maintained incrementally:
//! - `by_source`: every record owned by a document, for whole-document removal
//! - `by_keyword`: every record carrying a keyword, for lookup and snapshots
//!
//! # Consistency
//!
//! Every mutation takes `&mut self` and leaves both indices consistent with
//! the arena when it returns. Keywords are case-folded on the way in and on
//! lookup, matching the automaton's lowercase patterns. Share the store behind
//! [`SharedKeywordStore`]; a reader holding the read lock never observes a
//! half-replaced document.

use autolink_core::{AutolinkError, AutolinkResult, KeywordRecord, SourceId};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Store shared between the indexer (sole writer) and search engines.
pub type SharedKeywordStore = Arc<RwLock<KeywordStore>>;

/// Arena key of a record; allocation order is insertion order.
pub type RecordId = u64;

// ============================================================================
// KeywordStore
// ============================================================================

/// Keyword records grouped by owning document and indexed by keyword.
#[derive(Debug, Default)]
pub struct KeywordStore {
    records: BTreeMap<RecordId, KeywordRecord>,
    by_source: FxHashMap<SourceId, Vec<RecordId>>,
    by_keyword: FxHashMap<String, BTreeSet<RecordId>>,
    next_id: RecordId,
}

impl KeywordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the store for sharing with search engines
    pub fn into_shared(self) -> SharedKeywordStore {
        Arc::new(RwLock::new(self))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of documents with at least one record
    pub fn source_count(&self) -> usize {
        self.by_source.len()
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
        self.by_source.clear();
        self.by_keyword.clear();
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Append records for `source_id`.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::SourceMismatch` if any record belongs to a
    /// different source. Nothing is inserted in that case.
    pub fn insert_document(
        &mut self,
        source_id: &SourceId,
        records: Vec<KeywordRecord>,
    ) -> AutolinkResult<()> {
        check_sources(source_id, &records)?;
        self.insert_unchecked(source_id, records);
        Ok(())
    }

    /// Remove every record of `source_id`, returning how many were removed.
    /// No-op for an unknown source.
    pub fn remove_document(&mut self, source_id: &SourceId) -> usize {
        let Some(ids) = self.by_source.remove(source_id) else {
            return 0;
        };

        for id in &ids {
            let Some(record) = self.records.remove(id) else {
                continue;
            };
            if let Some(set) = self.by_keyword.get_mut(&record.keyword) {
                set.remove(id);
                if set.is_empty() {
                    self.by_keyword.remove(&record.keyword);
                }
            }
        }
        ids.len()
    }

    /// Replace every record of `source_id` with `records`.
    ///
    /// Validation happens before anything is removed, so a rejected call
    /// leaves the old records in place.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::SourceMismatch` if any record belongs to a
    /// different source.
    pub fn replace_document(
        &mut self,
        source_id: &SourceId,
        records: Vec<KeywordRecord>,
    ) -> AutolinkResult<()> {
        check_sources(source_id, &records)?;
        self.remove_document(source_id);
        self.insert_unchecked(source_id, records);
        Ok(())
    }

    fn insert_unchecked(&mut self, source_id: &SourceId, records: Vec<KeywordRecord>) {
        if records.is_empty() {
            return;
        }

        let owned = self.by_source.entry(source_id.clone()).or_default();
        for mut record in records {
            if record.keyword.chars().any(char::is_uppercase) {
                record.keyword = record.keyword.to_lowercase();
            }
            let id = self.next_id;
            self.next_id += 1;

            self.by_keyword
                .entry(record.keyword.clone())
                .or_default()
                .insert(id);
            owned.push(id);
            self.records.insert(id, record);
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Distinct keywords, omitting those that exist only under `excluding`.
    pub fn distinct_keywords(&self, excluding: Option<&SourceId>) -> BTreeSet<String> {
        self.by_keyword
            .iter()
            .filter(|(_, ids)| self.any_visible(ids, excluding))
            .map(|(keyword, _)| keyword.clone())
            .collect()
    }

    /// Records carrying `keyword`, in insertion order.
    pub fn records_for_keyword(&self, keyword: &str) -> Vec<&KeywordRecord> {
        self.records_for_keyword_excluding(keyword, None)
    }

    /// Records carrying `keyword` not owned by `excluding`, in insertion order.
    pub fn records_for_keyword_excluding(
        &self,
        keyword: &str,
        excluding: Option<&SourceId>,
    ) -> Vec<&KeywordRecord> {
        self.by_keyword
            .get(fold(keyword).as_ref())
            .into_iter()
            .flatten()
            .filter_map(|id| self.records.get(id))
            .filter(|record| Some(&record.source_id) != excluding)
            .collect()
    }

    /// Check whether any record outside `excluding` carries `keyword`.
    pub fn contains_keyword(&self, keyword: &str, excluding: Option<&SourceId>) -> bool {
        self.by_keyword
            .get(fold(keyword).as_ref())
            .is_some_and(|ids| self.any_visible(ids, excluding))
    }

    /// Records owned by `source_id`, in insertion order.
    pub fn records_for_source(&self, source_id: &SourceId) -> Vec<&KeywordRecord> {
        self.by_source
            .get(source_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    /// Check whether `source_id` has any records.
    pub fn contains_source(&self, source_id: &SourceId) -> bool {
        self.by_source.contains_key(source_id)
    }

    fn any_visible(&self, ids: &BTreeSet<RecordId>, excluding: Option<&SourceId>) -> bool {
        match excluding {
            None => !ids.is_empty(),
            Some(source) => ids
                .iter()
                .filter_map(|id| self.records.get(id))
                .any(|record| &record.source_id != source),
        }
    }
}

fn check_sources(declared: &SourceId, records: &[KeywordRecord]) -> AutolinkResult<()> {
    match records.iter().find(|r| &r.source_id != declared) {
        Some(record) => Err(AutolinkError::SourceMismatch {
            declared: declared.clone(),
            found: record.source_id.clone(),
        }),
        None => Ok(()),
    }
}

/// Lowercase form of a keyword, borrowed when already lowercase.
fn fold(keyword: &str) -> Cow<'_, str> {
    if keyword.chars().any(char::is_uppercase) {
        Cow::Owned(keyword.to_lowercase())
    } else {
        Cow::Borrowed(keyword)
    }
}
