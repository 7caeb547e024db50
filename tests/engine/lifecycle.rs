//! Keyword store lifecycle: insert, replace, remove by source.

use crate::common::*;
use std::sync::Arc;
use std::thread;

fn record(source: &SourceId, keyword: &str, page: &str) -> KeywordRecord {
    KeywordRecord::new(
        source.clone(),
        keyword,
        RecordOrigin::Page {
            page: page.to_string(),
        },
    )
}

#[test]
fn replace_swaps_whole_record_set() {
    let id = SourceId::new("note-1");
    let mut store = KeywordStore::new();
    store
        .insert_document(&id, vec![record(&id, "old", "Old"), record(&id, "shared", "Old")])
        .unwrap();
    store
        .replace_document(&id, vec![record(&id, "new", "New"), record(&id, "shared", "New")])
        .unwrap();

    assert!(store.records_for_keyword("old").is_empty());
    assert_eq!(store.records_for_keyword("new").len(), 1);

    let shared = store.records_for_keyword("shared");
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].original_text(), "New");
}

#[test]
fn mismatched_source_is_rejected_without_side_effects() {
    let id = SourceId::new("a");
    let other = SourceId::new("b");
    let mut store = KeywordStore::new();
    store.insert_document(&id, vec![record(&id, "alpha", "A")]).unwrap();

    let err = store
        .replace_document(&id, vec![record(&other, "beta", "B")])
        .unwrap_err();
    assert!(err.is_programming_error());
    assert_eq!(store.records_for_keyword("alpha").len(), 1);
    assert!(store.records_for_keyword("beta").is_empty());
}

#[test]
fn remove_drops_every_record_of_source() {
    let a = SourceId::new("a");
    let b = SourceId::new("b");
    let mut store = KeywordStore::new();
    store
        .insert_document(&a, vec![record(&a, "k", "A"), record(&a, "x", "A")])
        .unwrap();
    store.insert_document(&b, vec![record(&b, "k", "B")]).unwrap();

    assert_eq!(store.remove_document(&a), 2);
    assert!(!store.contains_source(&a));
    assert_eq!(store.records_for_keyword("k").len(), 1);
    assert_eq!(store.remove_document(&a), 0);
}

#[test]
fn readers_never_see_mixed_record_sets() {
    let id = SourceId::new("doc");
    let store = {
        let mut store = KeywordStore::new();
        store
            .insert_document(&id, vec![record(&id, "k", "gen-0")])
            .unwrap();
        store.into_shared()
    };

    let writer = {
        let store = Arc::clone(&store);
        let id = id.clone();
        thread::spawn(move || {
            for generation in 1..200 {
                let page = format!("gen-{}", generation);
                let records = vec![record(&id, "k", &page), record(&id, "k", &page)];
                store.write().replace_document(&id, records).unwrap();
            }
        })
    };

    for _ in 0..200 {
        let guard = store.read();
        let pages: Vec<&str> = guard
            .records_for_keyword("k")
            .iter()
            .map(|r| r.original_text())
            .collect();
        if let Some(first) = pages.first() {
            assert!(pages.iter().all(|p| p == first), "mixed generations: {:?}", pages);
        }
    }

    writer.join().unwrap();
}
