//! Property-based tests
//!
//! Tests invariants:
//! - Tokens concatenate back to the input in both coordinate spaces
//! - Redaction preserves byte length
//! - `find` output is sorted, non-overlapping and slices the input
//! - Replacing a document never leaves old and new records side by side

use crate::common::*;
use autolink::{redact, Tokenizer};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "search", "searching", "note", "notes", "github", "forks", "shared", "client", "record",
    "idea", "café", "#tag", "[[link]]", "```", "---", "3.14", "well-known", "\n", " ", ",",
];

const KEYWORDS: &[&str] = &[
    "search", "note", "github fork", "share client record", "client", "record", "idea", "café",
    "well", "3.14",
];

/// Text assembled from words that exercise every tokenizer class and
/// redaction pattern.
fn vocabulary_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..40).prop_map(|words| {
        words.iter().fold(String::new(), |mut acc, w| {
            acc.push_str(w);
            if !w.trim().is_empty() {
                acc.push(' ');
            }
            acc
        })
    })
}

proptest! {
    /// Property: original spans tile the input and stem spans tile the
    /// normalized text
    #[test]
    fn prop_tokenizer_round_trip(text in ".*", stemming in any::<bool>()) {
        let tokenizer = Tokenizer::new(stemming);
        let tokens = tokenizer.tokenize(&text);

        let original: String = tokens.iter().map(|t| t.original).collect();
        prop_assert_eq!(&original, &text);

        let stemmed: String = tokens.iter().map(|t| t.stem.as_str()).collect();
        prop_assert_eq!(&stemmed, &tokenizer.normalize(&text));

        let mut original_pos = 0;
        let mut stem_pos = 0;
        for token in &tokens {
            prop_assert_eq!(token.original_start, original_pos);
            prop_assert_eq!(token.stem_start, stem_pos);
            prop_assert_eq!(&text[token.original_start..token.original_end], token.original);
            prop_assert_eq!(&stemmed[token.stem_start..token.stem_end], token.stem.as_str());
            original_pos = token.original_end;
            stem_pos = token.stem_end;
        }
        prop_assert_eq!(original_pos, text.len());
    }

    /// Property: redaction never changes the byte length or line count
    #[test]
    fn prop_redaction_preserves_length(text in "(.|\n|```|#|\\[|\\]|---){0,64}") {
        let redacted = redact(&text);
        prop_assert_eq!(redacted.len(), text.len());
        prop_assert_eq!(redacted.matches('\n').count(), text.matches('\n').count());
    }

    /// Property: results are sorted by start, non-overlapping and slice the
    /// queried text
    #[test]
    fn prop_find_is_sorted_and_disjoint(
        text in vocabulary_text(),
        keywords in prop::collection::vec(prop::sample::select(KEYWORDS), 1..6),
    ) {
        let engine = engine_with(&keywords);
        let results = engine.find(&text);
        assert_well_formed(&text, &results);
        for r in &results {
            prop_assert!(keywords.contains(&r.index_keyword.as_str()));
        }
    }

    /// Property: after any sequence of replacements a source's records all
    /// come from its latest generation
    #[test]
    fn prop_replace_is_atomic(generations in prop::collection::vec(
        prop::collection::vec("[a-d]{1,2}", 0..5),
        1..8,
    )) {
        let id = SourceId::new("doc");
        let mut store = KeywordStore::new();

        for (generation, keywords) in generations.iter().enumerate() {
            let page = format!("gen-{}", generation);
            let records: Vec<KeywordRecord> = keywords
                .iter()
                .map(|k| KeywordRecord::new(
                    id.clone(),
                    k.as_str(),
                    RecordOrigin::Page { page: page.clone() },
                ))
                .collect();
            store.replace_document(&id, records).unwrap();

            for keyword in keywords {
                let found = store.records_for_keyword(keyword);
                prop_assert!(!found.is_empty());
                prop_assert!(found.iter().all(|r| r.original_text() == page));
            }
            prop_assert_eq!(store.records_for_source(&id).len(), keywords.len());
        }
    }
}
