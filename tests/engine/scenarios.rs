//! End-to-end matching scenarios through the facade crate.

use crate::common::*;

// ============================================================================
// Engine over literal keyword sets
// ============================================================================

#[test]
fn longest_match_wins() {
    let engine = engine_with(&["github", "github fork"]);
    let text = "I use GitHub Forks as part of my development flow";
    let results = engine.find(text);

    assert_eq!(
        pairs(&results),
        vec![("GitHub Forks".to_string(), "github fork".to_string())]
    );
    assert_eq!((results[0].start, results[0].end), (6, 18));
    assert_well_formed(text, &results);
}

#[test]
fn multi_word_phrase() {
    let engine = engine_with(&["shared", "client", "record", "share client record"]);
    let text = "Designing a shared client record is a great idea";
    let results = engine.find(text);

    assert_eq!(
        pairs(&results),
        vec![(
            "shared client record".to_string(),
            "share client record".to_string()
        )]
    );
    assert_well_formed(text, &results);
}

#[test]
fn stemming_equivalence() {
    let engine = engine_with(&["search", "note"]);
    let text = "This is a note that I will be use for searching";
    let results = engine.find(text);

    assert_eq!(
        pairs(&results),
        vec![
            ("note".to_string(), "note".to_string()),
            ("searching".to_string(), "search".to_string()),
        ]
    );
    assert_eq!((results[1].start, results[1].end), (38, 47));
    assert_well_formed(text, &results);
}

#[test]
fn case_insensitive_match_keeps_original_casing() {
    let engine = engine_with(&["rust"]);
    let results = engine.find("RUST and Rust and rust");
    let originals: Vec<&str> = results.iter().map(|r| r.original_keyword.as_str()).collect();
    assert_eq!(originals, vec!["RUST", "Rust", "rust"]);
}

#[test]
fn keywords_only_match_whole_words() {
    let engine = engine_with(&["note"]);
    assert!(engine.find("denote annotate footnotes").is_empty());
    assert_eq!(engine.find("a note.").len(), 1);
}

#[test]
fn multibyte_text_offsets_are_bytes() {
    let engine = engine_with(&["café"]);
    let text = "über café";
    let results = engine.find(text);
    assert_eq!(results.len(), 1);
    assert_eq!((results[0].start, results[0].end), (6, 11));
    assert_well_formed(text, &results);
}

// ============================================================================
// Session over a note corpus
// ============================================================================

#[test]
fn titles_aliases_and_tags_all_match() {
    let session = session(&[
        ("Search", &[], &[]),
        ("Synchronization", &["sync"], &[]),
        ("Ideas", &[], &["#project"]),
    ]);

    let text = "After the sync I started searching for a project to work on";
    let results = session.find(text);
    assert_eq!(
        pairs(&results),
        vec![
            ("sync".to_string(), "sync".to_string()),
            ("searching".to_string(), "search".to_string()),
            ("project".to_string(), "project".to_string()),
        ]
    );
    assert_well_formed(text, &results);
}

#[test]
fn suggestions_reflect_record_kind() {
    let session = session(&[
        ("Synchronization", &["sync"], &[]),
        ("Project", &[], &[]),
        ("Ideas", &[], &["#project"]),
    ]);

    assert_eq!(session.suggestions("sync"), vec!["[[Synchronization|sync]]"]);

    let suggestions = session.suggestions("project");
    assert_eq!(suggestions.len(), 2);
    assert!(suggestions.contains(&"[[Project]]".to_string()));
    assert!(suggestions.contains(&"#project".to_string()));
}

#[test]
fn page_tokens_match_parts_of_long_titles() {
    let session = session(&[("Distributed Systems Reading Group", &[], &[])]);
    let text = "notes on distributed systems";
    let results = session.find(text);

    assert_eq!(
        pairs(&results),
        vec![(
            "distributed systems".to_string(),
            "distribut system".to_string()
        )]
    );
    assert_eq!(
        session.suggestions("distribut system"),
        vec!["[[Distributed Systems Reading Group]]"]
    );
}

#[test]
fn stemming_off_matches_literally() {
    let session = literal_session(&[("Search", &[], &[]), ("Note", &[], &[])]);

    let results = session.find("searching my notes, then search a note");
    assert_eq!(
        pairs(&results),
        vec![
            ("search".to_string(), "search".to_string()),
            ("note".to_string(), "note".to_string()),
        ]
    );
}

#[test]
fn keywords_filter_removes_keyword() {
    let config = AutolinkConfig {
        keywords_filter: vec!["Todo".to_string()],
        ..AutolinkConfig::default()
    };
    let session = Session::new(corpus(&[("Todo", &[], &[]), ("Done", &[], &[])]), config).unwrap();

    let results = session.find("todo list is done");
    assert_eq!(
        pairs(&results),
        vec![("done".to_string(), "done".to_string())]
    );
}

#[test]
fn tags_ignored_when_disabled() {
    let config = AutolinkConfig {
        match_tags: false,
        ..AutolinkConfig::default()
    };
    let session =
        Session::new(corpus(&[("Ideas", &[], &["#project"])]), config).unwrap();
    assert!(session.find("a project").is_empty());
}
