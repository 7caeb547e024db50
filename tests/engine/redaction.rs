//! Keywords inside masked regions never produce results.

use crate::common::*;

#[test]
fn fenced_code_is_skipped() {
    let engine = engine_with(&["search"]);
    let text = "```\nsearch inside code\n```\nsearch outside";
    let results = engine.find(text);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].start, text.rfind("search").unwrap());
    assert_well_formed(text, &results);
}

#[test]
fn wiki_links_are_skipped() {
    let engine = engine_with(&["search"]);
    let text = "see [[Search]] and search";
    let results = engine.find(text);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].start, 19);
}

#[test]
fn hashtags_are_skipped() {
    let engine = engine_with(&["project"]);
    assert!(engine.find("tagged #project only").is_empty());
}

#[test]
fn front_matter_is_skipped() {
    let engine = engine_with(&["alias"]);
    let text = "---\naliases: [alias]\n---\nan alias here";
    let results = engine.find(text);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].original_keyword, "alias");
    assert_eq!(results[0].start, text.rfind("alias").unwrap());
}

#[test]
fn redact_keeps_byte_length_and_lines() {
    let text = "---\ntitle: ü\n---\n# [[Link]] #tag ```co\nde``` done";
    let redacted = autolink::redact(text);
    assert_eq!(redacted.len(), text.len());
    assert_eq!(redacted.matches('\n').count(), text.matches('\n').count());
    assert!(redacted.ends_with(" done"));
}
