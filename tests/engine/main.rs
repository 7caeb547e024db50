//! Engine Integration Tests
//!
//! End-to-end tests through the `autolink` facade:
//! - scenarios: keyword matching over literal keyword sets and note corpora
//! - redaction: masked regions never produce matches
//! - lifecycle: keyword store insert/replace/remove by source
//! - session: debounced rebuilds, renames, deletions, active document
//! - properties: proptest invariants over tokenizer, redactor, matcher, store

#[path = "../common/mod.rs"]
mod common;

mod lifecycle;
mod properties;
mod redaction;
mod scenarios;
mod session;
