//! Session behaviour across corpus edits.

use crate::common::*;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn recorder(session: &mut Session<MemoryCorpus>) -> Arc<Mutex<Vec<IndexEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    session.subscribe(move |event| sink.lock().push(event));
    events
}

#[test]
fn rename_moves_keyword_after_window() {
    let mut session = session(&[("Search", &[], &[]), ("Draft", &[], &[])]);
    let events = recorder(&mut session);
    let delay = session.config().rebuild_delay();
    let start = Instant::now();

    let draft = DocumentRef::new("Draft.md");
    let renamed = session
        .provider_mut()
        .rename(&draft, "Roadmap.md", "Roadmap")
        .unwrap();
    session
        .handle(CorpusEvent::DocumentRenamed(renamed), start)
        .unwrap();

    // old engine still answers, but the stale keyword is filtered out
    assert!(session.is_rebuild_pending());
    assert!(session.find("the draft roadmap").is_empty());

    assert!(!session.poll(start + delay / 2).unwrap());
    assert!(session.poll(start + delay).unwrap());

    let results = session.find("the draft roadmap");
    assert_eq!(
        pairs(&results),
        vec![("roadmap".to_string(), "roadmap".to_string())]
    );
    assert_eq!(*events.lock(), vec![IndexEvent::Updated]);
}

#[test]
fn alias_edit_then_flush() {
    let mut session = session(&[("Synchronization", &[], &[])]);
    let start = Instant::now();

    let doc = session.provider_mut().upsert(
        "Synchronization.md",
        DocumentMetadata::new("Synchronization", "Synchronization").with_aliases(["sync"]),
    );
    session
        .handle(CorpusEvent::DocumentChanged(doc), start)
        .unwrap();
    assert!(session.find("sync now").is_empty());

    assert!(session.flush().unwrap());
    assert_eq!(session.find("sync now").len(), 1);
    assert_eq!(
        session.suggestions("sync"),
        vec!["[[Synchronization|sync]]"]
    );
}

#[test]
fn deleted_note_stops_matching_immediately() {
    let mut session = session(&[("Search", &[], &[]), ("Note", &[], &[])]);
    let start = Instant::now();

    session
        .handle(CorpusEvent::DocumentDeleted(SourceId::new("Note")), start)
        .unwrap();

    let results = session.find("searching notes");
    assert_eq!(
        pairs(&results),
        vec![("searching".to_string(), "search".to_string())]
    );
    assert!(session.suggestions("note").is_empty());
}

#[test]
fn active_note_is_excluded_everywhere() {
    let mut session = session(&[("Search", &["lookup"], &[]), ("Note", &[], &[])]);
    let events = recorder(&mut session);

    session
        .set_active_document(Some(SourceId::new("Search")))
        .unwrap();

    let results = session.find("lookup and search my notes");
    assert_eq!(
        pairs(&results),
        vec![("notes".to_string(), "note".to_string())]
    );
    assert!(session.suggestions("lookup").is_empty());
    assert!(!session.engine().keywords().contains(&"search".to_string()));
    assert_eq!(*events.lock(), vec![IndexEvent::Updated]);

    session.set_active_document(None).unwrap();
    assert_eq!(session.find("lookup and search my notes").len(), 3);
}

#[test]
fn engine_snapshot_survives_rebuild() {
    let mut session = session(&[("Search", &[], &[])]);
    let before = session.engine();

    let config = AutolinkConfig {
        enable_stemming: false,
        ..AutolinkConfig::default()
    };
    session.set_config(config).unwrap();

    assert!(before.stemming());
    assert!(!session.engine().stemming());
    assert_eq!(before.find("searching").len(), 1);
    assert!(session.find("searching").is_empty());
}

#[test]
fn zero_delay_rebuilds_on_first_poll() {
    let config = AutolinkConfig {
        rebuild_delay_ms: 0,
        ..AutolinkConfig::default()
    };
    let mut session = Session::new(corpus(&[("Search", &[], &[])]), config).unwrap();
    let now = Instant::now();

    let doc = session
        .provider_mut()
        .upsert("Note.md", DocumentMetadata::new("Note", "Note"));
    session.handle(CorpusEvent::DocumentChanged(doc), now).unwrap();

    assert!(session.poll(now + Duration::ZERO).unwrap());
    assert_eq!(session.find("notes").len(), 1);
}
