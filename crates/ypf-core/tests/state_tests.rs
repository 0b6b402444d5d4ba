//! Session state transitions

use pretty_assertions::assert_eq;
use ypf_core::{FinderConfig, FinderError, FinderEvent, FinderState, LoadedDocument};
use ypf_document::{ParseError, Value};
use ypf_resolve::{MatchStrategy, Resolution};
use ypf_test_utils::{write_temp_yaml, HELLO_PATHS, SERVICES_YAML};

fn services_state() -> FinderState {
    FinderState::from_source(SERVICES_YAML, FinderConfig::new()).unwrap()
}

fn query(state: FinderState, query: &str) -> FinderState {
    state.apply(FinderEvent::QueryChanged(query.to_string()))
}

#[test]
fn replacing_document_drops_stale_paths() {
    let state = query(services_state(), "services.api.port");
    assert!(state.resolution().unwrap().is_found());

    let state = state.apply(FinderEvent::SourceCommitted("other:\n  key: 1\n".into()));

    assert!(!state.loaded().index().contains("services.api.port"));
    assert_eq!(
        state.resolution(),
        Some(Resolution::NotFound {
            query: "services.api.port".into()
        })
    );
    assert_eq!(state.loaded().index().iter().collect::<Vec<_>>(), ["other", "other.key"]);
}

#[test]
fn failed_commit_keeps_previous_document() {
    let before = query(services_state(), "port");
    let after = before
        .clone()
        .apply(FinderEvent::SourceCommitted("services: [unclosed\n".into()));

    assert_eq!(after.loaded(), before.loaded());
    assert_eq!(after.resolution(), before.resolution());
    assert_eq!(after.source(), "services: [unclosed\n");
    assert!(matches!(after.last_error(), Some(ParseError::Syntax { .. })));
}

#[test]
fn successful_commit_clears_error() {
    let state = services_state()
        .apply(FinderEvent::SourceCommitted("a: [\n".into()))
        .apply(FinderEvent::SourceCommitted("a: 1\n".into()));

    assert!(state.last_error().is_none());
    assert_eq!(state.loaded().index().iter().collect::<Vec<_>>(), ["a"]);
}

#[test]
fn multiple_documents_are_rejected() {
    let state = services_state().apply(FinderEvent::SourceCommitted("a: 1\n---\nb: 2\n".into()));

    assert_eq!(state.last_error(), Some(&ParseError::MultipleDocuments(2)));
    assert!(state.loaded().index().contains("services"));
}

#[test]
fn empty_commit_changes_nothing() {
    let before = query(services_state(), "host");
    let after = before.clone().apply(FinderEvent::SourceCommitted(String::new()));
    assert_eq!(after, before);
}

#[test]
fn whitespace_commit_yields_null_document() {
    let state = services_state().apply(FinderEvent::SourceCommitted("  \n".into()));

    assert!(state.loaded().index().is_empty());
    assert_eq!(state.loaded().document().root(), &Value::Null);
    assert!(state.last_error().is_none());
}

#[test]
fn resolution_is_idempotent() {
    let state = query(services_state(), "enabled");
    let first = state.resolution();
    assert_eq!(first, state.resolution());
    assert!(matches!(
        first,
        Some(Resolution::MultiMatch {
            strategy: MatchStrategy::Suffix,
            ..
        })
    ));
}

#[test]
fn sample_document_finds_tool_by_suffix() {
    let state = query(FinderState::sample(FinderConfig::new()), "tool");

    assert_eq!(
        state.resolution(),
        Some(Resolution::ExactMatch {
            path: HELLO_PATHS[5].to_string(),
            strategy: MatchStrategy::Suffix,
            value: Value::String("👋".into()),
        })
    );
}

#[test]
fn depth_limit_applies_to_commits() {
    let state = FinderState::sample(FinderConfig::new().with_max_depth(2))
        .apply(FinderEvent::SourceCommitted("a:\n  b:\n    c: 1\n".into()));

    assert_eq!(state.loaded().index().iter().collect::<Vec<_>>(), ["a", "a.b"]);
    assert!(state.loaded().index().is_truncated());
}

#[test]
fn open_reads_file() {
    let file = write_temp_yaml(SERVICES_YAML);
    let loaded = LoadedDocument::open(file.path(), &FinderConfig::new()).unwrap();

    assert!(loaded.index().contains("logging.file"));
    assert_eq!(
        loaded.resolve("logging.file").and_then(|r| r.value().cloned()),
        Some(Value::String(String::new()))
    );
}

#[test]
fn open_missing_file_is_io_error() {
    let err = LoadedDocument::open("/no/such/document.yaml", &FinderConfig::new()).unwrap_err();
    assert!(matches!(err, FinderError::Io { .. }));
}

#[test]
fn open_invalid_file_is_parse_error() {
    let file = write_temp_yaml("key: [1, 2\n");
    let err = LoadedDocument::open(file.path(), &FinderConfig::new()).unwrap_err();
    assert!(matches!(err, FinderError::Parse(_)));
}
