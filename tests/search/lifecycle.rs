//! Index lifecycle: fetch, parse, build, and every way that can fail.

use lectern::{
    DirFetcher, IndexState, LecternError, QueryEngine, StaticFetcher, StrategyKind,
    INDEX_FILENAME,
};

use super::common::{corpus_payload, site_corpus};

#[test]
fn full_load_from_payload_to_ready() {
    let mut engine = QueryEngine::new();
    assert!(matches!(engine.state(), IndexState::Uninitialized));

    engine.load(&StaticFetcher::new(corpus_payload()), None).unwrap();

    assert!(engine.is_ready());
    assert_eq!(engine.doc_count(), Some(site_corpus().len()));
    assert!(!engine.search("search").is_empty());
}

#[test]
fn load_from_a_directory_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(INDEX_FILENAME), corpus_payload()).unwrap();

    let mut engine = QueryEngine::new();
    engine.load(&DirFetcher::new(dir.path()), None).unwrap();
    assert!(engine.is_ready());
}

#[test]
fn missing_index_file_parks_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = QueryEngine::new();

    let err = engine.load(&DirFetcher::new(dir.path()), None).unwrap_err();
    assert!(matches!(err, LecternError::Io(_)));
    assert!(matches!(engine.state(), IndexState::Unavailable));
    // queries keep answering, with nothing
    assert!(engine.search("search").is_empty());
}

#[test]
fn malformed_payload_parks_unavailable() {
    let mut engine = QueryEngine::new();
    let err = engine
        .load(&StaticFetcher::new(b"[{\"url\": 42}]".to_vec()), None)
        .unwrap_err();
    assert!(matches!(err, LecternError::Parse(_)));
    assert!(matches!(engine.state(), IndexState::Unavailable));
}

#[test]
fn an_empty_index_is_still_a_ready_index() {
    let mut engine = QueryEngine::new();
    engine.load(&StaticFetcher::new(b"[]".to_vec()), None).unwrap();
    assert!(engine.is_ready());
    assert_eq!(engine.doc_count(), Some(0));
    assert!(engine.search("anything").is_empty());
}

#[test]
fn pinned_strategy_overrides_auto_selection() {
    let mut engine = QueryEngine::new();
    engine
        .load(
            &StaticFetcher::new(corpus_payload()),
            Some(StrategyKind::Inverted),
        )
        .unwrap();
    assert_eq!(engine.strategy_kind(), Some(StrategyKind::Inverted));
}

#[test]
fn queries_in_building_state_answer_empty() {
    let mut engine = QueryEngine::new();
    engine.begin_build();
    assert!(matches!(engine.state(), IndexState::Building));
    assert!(engine.search("search").is_empty());
}
