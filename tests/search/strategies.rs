//! Strategy selection and the interchangeability contract between the two
//! matching structures.

use std::collections::BTreeSet;

use lectern::testing::make_doc;
use lectern::{
    build_strategy, normalize, select_strategy, tokenize, FuzzyIndex, IndexedDoc, InvertedIndex,
    QueryEngine, SearchStrategy, StaticFetcher, StrategyKind, AUTO_SELECT_CUTOFF, MIN_MATCH_CHARS,
};

use super::common::site_corpus;

fn synthetic_corpus(len: usize) -> Vec<IndexedDoc> {
    (0..len)
        .map(|i| {
            make_doc(
                &format!("/page-{i}/"),
                &format!("Page {i}"),
                "filler body text",
                &[],
            )
        })
        .collect()
}

fn urls_for(strategy: &dyn SearchStrategy, query: &str) -> BTreeSet<String> {
    strategy
        .search(query)
        .into_iter()
        .map(|r| r.doc.url)
        .collect()
}

#[test]
fn auto_selection_tracks_corpus_size_through_load() {
    let mut small = QueryEngine::new();
    small
        .load(
            &StaticFetcher::new(serde_json::to_vec(&site_corpus()).unwrap()),
            None,
        )
        .unwrap();
    assert_eq!(small.strategy_kind(), Some(StrategyKind::Fuzzy));

    let mut large = QueryEngine::new();
    large
        .load(
            &StaticFetcher::new(serde_json::to_vec(&synthetic_corpus(AUTO_SELECT_CUTOFF)).unwrap()),
            None,
        )
        .unwrap();
    assert_eq!(large.strategy_kind(), Some(StrategyKind::Inverted));
}

#[test]
fn pinning_a_strategy_beats_the_size_heuristic() {
    let large = build_strategy(
        Some(StrategyKind::Fuzzy),
        synthetic_corpus(AUTO_SELECT_CUTOFF + 1),
    );
    assert_eq!(large.kind(), StrategyKind::Fuzzy);

    let small = build_strategy(Some(StrategyKind::Inverted), site_corpus());
    assert_eq!(small.kind(), StrategyKind::Inverted);
}

#[test]
fn selection_boundary_is_exact() {
    assert_eq!(select_strategy(AUTO_SELECT_CUTOFF - 1), StrategyKind::Fuzzy);
    assert_eq!(select_strategy(AUTO_SELECT_CUTOFF), StrategyKind::Inverted);
}

/// An exact token is a zero-edit match, so every document the inverted index
/// finds for it must also be found by the fuzzy scan.
#[test]
fn fuzzy_hits_cover_inverted_hits_for_every_corpus_token() {
    let fuzzy = FuzzyIndex::build(site_corpus());
    let inverted = InvertedIndex::build(site_corpus());

    let mut vocabulary = BTreeSet::new();
    for doc in site_corpus() {
        vocabulary.extend(tokenize(&normalize(&doc.title)));
        vocabulary.extend(tokenize(&normalize(&doc.content)));
        for tag in &doc.tags {
            vocabulary.extend(tokenize(&normalize(tag)));
        }
    }

    for token in vocabulary {
        if token.chars().count() < MIN_MATCH_CHARS {
            continue;
        }
        let from_fuzzy = urls_for(&fuzzy, &token);
        let from_inverted = urls_for(&inverted, &token);
        assert!(
            from_inverted.is_subset(&from_fuzzy),
            "token {token:?}: inverted found {from_inverted:?}, fuzzy only {from_fuzzy:?}"
        );
    }
}

#[test]
fn strategies_agree_on_the_top_hit_for_exact_phrases() {
    let fuzzy = FuzzyIndex::build(site_corpus());
    let inverted = InvertedIndex::build(site_corpus());
    for (query, expected) in [
        ("installing", "/install/"),
        ("dark mode", "/posts/themes/"),
        ("client side search", "/posts/search/"),
    ] {
        for strategy in [&fuzzy as &dyn SearchStrategy, &inverted] {
            let top = strategy.search(query);
            assert_eq!(
                top.first().map(|r| r.doc.url.as_str()),
                Some(expected),
                "{} strategy, query {query:?}",
                strategy.kind()
            );
        }
    }
}
