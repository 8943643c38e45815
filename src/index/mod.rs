// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matching strategies behind one seam.
//!
//! The engine depends on [`SearchStrategy`], never on a concrete structure.
//! Two implementations exist: [`FuzzyIndex`] scans every document and accepts
//! approximate token matches, [`InvertedIndex`] looks tokens up exactly in a
//! posting map. They are interchangeable by construction: both rank with the
//! same dominance-weight fold (see [`crate::scoring`]), so swapping one for
//! the other reorders nothing that both consider a match.
//!
//! [`build_strategy`] is the only constructor the rest of the crate calls.

mod fuzzy;
mod inverted;

pub use fuzzy::{FuzzyIndex, ACCEPT_THRESHOLD, MIN_MATCH_CHARS};
pub use inverted::InvertedIndex;

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::types::{IndexedDoc, MatchResult, StrategyKind};
use crate::utils::tokenize;

// ---------------------------------------------------------------------------
// The strategy seam
// ---------------------------------------------------------------------------

/// A built, immutable matching structure.
///
/// Implementations are pure: `search` takes `&self`, mutates nothing, and
/// returns the same ranking for the same query every time. `Send + Sync` so
/// a built index can be handed to whatever thread or closure hosts the
/// widget.
pub trait SearchStrategy: Send + Sync {
    /// Rank documents against a free-text query, best first. Ties keep
    /// document load order.
    fn search(&self, query: &str) -> Vec<MatchResult>;

    /// How many documents this structure was built from.
    fn doc_count(&self) -> usize;

    /// Which concrete strategy this is, for logs and index inspection.
    fn kind(&self) -> StrategyKind;
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Document-count cutoff for automatic strategy selection.
///
/// Below this the fuzzy scan's per-document cost is unnoticeable and its
/// typo tolerance is worth having. At larger corpus sizes the inverted
/// index's per-token lookup wins.
pub const AUTO_SELECT_CUTOFF: usize = 500;

/// Pick a strategy from corpus size when the caller does not pin one.
pub fn select_strategy(doc_count: usize) -> StrategyKind {
    if doc_count < AUTO_SELECT_CUTOFF {
        StrategyKind::Fuzzy
    } else {
        StrategyKind::Inverted
    }
}

/// Build the matching structure for `docs`.
///
/// `kind: None` auto-selects by corpus size. This is the single place a
/// concrete strategy type is named outside its own module.
pub fn build_strategy(kind: Option<StrategyKind>, docs: Vec<IndexedDoc>) -> Box<dyn SearchStrategy> {
    let kind = kind.unwrap_or_else(|| select_strategy(docs.len()));
    debug!(kind = %kind, docs = docs.len(), "building search index");
    match kind {
        StrategyKind::Fuzzy => Box::new(FuzzyIndex::build(docs)),
        StrategyKind::Inverted => Box::new(InvertedIndex::build(docs)),
    }
}

// ---------------------------------------------------------------------------
// Shared query plumbing
// ---------------------------------------------------------------------------

/// Split a normalized query into distinct tokens, first occurrence order.
///
/// Repeating a word in the query must not double its weight, so both
/// strategies score over the distinct token set.
pub(crate) fn query_tokens(normalized: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = tokenize(normalized);
    tokens.retain(|token| seen.insert(token.clone()));
    tokens
}

/// Final ordering: descending score, ties broken by document load order.
///
/// The explicit index tiebreak keeps rankings stable across runs even when
/// scores were accumulated through a hash map.
pub(crate) fn rank(mut scored: Vec<(usize, f64)>, docs: &[IndexedDoc]) -> Vec<MatchResult> {
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored
        .into_iter()
        .map(|(idx, score)| MatchResult {
            doc: docs[idx].clone(),
            score,
        })
        .collect()
}
