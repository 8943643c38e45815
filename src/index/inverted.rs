// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The token strategy: exact lookup in an inverted index.
//!
//! Build walks every document once and records, per distinct token, which
//! documents contain it and under which fields. A lookup is then O(query
//! tokens) regardless of corpus size, which is why auto-selection switches
//! here for large sites. The trade: no typo tolerance, a token either is in
//! the map or is not.
//!
//! Scoring is presence-based. A token found in a document contributes the
//! sum of the field weights it appears under (title 10, tags 5, content 1),
//! with no position information kept.

use std::collections::{HashMap, HashSet};

use crate::scoring::{dominance_weight, CONTENT_WEIGHT, TAG_WEIGHT, TITLE_WEIGHT};
use crate::types::{IndexedDoc, MatchResult, StrategyKind};
use crate::utils::{normalize, tokenize};

use super::SearchStrategy;

/// Ceiling on a single token's score under this strategy: present in all
/// three fields at once.
const MAX_TOKEN_SCORE: f64 = TITLE_WEIGHT + TAG_WEIGHT + CONTENT_WEIGHT;

/// One document's entry in a token's posting list.
#[derive(Debug, Clone, Copy)]
struct Posting {
    doc: usize,
    /// Summed weights of the fields this token appears under in `doc`.
    boost: f64,
}

/// Token-to-documents map built once per page load.
pub struct InvertedIndex {
    docs: Vec<IndexedDoc>,
    /// Normalized titles, kept for the exact-title rule.
    titles: Vec<String>,
    postings: HashMap<String, Vec<Posting>>,
}

impl InvertedIndex {
    pub fn build(docs: Vec<IndexedDoc>) -> Self {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        let mut titles = Vec::with_capacity(docs.len());

        for (idx, doc) in docs.iter().enumerate() {
            let title = normalize(&doc.title);
            let mut boosts: HashMap<String, f64> = HashMap::new();
            for (text, weight) in [
                (title.clone(), TITLE_WEIGHT),
                (normalize(&doc.tags.join(" ")), TAG_WEIGHT),
                (normalize(&doc.content), CONTENT_WEIGHT),
            ] {
                // distinct per field: repetition within a field adds nothing
                let field_tokens: HashSet<String> = tokenize(&text).into_iter().collect();
                for token in field_tokens {
                    *boosts.entry(token).or_insert(0.0) += weight;
                }
            }
            for (token, boost) in boosts {
                postings
                    .entry(token)
                    .or_default()
                    .push(Posting { doc: idx, boost });
            }
            titles.push(title);
        }

        Self {
            docs,
            titles,
            postings,
        }
    }
}

impl SearchStrategy for InvertedIndex {
    fn search(&self, query: &str) -> Vec<MatchResult> {
        let normalized = normalize(query);
        let tokens = super::query_tokens(&normalized);
        if tokens.is_empty() {
            return Vec::new();
        }
        let weight = dominance_weight(MAX_TOKEN_SCORE, tokens.len());

        // doc index -> (distinct tokens matched, summed boosts)
        let mut hits: HashMap<usize, (usize, f64)> = HashMap::new();
        for token in &tokens {
            if let Some(list) = self.postings.get(token.as_str()) {
                for posting in list {
                    let entry = hits.entry(posting.doc).or_insert((0, 0.0));
                    entry.0 += 1;
                    entry.1 += posting.boost;
                }
            }
        }

        let scored = hits
            .into_iter()
            .map(|(idx, (matched, boosts))| {
                let mut score = weight * matched as f64 + boosts;
                if self.titles[idx] == normalized {
                    score += weight;
                }
                (idx, score)
            })
            .collect();
        super::rank(scored, &self.docs)
    }

    fn doc_count(&self) -> usize {
        self.docs.len()
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Inverted
    }
}
