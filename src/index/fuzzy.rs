// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The threshold strategy: a typo-tolerant scan over every document.
//!
//! No posting structure is built. Each query token is matched approximately
//! against each document field with [`infix_distance_within`], and a
//! token-field pair is accepted when the edit distance stays strictly under
//! 40% of the token length with at least two characters of the token
//! surviving. In practice:
//!
//! ```text
//! token length   2  3  4  5  6  7  8  9  10
//! max edits      0  1  1  1  2  2  3  3  3
//! ```
//!
//! Tokens shorter than two characters never participate. Per token the best
//! field wins, so a strong title hit is not diluted by a weak body hit for
//! the same word.

use crate::levenshtein::infix_distance_within;
use crate::scoring::{
    dominance_weight, position_bonus, CONTENT_WEIGHT, MAX_POSITION_BONUS, TAG_WEIGHT, TITLE_WEIGHT,
};
use crate::types::{IndexedDoc, MatchResult, StrategyKind};
use crate::utils::normalize;

use super::SearchStrategy;

/// Reject a token-field match at or above this normalized edit distance.
pub const ACCEPT_THRESHOLD: f64 = 0.4;

/// At least this many characters of the token must survive into the match.
pub const MIN_MATCH_CHARS: usize = 2;

/// Ceiling on a single token's score under this strategy.
///
/// A perfect title hit at offset zero: full title weight plus the largest
/// position bonus. Feeds the dominance weight, see
/// [`dominance_weight`](crate::scoring::dominance_weight).
const MAX_TOKEN_SCORE: f64 = TITLE_WEIGHT + MAX_POSITION_BONUS;

/// Largest edit count that keeps `distance / token_len` strictly under
/// [`ACCEPT_THRESHOLD`] while leaving [`MIN_MATCH_CHARS`] of the token
/// intact. Done in integers so no float comparison sits on the boundary.
fn max_edits(token_len: usize) -> usize {
    // distance < 0.4 * len  <=>  distance <= ceil(2 * len / 5) - 1
    let below_threshold = (2 * token_len).div_ceil(5).saturating_sub(1);
    below_threshold.min(token_len.saturating_sub(MIN_MATCH_CHARS))
}

/// Normalized field text with cached character lengths.
///
/// Char counts are the denominators for the position bonus; caching them
/// keeps the per-query work to the distance computations alone.
struct DocText {
    title: String,
    title_chars: usize,
    tags: String,
    tags_chars: usize,
    content: String,
    content_chars: usize,
}

impl DocText {
    fn prepare(doc: &IndexedDoc) -> Self {
        let title = normalize(&doc.title);
        let tags = normalize(&doc.tags.join(" "));
        let content = normalize(&doc.content);
        Self {
            title_chars: title.chars().count(),
            tags_chars: tags.chars().count(),
            content_chars: content.chars().count(),
            title,
            tags,
            content,
        }
    }
}

/// Threshold-scan index: the original documents plus their normalized field
/// text, nothing else.
pub struct FuzzyIndex {
    docs: Vec<IndexedDoc>,
    texts: Vec<DocText>,
}

impl FuzzyIndex {
    pub fn build(docs: Vec<IndexedDoc>) -> Self {
        let texts = docs.iter().map(DocText::prepare).collect();
        Self { docs, texts }
    }
}

/// Score one token against one field, if it matches at all.
fn field_score(
    token: &str,
    token_len: usize,
    field: &str,
    field_chars: usize,
    weight: f64,
    budget: usize,
) -> Option<f64> {
    let found = infix_distance_within(token, field, budget)?;
    let closeness = 1.0 - found.distance as f64 / token_len as f64;
    Some(weight * closeness + position_bonus(found.start, field_chars))
}

impl SearchStrategy for FuzzyIndex {
    fn search(&self, query: &str) -> Vec<MatchResult> {
        let normalized = normalize(query);
        let tokens = super::query_tokens(&normalized);
        if tokens.is_empty() {
            return Vec::new();
        }
        let weight = dominance_weight(MAX_TOKEN_SCORE, tokens.len());

        let mut scored = Vec::new();
        for (idx, text) in self.texts.iter().enumerate() {
            let mut matched = 0usize;
            let mut token_sum = 0.0;
            for token in &tokens {
                let token_len = token.chars().count();
                if token_len < MIN_MATCH_CHARS {
                    continue;
                }
                let budget = max_edits(token_len);
                let mut best: Option<f64> = None;
                for (field, field_chars, field_weight) in [
                    (&text.title, text.title_chars, TITLE_WEIGHT),
                    (&text.tags, text.tags_chars, TAG_WEIGHT),
                    (&text.content, text.content_chars, CONTENT_WEIGHT),
                ] {
                    if let Some(score) =
                        field_score(token, token_len, field, field_chars, field_weight, budget)
                    {
                        if best.map_or(true, |b| score > b) {
                            best = Some(score);
                        }
                    }
                }
                if let Some(score) = best {
                    matched += 1;
                    token_sum += score;
                }
            }
            if matched == 0 {
                continue;
            }
            let mut score = weight * matched as f64 + token_sum;
            if normalized == text.title {
                score += weight;
            }
            scored.push((idx, score));
        }
        super::rank(scored, &self.docs)
    }

    fn doc_count(&self) -> usize {
        self.docs.len()
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Fuzzy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{docs_corpus, make_doc};

    fn build(docs: Vec<IndexedDoc>) -> FuzzyIndex {
        FuzzyIndex::build(docs)
    }

    #[test]
    fn max_edits_tracks_the_strict_threshold() {
        // 0.4 * len, strict, minus the two-surviving-chars floor
        assert_eq!(max_edits(2), 0);
        assert_eq!(max_edits(3), 1);
        assert_eq!(max_edits(4), 1);
        assert_eq!(max_edits(5), 1);
        assert_eq!(max_edits(6), 2);
        assert_eq!(max_edits(7), 2);
        assert_eq!(max_edits(10), 3);
    }

    #[test]
    fn typo_in_query_still_finds_title() {
        let index = build(docs_corpus());
        let results = index.search("serach");
        assert!(!results.is_empty());
        assert_eq!(results[0].doc.url, "/posts/search/");
    }

    #[test]
    fn partial_prefix_matches_both_install_pages_in_order() {
        let index = build(vec![
            make_doc("/a", "Installing", "how to install", &[]),
            make_doc("/b", "Uninstalling", "how to uninstall", &[]),
        ]);
        let results = index.search("instal");
        assert_eq!(results.len(), 2);
        // "instal" sits at offset 0 in "installing", offset 2 in
        // "uninstalling": the position bonus orders them
        assert_eq!(results[0].doc.url, "/a");
        assert_eq!(results[1].doc.url, "/b");
    }

    #[test]
    fn exact_title_outranks_scattered_token_matches() {
        let index = build(vec![
            make_doc(
                "/spam",
                "Everything about dark mode and more dark mode",
                "dark mode dark mode dark mode",
                &["dark", "mode"],
            ),
            make_doc("/exact", "Dark Mode", "a short note", &[]),
        ]);
        let results = index.search("dark mode");
        assert_eq!(results[0].doc.url, "/exact");
    }

    #[test]
    fn matching_more_tokens_beats_any_single_token_score() {
        let index = build(vec![
            make_doc("/one", "Widget", "widget widget widget", &["widget"]),
            make_doc("/two", "Widget themes", "body", &[]),
        ]);
        let results = index.search("widget themes");
        assert_eq!(results[0].doc.url, "/two");
    }

    #[test]
    fn single_char_tokens_never_match() {
        let index = build(vec![make_doc("/a", "A Guide", "a a a", &[])]);
        assert!(index.search("a").is_empty());
    }

    #[test]
    fn distant_tokens_are_rejected() {
        let index = build(vec![make_doc("/a", "Install", "setup notes", &[])]);
        // distance("xyzzy" -> anything here) blows the 40% budget
        assert!(index.search("xyzzy").is_empty());
    }

    #[test]
    fn title_hit_beats_tag_and_body_hits_combined() {
        let index = build(vec![
            make_doc("/title", "Deployment", "unrelated words", &[]),
            make_doc("/rest", "Other", "deployment deployment", &["deployment"]),
        ]);
        let results = index.search("deployment");
        assert_eq!(results[0].doc.url, "/title");
    }

    #[test]
    fn repeated_query_words_do_not_double_count() {
        let index = build(docs_corpus());
        let once = index.search("search");
        let twice = index.search("search search");
        assert_eq!(once.len(), twice.len());
        assert!((once[0].score - twice[0].score).abs() < 1e-9);
    }

    #[test]
    fn search_is_idempotent() {
        let index = build(docs_corpus());
        let first = index.search("install guide");
        let second = index.search("install guide");
        assert_eq!(first, second);
    }
}
