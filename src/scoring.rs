// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind result ranking.
//!
//! Three rules, in order of priority:
//!
//! 1. A document matching more *distinct* query tokens outranks any document
//!    matching fewer, no matter how strong the individual matches look.
//! 2. A document whose normalized title equals the whole normalized query
//!    outranks every non-exact match for that query.
//! 3. Within the same distinct-token count, field-weighted match quality
//!    decides, with a small early-position bonus as tiebreaker.
//!
//! All three are folded into a single f64 so one descending stable sort
//! (ties keep document load order) produces the final ranking. The fold works
//! because per-token scores are bounded: both strategies compute a per-query
//! dominance weight `W` strictly larger than the highest possible sum of
//! per-token scores, then charge `W` per distinct matched token and `W` again
//! for an exact-title hit.
//!
//! # Weights
//!
//! | Constant             | Value | Why this value                              |
//! |----------------------|-------|---------------------------------------------|
//! | `TITLE_WEIGHT`       | 10.0  | Titles are what people remember and retype  |
//! | `TAG_WEIGHT`         | 5.0   | Tags are curated, body text is not          |
//! | `CONTENT_WEIGHT`     | 1.0   | Baseline                                    |
//! | `MAX_POSITION_BONUS` | 0.5   | Small relative to field gaps - can't invert |
//!
//! The 10/5/1 split matches the boosts the site's previous Lunr configuration
//! shipped with, so rankings stay familiar after the swap.

/// Weight for matches in the document title.
pub const TITLE_WEIGHT: f64 = 10.0;

/// Weight for matches in the tag list.
pub const TAG_WEIGHT: f64 = 5.0;

/// Weight for matches in the body text.
pub const CONTENT_WEIGHT: f64 = 1.0;

/// Maximum position bonus (matches at the start of a field get this much).
pub const MAX_POSITION_BONUS: f64 = 0.5;

/// Position bonus: matches near the start of a field score slightly higher.
///
/// This is the tiebreaker within a field - a title match at offset 0 beats a
/// title match at offset 100. Capped at `MAX_POSITION_BONUS`, which is small
/// enough that it can never promote a match across field tiers:
///
/// ```text
/// worst accepted title match:  10.0 × (1 − 0.4) = 6.0
/// best possible tag match:      5.0 × 1.0 + 0.5 = 5.5
/// worst accepted tag match:     5.0 × (1 − 0.4) = 3.0
/// best possible body match:     1.0 × 1.0 + 0.5 = 1.5
/// ```
pub fn position_bonus(offset: usize, text_len: usize) -> f64 {
    if text_len > 0 {
        MAX_POSITION_BONUS * (1.0 - (offset as f64 / text_len as f64))
    } else {
        0.0
    }
}

/// Per-query dominance weight: the value of one distinct matched token.
///
/// `max_token_score` is the strategy's upper bound on what a single token can
/// contribute to the summed score (fuzzy: `TITLE_WEIGHT + MAX_POSITION_BONUS`;
/// inverted: `TITLE_WEIGHT + TAG_WEIGHT + CONTENT_WEIGHT`). `query_tokens` is
/// the number of distinct tokens in the query.
///
/// INVARIANT: TOKEN_COUNT_DOMINANCE
/// With `W = 1 + max_token_score × query_tokens`, a document matching `d + 1`
/// distinct tokens always outranks one matching `d`:
///
/// ```text
/// score(d+1) ≥ W·(d+1) + 0         (each matched token adds > 0)
/// score(d)   ≤ W·d + query_tokens × max_token_score = W·d + (W − 1)
/// ⇒ score(d+1) − score(d) ≥ W − (W − 1) = 1 > 0
/// ```
///
/// INVARIANT: EXACT_TITLE_DOMINANCE
/// An exact-title document matches all `n` query tokens in its title, so its
/// score is at least `W·n + n·TITLE_WEIGHT + W` (the `+ W` being the
/// exact-title bonus the strategies add). Any non-exact document scores at
/// most `W·n + n·max_token_score`, and `W > n·(max_token_score −
/// TITLE_WEIGHT)` holds for both strategies' bounds, so the exact match wins.
pub fn dominance_weight(max_token_score: f64, query_tokens: usize) -> f64 {
    1.0 + max_token_score * query_tokens as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_tier_dominance() {
        // Worst accepted title match beats best possible tag match
        let worst_title = TITLE_WEIGHT * (1.0 - 0.4);
        let best_tag = TAG_WEIGHT + MAX_POSITION_BONUS;
        assert!(worst_title > best_tag);

        // Worst accepted tag match beats best possible body match
        let worst_tag = TAG_WEIGHT * (1.0 - 0.4);
        let best_content = CONTENT_WEIGHT + MAX_POSITION_BONUS;
        assert!(worst_tag > best_content);
    }

    #[test]
    fn token_count_dominance() {
        // One extra distinct token must outweigh the best possible summed
        // score of a whole query, for both strategies' per-token bounds.
        for max_token_score in [
            TITLE_WEIGHT + MAX_POSITION_BONUS,
            TITLE_WEIGHT + TAG_WEIGHT + CONTENT_WEIGHT,
        ] {
            for n in 1..50usize {
                let w = dominance_weight(max_token_score, n);
                assert!(w > max_token_score * n as f64);
            }
        }
    }

    #[test]
    fn position_bonus_range() {
        assert!((position_bonus(0, 100) - MAX_POSITION_BONUS).abs() < 1e-9);
        assert!(position_bonus(100, 100).abs() < 1e-9);
        assert!((position_bonus(50, 100) - MAX_POSITION_BONUS / 2.0).abs() < 1e-9);
        assert_eq!(position_bonus(0, 0), 0.0);
    }
}
