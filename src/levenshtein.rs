// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded infix edit distance with early-exit optimizations.
//!
//! The fuzzy strategy asks one question per (query token, field): how cheaply
//! can this token be edited into *some substring* of the field? That's the
//! Sellers variant of the classic DP - the first row is all zeros (a match may
//! start anywhere) and the answer is the minimum of the last row (it may end
//! anywhere). Adjacent transpositions count as one edit, so "serach" is one
//! edit from "search" instead of two.
//!
//! Two early-exit paths keep the common miss cheap:
//! 1. A needle longer than the haystack by more than `max` can't fit.
//! 2. Row minima never decrease, so once a row's minimum exceeds `max` the
//!    whole DP is abandoned.

/// Where and how well a needle matched inside a haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfixMatch {
    /// Edit distance of the needle against the best-matching substring.
    pub distance: usize,
    /// Character offset in the haystack where that substring begins.
    pub start: usize,
}

/// Best infix edit distance of `needle` within `haystack`, if it is ≤ `max`.
///
/// Distances are optimal-string-alignment: insertions, deletions,
/// substitutions, and adjacent transpositions each cost one edit. Offsets and
/// lengths are in characters, not bytes, so multi-byte text behaves like it
/// does in the browser.
///
/// Returns `None` for an empty needle (nothing to match) and for any needle
/// whose best alignment costs more than `max`.
pub fn infix_distance_within(needle: &str, haystack: &str, max: usize) -> Option<InfixMatch> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return None;
    }
    let haystack: Vec<char> = haystack.chars().collect();

    // Early-exit: a needle that overhangs the haystack by more than `max`
    // characters needs more than `max` edits no matter where it lands.
    if needle.len() > haystack.len() + max {
        return None;
    }

    let width = haystack.len() + 1;

    // Row 0: matching the empty needle prefix costs nothing anywhere (free
    // start). `starts` remembers where each alignment began.
    let mut prev2: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = vec![0; width];
    let mut prev2_starts: Vec<usize> = (0..width).collect();
    let mut prev_starts: Vec<usize> = (0..width).collect();
    let mut cur: Vec<usize> = vec![0; width];
    let mut cur_starts: Vec<usize> = vec![0; width];

    for (i, &nc) in needle.iter().enumerate() {
        cur[0] = i + 1;
        cur_starts[0] = 0;
        let mut row_min = cur[0];

        for (j, &hc) in haystack.iter().enumerate() {
            let cost = usize::from(nc != hc);

            let mut best = prev[j] + cost;
            let mut best_start = prev_starts[j];

            let delete = prev[j + 1] + 1;
            if delete < best {
                best = delete;
                best_start = prev_starts[j + 1];
            }

            let insert = cur[j] + 1;
            if insert < best {
                best = insert;
                best_start = cur_starts[j];
            }

            // Adjacent transposition (optimal string alignment)
            if i >= 1 && j >= 1 && nc == haystack[j - 1] && needle[i - 1] == hc {
                let transpose = prev2[j - 1] + 1;
                if transpose < best {
                    best = transpose;
                    best_start = prev2_starts[j - 1];
                }
            }

            cur[j + 1] = best;
            cur_starts[j + 1] = best_start;
            if best < row_min {
                row_min = best;
            }
        }

        // Early-exit: row minima are non-decreasing, so nothing below this
        // row can come back under `max`.
        if row_min > max {
            return None;
        }

        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev2_starts, &mut prev_starts);
        std::mem::swap(&mut prev, &mut cur);
        std::mem::swap(&mut prev_starts, &mut cur_starts);
    }

    // Free end: the match may stop at any haystack position.
    let mut best: Option<InfixMatch> = None;
    for j in 0..width {
        let candidate = InfixMatch {
            distance: prev[j],
            start: prev_starts[j],
        };
        if best.map_or(true, |b| candidate.distance < b.distance) {
            best = Some(candidate);
        }
    }

    best.filter(|m| m.distance <= max)
}
