// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search widget.
//!
//! These types define what a searchable document looks like, what a query
//! returns, and how the widget is configured. Everything here is plain data:
//! the index payload deserializes straight into `IndexedDoc`, and hosts hand
//! `WidgetConfig` across the JS boundary as a plain object.

use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One searchable unit: a page or section of the site.
///
/// The `url` doubles as the stable identifier and the navigation target, so it
/// must be unique across the index. The collection is read-only after load -
/// nothing in the widget ever mutates a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedDoc {
    /// Site-relative identifier and navigation target (e.g. `/posts/search/`).
    pub url: String,
    pub title: String,
    /// Full body text, already stripped of markup by the site build.
    pub content: String,
    /// Tags/labels for categorization. Absent in the JSON means none.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A ranked reference produced per query.
///
/// Ordering contract: descending `score`, ties broken by the document's
/// position in the loaded index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub doc: IndexedDoc,
    /// Relevance on the strategy's own scale. Higher is better; scores are
    /// comparable within one query, not across queries.
    pub score: f64,
}

// =============================================================================
// STRATEGY SELECTION
// =============================================================================

/// Which matching structure to build from the document set.
///
/// Both strategies answer the same queries; they trade typo tolerance against
/// lookup cost. When the caller doesn't pin one, the index factory picks by
/// corpus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Per-document fuzzy scan: tolerant of typos and partial words,
    /// O(docs × tokens) per query. The right default for small sites.
    Fuzzy,
    /// Inverted token index: exact normalized-token lookup, O(tokens) per
    /// query. Scales to corpora where scanning every document is too slow.
    Inverted,
}

impl StrategyKind {
    /// Lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Fuzzy => "fuzzy",
            StrategyKind::Inverted => "inverted",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Widget tuning knobs.
///
/// Every field has a default matching the shipped site behavior, so hosts can
/// pass `{}` (or nothing) and get the stock widget. Deserialized from a plain
/// JS object in the browser and assembled from flags in the CLI.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Pin a matching strategy. `None` selects by corpus size at build time.
    pub strategy: Option<StrategyKind>,
    /// Quiet period after the last keystroke before a query dispatches.
    pub debounce_ms: u64,
    /// Queries shorter than this (in characters) hide the panel instead of
    /// searching.
    pub min_query_len: usize,
    /// Result excerpts are cut to this many characters.
    pub excerpt_len: usize,
    /// Cap on rendered results. `None` renders every match.
    pub max_results: Option<usize>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            strategy: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            excerpt_len: DEFAULT_EXCERPT_LEN,
            max_results: None,
        }
    }
}

/// Debounce interval between the last keystroke and query dispatch.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Minimum query length (in characters) before a search is attempted.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Excerpt truncation length (in characters).
pub const DEFAULT_EXCERPT_LEN: usize = 150;
