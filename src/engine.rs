// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index lifecycle and query containment.
//!
//! The index is built once per page load and never mutated after. The
//! lifecycle is a straight line with one fork:
//!
//! ```text
//! Uninitialized ──> Building ──> Ready(strategy)
//!                      │
//!                      └───────> Unavailable        (fetch or parse failed)
//! ```
//!
//! [`QueryEngine::search`] is total over every state: queries against a
//! pending or failed index answer with no results instead of erroring, and a
//! panic inside a strategy is caught, logged, and degraded to an empty
//! result. Typing into the search box must never take the page down.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{error, info};

use crate::error::LecternError;
use crate::fetch::{parse_index, IndexFetcher};
use crate::index::{build_strategy, SearchStrategy};
use crate::types::{MatchResult, StrategyKind};

/// Where the engine is in its once-per-load lifecycle.
pub enum IndexState {
    Uninitialized,
    Building,
    Ready(Box<dyn SearchStrategy>),
    /// The build failed. Terminal for this page load, no retries.
    Unavailable,
}

impl IndexState {
    /// Short name for logs and index inspection.
    pub fn name(&self) -> &'static str {
        match self {
            IndexState::Uninitialized => "uninitialized",
            IndexState::Building => "building",
            IndexState::Ready(_) => "ready",
            IndexState::Unavailable => "unavailable",
        }
    }
}

impl fmt::Debug for IndexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The query side of the widget.
///
/// Owns the lifecycle state and the built strategy. Hosts either drive the
/// whole build through [`load`](Self::load) or, when fetching happens
/// elsewhere (the browser's async fetch), step the state themselves with
/// [`begin_build`](Self::begin_build), [`install`](Self::install) and
/// [`mark_unavailable`](Self::mark_unavailable).
#[derive(Debug)]
pub struct QueryEngine {
    state: IndexState,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryEngine {
    pub fn new() -> Self {
        Self {
            state: IndexState::Uninitialized,
        }
    }

    pub fn state(&self) -> &IndexState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, IndexState::Ready(_))
    }

    pub fn doc_count(&self) -> Option<usize> {
        match &self.state {
            IndexState::Ready(strategy) => Some(strategy.doc_count()),
            _ => None,
        }
    }

    pub fn strategy_kind(&self) -> Option<StrategyKind> {
        match &self.state {
            IndexState::Ready(strategy) => Some(strategy.kind()),
            _ => None,
        }
    }

    /// Drive the full build against a fetcher, synchronously.
    ///
    /// On failure the engine parks in `Unavailable` and stays there; the
    /// error comes back for hosts that want to surface it. Queries keep
    /// working either way.
    pub fn load(
        &mut self,
        fetcher: &dyn IndexFetcher,
        kind: Option<StrategyKind>,
    ) -> Result<(), LecternError> {
        self.begin_build();
        let docs = match fetcher.fetch().and_then(|bytes| parse_index(&bytes)) {
            Ok(docs) => docs,
            Err(err) => {
                error!(source = %fetcher.describe(), error = %err, "search index unavailable");
                self.state = IndexState::Unavailable;
                return Err(err);
            }
        };
        self.install(build_strategy(kind, docs));
        Ok(())
    }

    pub fn begin_build(&mut self) {
        self.state = IndexState::Building;
    }

    pub fn install(&mut self, strategy: Box<dyn SearchStrategy>) {
        info!(
            kind = %strategy.kind(),
            docs = strategy.doc_count(),
            "search index ready"
        );
        self.state = IndexState::Ready(strategy);
    }

    pub fn mark_unavailable(&mut self) {
        self.state = IndexState::Unavailable;
    }

    /// Total query entry point.
    ///
    /// Empty and whitespace-only queries return no results without touching
    /// the strategy. So do queries in any state but `Ready`. A strategy
    /// panic is contained here and reported as
    /// [`LecternError::Evaluation`] in the log, never propagated.
    pub fn search(&self, query: &str) -> Vec<MatchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let IndexState::Ready(strategy) = &self.state else {
            return Vec::new();
        };
        match catch_unwind(AssertUnwindSafe(|| strategy.search(query))) {
            Ok(results) => results,
            Err(panic) => {
                let err = LecternError::Evaluation(panic_message(panic.as_ref()));
                error!(error = %err, "query degraded to empty result");
                Vec::new()
            }
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
