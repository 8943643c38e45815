//! Client-side search for static documentation sites.
//!
//! This crate is the engine behind an in-page search box: it fetches a
//! prebuilt JSON index once per page load, builds one of two interchangeable
//! matching structures, and answers queries with ranked, render-ready
//! results. The same core runs in the browser (behind the `wasm` feature)
//! and in the terminal (the `lectern` binary).
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  fetch.rs  │────▶│   index/     │────▶│  engine.rs  │
//! │ (IndexFetcher,   │ (FuzzyIndex, │     │ (lifecycle, │
//! │  parse_index)    │ InvertedIndex)     │ containment)│
//! └────────────┘     └──────────────┘     └─────────────┘
//!                                                │
//! ┌────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ debounce.rs│────▶│  widget.rs   │◀────│  render.rs  │
//! │ (keystroke │     │ (events in,  │     │ (panel as   │
//! │  gating)   │     │ effects out) │     │  data)      │
//! └────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! Both strategies rank with the same fold: distinct-token match count
//! dominates, per-token field scores refine, an exact title match overrides
//! everything. See [`scoring`] for the inequalities that make that ordering
//! provable rather than tuned.
//!
//! # Usage
//!
//! ```
//! use lectern::{QueryEngine, StaticFetcher};
//!
//! let payload = r#"[
//!     {"url": "/posts/hello/", "title": "Hello", "content": "First post", "tags": []}
//! ]"#;
//! let mut engine = QueryEngine::new();
//! engine.load(&StaticFetcher::new(payload.as_bytes()), None).unwrap();
//!
//! let results = engine.search("hello");
//! assert_eq!(results[0].doc.url, "/posts/hello/");
//! ```

// Module declarations
mod debounce;
mod engine;
mod error;
mod fetch;
mod index;
mod levenshtein;
mod render;
pub mod scoring;
mod siteroot;
pub mod testing;
mod theme;
mod types;
mod utils;
mod widget;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod dom;

// Re-exports for public API
pub use debounce::{DebouncedInput, InputAction, TimerRequest, TimerToken};
pub use engine::{IndexState, QueryEngine};
pub use error::LecternError;
#[cfg(feature = "http")]
pub use fetch::{cache_bust, HttpFetcher};
pub use fetch::{parse_index, DirFetcher, IndexFetcher, StaticFetcher, INDEX_FILENAME};
pub use index::{
    build_strategy, select_strategy, FuzzyIndex, InvertedIndex, SearchStrategy,
    ACCEPT_THRESHOLD, AUTO_SELECT_CUTOFF, MIN_MATCH_CHARS,
};
pub use levenshtein::{infix_distance_within, InfixMatch};
pub use render::{escape_html, truncate_excerpt, Panel, PanelEntry, NO_RESULTS_TEXT};
pub use siteroot::{SiteRoot, DEFAULT_ASSET_SUFFIX};
pub use theme::{
    resolve_mode, AppliedTheme, DisplayMode, MemoryModeStore, ModeStore, ThemeToggle, STORAGE_KEY,
};
pub use types::{
    IndexedDoc, MatchResult, StrategyKind, WidgetConfig, DEFAULT_DEBOUNCE_MS, DEFAULT_EXCERPT_LEN,
    DEFAULT_MIN_QUERY_LEN,
};
pub use utils::{normalize, tokenize};
pub use widget::{SearchWidget, WidgetUpdate};
