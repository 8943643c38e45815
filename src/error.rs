//! Failure taxonomy for the widget.
//!
//! Nothing here ever reaches the end user. Fetch failures park the engine in
//! `Unavailable`, evaluation failures degrade that one query to an empty
//! result, and a missing mount point silently declines initialization. The
//! variants exist so hosts and logs can tell the cases apart.

use thiserror::Error;

/// Errors produced while acquiring or querying the search index.
#[derive(Debug, Error)]
pub enum LecternError {
    /// Transport-level failure fetching the index resource.
    #[cfg(feature = "http")]
    #[error("index fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The index endpoint answered with a non-2xx status.
    #[error("index fetch returned HTTP {0}")]
    Status(u16),

    /// The index payload was not a valid document array.
    #[error("malformed index payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading a directory-backed index failed.
    #[error("index read failed: {0}")]
    Io(#[from] std::io::Error),

    /// A query panicked inside the matching structure. Caught at the engine
    /// boundary; the query degrades to an empty result and the engine stays
    /// usable.
    #[error("query evaluation failed: {0}")]
    Evaluation(String),

    /// A DOM element the widget mounts on is absent. The subsystem declines
    /// to initialize without surfacing anything to the page.
    #[error("missing mount point: #{0}")]
    MissingMount(&'static str),
}
